pub mod components;
pub mod media_type;
pub mod operation;
pub mod parameter;
pub mod request_body;
pub mod response;
pub mod schema;
pub mod server;
pub mod spec;
pub mod validate;

use serde::{Deserialize, Deserializer};

use crate::error::{LoadError, ParseError};
use spec::Document;

pub use server::base_url;
pub use validate::validate;

/// Treat an explicit `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse a Swagger/OpenAPI document from JSON text.
pub fn from_json(input: &str) -> Result<Document, ParseError> {
    from_slice(input.as_bytes())
}

/// Parse a Swagger/OpenAPI document from raw bytes.
pub fn from_slice(input: &[u8]) -> Result<Document, ParseError> {
    if input.iter().all(u8::is_ascii_whitespace) {
        return Err(ParseError::Empty);
    }
    let doc: Document = serde_json::from_slice(input)?;
    log::debug!(
        "parsed document '{}' with {} paths",
        doc.info.title,
        doc.paths.len()
    );
    Ok(doc)
}

/// Parse raw bytes and validate the result.
pub fn load(input: &[u8]) -> Result<Document, LoadError> {
    let doc = from_slice(input)?;
    validate(&doc)?;
    Ok(doc)
}
