use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::media_type::MediaType;
use super::schema::SchemaObj;

/// A response definition. Only its presence matters for validation; the
/// content types feed the `Accept` header for OpenAPI 3 documents.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Response {
    #[serde(default, deserialize_with = "crate::parse::null_as_default")]
    pub description: String,

    /// Swagger 2 response schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaObj>,

    /// OpenAPI 3 response content.
    #[serde(
        default,
        deserialize_with = "crate::parse::null_as_default",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub content: IndexMap<String, MediaType>,
}

/// Whether a response key denotes success (`2XX`-style codes or `default`).
pub fn is_success_status(status: &str) -> bool {
    status == "default" || status.starts_with('2')
}
