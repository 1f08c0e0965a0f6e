use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::spec::Document;

/// Used when a document names neither servers nor a host.
pub const FALLBACK_BASE_URL: &str = "http://localhost";

/// A server variable for URL templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerVariable {
    pub default: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
}

/// A server URL definition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Server {
    #[serde(default, deserialize_with = "crate::parse::null_as_default")]
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(
        default,
        deserialize_with = "crate::parse::null_as_default",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub variables: IndexMap<String, ServerVariable>,
}

impl Server {
    /// The URL with every `{name}` variable replaced by its default.
    pub fn expanded_url(&self) -> String {
        self.variables
            .iter()
            .fold(self.url.clone(), |url, (name, var)| {
                url.replace(&format!("{{{name}}}"), &var.default)
            })
    }
}

/// Compute the base URL of a document.
///
/// Precedence: the first OpenAPI 3 server with a non-empty URL, then the
/// Swagger 2 `scheme://host+basePath` (scheme defaults to `http`), then
/// [`FALLBACK_BASE_URL`].
pub fn base_url(doc: &Document) -> String {
    if let Some(server) = doc.servers.first().filter(|s| !s.url.is_empty()) {
        return server.expanded_url();
    }

    let host = doc.host.as_deref().unwrap_or_default();
    let base_path = doc.base_path.as_deref().unwrap_or_default();

    if let Some(scheme) = doc.schemes.first() {
        return format!("{scheme}://{host}{base_path}");
    }
    if !host.is_empty() {
        return format!("http://{host}{base_path}");
    }

    FALLBACK_BASE_URL.to_string()
}
