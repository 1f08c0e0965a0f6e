use indexmap::IndexMap;
use serde::Serialize;

use super::operations::HttpMethod;

/// A single request block of a `.http` file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HttpRequest {
    pub name: String,
    pub method: HttpMethod,
    /// Request path with `{{var}}` placeholders.
    pub path: String,
    /// Header name → value, in emission order. Names keep their authored case.
    pub headers: IndexMap<String, String>,
    /// Example body, empty when the operation takes none.
    pub body: String,
    pub description: String,
    /// Example values for the path variables.
    pub vars: IndexMap<String, String>,
    pub tag: String,
}

/// The requests generated for one tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HttpFile {
    pub base_url: String,
    pub global_vars: IndexMap<String, String>,
    /// Requests in operation discovery order.
    pub requests: Vec<HttpRequest>,
    pub tag: String,
}

/// Tag → generated file, in tag discovery order.
pub type HttpFiles = IndexMap<String, HttpFile>;
