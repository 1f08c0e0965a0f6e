use std::fmt;

use serde::Serialize;

use crate::parse::operation::{Operation, SecurityRequirement};
use crate::parse::parameter::Parameter;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Options,
    Head,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One operation located in the document, with the document-level defaults
/// it inherits already applied. Borrows from the parsed document, so the
/// entries filed under several tags share the same data.
#[derive(Debug, Clone)]
pub struct OperationInfo<'a> {
    pub path: &'a str,
    pub method: HttpMethod,
    pub operation: &'a Operation,
    /// Path-level and operation-level inline parameters, merged.
    pub parameters: Vec<&'a Parameter>,
    pub consumes: &'a [String],
    pub produces: &'a [String],
    pub security: &'a [SecurityRequirement],
}

impl OperationInfo<'_> {
    pub fn has_security(&self) -> bool {
        !self.security.is_empty()
    }
}
