use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::media_type::MediaType;

/// An OpenAPI 3 request body. A `$ref` body parses with empty `content`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "crate::parse::null_as_default")]
    pub content: IndexMap<String, MediaType>,

    #[serde(default, deserialize_with = "crate::parse::null_as_default")]
    pub required: bool,

    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub ref_path: Option<String>,
}

impl RequestBody {
    /// The first JSON-flavored media type that carries a schema or example.
    pub fn json_content(&self) -> Option<(&str, &MediaType)> {
        self.content
            .iter()
            .find(|(content_type, mt)| content_type.contains("json") && mt.has_payload())
            .map(|(content_type, mt)| (content_type.as_str(), mt))
    }

    /// Media type to announce in `Content-Type`: JSON-flavored if declared,
    /// otherwise the first one.
    pub fn preferred_content_type(&self) -> Option<&str> {
        self.content
            .keys()
            .find(|content_type| content_type.contains("json"))
            .or_else(|| self.content.keys().next())
            .map(String::as_str)
    }
}
