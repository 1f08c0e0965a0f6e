use serde::{Deserialize, Serialize};

use super::schema::SchemaObj;

/// A media type object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MediaType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaObj>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,
}

impl MediaType {
    pub fn has_payload(&self) -> bool {
        self.schema.is_some() || self.example.is_some()
    }
}
