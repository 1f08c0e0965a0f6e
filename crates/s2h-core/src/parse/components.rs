use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::schema::SchemaObj;

/// Components object holding reusable definitions. Kept for inspection only;
/// `$ref` pointers into it are never followed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Components {
    #[serde(
        default,
        deserialize_with = "crate::parse::null_as_default",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub schemas: IndexMap<String, SchemaObj>,
}
