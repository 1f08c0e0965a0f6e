use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::components::Components;
use super::operation::{PathItem, SecurityRequirement};
use super::schema::SchemaObj;
use super::server::Server;

/// Info object describing the API. Both fields are required for a valid
/// document, but a missing value is reported by validation, not by parsing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Info {
    #[serde(default, deserialize_with = "crate::parse::null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "crate::parse::null_as_default")]
    pub version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Which dialect a document declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Swagger2,
    OpenApi3,
}

/// Top-level Swagger 2.0 or OpenAPI 3.x document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swagger: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub openapi: Option<String>,

    #[serde(default, deserialize_with = "crate::parse::null_as_default")]
    pub info: Info,

    // OpenAPI 3 connection info
    #[serde(
        default,
        deserialize_with = "crate::parse::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub servers: Vec<Server>,

    // Swagger 2 connection info
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(rename = "basePath", skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,

    #[serde(
        default,
        deserialize_with = "crate::parse::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub schemes: Vec<String>,

    #[serde(
        default,
        deserialize_with = "crate::parse::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub consumes: Vec<String>,

    #[serde(
        default,
        deserialize_with = "crate::parse::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub produces: Vec<String>,

    #[serde(
        default,
        deserialize_with = "crate::parse::null_as_default",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub paths: IndexMap<String, PathItem>,

    #[serde(
        default,
        deserialize_with = "crate::parse::null_as_default",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub definitions: IndexMap<String, SchemaObj>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<SecurityRequirement>>,
}

impl Document {
    /// The declared dialect. `openapi` wins when a document carries both.
    pub fn dialect(&self) -> Option<Dialect> {
        if self.openapi.as_deref().is_some_and(|v| !v.is_empty()) {
            Some(Dialect::OpenApi3)
        } else if self.swagger.as_deref().is_some_and(|v| !v.is_empty()) {
            Some(Dialect::Swagger2)
        } else {
            None
        }
    }

    /// The declared version string, e.g. `2.0` or `3.0.3`.
    pub fn version(&self) -> Option<&str> {
        match self.dialect()? {
            Dialect::OpenApi3 => self.openapi.as_deref(),
            Dialect::Swagger2 => self.swagger.as_deref(),
        }
    }

    /// Number of reusable schemas across `definitions` and `components.schemas`.
    pub fn schema_count(&self) -> usize {
        self.definitions.len() + self.components.as_ref().map_or(0, |c| c.schemas.len())
    }
}
