use serde::{Deserialize, Deserializer, Serialize};

use super::schema::SchemaObj;

/// Parameter location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Body,
    Cookie,
    FormData,
    Other,
}

impl ParameterLocation {
    pub fn from_name(name: &str) -> Self {
        match name {
            "path" => ParameterLocation::Path,
            "query" => ParameterLocation::Query,
            "header" => ParameterLocation::Header,
            "body" => ParameterLocation::Body,
            "cookie" => ParameterLocation::Cookie,
            "formData" => ParameterLocation::FormData,
            _ => ParameterLocation::Other,
        }
    }
}

/// An absent or empty `in` both mean "no location".
fn deserialize_location<'de, D>(deserializer: D) -> Result<Option<ParameterLocation>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .filter(|name| !name.is_empty())
        .map(|name| ParameterLocation::from_name(&name)))
}

/// An API parameter (Swagger 2 or OpenAPI 3 shape).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(default, deserialize_with = "crate::parse::null_as_default")]
    pub name: String,

    #[serde(
        rename = "in",
        default,
        deserialize_with = "deserialize_location",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<ParameterLocation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "crate::parse::null_as_default")]
    pub required: bool,

    /// Swagger 2 primitive type for non-body parameters.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub param_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaObj>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub explode: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,

    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<serde_json::Value>,
}

impl Parameter {
    pub fn is_in(&self, location: ParameterLocation) -> bool {
        self.location == Some(location)
    }

    /// Whether this parameter carries the request payload: an explicit body
    /// parameter, an object-typed schema, or an exploded form-style query.
    pub fn is_body(&self) -> bool {
        self.is_in(ParameterLocation::Body)
            || self.schema.as_ref().is_some_and(SchemaObj::is_object)
            || (self.is_in(ParameterLocation::Query)
                && self.style.as_deref() == Some("form")
                && self.explode == Some(true))
    }

    /// The primitive type name, falling back to the schema's type.
    pub fn type_name(&self) -> Option<&str> {
        self.param_type
            .as_deref()
            .or_else(|| self.schema.as_ref().and_then(SchemaObj::type_name))
    }
}

/// A reference or inline parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterOrRef {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    Parameter(Parameter),
}

impl ParameterOrRef {
    pub fn as_parameter(&self) -> Option<&Parameter> {
        match self {
            ParameterOrRef::Parameter(p) => Some(p),
            ParameterOrRef::Ref { .. } => None,
        }
    }
}

impl From<Parameter> for ParameterOrRef {
    fn from(param: Parameter) -> Self {
        ParameterOrRef::Parameter(param)
    }
}
