use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A schema node, tagged by its JSON Schema `type`.
///
/// `$ref` pointers are carried as opaque strings and never dereferenced, so a
/// walk over this tree always terminates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSchema", into = "RawSchema")]
pub enum SchemaObj {
    Ref(String),
    String { example: Option<Value> },
    Integer { example: Option<Value> },
    Number { example: Option<Value> },
    Boolean { example: Option<Value> },
    Array { items: Option<Box<SchemaObj>> },
    Object { properties: IndexMap<String, SchemaObj> },
    /// Missing or unrecognised `type`.
    Unknown { type_name: Option<String> },
}

impl SchemaObj {
    pub fn is_object(&self) -> bool {
        matches!(self, SchemaObj::Object { .. })
    }

    /// The JSON Schema type keyword this node was parsed from.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            SchemaObj::Ref(_) => None,
            SchemaObj::String { .. } => Some("string"),
            SchemaObj::Integer { .. } => Some("integer"),
            SchemaObj::Number { .. } => Some("number"),
            SchemaObj::Boolean { .. } => Some("boolean"),
            SchemaObj::Array { .. } => Some("array"),
            SchemaObj::Object { .. } => Some("object"),
            SchemaObj::Unknown { type_name } => type_name.as_deref(),
        }
    }
}

/// The `type` field can be a single type or, since OpenAPI 3.1, a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeSet {
    Single(String),
    Multiple(Vec<String>),
}

impl TypeSet {
    /// The first non-`null` entry.
    fn primary(&self) -> Option<&str> {
        match self {
            TypeSet::Single(t) => Some(t.as_str()),
            TypeSet::Multiple(ts) => ts.iter().map(String::as_str).find(|t| *t != "null"),
        }
    }
}

/// Wire shape of a schema object, limited to the keywords the example
/// generator reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSchema {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    ref_path: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    schema_type: Option<TypeSet>,

    #[serde(
        default,
        deserialize_with = "crate::parse::null_as_default",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    properties: IndexMap<String, SchemaObj>,

    #[serde(skip_serializing_if = "Option::is_none")]
    items: Option<Box<SchemaObj>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    example: Option<Value>,
}

impl From<RawSchema> for SchemaObj {
    fn from(raw: RawSchema) -> Self {
        if let Some(ref_path) = raw.ref_path {
            return SchemaObj::Ref(ref_path);
        }

        let type_name = raw.schema_type.as_ref().and_then(TypeSet::primary);
        match type_name {
            Some("string") => SchemaObj::String {
                example: raw.example,
            },
            Some("integer") => SchemaObj::Integer {
                example: raw.example,
            },
            Some("number") => SchemaObj::Number {
                example: raw.example,
            },
            Some("boolean") => SchemaObj::Boolean {
                example: raw.example,
            },
            Some("array") => SchemaObj::Array { items: raw.items },
            Some("object") => SchemaObj::Object {
                properties: raw.properties,
            },
            other => SchemaObj::Unknown {
                type_name: other.map(String::from),
            },
        }
    }
}

impl From<SchemaObj> for RawSchema {
    fn from(schema: SchemaObj) -> Self {
        let typed = |name: &str, example: Option<Value>| RawSchema {
            schema_type: Some(TypeSet::Single(name.to_string())),
            example,
            ..Default::default()
        };

        match schema {
            SchemaObj::Ref(ref_path) => RawSchema {
                ref_path: Some(ref_path),
                ..Default::default()
            },
            SchemaObj::String { example } => typed("string", example),
            SchemaObj::Integer { example } => typed("integer", example),
            SchemaObj::Number { example } => typed("number", example),
            SchemaObj::Boolean { example } => typed("boolean", example),
            SchemaObj::Array { items } => RawSchema {
                items,
                ..typed("array", None)
            },
            SchemaObj::Object { properties } => RawSchema {
                properties,
                ..typed("object", None)
            },
            SchemaObj::Unknown { type_name } => RawSchema {
                schema_type: type_name.map(TypeSet::Single),
                ..Default::default()
            },
        }
    }
}
