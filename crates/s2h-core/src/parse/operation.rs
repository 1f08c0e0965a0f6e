use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::parameter::{Parameter, ParameterOrRef};
use super::request_body::RequestBody;
use super::response::Response;
use crate::ir::HttpMethod;

/// A security requirement: map of scheme name → required scopes.
pub type SecurityRequirement = IndexMap<String, Vec<String>>;

/// An API operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Operation {
    #[serde(rename = "operationId", skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(
        default,
        deserialize_with = "crate::parse::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tags: Vec<String>,

    #[serde(
        default,
        deserialize_with = "crate::parse::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub parameters: Vec<ParameterOrRef>,

    #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,

    #[serde(
        default,
        deserialize_with = "crate::parse::null_as_default",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub responses: IndexMap<String, Response>,

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

    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<SecurityRequirement>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
}

/// A path item, containing operations keyed by HTTP method.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathItem {
    /// Parameters shared by every operation under this path.
    #[serde(
        default,
        deserialize_with = "crate::parse::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub parameters: Vec<ParameterOrRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,
}

impl PathItem {
    /// Declared operations in the fixed method order
    /// GET, POST, PUT, DELETE, OPTIONS, HEAD, PATCH.
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Operation)> {
        [
            (HttpMethod::Get, self.get.as_ref()),
            (HttpMethod::Post, self.post.as_ref()),
            (HttpMethod::Put, self.put.as_ref()),
            (HttpMethod::Delete, self.delete.as_ref()),
            (HttpMethod::Options, self.options.as_ref()),
            (HttpMethod::Head, self.head.as_ref()),
            (HttpMethod::Patch, self.patch.as_ref()),
        ]
        .into_iter()
        .filter_map(|(method, op)| op.map(|op| (method, op)))
    }

    /// Inline parameters in effect for `op`: path-level ones first, with an
    /// operation parameter of the same name and location taking precedence.
    /// `$ref` parameters are skipped.
    pub fn parameters_for<'a>(&'a self, op: &'a Operation) -> Vec<&'a Parameter> {
        let own: Vec<&Parameter> = op
            .parameters
            .iter()
            .filter_map(ParameterOrRef::as_parameter)
            .collect();

        let mut merged: Vec<&Parameter> = self
            .parameters
            .iter()
            .filter_map(ParameterOrRef::as_parameter)
            .filter(|shared| {
                !own.iter().any(|p| p.name == shared.name && p.location == shared.location)
            })
            .collect();
        merged.extend(own);
        merged
    }
}
