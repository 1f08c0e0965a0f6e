use indexmap::IndexMap;

use super::example::{plain_value, schema_example};
use super::name_normalizer::to_title_case;
use crate::ir::{DEFAULT_TAG, HttpRequest, OperationInfo};
use crate::parse::parameter::{Parameter, ParameterLocation};
use crate::parse::request_body::RequestBody;
use crate::parse::response::is_success_status;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Build the `.http` request for one extracted operation.
pub fn generate_request(op: &OperationInfo<'_>) -> HttpRequest {
    let request = HttpRequest {
        name: request_name(op),
        method: op.method,
        path: template_path(op.path),
        headers: extract_headers(op),
        body: request_body(op),
        description: description(op),
        vars: extract_vars(op),
        tag: op
            .operation
            .tags
            .first()
            .cloned()
            .unwrap_or_else(|| DEFAULT_TAG.to_string()),
    };
    log::debug!(
        "generated '{}' for {} {} ({} headers, body: {})",
        request.name,
        op.method,
        op.path,
        request.headers.len(),
        !request.body.is_empty()
    );
    request
}

/// Rewrite every `{name}` path segment to the `{{name}}` variable syntax.
pub fn template_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len() + 8);
    let mut rest = path;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) if end > 0 => {
                out.push_str("{{");
                out.push_str(&after[..end]);
                out.push_str("}}");
                rest = &after[end + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

fn request_name(op: &OperationInfo<'_>) -> String {
    let operation = op.operation;
    if let Some(summary) = non_empty(&operation.summary) {
        return summary.to_string();
    }
    if let Some(id) = non_empty(&operation.operation_id) {
        return to_title_case(id);
    }
    format!("{} {}", op.method, op.path)
}

fn description(op: &OperationInfo<'_>) -> String {
    non_empty(&op.operation.description)
        .or_else(|| non_empty(&op.operation.summary))
        .unwrap_or_default()
        .to_string()
}

fn extract_headers(op: &OperationInfo<'_>) -> IndexMap<String, String> {
    let mut headers = IndexMap::new();
    let request_body = op.operation.request_body.as_ref();

    let content_type = op
        .consumes
        .first()
        .map(String::as_str)
        .or_else(|| {
            op.parameters
                .iter()
                .any(|p| p.is_body())
                .then_some(JSON_CONTENT_TYPE)
        })
        .or_else(|| request_body.and_then(RequestBody::preferred_content_type));
    if let Some(content_type) = content_type {
        headers.insert("Content-Type".to_string(), content_type.to_string());
    }

    let accept = op
        .produces
        .first()
        .map(String::as_str)
        .or_else(|| success_media_type(op));
    if let Some(accept) = accept {
        headers.insert("Accept".to_string(), accept.to_string());
    }

    if op.has_security() {
        headers.insert(
            "Authorization".to_string(),
            "Bearer {{authToken}}".to_string(),
        );
    }

    for param in op
        .parameters
        .iter()
        .filter(|p| p.is_in(ParameterLocation::Header))
    {
        headers.insert(param.name.clone(), format!("{{{{{}}}}}", param.name));
    }

    headers
}

/// First media type of the first success response that declares content.
fn success_media_type<'a>(op: &OperationInfo<'a>) -> Option<&'a str> {
    op.operation
        .responses
        .iter()
        .filter(|(status, _)| is_success_status(status))
        .find_map(|(_, response)| response.content.keys().next())
        .map(String::as_str)
}

fn request_body(op: &OperationInfo<'_>) -> String {
    let body_schema = op
        .parameters
        .iter()
        .filter(|p| p.is_in(ParameterLocation::Body))
        .find_map(|p| p.schema.as_ref());
    if let Some(schema) = body_schema {
        return schema_example(schema);
    }

    let Some(request_body) = op.operation.request_body.as_ref() else {
        return String::new();
    };

    match request_body.json_content() {
        Some((_, media_type)) => {
            if let Some(example) = &media_type.example {
                serde_json::to_string_pretty(example).unwrap_or_else(|_| example.to_string())
            } else if let Some(schema) = &media_type.schema {
                schema_example(schema)
            } else {
                String::new()
            }
        }
        None => {
            if let Some(ref_path) = &request_body.ref_path {
                log::warn!(
                    "{} {}: request body {} is a reference and is left empty",
                    op.method,
                    op.path,
                    ref_path
                );
            }
            String::new()
        }
    }
}

fn extract_vars(op: &OperationInfo<'_>) -> IndexMap<String, String> {
    op.parameters
        .iter()
        .filter(|p| p.is_in(ParameterLocation::Path))
        .map(|p| (p.name.clone(), example_value(p)))
        .collect()
}

/// Example value for a path parameter: `example`, then `default`, then a
/// placeholder keyed by its type.
fn example_value(param: &Parameter) -> String {
    if let Some(value) = param.example.as_ref().or(param.default_value.as_ref()) {
        return plain_value(value);
    }
    match param.type_name() {
        Some("string") => "example_string",
        Some("integer" | "number") => "123",
        Some("boolean") => "true",
        _ => "example",
    }
    .to_string()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{HttpMethod, OperationInfo};
    use crate::parse::operation::{Operation, SecurityRequirement};
    use crate::parse::schema::SchemaObj;
    use serde_json::json;

    fn info<'a>(
        method: HttpMethod,
        path: &'a str,
        operation: &'a Operation,
        parameters: Vec<&'a Parameter>,
    ) -> OperationInfo<'a> {
        OperationInfo {
            path,
            method,
            operation,
            parameters,
            consumes: &[],
            produces: &[],
            security: &[],
        }
    }

    fn path_param(name: &str) -> Parameter {
        Parameter {
            name: name.to_string(),
            location: Some(ParameterLocation::Path),
            required: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_template_path() {
        assert_eq!(template_path("/pets"), "/pets");
        assert_eq!(template_path("/pets/{petId}"), "/pets/{{petId}}");
        assert_eq!(
            template_path("/users/{userId}/pets/{petId}"),
            "/users/{{userId}}/pets/{{petId}}"
        );
        assert_eq!(template_path("/files/{name}.{ext}"), "/files/{{name}}.{{ext}}");
    }

    #[test]
    fn test_template_path_leaves_unmatched_braces() {
        assert_eq!(template_path("/odd/{}"), "/odd/{}");
        assert_eq!(template_path("/open/{id"), "/open/{id");
    }

    #[test]
    fn test_name_precedence() {
        let mut op = Operation {
            summary: Some("List all pets".to_string()),
            operation_id: Some("listPets".to_string()),
            ..Default::default()
        };
        assert_eq!(
            request_name(&info(HttpMethod::Get, "/pets", &op, vec![])),
            "List all pets"
        );

        op.summary = Some(String::new());
        assert_eq!(
            request_name(&info(HttpMethod::Get, "/pets", &op, vec![])),
            "List Pets"
        );

        op.operation_id = None;
        assert_eq!(
            request_name(&info(HttpMethod::Get, "/pets", &op, vec![])),
            "GET /pets"
        );
    }

    #[test]
    fn test_description_falls_back_to_summary() {
        let op = Operation {
            summary: Some("Find pet".to_string()),
            ..Default::default()
        };
        assert_eq!(description(&info(HttpMethod::Get, "/", &op, vec![])), "Find pet");

        let op = Operation {
            summary: Some("Find pet".to_string()),
            description: Some("Returns a single pet".to_string()),
            ..Default::default()
        };
        assert_eq!(
            description(&info(HttpMethod::Get, "/", &op, vec![])),
            "Returns a single pet"
        );

        let op = Operation::default();
        assert_eq!(description(&info(HttpMethod::Get, "/", &op, vec![])), "");
    }

    #[test]
    fn test_get_without_body() {
        let limit = Parameter {
            name: "limit".to_string(),
            location: Some(ParameterLocation::Query),
            param_type: Some("integer".to_string()),
            ..Default::default()
        };
        let op = Operation::default();
        let req = generate_request(&info(HttpMethod::Get, "/pets", &op, vec![&limit]));
        assert!(req.body.is_empty());
        assert!(!req.headers.contains_key("Content-Type"));
        assert_eq!(req.tag, DEFAULT_TAG);
    }

    #[test]
    fn test_post_with_object_body() {
        let pet = Parameter {
            name: "pet".to_string(),
            location: Some(ParameterLocation::Body),
            required: true,
            schema: Some(SchemaObj::Object {
                properties: [("name".to_string(), SchemaObj::String { example: None })]
                    .into_iter()
                    .collect(),
            }),
            ..Default::default()
        };
        let op = Operation {
            tags: vec!["pets".to_string(), "store".to_string()],
            ..Default::default()
        };
        let req = generate_request(&info(HttpMethod::Post, "/pets", &op, vec![&pet]));
        assert_eq!(req.body, "{\n  \"name\": \"string\"\n}");
        assert_eq!(req.headers["Content-Type"], "application/json");
        assert_eq!(req.tag, "pets");
    }

    #[test]
    fn test_header_order_and_values() {
        let trace = Parameter {
            name: "X-Trace-Id".to_string(),
            location: Some(ParameterLocation::Header),
            ..Default::default()
        };
        let op = Operation::default();
        let consumes = ["application/xml".to_string()];
        let produces = ["application/json".to_string()];
        let security: [SecurityRequirement; 1] = [[("oauth".to_string(), vec![])].into()];
        let op_info = OperationInfo {
            consumes: &consumes,
            produces: &produces,
            security: &security,
            ..info(HttpMethod::Put, "/pets", &op, vec![&trace])
        };

        let headers = extract_headers(&op_info);
        let pairs: Vec<(&str, &str)> = headers
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Content-Type", "application/xml"),
                ("Accept", "application/json"),
                ("Authorization", "Bearer {{authToken}}"),
                ("X-Trace-Id", "{{X-Trace-Id}}"),
            ]
        );
    }

    #[test]
    fn test_openapi3_request_body() {
        let op: Operation = serde_json::from_value(json!({
            "requestBody": {
                "content": {
                    "application/xml": {"schema": {"type": "object"}},
                    "application/json": {
                        "schema": {"type": "object", "properties": {"id": {"type": "integer"}}}
                    }
                }
            },
            "responses": {
                "404": {"description": "missing", "content": {"text/plain": {}}},
                "200": {"description": "ok", "content": {"application/json": {}}}
            }
        }))
        .unwrap();
        let req = generate_request(&info(HttpMethod::Post, "/items", &op, vec![]));
        assert_eq!(req.body, "{\n  \"id\": 0\n}");
        assert_eq!(req.headers["Content-Type"], "application/json");
        assert_eq!(req.headers["Accept"], "application/json");
    }

    #[test]
    fn test_media_type_example_is_preferred() {
        let op: Operation = serde_json::from_value(json!({
            "requestBody": {
                "content": {
                    "application/json": {
                        "schema": {"type": "object"},
                        "example": {"name": "Rex"}
                    }
                }
            }
        }))
        .unwrap();
        let req = generate_request(&info(HttpMethod::Post, "/pets", &op, vec![]));
        assert_eq!(req.body, "{\n  \"name\": \"Rex\"\n}");
    }

    #[test]
    fn test_ref_request_body_is_empty() {
        let op: Operation = serde_json::from_value(json!({
            "requestBody": {"$ref": "#/components/requestBodies/Pet"}
        }))
        .unwrap();
        let req = generate_request(&info(HttpMethod::Post, "/pets", &op, vec![]));
        assert!(req.body.is_empty());
    }

    #[test]
    fn test_path_vars() {
        let with_example = Parameter {
            example: Some(json!(42)),
            default_value: Some(json!(7)),
            ..path_param("petId")
        };
        let with_default = Parameter {
            default_value: Some(json!("main")),
            ..path_param("branch")
        };
        let typed_string = Parameter {
            param_type: Some("string".to_string()),
            ..path_param("owner")
        };
        let typed_int = Parameter {
            schema: Some(SchemaObj::Integer { example: None }),
            ..path_param("page")
        };
        let untyped = path_param("slug");
        let op = Operation::default();
        let params = vec![&with_example, &with_default, &typed_string, &typed_int, &untyped];

        let vars = extract_vars(&info(HttpMethod::Get, "/x", &op, params));
        assert_eq!(vars["petId"], "42");
        assert_eq!(vars["branch"], "main");
        assert_eq!(vars["owner"], "example_string");
        assert_eq!(vars["page"], "123");
        assert_eq!(vars["slug"], "example");
    }
}
