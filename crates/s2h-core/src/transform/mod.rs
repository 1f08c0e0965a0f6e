pub mod example;
pub mod name_normalizer;
pub mod request;

use indexmap::IndexMap;

use crate::ir::{HttpFile, HttpFiles, extract_operations};
use crate::parse::{self, spec::Document};

pub use example::schema_example;
pub use name_normalizer::{file_stem, to_title_case, var_name};
pub use request::{generate_request, template_path};

/// Placeholder value of the `authToken` global.
pub const AUTH_TOKEN_PLACEHOLDER: &str = "your_auth_token";

/// Build one `HttpFile` per tag.
///
/// `base_url` overrides the document's own base URL when non-empty; the
/// resulting value becomes the `baseUrl` global of every file.
pub fn generate(doc: &Document, base_url: Option<&str>) -> HttpFiles {
    let mut global_vars = extract_global_vars(doc);
    let base_url = match base_url.filter(|url| !url.is_empty()) {
        Some(url) => {
            global_vars.insert("baseUrl".to_string(), url.to_string());
            url.to_string()
        }
        None => parse::base_url(doc),
    };

    let files: HttpFiles = extract_operations(doc)
        .into_iter()
        .map(|(tag, ops)| {
            let requests = ops.iter().map(generate_request).collect();
            let file = HttpFile {
                base_url: base_url.clone(),
                global_vars: global_vars.clone(),
                requests,
                tag: tag.clone(),
            };
            (tag, file)
        })
        .collect();

    log::info!(
        "generated {} requests across {} tags",
        files.values().map(|f| f.requests.len()).sum::<usize>(),
        files.len()
    );
    files
}

/// Variables declared at the top of every generated file: `baseUrl` then
/// `authToken`.
pub fn extract_global_vars(doc: &Document) -> IndexMap<String, String> {
    let mut vars = IndexMap::new();
    vars.insert("baseUrl".to_string(), parse::base_url(doc));
    vars.insert("authToken".to_string(), AUTH_TOKEN_PLACEHOLDER.to_string());
    vars
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "swagger": "2.0",
        "info": {"title": "Pets", "version": "1.0"},
        "host": "petstore.swagger.io",
        "basePath": "/api",
        "paths": {
            "/pets": {
                "get": {"tags": ["pets"], "operationId": "listPets", "responses": {"200": {"description": "ok"}}},
                "post": {"tags": ["pets"], "operationId": "createPet", "responses": {"201": {"description": "ok"}}}
            },
            "/store/inventory": {
                "get": {"tags": ["store"], "responses": {"200": {"description": "ok"}}}
            }
        }
    }"#;

    #[test]
    fn test_global_vars() {
        let doc = parse::from_json(DOC).unwrap();
        let vars = extract_global_vars(&doc);
        let keys: Vec<&str> = vars.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["baseUrl", "authToken"]);
        assert_eq!(vars["baseUrl"], "http://petstore.swagger.io/api");
        assert_eq!(vars["authToken"], AUTH_TOKEN_PLACEHOLDER);
    }

    #[test]
    fn test_generate_groups_requests_by_tag() {
        let doc = parse::from_json(DOC).unwrap();
        let files = generate(&doc, None);

        assert_eq!(files.len(), 2);
        let pets = &files["pets"];
        assert_eq!(pets.tag, "pets");
        assert_eq!(pets.base_url, "http://petstore.swagger.io/api");
        let names: Vec<&str> = pets.requests.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["List Pets", "Create Pet"]);
        assert_eq!(files["store"].requests[0].name, "GET /store/inventory");
    }

    #[test]
    fn test_base_url_override() {
        let doc = parse::from_json(DOC).unwrap();
        let files = generate(&doc, Some("https://staging.example.com"));
        let pets = &files["pets"];
        assert_eq!(pets.base_url, "https://staging.example.com");
        assert_eq!(pets.global_vars["baseUrl"], "https://staging.example.com");

        let files = generate(&doc, Some(""));
        assert_eq!(files["pets"].base_url, "http://petstore.swagger.io/api");
    }
}
