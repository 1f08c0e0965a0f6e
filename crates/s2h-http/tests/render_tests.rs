use s2h_core::config::{OutputLayout, OutputOptions};
use s2h_core::{CodeGenerator, parse, transform};
use s2h_http::{HttpFileGenerator, render};

const PETSTORE: &str = include_str!("fixtures/petstore.json");

#[test]
fn end_to_end_pets_file() {
    let doc = parse::load(PETSTORE.as_bytes()).expect("fixture should be valid");
    let rendered = render(&doc, None).unwrap();
    let pets = &rendered["pets"];

    assert!(pets.contains("GET {{baseUrl}}/pets\n"));
    assert!(pets.contains("POST {{baseUrl}}/pets\n"));
    assert!(pets.contains("@baseUrl = http://petstore.swagger.io/api\n"));

    insta::assert_snapshot!(pets, @r#"
    # Global variables
    @baseUrl = http://petstore.swagger.io/api
    @authToken = your_auth_token

    ### List pets
    # List pets
    GET {{baseUrl}}/pets
    Accept: application/json

    ### Create Pet
    POST {{baseUrl}}/pets
    Content-Type: application/json

    {
      "name": "string",
      "age": 0
    }

    ### Get Pet By Id
    # Returns a single pet
    GET {{baseUrl}}/pets/{{petId}}
    Authorization: Bearer {{authToken}}
    "#);
}

#[test]
fn tags_render_separately() {
    let doc = parse::load(PETSTORE.as_bytes()).unwrap();
    let rendered = render(&doc, None).unwrap();

    let tags: Vec<&str> = rendered.keys().map(String::as_str).collect();
    assert_eq!(tags, vec!["pets", "admin"]);
    assert!(rendered["admin"].contains("### Get Pet By Id\n"));
    assert!(!rendered["admin"].contains("POST"));
}

#[test]
fn base_url_override_reaches_globals() {
    let doc = parse::load(PETSTORE.as_bytes()).unwrap();
    let rendered = render(&doc, Some("https://staging.example.com")).unwrap();
    assert!(rendered["pets"].contains("@baseUrl = https://staging.example.com\n"));
}

#[test]
fn combined_output_keeps_fanned_out_duplicates() {
    let doc = parse::load(PETSTORE.as_bytes()).unwrap();
    let files = transform::generate(&doc, None);
    let options = OutputOptions {
        layout: OutputLayout::Combined,
        combined_file_name: "petstore.http".to_string(),
        ..Default::default()
    };

    let out = HttpFileGenerator.generate(&files, &options).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].path, "petstore.http");
    assert_eq!(out[0].content.matches("### Get Pet By Id").count(), 2);
    assert!(out[0].content.starts_with("# Global variables\n"));
}

#[test]
fn per_tag_output_files() {
    let doc = parse::load(PETSTORE.as_bytes()).unwrap();
    let files = transform::generate(&doc, None);
    let out = HttpFileGenerator
        .generate(&files, &OutputOptions::default())
        .unwrap();

    let paths: Vec<&str> = out.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, vec!["pets.http", "admin.http"]);
}
