use std::collections::HashMap;

use s2h_core::config::{OutputLayout, OutputOptions};
use s2h_core::ir::{HttpFile, HttpFiles};
use s2h_core::transform::file_stem;
use s2h_core::{CodeGenerator, GeneratedFile};

use crate::emitters::Formatter;
use crate::error::EmitError;

/// Writes one `.http` file per tag, or a single combined file.
pub struct HttpFileGenerator;

impl CodeGenerator for HttpFileGenerator {
    type Config = OutputOptions;
    type Error = EmitError;

    fn generate(
        &self,
        files: &HttpFiles,
        config: &OutputOptions,
    ) -> Result<Vec<GeneratedFile>, EmitError> {
        let formatter = Formatter::new(config.named_requests)?;

        match config.layout {
            OutputLayout::PerTag => per_tag(files, &formatter),
            OutputLayout::Combined => {
                let combined = combine(files);
                log::info!(
                    "combining {} tags into {}",
                    files.len(),
                    config.combined_file_name
                );
                Ok(vec![GeneratedFile {
                    path: config.combined_file_name.clone(),
                    content: formatter.format_file(&combined)?,
                }])
            }
        }
    }
}

fn per_tag(files: &HttpFiles, formatter: &Formatter) -> Result<Vec<GeneratedFile>, EmitError> {
    let mut owners: HashMap<String, &str> = HashMap::new();
    let mut generated = Vec::with_capacity(files.len());

    for (tag, file) in files {
        let path = format!("{}.http", file_stem(tag));
        if let Some(first) = owners.get(&path) {
            return Err(EmitError::DuplicateFileName {
                file: path,
                first: first.to_string(),
                second: tag.clone(),
            });
        }
        owners.insert(path.clone(), tag);
        log::debug!("tag '{tag}' -> {path}");
        generated.push(GeneratedFile {
            path,
            content: formatter.format_file(file)?,
        });
    }

    Ok(generated)
}

/// Merge every tag file into one. Requests keep tag order, so an operation
/// filed under several tags appears once per tag. Global variables are
/// merged with the last file winning on a shared name; the base URL is the
/// first file's.
pub fn combine(files: &HttpFiles) -> HttpFile {
    let mut combined = HttpFile {
        base_url: files
            .values()
            .next()
            .map(|f| f.base_url.clone())
            .unwrap_or_default(),
        global_vars: Default::default(),
        requests: Vec::new(),
        tag: "combined".to_string(),
    };

    for file in files.values() {
        combined
            .global_vars
            .extend(file.global_vars.iter().map(|(k, v)| (k.clone(), v.clone())));
        combined.requests.extend(file.requests.iter().cloned());
    }

    combined
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use s2h_core::ir::{HttpMethod, HttpRequest};

    fn file(tag: &str, vars: &[(&str, &str)], paths: &[&str]) -> HttpFile {
        HttpFile {
            base_url: format!("http://{tag}.example.com"),
            global_vars: vars
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            requests: paths
                .iter()
                .map(|path| HttpRequest {
                    name: format!("GET {path}"),
                    method: HttpMethod::Get,
                    path: path.to_string(),
                    headers: IndexMap::new(),
                    body: String::new(),
                    description: String::new(),
                    vars: IndexMap::new(),
                    tag: tag.to_string(),
                })
                .collect(),
            tag: tag.to_string(),
        }
    }

    fn files(entries: Vec<HttpFile>) -> HttpFiles {
        entries.into_iter().map(|f| (f.tag.clone(), f)).collect()
    }

    #[test]
    fn test_per_tag_file_names() {
        let files = files(vec![
            file("Pet Store", &[("baseUrl", "a")], &["/pets"]),
            file("admin/users", &[("baseUrl", "a")], &["/users"]),
        ]);
        let out = HttpFileGenerator
            .generate(&files, &OutputOptions::default())
            .unwrap();
        let paths: Vec<&str> = out.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["pet_store.http", "admin_users.http"]);
        assert!(out[0].content.contains("GET {{baseUrl}}/pets"));
    }

    #[test]
    fn test_colliding_file_names() {
        let files = files(vec![
            file("Pets", &[], &["/a"]),
            file("pets", &[], &["/b"]),
        ]);
        let err = HttpFileGenerator
            .generate(&files, &OutputOptions::default())
            .unwrap_err();
        match err {
            EmitError::DuplicateFileName {
                file,
                first,
                second,
            } => {
                assert_eq!(file, "pets.http");
                assert_eq!(first, "Pets");
                assert_eq!(second, "pets");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_combine_globals_last_write_wins() {
        let files = files(vec![
            file("a", &[("baseUrl", "http://a"), ("authToken", "t")], &["/x"]),
            file("b", &[("baseUrl", "http://b"), ("extra", "1")], &["/y", "/z"]),
        ]);
        let combined = combine(&files);

        assert_eq!(combined.global_vars["baseUrl"], "http://b");
        assert_eq!(combined.global_vars["authToken"], "t");
        assert_eq!(combined.global_vars["extra"], "1");
        assert_eq!(combined.base_url, "http://a.example.com");
        let paths: Vec<&str> = combined.requests.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["/x", "/y", "/z"]);
    }

    #[test]
    fn test_combined_layout_writes_one_file() {
        let files = files(vec![
            file("a", &[("baseUrl", "http://a")], &["/x"]),
            file("b", &[("baseUrl", "http://a")], &["/x"]),
        ]);
        let options = OutputOptions {
            layout: OutputLayout::Combined,
            ..Default::default()
        };
        let out = HttpFileGenerator.generate(&files, &options).unwrap();

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].path, "swagger.http");
        assert_eq!(out[0].content.matches("### GET /x").count(), 2);
        assert_eq!(out[0].content.matches("@baseUrl").count(), 1);
    }

    #[test]
    fn test_named_requests_option() {
        let files = files(vec![file("a", &[], &["/pets"])]);
        let options = OutputOptions {
            named_requests: true,
            ..Default::default()
        };
        let out = HttpFileGenerator.generate(&files, &options).unwrap();
        assert!(out[0].content.contains("### GET /pets\n# @name get_pets\n"));
    }
}
