use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Structural problems found by `parse::validate`. Validation stops at the
/// first one, so each variant names a single offending location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("not a valid Swagger/OpenAPI document: missing 'swagger' or 'openapi' field")]
    MissingVersion,

    #[error("info.{0} is required")]
    MissingInfoField(&'static str),

    #[error("no paths defined in the document")]
    NoPaths,

    #[error("path {0:?} must begin with a forward slash")]
    InvalidPathSyntax(String),

    #[error("no responses defined for {method} {path}")]
    NoResponses { method: String, path: String },

    #[error("parameter {index} for {method} {path} has no name")]
    MissingParameterName {
        index: usize,
        method: String,
        path: String,
    },

    #[error("parameter '{name}' for {method} {path} has no 'in' property")]
    MissingParameterLocation {
        name: String,
        method: String,
        path: String,
    },

    #[error("path parameter '{name}' for {method} {path} must be required")]
    PathParamNotRequired {
        name: String,
        method: String,
        path: String,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml_ng::Error,
    },
}

/// Any failure on the way from raw bytes to a validated document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to parse document: {0}")]
    Parse(#[from] ParseError),

    #[error("invalid document: {0}")]
    Validation(#[from] ValidationError),
}
