use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("tags '{first}' and '{second}' would both be written to {file}")]
    DuplicateFileName {
        file: String,
        first: String,
        second: String,
    },
}
