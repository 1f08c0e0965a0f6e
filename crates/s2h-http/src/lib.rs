pub mod emitters;
pub mod error;
pub mod generator;

use indexmap::IndexMap;
use s2h_core::parse::spec::Document;
use s2h_core::transform;

pub use emitters::{Formatter, format_file, format_request};
pub use error::EmitError;
pub use generator::{HttpFileGenerator, combine};

/// Generate and render every tag of a document: tag → `.http` text.
///
/// `base_url` overrides the document's own base URL when given.
pub fn render(
    doc: &Document,
    base_url: Option<&str>,
) -> Result<IndexMap<String, String>, EmitError> {
    let formatter = Formatter::new(false)?;
    transform::generate(doc, base_url)
        .iter()
        .map(|(tag, file)| Ok::<_, EmitError>((tag.clone(), formatter.format_file(file)?)))
        .collect()
}
