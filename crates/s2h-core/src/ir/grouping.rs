use indexmap::IndexMap;

use super::operations::OperationInfo;
use crate::parse::spec::Document;

/// Tag used for operations that declare none.
pub const DEFAULT_TAG: &str = "default";

/// Tag → operations filed under it, both in discovery order.
pub type OperationsByTag<'a> = IndexMap<String, Vec<OperationInfo<'a>>>;

/// Walk every path and method and file each operation under all of its tags.
///
/// An operation with N tags appears in N groups; one without tags goes to
/// [`DEFAULT_TAG`].
pub fn extract_operations(doc: &Document) -> OperationsByTag<'_> {
    let mut groups: OperationsByTag<'_> = IndexMap::new();
    let doc_security = doc.security.as_deref().unwrap_or_default();

    for (path, item) in &doc.paths {
        for (method, op) in item.operations() {
            let info = OperationInfo {
                path,
                method,
                operation: op,
                parameters: item.parameters_for(op),
                consumes: inherit(&op.consumes, &doc.consumes),
                produces: inherit(&op.produces, &doc.produces),
                security: op.security.as_deref().unwrap_or(doc_security),
            };

            if op.tags.is_empty() {
                log::debug!("{method} {path} has no tags, filing under '{DEFAULT_TAG}'");
                groups.entry(DEFAULT_TAG.to_string()).or_default().push(info);
            } else {
                for tag in &op.tags {
                    groups.entry(tag.clone()).or_default().push(info.clone());
                }
            }
        }
    }

    groups
}

fn inherit<'a>(own: &'a [String], document: &'a [String]) -> &'a [String] {
    if own.is_empty() { document } else { own }
}
