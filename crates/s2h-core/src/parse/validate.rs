use crate::error::ValidationError;

use super::operation::{Operation, PathItem};
use super::parameter::ParameterLocation;
use super::spec::Document;

/// Check the minimal structure the generator relies on. Stops at the first
/// problem, walking paths and methods in document order.
pub fn validate(doc: &Document) -> Result<(), ValidationError> {
    if doc.dialect().is_none() {
        return Err(ValidationError::MissingVersion);
    }
    if doc.info.title.is_empty() {
        return Err(ValidationError::MissingInfoField("title"));
    }
    if doc.info.version.is_empty() {
        return Err(ValidationError::MissingInfoField("version"));
    }
    if doc.paths.is_empty() {
        return Err(ValidationError::NoPaths);
    }

    for (path, item) in &doc.paths {
        if !path.starts_with('/') {
            return Err(ValidationError::InvalidPathSyntax(path.clone()));
        }
        for (method, op) in item.operations() {
            validate_operation(path, method.as_str(), item, op)?;
        }
    }

    log::debug!("document '{}' passed validation", doc.info.title);
    Ok(())
}

fn validate_operation(
    path: &str,
    method: &str,
    item: &PathItem,
    op: &Operation,
) -> Result<(), ValidationError> {
    if op.responses.is_empty() {
        return Err(ValidationError::NoResponses {
            method: method.to_string(),
            path: path.to_string(),
        });
    }

    for (index, param) in item.parameters_for(op).into_iter().enumerate() {
        if param.name.is_empty() {
            return Err(ValidationError::MissingParameterName {
                index,
                method: method.to_string(),
                path: path.to_string(),
            });
        }
        if param.location.is_none() {
            return Err(ValidationError::MissingParameterLocation {
                name: param.name.clone(),
                method: method.to_string(),
                path: path.to_string(),
            });
        }
        if param.is_in(ParameterLocation::Path) && !param.required {
            return Err(ValidationError::PathParamNotRequired {
                name: param.name.clone(),
                method: method.to_string(),
                path: path.to_string(),
            });
        }
    }

    Ok(())
}
