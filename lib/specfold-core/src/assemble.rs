//! Assembly of the base document with collected schemas.

use std::path::Path;

use serde_yaml::Value;
use tracing::debug;

use crate::collect::SchemaRegistry;
use crate::{Error, Result, yaml};

/// Loads the base document and injects every collected schema into its
/// `components.schemas` mapping.
///
/// Collected entries overwrite base entries of the same name. The base
/// document is required to already carry a `components.schemas` mapping;
/// its absence is a precondition violation and is not auto-repaired.
///
/// # Errors
///
/// Returns [`Error::Read`] / [`Error::Parse`] if the base document cannot be
/// loaded, or [`Error::MissingKey`] if it lacks `components.schemas`.
pub fn assemble(base_file: &Path, registry: SchemaRegistry) -> Result<Value> {
    let mut document = yaml::load_file(base_file)?;

    let schemas = document
        .get_mut("components")
        .and_then(|components| components.get_mut("schemas"))
        .and_then(Value::as_mapping_mut)
        .ok_or_else(|| Error::MissingKey {
            path: base_file.to_path_buf(),
            key: "components.schemas".to_string(),
        })?;

    debug!(injected = registry.len(), "assembling document");
    for (name, schema) in registry {
        schemas.insert(Value::String(name), schema);
    }

    Ok(document)
}
