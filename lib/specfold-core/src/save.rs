//! Writing the final document to the destination directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::{Error, Result, yaml};

/// Top-level keys exposed by the saved document, in output order.
pub const OUTPUT_KEYS: [&str; 6] = ["openapi", "info", "paths", "servers", "tags", "components"];

/// Writes the final document to `<dst_dir>/<file_name>`.
///
/// Creates the destination directory if absent. Only the six keys of
/// [`OUTPUT_KEYS`] are written, in that order; any other top-level key the
/// working document accumulated is dropped. The file is written to a
/// temporary sibling and renamed into place so readers never observe a
/// truncated document.
///
/// # Errors
///
/// Returns [`Error::MissingOutputKey`] if the document lacks one of the six
/// keys, [`Error::Serialize`] if it cannot be serialized, or
/// [`Error::Write`] on any I/O failure.
pub fn save_openapi(document: &Value, dst_dir: &Path, file_name: &str) -> Result<PathBuf> {
    fs::create_dir_all(dst_dir).map_err(|source| Error::Write {
        path: dst_dir.to_path_buf(),
        source,
    })?;

    let mut output = Mapping::new();
    for key in OUTPUT_KEYS {
        let value = document
            .get(key)
            .ok_or(Error::MissingOutputKey { key })?;
        output.insert(Value::String(key.to_string()), value.clone());
    }

    let path = dst_dir.join(file_name);
    let staging = dst_dir.join(format!("{file_name}.tmp"));
    yaml::write_file(&Value::Mapping(output), &staging)?;
    fs::rename(&staging, &path).map_err(|source| Error::Write {
        path: path.clone(),
        source,
    })?;

    debug!(path = %path.display(), "wrote merged specification");
    Ok(path)
}
