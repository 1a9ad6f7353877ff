//! Schema collection from a directory of YAML fragments.
//!
//! Every fragment under the source directory must declare a
//! `components.schemas` mapping; the collector merges them all into a single
//! registry. Files are processed in sorted path order so that same-name
//! collisions resolve deterministically (last processed file wins).

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde_yaml::Value;
use tracing::{debug, info, warn};

use crate::{Error, Result, yaml};

/// Named schema definitions accumulated from all fragments.
///
/// Insertion order follows the first occurrence of each name; on a name
/// collision the most recently processed definition replaces the earlier one.
pub type SchemaRegistry = IndexMap<String, Value>;

/// Collects every `components.schemas` entry from YAML files under `src_dir`.
///
/// The directory is walked recursively; files with a `.yaml` or `.yml`
/// extension are loaded and merged. Paths are sorted before processing so
/// the last-write-wins merge is independent of filesystem enumeration order.
///
/// # Errors
///
/// Returns [`Error::Read`] if the directory cannot be walked,
/// [`Error::Parse`] if a fragment is malformed, or [`Error::MissingKey`] if
/// a fragment lacks `components.schemas`.
pub fn collect_schemas(src_dir: &Path) -> Result<SchemaRegistry> {
    let files = find_yaml_files(src_dir)?;
    let mut registry = SchemaRegistry::new();

    for path in files {
        debug!(path = %path.display(), "loading schema fragment");
        let document = yaml::load_file(&path)?;
        let schemas = document
            .get("components")
            .and_then(|components| components.get("schemas"))
            .and_then(Value::as_mapping)
            .ok_or_else(|| Error::MissingKey {
                path: path.clone(),
                key: "components.schemas".to_string(),
            })?;

        for (name, schema) in schemas {
            let Some(name) = name.as_str() else {
                warn!(path = %path.display(), ?name, "skipping non-string schema name");
                continue;
            };
            registry.insert(name.to_string(), schema.clone());
        }
    }

    info!(
        schemas = registry.len(),
        src_dir = %src_dir.display(),
        "collected schema fragments"
    );
    Ok(registry)
}

/// Recursively lists YAML files under `dir`, sorted for deterministic merges.
fn find_yaml_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let entries = fs::read_dir(dir).map_err(|source| Error::Read {
        path: dir.to_path_buf(),
        source,
    })?;
    for entry in entries {
        let entry = entry.map_err(|source| Error::Read {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_dir() {
            files.extend(find_yaml_files(&path)?);
        } else if path
            .extension()
            .is_some_and(|ext| ext == "yaml" || ext == "yml")
        {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
