//! Detection of unused component references.
//!
//! The audit is deliberately textual: the assembled document is serialized
//! to YAML and each canonical reference string is counted over the resulting
//! lines. A reference-shaped substring inside an unrelated string value is
//! therefore counted as a real use; this is not a structural `$ref` walk.

use indexmap::IndexMap;
use serde_yaml::Value;
use tracing::debug;

use crate::{Result, yaml};

/// Component categories audited for unused entries.
pub const CATEGORIES: [&str; 4] = ["requests", "responses", "schemas", "parameters"];

/// Canonical reference strings whose occurrence count is zero.
pub type UnusedRefs = IndexMap<String, usize>;

/// Builds the canonical reference string for a named component.
#[must_use]
pub fn component_ref(category: &str, name: &str) -> String {
    format!("#/components/{category}/{name}")
}

/// Reports every component whose canonical reference never occurs in the
/// serialized document.
///
/// For each named entry under `components.{requests,responses,schemas,
/// parameters}`, counts the lines of the serialized document containing the
/// substring `#/components/<category>/<name>`; entries with zero occurrences
/// are returned. Categories absent from `components` are treated as empty.
///
/// # Errors
///
/// Returns [`Error::Serialize`](crate::Error::Serialize) if the document
/// cannot be serialized for the scan.
pub fn find_unused(document: &Value) -> Result<UnusedRefs> {
    let text = yaml::to_string(document)?;
    let lines: Vec<&str> = text.lines().collect();

    let mut unused = UnusedRefs::new();
    for category in CATEGORIES {
        let Some(entries) = document
            .get("components")
            .and_then(|components| components.get(category))
            .and_then(Value::as_mapping)
        else {
            continue;
        };

        for name in entries.keys().filter_map(Value::as_str) {
            let reference = component_ref(category, name);
            let occurrences = lines
                .iter()
                .filter(|line| line.contains(&reference))
                .count();
            if occurrences == 0 {
                unused.insert(reference, 0);
            }
        }
    }

    debug!(unused = unused.len(), "reference audit complete");
    Ok(unused)
}
