//! Removal of unused components from the assembled document.

use serde_yaml::Value;
use tracing::debug;

use crate::audit::UnusedRefs;
use crate::{Error, Result};

/// Removes every entry of `unused` from its owning category mapping.
///
/// Removals are independent of each other and keep the order of the
/// remaining entries intact.
///
/// # Errors
///
/// Returns [`Error::UnknownReference`] if a reference is malformed or does
/// not resolve to an existing entry.
pub fn prune_unused(document: &mut Value, unused: &UnusedRefs) -> Result<()> {
    for reference in unused.keys() {
        let (category, name) = split_reference(reference)?;

        let entries = document
            .get_mut("components")
            .and_then(|components| components.get_mut(category))
            .and_then(Value::as_mapping_mut)
            .ok_or_else(|| Error::UnknownReference {
                reference: reference.clone(),
            })?;

        entries
            .shift_remove(name)
            .ok_or_else(|| Error::UnknownReference {
                reference: reference.clone(),
            })?;
        debug!(reference, "removed unused component");
    }
    Ok(())
}

/// Splits `#/components/<category>/<name>` into its category and name.
fn split_reference(reference: &str) -> Result<(&str, &str)> {
    let unknown = || Error::UnknownReference {
        reference: reference.to_string(),
    };

    let rest = reference
        .strip_prefix("#/components/")
        .ok_or_else(unknown)?;
    rest.split_once('/')
        .filter(|(category, name)| !category.is_empty() && !name.is_empty())
        .ok_or_else(unknown)
}
