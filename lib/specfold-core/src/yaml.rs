//! YAML document loading and writing.
//!
//! Documents are handled as untyped [`serde_yaml::Value`] trees: scalars,
//! sequences, and mappings. Mappings preserve insertion order, and
//! serialization never re-sorts keys, so a document written by
//! [`write_file`] keeps the exact key order of the in-memory tree.

use std::fs;
use std::path::Path;

use serde_yaml::Value;

use crate::{Error, Result};

/// Reads and parses a YAML file into an untyped tree.
///
/// # Errors
///
/// Returns [`Error::Read`] if the file cannot be read, or [`Error::Parse`]
/// if its content is not valid YAML.
pub fn load_file(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&text).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Serializes a tree to YAML text, preserving mapping key order.
///
/// # Errors
///
/// Returns [`Error::Serialize`] if the value cannot be represented as YAML.
pub fn to_string(value: &Value) -> Result<String> {
    serde_yaml::to_string(value).map_err(|source| Error::Serialize { source })
}

/// Serializes a tree and writes it to `path`.
///
/// # Errors
///
/// Returns [`Error::Serialize`] if serialization fails, or [`Error::Write`]
/// if the destination cannot be written.
pub fn write_file(value: &Value, path: &Path) -> Result<()> {
    let text = to_string(value)?;
    fs::write(path, text).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    fn parse(text: &str) -> Value {
        serde_yaml::from_str(text).expect("valid YAML")
    }

    #[test]
    fn should_round_trip_preserving_structure_and_order() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("doc.yaml");

        let original = parse(
            r"
zebra: 1
apple:
  - one
  - two
mango:
  nested: true
  other: null
",
        );

        write_file(&original, &path).expect("write");
        let reloaded = load_file(&path).expect("reload");

        assert_eq!(reloaded, original);
        // Mapping equality is order-insensitive, so also pin the key order
        // through the serialized text.
        assert_eq!(
            to_string(&reloaded).expect("serialize"),
            to_string(&original).expect("serialize"),
        );
    }

    #[test]
    fn should_not_sort_mapping_keys_on_write() {
        let value = parse("b: 2\na: 1\nc: 3\n");

        let yaml = to_string(&value).expect("serialize");

        assert_snapshot!(yaml, @r"
        b: 2
        a: 1
        c: 3
        ");
    }

    #[test]
    fn should_quote_reference_strings() {
        let value = parse("$ref: '#/components/schemas/User'");

        let yaml = to_string(&value).expect("serialize");

        assert!(yaml.contains("#/components/schemas/User"));
    }

    #[test]
    fn should_fail_on_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");

        let result = load_file(&dir.path().join("absent.yaml"));

        assert!(matches!(result, Err(Error::Read { .. })));
    }

    #[test]
    fn should_fail_on_malformed_yaml() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("broken.yaml");
        fs::write(&path, "key: [unclosed").expect("write fixture");

        let result = load_file(&path);

        assert!(matches!(result, Err(Error::Parse { .. })));
    }
}
