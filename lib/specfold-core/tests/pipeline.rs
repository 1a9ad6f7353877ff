//! End-to-end pipeline tests over real temp directories.

use std::fs;
use std::path::Path;

use serde_yaml::Value;
use specfold_core::{Options, run};

const BASE: &str = r"
openapi: 3.0.3
info:
  title: Demo API
  version: 1.0.0
paths:
  /widgets:
    get:
      responses:
        '200':
          content:
            application/json:
              schema:
                $ref: '#/components/schemas/Widget'
servers:
  - url: https://api.example.com
tags:
  - name: widgets
components:
  requests: {}
  responses: {}
  parameters: {}
  schemas: {}
";

const FRAGMENT: &str = r"
components:
  schemas:
    Widget:
      type: object
      properties:
        id:
          type: integer
    Gadget:
      type: object
";

fn setup(dir: &Path, cleanup: bool) -> Options {
    fs::write(dir.join("base.yaml"), BASE).expect("base fixture");
    let src_dir = dir.join("types");
    fs::create_dir_all(&src_dir).expect("src dir");
    fs::write(src_dir.join("widgets.yaml"), FRAGMENT).expect("fragment fixture");

    Options {
        base_file: dir.join("base.yaml"),
        src_dir,
        dst_dir: dir.join("public"),
        file_name: "openapi.yaml".to_string(),
        cleanup,
    }
}

fn schema_names(document: &Value) -> Vec<String> {
    document
        .get("components")
        .and_then(|components| components.get("schemas"))
        .and_then(Value::as_mapping)
        .expect("schemas mapping")
        .keys()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}

#[test]
fn should_merge_all_schemas_without_cleanup() {
    let dir = tempfile::tempdir().expect("temp dir");
    let options = setup(dir.path(), false);

    let report = run(&options).expect("pipeline");

    assert_eq!(report.schema_count, 2);
    assert!(report.unused.is_empty());
    assert!(!report.cleaned);

    let text = fs::read_to_string(&report.output).expect("output readable");
    let saved: Value = serde_yaml::from_str(&text).expect("output parses");
    assert_eq!(schema_names(&saved), vec!["Widget", "Gadget"]);
}

#[test]
fn should_prune_unreferenced_schema_with_cleanup() {
    let dir = tempfile::tempdir().expect("temp dir");
    let options = setup(dir.path(), true);

    let report = run(&options).expect("pipeline");

    assert!(report.cleaned);
    assert_eq!(report.unused, vec!["#/components/schemas/Gadget"]);

    let text = fs::read_to_string(&report.output).expect("output readable");
    let saved: Value = serde_yaml::from_str(&text).expect("output parses");
    assert_eq!(schema_names(&saved), vec!["Widget"]);
}

#[test]
fn should_expose_exactly_the_six_output_keys() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut options = setup(dir.path(), false);

    // Smuggle an extra top-level key into the base document; it must not
    // survive the save.
    let base = format!("{BASE}x-internal-notes: scratch\n");
    fs::write(&options.base_file, base).expect("base fixture");
    options.cleanup = true;

    let report = run(&options).expect("pipeline");

    let text = fs::read_to_string(&report.output).expect("output readable");
    let saved: Value = serde_yaml::from_str(&text).expect("output parses");
    let keys: Vec<_> = saved
        .as_mapping()
        .expect("mapping")
        .keys()
        .filter_map(Value::as_str)
        .collect();
    assert_eq!(
        keys,
        vec!["openapi", "info", "paths", "servers", "tags", "components"]
    );
}

#[test]
fn should_fail_without_touching_output_when_a_fragment_is_malformed() {
    let dir = tempfile::tempdir().expect("temp dir");
    let options = setup(dir.path(), false);
    fs::write(options.src_dir.join("broken.yaml"), "components: [oops").expect("fixture");

    let result = run(&options);

    assert!(result.is_err());
    assert!(!options.dst_dir.exists(), "no output on upstream failure");
}
