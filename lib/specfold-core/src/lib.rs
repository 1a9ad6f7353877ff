//! # Specfold Core
//!
//! Merge OpenAPI YAML fragments into a single consolidated specification.
//!
//! A base document provides `openapi`, `info`, `paths`, `servers`, `tags`
//! and `components`; a source directory provides any number of fragments,
//! each declaring `components.schemas`. The pipeline folds every fragment's
//! schemas into the base document, optionally removes components whose
//! canonical `#/components/<category>/<name>` reference never occurs in the
//! merged output, and writes the result to a destination directory.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use specfold_core::{Options, run};
//!
//! # fn main() -> Result<(), specfold_core::Error> {
//! let options = Options {
//!     base_file: "./base.yaml".into(),
//!     src_dir: "./types".into(),
//!     dst_dir: "./public".into(),
//!     file_name: "openapi.yaml".to_string(),
//!     cleanup: true,
//! };
//!
//! let report = run(&options)?;
//! println!("wrote {}", report.output.display());
//! # Ok(())
//! # }
//! ```
//!
//! The stages are also usable individually ([`collect_schemas`],
//! [`assemble`], [`find_unused`], [`prune_unused`], [`save_openapi`]) for
//! callers that want to interpose their own processing.
//!
//! Documents are untyped [`serde_yaml::Value`] trees; mapping key order is
//! preserved end to end, and the writer never re-sorts keys.

pub mod assemble;
pub mod audit;
pub mod collect;
mod error;
pub mod pipeline;
pub mod prune;
pub mod save;
pub mod yaml;

pub use assemble::assemble;
pub use audit::{UnusedRefs, component_ref, find_unused};
pub use collect::{SchemaRegistry, collect_schemas};
pub use error::{Error, Result};
pub use pipeline::{Options, RunReport, run};
pub use prune::prune_unused;
pub use save::{OUTPUT_KEYS, save_openapi};
