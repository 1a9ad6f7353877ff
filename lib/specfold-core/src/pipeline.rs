//! The one-shot merge pipeline: collect, assemble, optionally audit and
//! prune, then save.

use std::path::PathBuf;

use tracing::info;

use crate::{Result, assemble, audit, collect, prune, save};

/// Configuration for a single pipeline run.
#[derive(Debug, Clone)]
pub struct Options {
    /// Base document carrying `openapi`, `info`, `paths`, `servers`, `tags`
    /// and `components`.
    pub base_file: PathBuf,
    /// Directory of schema fragments to merge.
    pub src_dir: PathBuf,
    /// Destination directory for the merged document.
    pub dst_dir: PathBuf,
    /// File name of the merged document inside `dst_dir`.
    pub file_name: String,
    /// Whether to audit and remove unused components before saving.
    pub cleanup: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_file: PathBuf::from("./base.yaml"),
            src_dir: PathBuf::from("./AnixartJS-typeconv"),
            dst_dir: PathBuf::from("./public"),
            file_name: "openapi.yaml".to_string(),
            cleanup: false,
        }
    }
}

/// Outcome of a completed pipeline run.
#[derive(Debug)]
pub struct RunReport {
    /// Path of the written document.
    pub output: PathBuf,
    /// Number of schemas collected from the source directory.
    pub schema_count: usize,
    /// Canonical references found unused (empty unless cleanup ran).
    pub unused: Vec<String>,
    /// Whether the audit and prune stages ran.
    pub cleaned: bool,
}

/// Runs the whole pipeline once.
///
/// Stages run in order: collect, assemble, audit + prune when
/// [`Options::cleanup`] is set, save. The save is the last step, so a
/// failure in any earlier stage never leaves a partially written output.
///
/// # Errors
///
/// Propagates the first error of any stage; see [`Error`](crate::Error).
pub fn run(options: &Options) -> Result<RunReport> {
    let registry = collect::collect_schemas(&options.src_dir)?;
    let schema_count = registry.len();
    let mut document = assemble::assemble(&options.base_file, registry)?;

    let mut unused = Vec::new();
    if options.cleanup {
        let unused_refs = audit::find_unused(&document)?;
        prune::prune_unused(&mut document, &unused_refs)?;
        unused = unused_refs.into_keys().collect();
    }

    let output = save::save_openapi(&document, &options.dst_dir, &options.file_name)?;
    info!(
        output = %output.display(),
        schema_count,
        removed = unused.len(),
        "pipeline run complete"
    );

    Ok(RunReport {
        output,
        schema_count,
        unused,
        cleaned: options.cleanup,
    })
}
