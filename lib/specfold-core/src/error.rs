use std::path::PathBuf;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while folding specification fragments.
///
/// Every variant is fatal: the pipeline either completes fully or aborts
/// before the output file is produced. No retries or partial-success states
/// are modeled.
#[derive(Debug, derive_more::Error, derive_more::Display)]
pub enum Error {
    /// A source file or directory could not be read.
    #[display("failed to read `{}`: {source}", path.display())]
    Read {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The output file or its directory could not be written.
    #[display("failed to write `{}`: {source}", path.display())]
    Write {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A file is not syntactically valid YAML.
    #[display("failed to parse `{}`: {source}", path.display())]
    Parse {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying YAML error.
        source: serde_yaml::Error,
    },

    /// An in-memory document could not be serialized back to YAML.
    #[display("failed to serialize document: {source}")]
    Serialize {
        /// The underlying YAML error.
        source: serde_yaml::Error,
    },

    /// A loaded document lacks a key the pipeline requires.
    ///
    /// This is a precondition violation by the document author (for example a
    /// fragment without `components.schemas`), not something the pipeline
    /// repairs.
    #[display("`{}` is missing required key `{key}`", path.display())]
    MissingKey {
        /// The document that violates the precondition.
        path: PathBuf,
        /// The dotted key path that was expected.
        key: String,
    },

    /// The assembled document lacks one of the six top-level keys selected
    /// for output.
    #[display("document is missing required top-level key `{key}`")]
    MissingOutputKey {
        /// The absent top-level key.
        key: &'static str,
    },

    /// A component reference does not resolve to an existing entry.
    #[display("unknown component reference `{reference}`")]
    UnknownReference {
        /// The canonical reference string that failed to resolve.
        reference: String,
    },
}
