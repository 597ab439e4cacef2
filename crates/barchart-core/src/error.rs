// File: crates/barchart-core/src/error.rs
// Summary: Error type shared by configuration loading and document mounting.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// The parent selector matched no element in the document.
    #[error("no element matches selector `{selector}`")]
    MissingContainer { selector: String },

    #[error("unsupported selector `{selector}`")]
    InvalidSelector { selector: String },

    /// Malformed or non-numeric configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
