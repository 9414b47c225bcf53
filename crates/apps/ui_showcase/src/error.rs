use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
/// Failures surfaced by the showcase command line.
pub enum ShowcaseError {
    /// The config file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Config file path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid showcase TOML.
    #[error("failed to parse {}: {source}", .path.display())]
    Config {
        /// Config file path.
        path: PathBuf,
        /// TOML decoding failure.
        #[source]
        source: toml::de::Error,
    },
    /// Bad command-line usage.
    #[error("{0}")]
    Usage(String),
    /// State snapshot encoding failed.
    #[error("failed to encode showcase state: {0}")]
    State(#[from] serde_json::Error),
}

impl ShowcaseError {
    pub(crate) fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }
}
