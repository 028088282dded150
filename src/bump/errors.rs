use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a version bump
///
/// Every variant ends the run. Files rewritten before the failure keep their
/// new contents.
#[derive(Debug, Error)]
pub enum BumpError {
    #[error("Could not determine current version from {}", path.display())]
    MissingVersion { path: PathBuf },

    #[error("Input cannot be empty.")]
    EmptyInput,

    #[error("Expected a JSON object at the top of {}", path.display())]
    NotAnObject { path: PathBuf },

    #[error("No version field found in {}", path.display())]
    NoVersionLine { path: PathBuf },

    #[error("Could not find releaseBody in {}", path.display())]
    MissingReleaseBody { path: PathBuf },

    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read operator input: {0}")]
    Prompt(#[source] std::io::Error),
}

impl BumpError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BumpError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        BumpError::Json {
            path: path.into(),
            source,
        }
    }
}
