//! Error types for loading and strict parsing.

use std::path::PathBuf;

use crate::parser::Diagnostic;

/// Result type alias for operations that can fail.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur outside the tolerant parse path.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error.
    #[error("Failed to read stylesheet '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Strict parsing found malformed input.
    #[error("Malformed CSS ({count} problem(s)), first at {first}")]
    Malformed { count: usize, first: Diagnostic },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a malformed-input error from the diagnostics of a parse.
    ///
    /// Returns `None` when there is nothing to report.
    pub fn malformed(diagnostics: &[Diagnostic]) -> Option<Self> {
        let first = diagnostics.first()?.clone();
        Some(Self::Malformed {
            count: diagnostics.len(),
            first,
        })
    }
}
