//! Error types for the HTML comment analyzer
//!
//! Every failure the pipeline can hit is one of these. They are logged where
//! they occur and turned into "no content" or "no report written" outcomes.

use std::io;
use std::path::PathBuf;

/// Errors raised while acquiring markup or writing the report
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// Network failure or a non-success HTTP status
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// Local input path does not exist
    #[error("file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// Any other I/O failure while reading a local file
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O failure while writing the report
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AnalysisError {
    /// Build a fetch error from any displayable cause
    pub fn fetch(url: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        AnalysisError::Fetch {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}
