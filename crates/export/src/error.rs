//! Export Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// An export error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for export operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The output directory could not be created.
    #[display("could not create output directory: {}", _0.display())]
    CreateDirectory(#[error(not(source))] PathBuf),
    /// The output file could not be created or written to.
    #[display("could not write output file: {}", _0.display())]
    Write(#[error(not(source))] PathBuf),
    /// A record could not be serialized (for example, a non-UTF-8 path).
    #[display("could not serialize document record")]
    Serialize,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::CreateDirectory(_) | Self::Write(_))
    }
}
