//! Scanner Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use std::io::{Error as IoError, ErrorKind as IoErrorKind};
use std::path::{Path, PathBuf};

/// A scanner error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for scanner operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// Apart from [`UnrecognizedResourceType`](Self::UnrecognizedResourceType),
/// every variant is a filesystem failure. A filename that doesn't follow the
/// `<index>_<name>.<ext>` convention is never an error.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// Directory or file does not exist
    #[display("not found: {}", _0.display())]
    NotFound(#[error(not(source))] PathBuf),
    /// Access denied while listing or inspecting an entry
    #[display("permission denied: {}", _0.display())]
    PermissionDenied(#[error(not(source))] PathBuf),
    /// Expected a directory to list, found something else
    #[display("not a directory: {}", _0.display())]
    NotADirectory(#[error(not(source))] PathBuf),
    /// Any other I/O failure
    #[display("I/O error at {}: {source}", path.display())]
    Io {
        #[error(not(source))]
        path: PathBuf,
        source: IoError,
    },
    /// Folder label is not one of the recognized resource types
    #[display("unrecognized resource type: {_0}")]
    UnrecognizedResourceType(#[error(not(source))] String),
}
impl ErrorKind {
    pub(crate) fn from_io(err: IoError, path: &Path) -> Self {
        match err.kind() {
            IoErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            IoErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            IoErrorKind::NotADirectory => Self::NotADirectory(path.to_path_buf()),
            _ => Self::Io { path: path.to_path_buf(), source: err },
        }
    }

    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}
