//! Application Error Types
//!
//! Wraps each workspace crate's error tree under the stage that failed.

use derive_more::{Display, Error};

/// An application error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for the application.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    #[display("could not load configuration")]
    Config,
    #[display("could not scan policy documents")]
    Scan,
    #[display("could not export document metadata")]
    Export,
}
