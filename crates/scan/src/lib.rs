//! Policy manual scanning.
//!
//! Walks a `<root>/<manual>/<resource type>/<file>` directory tree and turns
//! every document into a [`DocumentRecord`], extracting an ordering index and
//! a display name from the filename. See [`scan`] for the layout contract and
//! [`parse_filename`] for the naming convention.

mod consts;
pub mod error;
mod filename;
pub mod models;
mod scan;
mod walk;

pub use crate::filename::{ParsedFilename, parse_filename};
pub use crate::models::{DocumentRecord, ResourceType};
pub use crate::scan::{scan, scan_manual};
