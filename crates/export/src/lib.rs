//! Reporting and persistence for scanned document metadata.
//!
//! - [`Summary`] counts documents per manual and per resource type.
//! - [`write_csv`] and [`export`] serialize [`DocumentRecord`]s as a CSV
//!   table with a fixed seven column header.
//!
//! [`DocumentRecord`]: polscan_scan::DocumentRecord

pub mod error;
mod summary;
mod table;

pub use crate::summary::Summary;
pub use crate::table::{METADATA_FILENAME, export, write_csv};
