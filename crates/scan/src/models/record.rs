use super::ResourceType;
use std::path::PathBuf;

/// Metadata for a single document discovered during a scan.
///
/// Field order matches the exported column order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentRecord {
    /// Name of the top-level manual folder
    pub policy_manual: String,
    /// Resource-type folder the document was found in
    pub resource_type: ResourceType,
    /// Numeric ordering prefix from the filename, `"0"` when absent
    pub index: String,
    /// Human-readable title derived from the filename
    pub name: String,
    /// File name as it appears on disk
    pub filename: String,
    /// Path to the file, rooted at the scanned directory
    pub file_path: PathBuf,
    /// Lowercase extension without a leading dot (may be empty)
    pub extension: String,
}
impl DocumentRecord {
    /// Column names, in serialization order.
    pub const COLUMNS: [&'static str; 7] =
        ["policy_manual", "resource_type", "index", "name", "filename", "file_path", "extension"];
}
