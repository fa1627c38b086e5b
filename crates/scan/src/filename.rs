//! Filename metadata extraction.
//!
//! Documents are expected to be named `<index>_<name>.<ext>`, for example
//! `01_Fall_Prevention.docx`. Filenames that don't follow the convention are
//! still accepted: they fall back to an index of `"0"` and a name derived from
//! the filename itself, so no document is ever dropped for being badly named.

use crate::consts::{self, DEFAULT_INDEX};
use tracing::instrument;

/// Outcome of parsing a document filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedFilename {
    /// The filename followed the `<index>_<name>.<ext>` convention.
    Matched { index: String, name: String, extension: String },
    /// The filename didn't match; name and extension come from splitting at
    /// the last dot.
    Fallback { name: String, extension: String },
}
impl ParsedFilename {
    /// Whether the filename followed the naming convention.
    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }

    /// Normalizes either outcome into `(index, name, extension)`.
    pub fn into_parts(self) -> (String, String, String) {
        match self {
            Self::Matched { index, name, extension } => (index, name, extension),
            Self::Fallback { name, extension } => (DEFAULT_INDEX.to_string(), name, extension),
        }
    }
}

/// Parses a document filename into its index, display name and extension.
///
/// On the matched path underscores in the name are replaced with spaces; on
/// the fallback path the name is kept verbatim. The extension is lowercased
/// and never carries a leading dot in either case.
///
/// ```
/// use polscan_scan::{ParsedFilename, parse_filename};
///
/// assert_eq!(
///     parse_filename("01_Fall_Prevention.docx"),
///     ParsedFilename::Matched {
///         index: "01".into(),
///         name: "Fall Prevention".into(),
///         extension: "docx".into(),
///     }
/// );
/// assert_eq!(
///     parse_filename("readme.TXT"),
///     ParsedFilename::Fallback { name: "readme".into(), extension: "txt".into() }
/// );
/// ```
#[instrument(level = "trace")]
pub fn parse_filename(filename: &str) -> ParsedFilename {
    if let Some(captures) = consts::INDEXED_FILENAME_REGEX.captures(filename)
        && let (Some(index), Some(name), Some(extension)) = (captures.get(1), captures.get(2), captures.get(3))
    {
        return ParsedFilename::Matched {
            index: index.as_str().to_string(),
            name: name.as_str().replace('_', " "),
            extension: extension.as_str().to_lowercase(),
        };
    }
    let (name, extension) = split_extension(filename);
    ParsedFilename::Fallback {
        name: name.to_string(),
        extension: extension.map(str::to_lowercase).unwrap_or_default(),
    }
}

/// Splits a filename at its last dot, returning the stem and the extension
/// (without the dot).
///
/// Leading dots don't start an extension, so `.env` and `..env` have none.
/// This differs from [`Path::extension`](std::path::Path::extension), which
/// treats `..env` as the stem `.` with extension `env`.
fn split_extension(filename: &str) -> (&str, Option<&str>) {
    match filename.rfind('.') {
        Some(dot) if filename[..dot].chars().any(|c| c != '.') => (&filename[..dot], Some(&filename[dot + 1..])),
        _ => (filename, None),
    }
}
