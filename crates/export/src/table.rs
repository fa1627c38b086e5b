use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use polscan_scan::DocumentRecord;
use std::fs::{File, create_dir_all};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Name of the metadata table written by [`export`].
pub const METADATA_FILENAME: &str = "document_metadata.csv";

/// Writes records as CSV, one row per record under a header row.
///
/// The header is written even when `records` is empty, so the output is
/// always a well-formed seven column table.
pub fn write_csv<'a, W: Write>(records: impl IntoIterator<Item = &'a DocumentRecord>, writer: W) -> Result<()> {
    // Headers are written by hand: serde-derived headers only appear once the
    // first row is serialized.
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    writer.write_record(DocumentRecord::COLUMNS).or_raise(|| ErrorKind::Serialize)?;
    for record in records {
        writer.serialize(record).or_raise(|| ErrorKind::Serialize)?;
    }
    writer.flush().or_raise(|| ErrorKind::Serialize)?;
    Ok(())
}

/// Writes the metadata table to `<output_directory>/document_metadata.csv`,
/// creating the directory (and any parents) if needed.
///
/// Returns the path of the written file. An existing file is overwritten.
#[instrument(skip_all, fields(output = %output_directory.as_ref().display()))]
pub fn export(records: &[DocumentRecord], output_directory: impl AsRef<Path>) -> Result<PathBuf> {
    let output_directory = output_directory.as_ref();
    create_dir_all(output_directory).or_raise(|| ErrorKind::CreateDirectory(output_directory.to_path_buf()))?;
    let path = output_directory.join(METADATA_FILENAME);
    tracing::info!(path = %path.display(), "Saving metadata");
    let file = File::create(&path).or_raise(|| ErrorKind::Write(path.clone()))?;
    write_csv(records, file).or_raise(|| ErrorKind::Write(path.clone()))?;
    tracing::info!(count = records.len(), "Saved metadata");
    Ok(path)
}
