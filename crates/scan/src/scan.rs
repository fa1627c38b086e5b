use crate::error::Result;
use crate::filename::parse_filename;
use crate::models::{DocumentRecord, ResourceType};
use crate::walk::{self, WalkEntry};
use std::path::Path;
use tracing::instrument;

/// Scans a root directory of policy manuals, returning one [`DocumentRecord`]
/// per document found.
///
/// Expected layout:
///
/// ```text
/// root/
///     <manual>/
///         Policy/      01_Policy_Name.docx
///         Procedures/  01_Procedure_Name.pptx
///         Tools/       01_Tool_Name.pdf
///         Education/   01_Education_Resource.pptx
/// ```
///
/// - Every subdirectory of `root` is a candidate manual; files are ignored.
/// - Manuals without any recognized [`ResourceType`] folder contribute nothing.
/// - Only regular files directly inside a resource-type folder become records;
///   nested directories are not traversed.
///
/// Records are ordered by manual, then resource-type folder, then filename.
///
/// # Errors
///
/// Any directory that can't be listed aborts the entire scan; there are no
/// partial results.
#[instrument(skip_all, fields(root = %root.as_ref().display()))]
pub fn scan(root: impl AsRef<Path>) -> Result<Vec<DocumentRecord>> {
    let root = root.as_ref();
    tracing::info!("Processing documents");
    let manuals = walk::directories(root)?;
    tracing::info!(count = manuals.len(), "Found potential policy manuals");
    let mut documents = Vec::new();
    for (manual, manual_path) in &manuals {
        documents.extend(scan_listed_manual(manual, manual_path)?);
    }
    tracing::info!(count = documents.len(), "Scan complete");
    Ok(documents)
}

/// Scans a single manual folder.
///
/// The folder's own name becomes [`DocumentRecord::policy_manual`]. Returns an
/// empty list, rather than an error, when the manual contains no recognized
/// resource-type folders.
pub fn scan_manual(manual_directory: impl AsRef<Path>) -> Result<Vec<DocumentRecord>> {
    let manual_directory = manual_directory.as_ref();
    let manual = match manual_directory.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => manual_directory.to_string_lossy().into_owned(),
    };
    scan_listed_manual(&manual, manual_directory)
}

// `manual` is only a label: names that aren't valid UTF-8 are lossy, so the
// directory is always addressed through the path it was listed under.
#[instrument(skip_all, fields(manual = %manual))]
fn scan_listed_manual(manual: &str, manual_path: &Path) -> Result<Vec<DocumentRecord>> {
    let resource_types: Vec<_> = walk::directories(manual_path)?
        .into_iter()
        .filter_map(|(name, path)| name.parse::<ResourceType>().ok().map(|kind| (kind, path)))
        .collect();
    if resource_types.is_empty() {
        tracing::info!("Skipping manual, no valid resource type folders found");
        return Ok(Vec::new());
    }
    tracing::info!(
        resource_types = ?resource_types.iter().map(|(kind, _)| kind.as_str()).collect::<Vec<_>>(),
        "Processing manual"
    );
    let mut documents = Vec::new();
    for (resource_type, type_path) in resource_types {
        for entry in walk::list(&type_path)? {
            let WalkEntry::File { name: filename, path: file_path } = entry else {
                continue;
            };
            let (index, name, extension) = parse_filename(&filename).into_parts();
            tracing::info!("Added: {manual}/{resource_type}/{filename}");
            documents.push(DocumentRecord {
                policy_manual: manual.to_string(),
                resource_type,
                index,
                name,
                filename,
                file_path,
                extension,
            });
        }
    }
    Ok(documents)
}
