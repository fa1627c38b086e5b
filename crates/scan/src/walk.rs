//! Single-level directory listing.
//!
//! The scanner never recurses on its own: each level of the
//! `<root>/<manual>/<resource type>/<file>` layout is listed explicitly, and
//! every listing is sorted by file name so that scans are reproducible.

use crate::error::{ErrorKind, Result};
use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

/// A classified directory entry. Symlinks are followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum WalkEntry {
    File { name: String, path: PathBuf },
    Directory { name: String, path: PathBuf },
    Skip,
}

/// Lists the entries directly inside `dir`, sorted by file name.
///
/// Failing to list the directory, or to read any entry in it, aborts the
/// whole listing.
pub(crate) fn list(dir: &Path) -> Result<Vec<WalkEntry>> {
    let entries = fs::read_dir(dir).map_err(|e| ErrorKind::from_io(e, dir))?;
    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ErrorKind::from_io(e, dir))?;
        paths.push(entry.path());
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    paths.into_iter().map(classify).collect()
}

/// Lists only the subdirectories directly inside `dir`.
pub(crate) fn directories(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    Ok(list(dir)?
        .into_iter()
        .filter_map(|entry| match entry {
            WalkEntry::Directory { name, path } => Some((name, path)),
            _ => None,
        })
        .collect())
}

fn classify(path: PathBuf) -> Result<WalkEntry> {
    let metadata = match fs::metadata(&path) {
        Ok(metadata) => metadata,
        // Note: silently drop what is most likely a broken symlink.
        Err(err) if err.kind() == IoErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Skipping dangling entry");
            return Ok(WalkEntry::Skip);
        },
        Err(err) => exn::bail!(ErrorKind::from_io(err, &path)),
    };
    let Some(name) = path.file_name().map(|name| name.to_string_lossy().into_owned()) else {
        return Ok(WalkEntry::Skip);
    };
    if metadata.is_dir() {
        return Ok(WalkEntry::Directory { name, path });
    }
    if metadata.is_file() {
        return Ok(WalkEntry::File { name, path });
    }
    // Sockets, FIFOs, devices.
    tracing::debug!(path = %path.display(), "Skipping special file");
    Ok(WalkEntry::Skip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{create_dir_all, write};

    fn names(entries: &[WalkEntry]) -> Vec<&str> {
        entries
            .iter()
            .filter_map(|entry| match entry {
                WalkEntry::File { name, .. } | WalkEntry::Directory { name, .. } => Some(name.as_str()),
                WalkEntry::Skip => None,
            })
            .collect()
    }

    #[test]
    fn test_list_is_sorted_and_classified() {
        let temp_dir = tempfile::tempdir().unwrap();
        create_dir_all(temp_dir.path().join("b_dir")).unwrap();
        write(temp_dir.path().join("c.txt"), b"data").unwrap();
        write(temp_dir.path().join("a.txt"), b"data").unwrap();
        let entries = list(temp_dir.path()).unwrap();
        assert_eq!(names(&entries), vec!["a.txt", "b_dir", "c.txt"]);
        assert!(matches!(&entries[0], WalkEntry::File { path, .. } if path == &temp_dir.path().join("a.txt")));
        assert!(matches!(&entries[1], WalkEntry::Directory { .. }));
    }

    #[test]
    fn test_directories_ignores_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        create_dir_all(temp_dir.path().join("ManualB")).unwrap();
        create_dir_all(temp_dir.path().join("ManualA")).unwrap();
        write(temp_dir.path().join("index.csv"), b"data").unwrap();
        let dirs = directories(temp_dir.path()).unwrap();
        let dir_names: Vec<_> = dirs.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(dir_names, vec!["ManualA", "ManualB"]);
    }

    #[test]
    fn test_list_missing_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("missing");
        let err = list(&missing).unwrap_err();
        assert!(matches!(&*err, ErrorKind::NotFound(path) if path == &missing));
    }

    #[test]
    fn test_list_file_is_not_a_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file = temp_dir.path().join("file.txt");
        write(&file, b"data").unwrap();
        let err = list(&file).unwrap_err();
        assert!(matches!(&*err, ErrorKind::NotADirectory(_) | ErrorKind::Io { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_skipped() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::os::unix::fs::symlink(temp_dir.path().join("nowhere"), temp_dir.path().join("link")).unwrap();
        let entries = list(temp_dir.path()).unwrap();
        assert_eq!(entries, vec![WalkEntry::Skip]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_is_followed() {
        let temp_dir = tempfile::tempdir().unwrap();
        create_dir_all(temp_dir.path().join("real")).unwrap();
        std::os::unix::fs::symlink(temp_dir.path().join("real"), temp_dir.path().join("alias")).unwrap();
        let dirs = directories(temp_dir.path()).unwrap();
        let dir_names: Vec<_> = dirs.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(dir_names, vec!["alias", "real"]);
    }
}
