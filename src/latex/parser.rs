use log::{debug, info};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::BibFilterError;

/// Find all non-hidden aux files directly inside a directory, sorted by path
pub fn find_aux_files(dir: &Path) -> Result<Vec<PathBuf>, BibFilterError> {
    if !dir.is_dir() {
        return Err(BibFilterError::file_access(
            dir,
            std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
        ));
    }

    let mut aux_files: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| {
            entry.path().is_file() &&
            !entry.file_name().to_string_lossy().starts_with('.') &&
            entry.path().extension().map_or(false, |ext| ext == "aux")
        })
        .map(|entry| entry.path().to_path_buf())
        .collect();
    aux_files.sort();

    debug!("Found {} aux files in {:?}", aux_files.len(), dir);
    Ok(aux_files)
}

/// Pick the aux file to read: the explicit one if given, otherwise the first
/// aux file in `dir`.
pub fn resolve_aux_file(explicit: Option<&Path>, dir: &Path) -> Result<PathBuf, BibFilterError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    match find_aux_files(dir)?.into_iter().next() {
        Some(path) => {
            info!("Using aux file {:?}", path);
            Ok(path)
        }
        None => Err(BibFilterError::NoAuxFile {
            dir: dir.to_path_buf(),
        }),
    }
}
