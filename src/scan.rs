// -- submodules
mod scan_utils;

pub use scan_utils::{collect_files_from_dir, matches_extension};

// -- external imports
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};

/// An immediate subdirectory of the scan root, treated as a token category
#[derive(Debug, Clone)]
pub struct CategoryDir {
    /// Raw directory name, before any label derivation
    pub name: String,
    /// Full path of the subdirectory
    pub path: PathBuf,
}

/// List the immediate subdirectories of `root` in file-system order.
///
/// Non-directory entries at this level are skipped. Entries that vanish
/// between listing and inspection are skipped with a warning.
///
/// # Errors
///
/// Returns `AppError::InvalidRoot` if `root` does not exist or is not a
/// directory.
pub fn list_category_dirs(root: &Path) -> Result<Vec<CategoryDir>> {
    if !root.is_dir() {
        return Err(AppError::InvalidRoot(root.to_path_buf()));
    }

    let mut dirs = vec![];
    for entry in std::fs::read_dir(root)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under {:?}: {}", root, e);
                continue;
            }
        };
        let path = entry.path();
        if path.is_dir() {
            let name = entry.file_name().to_string_lossy().into_owned();
            dirs.push(CategoryDir { name, path });
        }
    }
    Ok(dirs)
}

// -- tests
