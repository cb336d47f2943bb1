use std::path::{Path, PathBuf};

use crate::error::Result;

/// Case-insensitive extension match against an allow-list.
pub fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension().is_some_and(|ext| {
        let ext = ext.to_string_lossy();
        extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(&ext))
    })
}

/// Collect the immediate regular files of `dir` in file-system order.
///
/// Non-file entries (including nested directories) are skipped, as are
/// entries that can no longer be read.
pub fn collect_files_from_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = vec![];
    for entry in std::fs::read_dir(dir)? {
        if let Ok(entry) = entry {
            let path = entry.path();
            if path.is_file() {
                files.push(path);
            }
        }
    }
    Ok(files)
}
