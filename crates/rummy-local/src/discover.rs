//! Recursive JPEG discovery.

use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

const EXTENSIONS: [&str; 2] = ["jpg", "jpeg"];

/// Returns true if the path has a `jpg` or `jpeg` extension in any letter case.
#[must_use]
pub fn is_jpeg(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}

/// Lists every JPEG file below `root`, sorted by path.
///
/// Entries that cannot be read are skipped with a warning.
///
/// # Errors
///
/// Returns an error if `root` is not a readable directory.
pub fn find_images(root: &Path) -> std::io::Result<Vec<PathBuf>> {
    if !std::fs::metadata(root)?.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotADirectory,
            format!("{} is not a directory", root.display()),
        ));
    }

    let mut images = Vec::new();
    for entry in WalkDir::new(root) {
        match entry {
            Ok(entry) if entry.file_type().is_file() && is_jpeg(entry.path()) => {
                images.push(entry.into_path());
            }
            Ok(_) => {}
            Err(e) => warn!(root = %root.display(), error = %e, "skipping unreadable entry"),
        }
    }

    images.sort();
    Ok(images)
}
