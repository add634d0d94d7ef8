/// Scanner module — lists the image files of a dataset directory.
///
/// The scan is intentionally simple: one synchronous, non-recursive pass
/// over the directory's direct entries, keeping regular files whose
/// extension is on the image allow-list. Aggregation is order-independent,
/// but the result is sorted by path so logs and errors are deterministic.
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Extensions accepted as dataset images. Matching is case-insensitive,
/// so `JPG` and `jpg` are the same dataset file.
const IMAGE_EXTENSIONS: [&str; 3] = ["bmp", "png", "jpg"];

/// A dataset directory could not be read.
#[derive(Debug, Error)]
#[error("failed to read dataset directory `{}`", path.display())]
pub struct ScanError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// List the image files directly inside `dir`.
///
/// Non-recursive. Directories and non-image files are skipped silently;
/// a missing or unreadable `dir` is a fatal [`ScanError`].
pub fn scan_images(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let wrap = |source: io::Error| ScanError {
        path: dir.to_path_buf(),
        source,
    };

    let mut images = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(wrap)? {
        let entry = entry.map_err(wrap)?;
        if !entry.file_type().map_err(wrap)?.is_file() {
            continue;
        }
        let path = entry.path();
        if path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(is_image_extension)
        {
            images.push(path);
        }
    }

    images.sort();
    debug!("Found {} image files in {}", images.len(), dir.display());
    Ok(images)
}

/// Check an extension against the image allow-list, ignoring case.
fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS
        .iter()
        .any(|allowed| ext.eq_ignore_ascii_case(allowed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_list_matches_case_insensitively() {
        for ext in ["bmp", "png", "jpg", "JPG", "Png", "BMP"] {
            assert!(is_image_extension(ext), "expected match for .{ext}");
        }
    }

    #[test]
    fn unrelated_extensions_are_rejected() {
        for ext in ["jpeg", "txt", "gif", "jpg2", ""] {
            assert!(!is_image_extension(ext), "expected no match for .{ext}");
        }
    }
}
