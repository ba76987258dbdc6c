// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for finding carousel images.
//!
//! Scans a directory for supported image formats, filters them, and sorts
//! them alphabetically (case-insensitive) so the ring order is stable.

use crate::carousel::CarouselItem;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Extensions the Iced image widget can decode.
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] =
    &["png", "jpg", "jpeg", "gif", "bmp", "webp", "ico", "tiff", "tif"];

/// Returns true when `path` has a supported image extension.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_IMAGE_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

/// Sorts paths by file name, ignoring case. Ties keep the full path order.
pub fn sort_alphabetically(paths: &mut [PathBuf]) {
    paths.sort_by(|a, b| {
        let key = |path: &Path| {
            path.file_name()
                .map(|name| name.to_string_lossy().to_lowercase())
                .unwrap_or_default()
        };
        key(a).cmp(&key(b)).then_with(|| a.cmp(b))
    });
}

/// Lists the supported images directly inside `directory`, sorted.
///
/// Returns an error if the directory cannot be read.
pub fn scan_images(directory: &Path) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && is_supported_image(&path) {
            images.push(path);
        }
    }

    sort_alphabetically(&mut images);
    tracing::debug!(
        directory = %directory.display(),
        count = images.len(),
        "scanned image directory"
    );
    Ok(images)
}

/// Scans `directory` and wraps every image as a carousel item.
pub fn scan_items(directory: &Path) -> Result<Vec<CarouselItem>> {
    Ok(scan_images(directory)?
        .into_iter()
        .map(CarouselItem::Image)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"").expect("failed to create file");
        path
    }

    #[test]
    fn supported_extensions_are_case_insensitive() {
        assert!(is_supported_image(Path::new("a.PNG")));
        assert!(is_supported_image(Path::new("b.jpeg")));
        assert!(is_supported_image(Path::new("c.WebP")));
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }

    #[test]
    fn scan_filters_and_sorts_images() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let dir = temp_dir.path();
        let b = touch(dir, "b.jpg");
        let a = touch(dir, "A.png");
        let c = touch(dir, "c.gif");
        touch(dir, "readme.md");
        fs::create_dir(dir.join("nested.png")).expect("failed to create dir");

        let images = scan_images(dir).expect("scan should succeed");
        assert_eq!(images, vec![a, b, c]);
    }

    #[test]
    fn scan_items_wraps_paths() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = touch(temp_dir.path(), "only.png");

        let items = scan_items(temp_dir.path()).expect("scan should succeed");
        assert_eq!(items, vec![CarouselItem::Image(path)]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        assert!(scan_images(&temp_dir.path().join("missing")).is_err());
    }
}
