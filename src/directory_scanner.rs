// SPDX-License-Identifier: MPL-2.0
//! Builds grid tiles from a directory of images.

use crate::error::{Error, Result};
use crate::ui::image_grid::ImageTile;
use std::path::{Path, PathBuf};

/// Image file extensions the renderer can decode.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico"];

/// Scans `directory` for images, sorted alphabetically by file name.
///
/// Returns an error if `directory` is not a readable directory.
pub fn scan_directory(directory: &Path) -> Result<Vec<ImageTile>> {
    if !directory.is_dir() {
        return Err(Error::Io(format!(
            "{} is not a directory",
            directory.display()
        )));
    }

    let mut images: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(directory)? {
        let path = entry?.path();
        if path.is_file() && is_supported_image(&path) {
            images.push(path);
        }
    }
    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    tracing::debug!(directory = %directory.display(), count = images.len(), "scanned image directory");
    Ok(images.iter().map(|path| ImageTile::from_path(path)).collect())
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}
