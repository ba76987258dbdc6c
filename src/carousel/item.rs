// SPDX-License-Identifier: MPL-2.0
//! Carousel content items.

use std::path::{Path, PathBuf};

/// One entry of the carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselItem {
    /// An image file shown in its ring slot and, when focused, in the center.
    Image(PathBuf),
    /// An opaque content card; the center shows its title and description.
    Content { title: String, description: String },
}

impl CarouselItem {
    pub fn image(path: impl Into<PathBuf>) -> Self {
        Self::Image(path.into())
    }

    pub fn content(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::Content {
            title: title.into(),
            description: description.into(),
        }
    }

    #[must_use]
    pub fn image_path(&self) -> Option<&Path> {
        match self {
            Self::Image(path) => Some(path),
            Self::Content { .. } => None,
        }
    }

    /// Short human label: the file name for images, the title for content.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Image(path) => path
                .file_name()
                .and_then(|name| name.to_str())
                .map_or_else(|| path.display().to_string(), String::from),
            Self::Content { title, .. } => title.clone(),
        }
    }
}

impl From<PathBuf> for CarouselItem {
    fn from(path: PathBuf) -> Self {
        Self::Image(path)
    }
}
