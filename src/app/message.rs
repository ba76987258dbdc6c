// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::carousel;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Carousel(carousel::Message),
    /// Escape pressed or window close requested.
    CloseRequested,
}

/// Runtime flags passed from the command line into the application.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional directory holding `settings.toml`.
    pub config_dir: Option<PathBuf>,
    /// Directory to scan for images when no image is given explicitly.
    pub directory: Option<PathBuf>,
    /// Auto-rotation interval in seconds, overriding the settings file.
    pub auto_rotate_secs: Option<f32>,
    /// Images to show, in order.
    pub images: Vec<PathBuf>,
}
