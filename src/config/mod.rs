// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! The file is sectioned and every key is optional:
//!
//! ```toml
//! [general]
//! theme_mode = "dark"
//!
//! [carousel]
//! ring_radius = 300.0
//! auto_rotate_interval_secs = 4.0
//! border_color = "#3366CC"
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use iced_carousel::carousel::CarouselOptions;
//! use iced_carousel::config::{self, Config};
//!
//! let (config, warning) = config::load().unwrap_or_default();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//!
//! let options = config.carousel.apply_to(CarouselOptions::default());
//! assert!(options.ring_radius > 0.0);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::carousel::CarouselOptions;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedCarousel";

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_ENV: &str = "ICED_CAROUSEL_CONFIG_DIR";

/// `[general]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub theme_mode: ThemeMode,
}

/// `[carousel]` section. Unset keys keep the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_angle: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ring_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub central_item_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peripheral_item_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_rotate_interval_secs: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_duration_secs: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation_button_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation_button_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation_button_bg_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation_text_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub central_item_shadow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peripheral_item_shadow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focused_item_highlight: Option<String>,
}

impl CarouselSettings {
    /// Overlays the values present in the file on `options`.
    ///
    /// Values are copied as-is; validation happens in
    /// [`CarouselOptions::build`].
    #[must_use]
    pub fn apply_to(&self, mut options: CarouselOptions) -> CarouselOptions {
        fn set<T: Clone>(target: &mut T, value: Option<&T>) {
            if let Some(value) = value {
                *target = value.clone();
            }
        }

        set(&mut options.offset_angle, self.offset_angle.as_ref());
        set(&mut options.ring_radius, self.ring_radius.as_ref());
        set(
            &mut options.central_item_radius,
            self.central_item_radius.as_ref(),
        );
        set(
            &mut options.peripheral_item_radius,
            self.peripheral_item_radius.as_ref(),
        );
        set(
            &mut options.auto_rotate_interval_secs,
            self.auto_rotate_interval_secs.as_ref(),
        );
        set(
            &mut options.transition_duration_secs,
            self.transition_duration_secs.as_ref(),
        );
        set(&mut options.border_enabled, self.border_enabled.as_ref());
        set(&mut options.border_width, self.border_width.as_ref());
        set(&mut options.border_color, self.border_color.as_ref());
        set(
            &mut options.navigation_button_radius,
            self.navigation_button_radius.as_ref(),
        );
        set(
            &mut options.navigation_button_color,
            self.navigation_button_color.as_ref(),
        );
        set(
            &mut options.navigation_button_bg_color,
            self.navigation_button_bg_color.as_ref(),
        );
        set(
            &mut options.navigation_text_size,
            self.navigation_text_size.as_ref(),
        );
        set(
            &mut options.central_item_shadow,
            self.central_item_shadow.as_ref(),
        );
        set(
            &mut options.peripheral_item_shadow,
            self.peripheral_item_shadow.as_ref(),
        );
        if self.focused_item_highlight.is_some() {
            options
                .focused_item_highlight
                .clone_from(&self.focused_item_highlight);
        }

        options
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub carousel: CarouselSettings,
}

/// Resolves the settings file location.
///
/// Precedence: explicit directory, then [`CONFIG_DIR_ENV`], then the
/// platform configuration directory.
#[must_use]
pub fn config_path(override_dir: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = override_dir {
        return Some(dir.join(CONFIG_FILE));
    }
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the settings from the default location.
///
/// Returns the configuration and, when the file exists but is not valid
/// TOML, a warning describing why defaults were used instead.
pub fn load() -> Result<(Config, Option<String>)> {
    load_with_override(None)
}

/// Like [`load`], reading from `override_dir` when given.
pub fn load_with_override(override_dir: Option<&Path>) -> Result<(Config, Option<String>)> {
    match config_path(override_dir) {
        Some(path) if path.exists() => load_from_path(&path),
        _ => Ok((Config::default(), None)),
    }
}

pub fn load_from_path(path: &Path) -> Result<(Config, Option<String>)> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok((config, None)),
        Err(err) => Ok((
            Config::default(),
            Some(format!(
                "ignoring invalid settings file {}: {}",
                path.display(),
                err.message()
            )),
        )),
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
