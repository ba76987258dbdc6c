// SPDX-License-Identifier: MPL-2.0
//! Window/application icon.
//!
//! The icon is the carousel's own dashed ring, rasterized at runtime from the
//! border SVG. Falls back to `None` if rendering fails.

use crate::carousel::{BorderDecoration, HexColor};
use crate::config::{DEFAULT_BORDER_COLOR, DEFAULT_BORDER_WIDTH};
use iced::window::{icon, Icon};

const ICON_SIZE: u32 = 128;

/// Ring decoration used for the icon, with a stroke thick enough to read at
/// title-bar sizes.
fn icon_decoration(color: HexColor) -> BorderDecoration {
    BorderDecoration {
        ring_radius: 64.0,
        width: DEFAULT_BORDER_WIDTH * 2.0,
        color,
    }
}

/// Rasterize the ring to a 128x128 RGBA icon in `color`, or the default
/// border color when `None`.
pub fn load_window_icon(color: Option<HexColor>) -> Option<Icon> {
    let color = match color {
        Some(color) => color,
        None => HexColor::parse(DEFAULT_BORDER_COLOR).ok()?,
    };

    match icon_decoration(color).rasterize(ICON_SIZE) {
        Ok(data) => icon::from_rgba(data, ICON_SIZE, ICON_SIZE).ok(),
        Err(err) => {
            tracing::warn!(%err, "window icon unavailable");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_icon_is_built() {
        assert!(load_window_icon(None).is_some());
    }

    #[test]
    fn icon_ring_fills_the_icon() {
        let decoration = icon_decoration(HexColor::rgb(0, 0, 0));
        assert_eq!(decoration.size(), ICON_SIZE as f32);
    }
}
