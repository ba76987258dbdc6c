// SPDX-License-Identifier: MPL-2.0
//! Carousel configuration.
//!
//! [`CarouselOptions`] is the caller-facing option set with documented
//! defaults (see [`crate::config::defaults`]). It is validated exactly once by
//! [`CarouselOptions::build`], which yields an immutable
//! [`CarouselConfiguration`] holding typed, known-good values.
//!
//! # Example
//!
//! ```
//! use iced_carousel::carousel::{CarouselItem, CarouselOptions};
//!
//! let config = CarouselOptions {
//!     ring_radius: 300.0,
//!     auto_rotate_interval_secs: 4.0,
//!     ..CarouselOptions::default()
//! }
//! .build(vec![
//!     CarouselItem::image("a.png"),
//!     CarouselItem::image("b.png"),
//! ])
//! .unwrap();
//!
//! assert_eq!(config.item_count().get(), 2);
//! assert!(config.auto_rotate_interval().is_some());
//! ```

use super::color::HexColor;
use super::item::CarouselItem;
use super::layout::{ItemCount, RingGeometry, RingLayout};
use crate::config::defaults::*;
use crate::error::ConfigurationError;
use std::time::Duration;

// =============================================================================
// Styles
// =============================================================================

/// Drop shadow of an item, written CSS-style as `5px 10px 18px #888888`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowStyle {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur_radius: f32,
    pub color: HexColor,
}

impl ShadowStyle {
    /// Parses `<x>px <y>px <blur>px <color>`; the `px` suffix is optional.
    pub fn parse(value: &str) -> Result<Self, ConfigurationError> {
        Self::parse_field("shadow", value)
    }

    /// Like [`ShadowStyle::parse`], reporting failures against `field`.
    pub fn parse_field(field: &'static str, value: &str) -> Result<Self, ConfigurationError> {
        let invalid = || ConfigurationError::InvalidShadow {
            field,
            value: value.to_string(),
        };
        let parts: Vec<&str> = value.split_whitespace().collect();
        let [x, y, blur, color] = parts.as_slice() else {
            return Err(invalid());
        };

        let length = |part: &str| -> Result<f32, ConfigurationError> {
            part.trim_end_matches("px")
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(invalid)
        };

        let blur_radius = length(*blur)?;
        if blur_radius < 0.0 {
            return Err(invalid());
        }

        Ok(Self {
            offset_x: length(*x)?,
            offset_y: length(*y)?,
            blur_radius,
            color: HexColor::parse(color).map_err(|_| invalid())?,
        })
    }

    /// Formats back to the CSS-style string accepted by [`Self::parse`].
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "{}px {}px {}px {}",
            self.offset_x, self.offset_y, self.blur_radius, self.color
        )
    }
}

impl Default for ShadowStyle {
    fn default() -> Self {
        Self {
            offset_x: DEFAULT_SHADOW_OFFSET_X,
            offset_y: DEFAULT_SHADOW_OFFSET_Y,
            blur_radius: DEFAULT_SHADOW_BLUR,
            color: HexColor::rgb(0x88, 0x88, 0x88),
        }
    }
}

impl From<ShadowStyle> for iced::Shadow {
    fn from(shadow: ShadowStyle) -> Self {
        iced::Shadow {
            color: shadow.color.into(),
            offset: iced::Vector::new(shadow.offset_x, shadow.offset_y),
            blur_radius: shadow.blur_radius,
        }
    }
}

/// Decorative dashed ring drawn around the carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderStyle {
    pub enabled: bool,
    pub width: f32,
    pub color: HexColor,
}

/// Styling of the retreat/advance buttons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationStyle {
    pub button_radius: f32,
    pub color: HexColor,
    pub background: HexColor,
    /// Glyph size in rem.
    pub text_size_rem: f32,
}

impl NavigationStyle {
    /// Glyph size in pixels.
    #[must_use]
    pub fn text_size_px(&self) -> f32 {
        self.text_size_rem * PIXELS_PER_REM
    }

    /// Side of the square button box.
    #[must_use]
    pub fn button_diameter(&self) -> f32 {
        self.button_radius * 2.0
    }
}

// =============================================================================
// CarouselOptions
// =============================================================================

/// Raw carousel options, every field defaulted.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselOptions {
    /// Rotation of the initial layout, in degrees.
    pub offset_angle: f32,
    /// Radius of the ring, in pixels. The widget is `2 × ring_radius` wide.
    pub ring_radius: f32,
    /// Radius of the central focus slot, in pixels.
    pub central_item_radius: f32,
    /// Radius of each orbiting item, in pixels.
    pub peripheral_item_radius: f32,
    /// Auto-advance period in seconds; 0 disables auto-rotation.
    pub auto_rotate_interval_secs: f32,
    /// Rotation animation length in seconds; 0 snaps instantly.
    pub transition_duration_secs: f32,
    pub border_enabled: bool,
    pub border_width: f32,
    /// Hex color of the decorative ring.
    pub border_color: String,
    pub navigation_button_radius: f32,
    /// Hex color of the navigation glyphs.
    pub navigation_button_color: String,
    /// Hex color of the navigation button background.
    pub navigation_button_bg_color: String,
    /// Navigation glyph size in rem.
    pub navigation_text_size: f32,
    /// CSS-style shadow of the central slot.
    pub central_item_shadow: String,
    /// CSS-style shadow of each orbiting item.
    pub peripheral_item_shadow: String,
    /// Optional hex color of a border around the focused orbiting item.
    pub focused_item_highlight: Option<String>,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        let shadow = ShadowStyle::default().to_css();
        Self {
            offset_angle: DEFAULT_OFFSET_ANGLE_DEG,
            ring_radius: DEFAULT_RING_RADIUS,
            central_item_radius: DEFAULT_CENTRAL_ITEM_RADIUS,
            peripheral_item_radius: DEFAULT_PERIPHERAL_ITEM_RADIUS,
            auto_rotate_interval_secs: DEFAULT_AUTO_ROTATE_INTERVAL_SECS,
            transition_duration_secs: DEFAULT_TRANSITION_DURATION_SECS,
            border_enabled: DEFAULT_BORDER_ENABLED,
            border_width: DEFAULT_BORDER_WIDTH,
            border_color: DEFAULT_BORDER_COLOR.to_string(),
            navigation_button_radius: DEFAULT_NAVIGATION_BUTTON_RADIUS,
            navigation_button_color: DEFAULT_NAVIGATION_BUTTON_COLOR.to_string(),
            navigation_button_bg_color: DEFAULT_NAVIGATION_BUTTON_BG_COLOR.to_string(),
            navigation_text_size: DEFAULT_NAVIGATION_TEXT_SIZE_REM,
            central_item_shadow: shadow.clone(),
            peripheral_item_shadow: shadow,
            focused_item_highlight: None,
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<f32, ConfigurationError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigurationError::InvalidRadius { field, value })
    }
}

/// Rejects radii whose combined widget extent (ring, items, navigation
/// gutters) overflows `f32`, blaming the largest one.
fn bounded_extent(radii: &[(&'static str, f32)]) -> Result<(), ConfigurationError> {
    let extent: f32 = radii.iter().map(|(_, radius)| radius * 8.0).sum();
    if extent.is_finite() {
        return Ok(());
    }
    match radii.iter().copied().max_by(|a, b| a.1.total_cmp(&b.1)) {
        Some((field, value)) => Err(ConfigurationError::InvalidRadius { field, value }),
        None => Ok(()),
    }
}

fn duration(field: &'static str, value: f32) -> Result<Duration, ConfigurationError> {
    if value < 0.0 {
        return Err(ConfigurationError::InvalidDuration { field, value });
    }
    Duration::try_from_secs_f32(value)
        .map_err(|_| ConfigurationError::InvalidDuration { field, value })
}

impl CarouselOptions {
    /// Validates the options against `items` and freezes them.
    pub fn build(
        self,
        items: Vec<CarouselItem>,
    ) -> Result<CarouselConfiguration, ConfigurationError> {
        let count = ItemCount::try_from(items.len())?;

        let ring_radius = positive("ring_radius", self.ring_radius)?;
        let central_item_radius = positive("central_item_radius", self.central_item_radius)?;
        let peripheral_item_radius =
            positive("peripheral_item_radius", self.peripheral_item_radius)?;
        let button_radius = positive("navigation_button_radius", self.navigation_button_radius)?;
        let text_size_rem = positive("navigation_text_size", self.navigation_text_size)?;
        bounded_extent(&[
            ("ring_radius", ring_radius),
            ("central_item_radius", central_item_radius),
            ("peripheral_item_radius", peripheral_item_radius),
            ("navigation_button_radius", button_radius),
        ])?;

        if !self.offset_angle.is_finite() {
            return Err(ConfigurationError::InvalidAngle(self.offset_angle));
        }

        let interval = duration("auto_rotate_interval_secs", self.auto_rotate_interval_secs)?;
        let transition_duration =
            duration("transition_duration_secs", self.transition_duration_secs)?;

        if !(self.border_width.is_finite() && self.border_width >= 0.0) {
            return Err(ConfigurationError::InvalidBorderWidth(self.border_width));
        }

        let border = BorderStyle {
            enabled: self.border_enabled,
            width: self.border_width,
            color: HexColor::parse_field("border_color", &self.border_color)?,
        };
        let navigation = NavigationStyle {
            button_radius,
            color: HexColor::parse_field("navigation_button_color", &self.navigation_button_color)?,
            background: HexColor::parse_field(
                "navigation_button_bg_color",
                &self.navigation_button_bg_color,
            )?,
            text_size_rem,
        };
        let focus_highlight = self
            .focused_item_highlight
            .as_deref()
            .map(|value| HexColor::parse_field("focused_item_highlight", value))
            .transpose()?;

        let ring = RingGeometry {
            ring_radius,
            item_radius: peripheral_item_radius,
            offset_angle: self.offset_angle,
        };

        Ok(CarouselConfiguration {
            layout: RingLayout::new(ring, count),
            items,
            count,
            central_item_radius,
            auto_rotate_interval: (!interval.is_zero()).then_some(interval),
            transition_duration,
            border,
            navigation,
            central_shadow: ShadowStyle::parse_field("central_item_shadow", &self.central_item_shadow)?,
            peripheral_shadow: ShadowStyle::parse_field(
                "peripheral_item_shadow",
                &self.peripheral_item_shadow,
            )?,
            focus_highlight,
        })
    }
}

// =============================================================================
// CarouselConfiguration
// =============================================================================

/// Validated, immutable carousel configuration.
///
/// Item positions are laid out once here; they never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfiguration {
    items: Vec<CarouselItem>,
    count: ItemCount,
    layout: RingLayout,
    central_item_radius: f32,
    auto_rotate_interval: Option<Duration>,
    transition_duration: Duration,
    border: BorderStyle,
    navigation: NavigationStyle,
    central_shadow: ShadowStyle,
    peripheral_shadow: ShadowStyle,
    focus_highlight: Option<HexColor>,
}

impl CarouselConfiguration {
    #[must_use]
    pub fn items(&self) -> &[CarouselItem] {
        &self.items
    }

    #[must_use]
    pub fn item_count(&self) -> ItemCount {
        self.count
    }

    #[must_use]
    pub fn layout(&self) -> &RingLayout {
        &self.layout
    }

    #[must_use]
    pub fn ring(&self) -> &RingGeometry {
        self.layout.geometry()
    }

    #[must_use]
    pub fn ring_radius(&self) -> f32 {
        self.ring().ring_radius
    }

    #[must_use]
    pub fn peripheral_item_radius(&self) -> f32 {
        self.ring().item_radius
    }

    #[must_use]
    pub fn central_item_radius(&self) -> f32 {
        self.central_item_radius
    }

    /// `None` when auto-rotation is disabled.
    #[must_use]
    pub fn auto_rotate_interval(&self) -> Option<Duration> {
        self.auto_rotate_interval
    }

    #[must_use]
    pub fn transition_duration(&self) -> Duration {
        self.transition_duration
    }

    #[must_use]
    pub fn border(&self) -> &BorderStyle {
        &self.border
    }

    #[must_use]
    pub fn navigation(&self) -> &NavigationStyle {
        &self.navigation
    }

    #[must_use]
    pub fn central_shadow(&self) -> ShadowStyle {
        self.central_shadow
    }

    #[must_use]
    pub fn peripheral_shadow(&self) -> ShadowStyle {
        self.peripheral_shadow
    }

    #[must_use]
    pub fn focus_highlight(&self) -> Option<HexColor> {
        self.focus_highlight
    }
}
