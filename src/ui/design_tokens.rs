// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants shared by the carousel widgets and the demo window.
Carousel geometry (radii, border, navigation sizes) is configurable and lives
in [`crate::config::defaults`]; the tokens here cover everything around it.

## Organization

- **Palette**: Base colors
- **Opacity**: Hover and pressed overlays
- **Spacing**: Spacing scale (8px grid)
- **Typography**: Caption font sizes
- **Border**: Border width scale
- **Radius**: Border radii (panels and circles)

## Examples

```
use iced_carousel::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let hover_veil = Color {
    a: opacity::HOVER_VEIL,
    ..palette::WHITE
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Terracotta scale around the default ring color (#CB786C)
    pub const ACCENT_400: Color = Color::from_rgb(0.86, 0.56, 0.51);
    pub const ACCENT_500: Color = Color::from_rgb(0.796, 0.471, 0.424);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Lightening applied to a navigation button on hover
    pub const HOVER_VEIL: f32 = 0.15;
    /// Darkening applied to a navigation button while pressed
    pub const PRESSED_VEIL: f32 = 0.2;
    pub const OPAQUE: f32 = 1.0;

    /// Caption card surface
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font sizes of the central caption card.

    /// Caption title inside the central slot
    pub const CAPTION_TITLE: f32 = 20.0;

    /// Caption description inside the central slot
    pub const CAPTION_BODY: f32 = 14.0;

    /// Labels of text items orbiting on the ring
    pub const RING_LABEL: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Outline of peripheral items
    pub const WIDTH_SM: f32 = 1.0;

    /// Focus highlight around the focused peripheral item
    pub const WIDTH_MD: f32 = 3.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Circle for square boxes
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::HOVER_VEIL > 0.0 && opacity::HOVER_VEIL < 1.0);
    assert!(opacity::PRESSED_VEIL > 0.0 && opacity::PRESSED_VEIL < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(typography::CAPTION_TITLE > typography::CAPTION_BODY);
    assert!(typography::CAPTION_BODY > typography::RING_LABEL);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(radius::MD > radius::NONE);
    assert!(radius::FULL > radius::MD);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn accent_scale_darkens() {
        assert!(palette::ACCENT_400.r > palette::ACCENT_500.r);
    }
}
