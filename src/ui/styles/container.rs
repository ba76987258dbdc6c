// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::carousel::ShadowStyle;
use crate::ui::design_tokens::{border, opacity, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Circular frame of a peripheral item.
///
/// The focused item gets a colored outline when a highlight color is set.
pub fn ring_item(
    shadow: ShadowStyle,
    highlight: Option<Color>,
    focused: bool,
) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let outline = match (focused, highlight) {
            (true, Some(color)) => Border {
                color,
                width: border::WIDTH_MD,
                radius: radius::FULL.into(),
            },
            _ => Border {
                color: palette.background.strong.color,
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
        };

        container::Style {
            background: Some(Background::Color(palette.background.weak.color)),
            border: outline,
            shadow: shadow.into(),
            ..Default::default()
        }
    }
}

/// Circular frame of the central focus slot.
pub fn central_slot(shadow: ShadowStyle) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.base.color;

        container::Style {
            background: Some(Background::Color(Color::from_rgba(
                base.r,
                base.g,
                base.b,
                opacity::SURFACE,
            ))),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow.into(),
            ..Default::default()
        }
    }
}

/// Window background behind the carousel.
pub fn surface(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.surface_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    }
}

/// Card showing why the carousel could not be built.
pub fn error_panel(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.surface_card;
    let accent = colors.accent;
    let text = colors.text_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::HexColor;

    #[test]
    fn focused_item_gets_highlight_outline() {
        let gold: Color = HexColor::rgb(0xFF, 0xD7, 0x00).into();
        let focused = ring_item(ShadowStyle::default(), Some(gold), true)(&Theme::Light);
        let other = ring_item(ShadowStyle::default(), Some(gold), false)(&Theme::Light);

        assert_eq!(focused.border.color, gold);
        assert_eq!(focused.border.width, border::WIDTH_MD);
        assert_ne!(other.border.color, gold);
    }

    #[test]
    fn shadows_come_from_configuration() {
        let shadow = ShadowStyle::default();
        let slot = central_slot(shadow)(&Theme::Dark);
        assert_eq!(slot.shadow, iced::Shadow::from(shadow));
    }

    #[test]
    fn surfaces_follow_the_color_scheme() {
        let colors = ColorScheme::light();
        let window = surface(&colors)(&Theme::Dark);
        assert_eq!(
            window.background,
            Some(Background::Color(colors.surface_primary))
        );

        let panel = error_panel(&colors)(&Theme::Dark);
        assert_eq!(panel.border.color, colors.accent);
        assert_eq!(panel.text_color, Some(colors.text_primary));
    }
}
