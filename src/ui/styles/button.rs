// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::carousel::NavigationStyle;
use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
    radius,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Blends `veil` over `base` with the given opacity.
fn blend(base: Color, veil: Color, amount: f32) -> Color {
    Color {
        r: base.r + (veil.r - base.r) * amount,
        g: base.g + (veil.g - base.g) * amount,
        b: base.b + (veil.b - base.b) * amount,
        a: base.a,
    }
}

/// Round retreat/advance button built from the configured colors.
pub fn navigation(style: NavigationStyle) -> impl Fn(&Theme, button::Status) -> button::Style {
    let background: Color = style.background.into();
    let text_color: Color = style.color.into();

    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => blend(background, WHITE, opacity::HOVER_VEIL),
            button::Status::Pressed => blend(background, BLACK, opacity::PRESSED_VEIL),
            button::Status::Active | button::Status::Disabled => background,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

/// Invisible button wrapping a ring item, so clicking it focuses the item.
pub fn ring_item(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: Color::TRANSPARENT,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: Shadow::default(),
        snap: true,
    }
}
