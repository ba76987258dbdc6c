// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::{Background, Theme};
    use iced_carousel::carousel::{CarouselOptions, ShadowStyle};
    use iced_carousel::ui::design_tokens::{opacity, palette, spacing, typography};
    use iced_carousel::ui::styles::{button, container};
    use iced_carousel::ui::theming::{AppTheme, ThemeMode};

    #[test]
    fn all_carousel_styles_are_callable() {
        let theme = Theme::Dark;
        let navigation = *CarouselOptions::default()
            .build(vec![iced_carousel::carousel::CarouselItem::image("a.png")])
            .expect("defaults are valid")
            .navigation();

        let _ = button::navigation(navigation)(&theme, Status::Active);
        let _ = button::ring_item(&theme, Status::Pressed);
        let _ = container::ring_item(ShadowStyle::default(), None, true)(&theme);
        let _ = container::central_slot(ShadowStyle::default())(&theme);
        let _ = container::surface(&AppTheme::new(ThemeMode::Dark).colors)(&theme);
    }

    #[test]
    fn navigation_button_follows_configured_background() {
        let navigation = *CarouselOptions::default()
            .build(vec![iced_carousel::carousel::CarouselItem::image("a.png")])
            .expect("defaults are valid")
            .navigation();

        let style = button::navigation(navigation)(&Theme::Light, Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(navigation.background.into()))
        );
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::ACCENT_500;
        let _ = palette::WHITE;
        let _ = spacing::MD;
        let _ = opacity::HOVER_VEIL;
        assert!(typography::CAPTION_TITLE > typography::RING_LABEL);
    }

    #[test]
    fn theming_switches_correctly() {
        let light = AppTheme::new(ThemeMode::Light);
        let dark = AppTheme::new(ThemeMode::Dark);

        // Surface colors should be visually opposite between light and dark
        assert!(light.colors.surface_primary.r > dark.colors.surface_primary.r);

        // Text colors should also be opposite between light and dark
        assert!(light.colors.text_primary.r < dark.colors.text_primary.r);
    }
}
