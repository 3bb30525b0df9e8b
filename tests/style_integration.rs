// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use card_gallery::ui::design_tokens::{opacity, palette, sizing, spacing};
    use card_gallery::ui::styles::{button, container, overlay};
    use iced::Theme;

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Dark;
        let status = iced::widget::button::Status::Active;

        // Smoke-test all button styles compile and are callable
        let _ = button::nav_link(true)(&theme, status);
        let _ = button::nav_link(false)(&theme, iced::widget::button::Status::Hovered);
        let _ = button::dropdown_item(false)(&theme, status);
        let _ = button::card(&theme, status);
        let _ = button::overlay(palette::WHITE, 0.2, 0.5)(&theme, status);
        let _ = button::overlay_dark()(&theme, status);
    }

    #[test]
    fn all_container_styles_compile() {
        let theme = Theme::Dark;

        let _ = container::header_bar(&theme);
        let _ = container::dropdown_panel(&theme);
        let _ = container::badge(&theme);
        let _ = container::footer(&theme);
        let _ = container::page(&theme);
        let _ = overlay::backdrop(&theme);
        let _ = overlay::indicator(12.0)(&theme);
    }

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::PINK_500;
        let _ = palette::WHITE;

        // Spacing
        let _ = spacing::MD;

        // Opacity
        let _ = opacity::OVERLAY_STRONG;

        // Sizing
        let _ = sizing::CARD_IMAGE_HEIGHT;
    }

    #[test]
    fn active_links_use_the_brand_accent() {
        let theme = Theme::Dark;
        let style = button::nav_link(true)(&theme, iced::widget::button::Status::Active);
        assert_eq!(style.text_color, palette::PINK_500);
    }
}
