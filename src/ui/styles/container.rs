// SPDX-License-Identifier: MPL-2.0
//! Container styles for the page chrome.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Sticky header bar at the top of the window.
pub fn header_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::GRAY_300),
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Dropdown panel anchored under the categories button.
pub fn dropdown_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_800)),
        border: Border {
            radius: radius::MD.into(),
            width: 1.0,
            color: palette::GRAY_700,
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Photo-count badge overlaid on a card's cover image.
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Footer surface with the brand top border.
pub fn footer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::GRAY_300),
        border: Border {
            color: palette::FUCHSIA_500,
            width: 2.0,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Page background behind the scrollable content.
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::GRAY_300),
        ..Default::default()
    }
}
