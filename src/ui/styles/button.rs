// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for header and footer navigation links (text-only buttons).
/// Active links render in the brand accent; hover shifts to the lighter tint.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = match (active, status) {
            (true, _) => palette::PINK_500,
            (false, button::Status::Hovered | button::Status::Pressed) => palette::PINK_400,
            (false, _) => palette::GRAY_300,
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            ..Default::default()
        }
    }
}

/// Style for items inside the categories dropdown panel.
pub fn dropdown_item(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = if active {
            palette::PINK_400
        } else {
            palette::GRAY_300
        };

        match status {
            button::Status::Hovered | button::Status::Pressed => button::Style {
                background: Some(Background::Color(palette::GRAY_700)),
                text_color,
                border: Border {
                    radius: radius::SM.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
            _ => button::Style {
                background: None,
                text_color,
                border: Border::default(),
                ..Default::default()
            },
        }
    }
}

/// Style for clickable product cards: dark surface, rounded, lifted on hover.
pub fn card(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::GRAY_700,
        _ => palette::GRAY_800,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::GRAY_300,
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Style for overlay buttons (carousel arrows and close affordance).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered | button::Status::Pressed => alpha_hover,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..WHITE })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Variant of [`overlay`] with a dark pill background, used for the close
/// button sitting directly on the backdrop.
pub fn overlay_dark() -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_STRONG,
            _ => opacity::OVERLAY_MEDIUM,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
