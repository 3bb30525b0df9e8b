// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers for the catalog views and the carousel overlay.

use crate::ui::design_tokens::palette;
use iced::Color;

/// Standard color for primary text on dark surfaces.
pub fn text_color() -> Color {
    palette::GRAY_300
}

/// Standard color for muted/secondary text.
pub fn muted_text_color() -> Color {
    palette::GRAY_400
}

/// Brand accent used for active links and the hero headline.
pub fn accent_color() -> Color {
    palette::PINK_500
}

/// White used by overlay arrows, headings, and the close affordance.
pub fn overlay_text_color() -> Color {
    palette::WHITE
}
