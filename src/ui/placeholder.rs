// SPDX-License-Identifier: MPL-2.0
//! Generated placeholder images for missing or broken remote artwork.
//!
//! Placeholders are plain RGBA buffers built at runtime and cached with
//! `OnceLock`, so the crate ships no binary assets. The purple tone matches
//! the placeholder artwork the catalog website used.

use crate::ui::design_tokens::palette;
use iced::widget::image::Handle;
use iced::Color;
use std::sync::OnceLock;

/// Purple used for the cover placeholder surface.
const COVER_FILL: Color = Color::from_rgb(0.659, 0.333, 0.969);

/// Builds a solid-color RGBA buffer with a slightly darkened border frame.
fn solid_frame(width: u32, height: u32, fill: Color) -> Vec<u8> {
    let border = Color {
        r: fill.r * 0.75,
        g: fill.g * 0.75,
        b: fill.b * 0.75,
        a: 1.0,
    };
    let to_byte = |channel: f32| (channel * 255.0).round() as u8;

    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let on_border = x < 2 || y < 2 || x >= width - 2 || y >= height - 2;
            let color = if on_border { border } else { fill };
            pixels.extend_from_slice(&[
                to_byte(color.r),
                to_byte(color.g),
                to_byte(color.b),
                255,
            ]);
        }
    }
    pixels
}

/// Placeholder for product cover images and carousel photos (3:2 surface).
pub fn cover() -> Handle {
    static HANDLE: OnceLock<Handle> = OnceLock::new();
    HANDLE
        .get_or_init(|| Handle::from_rgba(600, 400, solid_frame(600, 400, COVER_FILL)))
        .clone()
}

/// Placeholder for the site logo (wide strip in the page background tone,
/// framed with the brand accent).
pub fn logo() -> Handle {
    static HANDLE: OnceLock<Handle> = OnceLock::new();
    HANDLE
        .get_or_init(|| Handle::from_rgba(150, 60, solid_frame(150, 60, palette::PINK_500)))
        .clone()
}
