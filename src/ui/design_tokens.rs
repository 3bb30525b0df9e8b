// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors (dark catalog theme with pink/purple accents)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale (page surfaces and text)
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153);
    pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216);
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318);
    pub const GRAY_500: Color = Color::from_rgb(0.420, 0.447, 0.502);
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686);
    pub const GRAY_300: Color = Color::from_rgb(0.820, 0.835, 0.859);

    // Brand accents (pink/purple scale)
    pub const PINK_400: Color = Color::from_rgb(0.957, 0.447, 0.714);
    pub const PINK_500: Color = Color::from_rgb(0.925, 0.282, 0.600);
    pub const PURPLE_400: Color = Color::from_rgb(0.753, 0.518, 0.988);
    pub const FUCHSIA_500: Color = Color::from_rgb(0.851, 0.275, 0.937);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
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
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Height of the sticky navigation header.
    pub const HEADER_HEIGHT: f32 = 72.0;

    /// Rendered height of the site logo in header and footer.
    pub const LOGO_HEIGHT: f32 = 52.0;

    /// Width of the categories dropdown panel.
    pub const DROPDOWN_WIDTH: f32 = 224.0;

    /// Product card cover image height.
    pub const CARD_IMAGE_HEIGHT: f32 = 320.0;

    /// Product card width inside the listing grid.
    pub const CARD_WIDTH: f32 = 340.0;

    /// Maximum width/height of the carousel image area.
    pub const CAROUSEL_MAX_WIDTH: f32 = 768.0;
    pub const CAROUSEL_MAX_HEIGHT: f32 = 620.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero headline (site name on the home view).
    pub const DISPLAY: f32 = 56.0;

    /// View titles (category name, "Featured Designs").
    pub const TITLE_LG: f32 = 30.0;

    /// Card titles and section headers.
    pub const TITLE_SM: f32 = 20.0;

    /// Standard body text.
    pub const BODY: f32 = 15.0;

    /// Secondary text (descriptions, contact rows).
    pub const BODY_SM: f32 = 13.0;

    /// Badges and the position counter.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Color validation
    assert!(palette::PINK_500.r >= 0.0 && palette::PINK_500.r <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }
}
