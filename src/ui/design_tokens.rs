// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens for the Adventures look: a dark storm palette with a bright
"lightning" accent, on an 8px spacing grid.

## Organization

- **Palette**: Base colors
- **Gradients**: Stop pairs used by hero overlay and portfolio placeholders
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use adventures::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::MIDNIGHT_SLATE
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

    // Storm scale, darkest first
    pub const CHARCOAL: Color = Color::from_rgb(0.071, 0.082, 0.114); // #12151d
    pub const MIDNIGHT_SLATE: Color = Color::from_rgb(0.102, 0.122, 0.180); // #1a1f2e
    pub const STORM_GREY: Color = Color::from_rgb(0.165, 0.204, 0.255); // #2a3441
    pub const GRANITE: Color = Color::from_rgb(0.784, 0.800, 0.831); // #c8ccd4
    pub const MUTED: Color = Color::from_rgb(0.533, 0.573, 0.651); // #8892a6

    // Accents
    pub const LIGHTNING: Color = Color::from_rgb(0.439, 0.812, 0.988); // #70cffc
    pub const THUNDER_BLUE: Color = Color::from_rgb(0.231, 0.357, 0.549); // #3b5b8c
    pub const EMBER: Color = Color::from_rgb(0.878, 0.451, 0.227); // #e0733a
}

// ============================================================================
// Gradients
// ============================================================================

pub mod gradients {
    use super::{palette, Color};

    /// Placeholder gradients for portfolio cards without an image, picked by
    /// `index % 6`.
    pub const CARD_PLACEHOLDERS: [(Color, Color); 6] = [
        (palette::EMBER, palette::THUNDER_BLUE),
        (palette::THUNDER_BLUE, palette::LIGHTNING),
        (palette::LIGHTNING, palette::EMBER),
        (palette::STORM_GREY, palette::THUNDER_BLUE),
        (palette::THUNDER_BLUE, palette::STORM_GREY),
        (palette::LIGHTNING, palette::STORM_GREY),
    ];

    /// Returns the placeholder gradient for the card at `index`.
    #[must_use]
    pub fn card_placeholder(index: usize) -> (Color, Color) {
        CARD_PLACEHOLDERS[index % CARD_PLACEHOLDERS.len()]
    }
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.4;
    pub const OPAQUE: f32 = 1.0;

    /// Navbar surface, slightly see-through like a frosted bar.
    pub const SURFACE: f32 = 0.9;
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
    pub const SECTION: f32 = 80.0; // 10 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_XS: f32 = 12.0;
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XXL: f32 = 64.0;

    pub const NAVBAR_HEIGHT: f32 = 64.0;

    // Home screen
    pub const HERO_HEIGHT: f32 = 640.0;
    pub const CAROUSEL_HEIGHT: f32 = 560.0;
    pub const CAROUSEL_NAV_BUTTON: f32 = 56.0;
    pub const DOT_SIZE: f32 = 12.0;
    pub const DOT_SELECTED_WIDTH: f32 = 32.0;

    // Portfolio grid
    pub const CARD_WIDTH: f32 = 360.0;
    pub const CARD_IMAGE_HEIGHT: f32 = 240.0;
    pub const CONTENT_MAX_WIDTH: f32 = 1200.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale. Display sizes are for the hero and carousel overlay.

    pub const DISPLAY: f32 = 64.0;
    pub const DISPLAY_SM: f32 = 48.0;
    pub const TITLE_LG: f32 = 32.0;
    pub const TITLE_MD: f32 = 24.0;
    pub const TITLE_SM: f32 = 20.0;
    pub const BODY_LG: f32 = 18.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 16.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::new(0.0, 0.0),
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
        offset: Vector::new(0.0, 1.0),
        blur_radius: 3.0,
    };

    pub const LG: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
        offset: Vector::new(0.0, 8.0),
        blur_radius: 24.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_follows_grid() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::XL, spacing::MD * 2.0);
        assert_eq!(spacing::SECTION % spacing::XS, 0.0);
    }

    #[test]
    fn storm_scale_gets_lighter() {
        assert!(palette::CHARCOAL.r < palette::MIDNIGHT_SLATE.r);
        assert!(palette::MIDNIGHT_SLATE.r < palette::STORM_GREY.r);
        assert!(palette::STORM_GREY.r < palette::GRANITE.r);
    }

    #[test]
    fn card_placeholder_cycles_every_six() {
        assert_eq!(gradients::card_placeholder(0), gradients::card_placeholder(6));
        assert_eq!(gradients::card_placeholder(4), gradients::card_placeholder(10));
        assert_ne!(gradients::card_placeholder(0), gradients::card_placeholder(1));
    }

    #[test]
    fn selected_dot_is_wider() {
        assert!(sizing::DOT_SELECTED_WIDTH > sizing::DOT_SIZE);
    }
}
