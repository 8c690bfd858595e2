// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::gradient::Linear;
use iced::widget::button;
use iced::{Background, Border, Color, Degrees, Gradient, Theme};

fn accent_gradient(reversed: bool) -> Background {
    let (from, to) = if reversed {
        (palette::THUNDER_BLUE, palette::LIGHTNING)
    } else {
        (palette::LIGHTNING, palette::THUNDER_BLUE)
    };
    Background::Gradient(Gradient::Linear(
        Linear::new(Degrees(90.0))
            .add_stop(0.0, from)
            .add_stop(1.0, to),
    ))
}

/// Main call to action ("View Portfolio", "Get in Touch").
///
/// The gradient flips direction on hover.
pub fn cta_primary(_theme: &Theme, status: button::Status) -> button::Style {
    let hovered = matches!(status, button::Status::Hovered);
    button::Style {
        background: Some(accent_gradient(hovered)),
        text_color: palette::MIDNIGHT_SLATE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: if hovered { shadow::LG } else { shadow::SM },
        snap: true,
    }
}

/// Secondary call to action on top of the hero image ("Read Stories").
pub fn cta_secondary(_theme: &Theme, status: button::Status) -> button::Style {
    let (alpha, border_alpha) = match status {
        button::Status::Hovered | button::Status::Pressed => (opacity::OVERLAY_HOVER, 0.6),
        _ => (opacity::OVERLAY_SUBTLE, 0.3),
    };
    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::STORM_GREY
        })),
        text_color: WHITE,
        border: Border {
            color: Color {
                a: border_alpha,
                ..palette::LIGHTNING
            },
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round, translucent previous/next chevrons over the carousel image.
pub fn carousel_nav(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_HOVER,
        _ => opacity::OVERLAY_SUBTLE,
    };
    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..WHITE })),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Carousel dot indicator. The selected dot is opaque, the others half
/// transparent and brighten on hover.
pub fn dot(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = if selected {
            opacity::OPAQUE
        } else if matches!(status, button::Status::Hovered) {
            opacity::OVERLAY_STRONG
        } else {
            opacity::OVERLAY_MEDIUM
        };
        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..WHITE })),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: if selected { shadow::SM } else { shadow::NONE },
            snap: true,
        }
    }
}

/// Navbar link. The link of the current screen uses the accent color.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let scheme = ColorScheme::for_theme(theme);
        let text_color = match status {
            _ if active => scheme.accent,
            button::Status::Hovered => scheme.accent,
            button::Status::Disabled => Color {
                a: opacity::OVERLAY_MEDIUM,
                ..scheme.text_muted
            },
            _ => scheme.text_secondary,
        };
        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
