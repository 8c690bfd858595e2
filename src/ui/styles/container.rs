// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{gradients, opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Degrees, Gradient, Theme};

fn linear(angle: f32, from: Color, to: Color) -> Background {
    Background::Gradient(Gradient::Linear(
        Linear::new(Degrees(angle))
            .add_stop(0.0, from)
            .add_stop(1.0, to),
    ))
}

/// Page background.
pub fn page(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.background)),
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

/// Sticky top navigation bar.
pub fn navbar(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..scheme.surface
        })),
        border: Border {
            color: scheme.border,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Plain section surface (call to action band).
pub fn section(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface)),
        ..Default::default()
    }
}

/// Footer band.
pub fn footer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::CHARCOAL)),
        text_color: Some(palette::GRANITE),
        ..Default::default()
    }
}

/// Portfolio photo card.
pub fn card(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface_elevated)),
        border: Border {
            color: scheme.border,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Rounded tag pill on a card.
pub fn tag(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::THUNDER_BLUE)),
        text_color: Some(palette::LIGHTNING),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Darkening overlay between the hero image and its text.
pub fn hero_overlay(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(linear(
            90.0,
            Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::MIDNIGHT_SLATE
            },
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::STORM_GREY
            },
        )),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Scrim under the carousel caption so white text stays readable.
pub fn caption_scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(linear(
            0.0,
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
            Color {
                a: opacity::TRANSPARENT,
                ..palette::BLACK
            },
        )),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Rounded frame clipping the carousel slides.
pub fn carousel_frame(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::STORM_GREY)),
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Gradient shown in place of a missing portfolio image.
pub fn card_placeholder(index: usize) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let (from, to) = gradients::card_placeholder(index);
        container::Style {
            background: Some(linear(135.0, from, to)),
            text_color: Some(Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::WHITE
            }),
            ..Default::default()
        }
    }
}
