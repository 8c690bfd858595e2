// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme handling.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub background: Color,
    pub surface: Color,
    pub surface_elevated: Color,
    pub border: Color,

    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    pub accent: Color,
    pub accent_secondary: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            background: Color::from_rgb(0.965, 0.969, 0.976),
            surface: palette::WHITE,
            surface_elevated: palette::WHITE,
            border: palette::GRANITE,

            text_primary: palette::MIDNIGHT_SLATE,
            text_secondary: palette::STORM_GREY,
            text_muted: palette::MUTED,

            accent: palette::THUNDER_BLUE,
            accent_secondary: palette::EMBER,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: palette::CHARCOAL,
            surface: palette::MIDNIGHT_SLATE,
            surface_elevated: palette::STORM_GREY,
            border: Color::from_rgb(0.22, 0.26, 0.32),

            text_primary: palette::WHITE,
            text_secondary: palette::GRANITE,
            text_muted: palette::MUTED,

            accent: palette::LIGHTNING,
            accent_secondary: palette::EMBER,
        }
    }

    /// Scheme matching the brightness of the active Iced theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Detects the system theme and returns the appropriate `ColorScheme`.
    #[must_use]
    pub fn from_system() -> Self {
        if let Ok(dark_light::Mode::Light) = dark_light::detect() {
            Self::light()
        } else {
            Self::dark()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    #[must_use]
    pub fn color_scheme(self) -> ColorScheme {
        match self {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
            ThemeMode::System => ColorScheme::from_system(),
        }
    }

    /// Base Iced theme; the Adventures colors are applied by the style
    /// functions in [`crate::ui::styles`].
    #[must_use]
    pub fn to_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
