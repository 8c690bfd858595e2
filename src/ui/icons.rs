// SPDX-License-Identifier: MPL-2.0
//! Centralized inline SVG icons.
//!
//! Icons are stroke outlines embedded as string constants; handles are cached
//! with `OnceLock` so the SVG is parsed once. They are drawn in black and
//! tinted at render time with [`tinted`], which keeps them usable on both the
//! dark hero and light cards.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `chevron_left` not `previous_slide`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

macro_rules! define_icon {
    ($name:ident, $body:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| {
                Handle::from_memory(
                    concat!(
                        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                        $body,
                        "</svg>"
                    )
                    .as_bytes(),
                )
            });
            Svg::new(handle.clone())
        }
    };
}

define_icon!(
    camera,
    r#"<path d="M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3l-2.5-3z"/><circle cx="12" cy="13" r="3"/>"#,
    "Camera body with lens."
);
define_icon!(
    chevron_left,
    r#"<path d="m15 18-6-6 6-6"/>"#,
    "Chevron pointing left."
);
define_icon!(
    chevron_right,
    r#"<path d="m9 18 6-6-6-6"/>"#,
    "Chevron pointing right."
);
define_icon!(
    arrow_right,
    r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
    "Arrow pointing right."
);
define_icon!(
    map_pin,
    r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#,
    "Map location pin."
);
define_icon!(
    cog,
    r#"<circle cx="12" cy="12" r="3"/><path d="M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 0 1-4 0v-.09A1.65 1.65 0 0 0 9 19.4a1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06A1.65 1.65 0 0 0 4.68 15a1.65 1.65 0 0 0-1.51-1H3a2 2 0 0 1 0-4h.09A1.65 1.65 0 0 0 4.6 9a1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06A1.65 1.65 0 0 0 9 4.68a1.65 1.65 0 0 0 1-1.51V3a2 2 0 0 1 4 0v.09a1.65 1.65 0 0 0 1 1.51 1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06A1.65 1.65 0 0 0 19.4 9a1.65 1.65 0 0 0 1.51 1H21a2 2 0 0 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z"/>"#,
    "Gear wheel."
);
define_icon!(
    aperture,
    r#"<circle cx="12" cy="12" r="10"/><path d="m14.31 8 5.74 9.94"/><path d="M9.69 8h11.48"/><path d="m7.38 12 5.74-9.94"/><path d="M9.69 16 3.95 6.06"/><path d="M14.31 16H2.83"/><path d="m16.62 12-5.74 9.94"/>"#,
    "Camera aperture blades."
);
define_icon!(
    timer,
    r#"<path d="M10 2h4"/><path d="M12 14l3-3"/><circle cx="12" cy="14" r="8"/>"#,
    "Stopwatch."
);

/// Sizes an icon to a square of `size` logical pixels.
pub fn sized(icon: Svg<'_>, size: f32) -> Svg<'_> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Sizes an icon and paints it in a single color.
pub fn tinted(icon: Svg<'_>, size: f32, color: Color) -> Svg<'_> {
    sized(icon, size).style(move |_theme: &Theme, _status: svg::Status| svg::Style {
        color: Some(color),
    })
}
