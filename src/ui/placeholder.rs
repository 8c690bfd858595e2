// SPDX-License-Identifier: MPL-2.0
//! Inline placeholder graphics shown when an image cannot be loaded.
//!
//! A failed image is replaced once by one of these; there is no retry.

use iced::widget::svg::{Handle, Svg};
use iced::{ContentFit, Length};
use std::sync::OnceLock;

/// Dark diagonal gradient behind the hero text.
pub const HERO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 1920 1080"><defs><linearGradient id="grad" x1="0%" y1="0%" x2="100%" y2="100%"><stop offset="0%" style="stop-color:#1a1f2e;stop-opacity:1"/><stop offset="100%" style="stop-color:#2a3441;stop-opacity:1"/></linearGradient></defs><rect fill="url(#grad)" width="1920" height="1080"/></svg>"##;

/// Flat card with a centered caption, used for carousel slides.
pub const SLIDE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 400 300"><rect fill="#2a3441" width="400" height="300"/><text x="50%" y="50%" font-family="system-ui" font-size="20" fill="#8892a6" text-anchor="middle" dominant-baseline="middle">Image Loading...</text></svg>"##;

/// Which placeholder to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Hero,
    Slide,
}

impl Placeholder {
    /// Raw SVG document for this placeholder.
    #[must_use]
    pub fn svg_source(self) -> &'static str {
        match self {
            Placeholder::Hero => HERO_SVG,
            Placeholder::Slide => SLIDE_SVG,
        }
    }

    fn handle(self) -> Handle {
        static HERO: OnceLock<Handle> = OnceLock::new();
        static SLIDE: OnceLock<Handle> = OnceLock::new();
        let cell = match self {
            Placeholder::Hero => &HERO,
            Placeholder::Slide => &SLIDE,
        };
        cell.get_or_init(|| Handle::from_memory(self.svg_source().as_bytes()))
            .clone()
    }

    /// Widget filling its parent, cropped like a cover image.
    pub fn view<'a>(self) -> Svg<'a> {
        Svg::new(self.handle())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_placeholder_is_full_hd_gradient() {
        let svg = Placeholder::Hero.svg_source();
        assert!(svg.contains(r#"viewBox="0 0 1920 1080""#));
        assert!(svg.contains("#1a1f2e"));
        assert!(svg.contains("#2a3441"));
    }

    #[test]
    fn slide_placeholder_has_loading_caption() {
        let svg = Placeholder::Slide.svg_source();
        assert!(svg.contains(r#"viewBox="0 0 400 300""#));
        assert!(svg.contains("Image Loading..."));
    }
}
