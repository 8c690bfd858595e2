// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Carousel**: Auto-advance interval bounds
//! - **Parallax**: Hero background damping
//! - **Content**: Content store query defaults
//! - **Portfolio**: Card image dimensions

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Default delay between two automatic slide advances (milliseconds).
pub const DEFAULT_CAROUSEL_INTERVAL_MS: u64 = 4000;

/// Shortest accepted auto-advance interval (milliseconds).
pub const MIN_CAROUSEL_INTERVAL_MS: u64 = 1000;

/// Longest accepted auto-advance interval (milliseconds).
pub const MAX_CAROUSEL_INTERVAL_MS: u64 = 60_000;

/// Carousel wraps around at both ends unless configured otherwise.
pub const DEFAULT_CAROUSEL_LOOP: bool = true;

// ==========================================================================
// Parallax Defaults
// ==========================================================================

/// Fraction of the scroll offset applied to the hero background.
pub const PARALLAX_DAMPING: f32 = 0.5;

// ==========================================================================
// Content Store Defaults
// ==========================================================================

/// Dataset queried when none is configured.
pub const DEFAULT_CONTENT_DATASET: &str = "production";

/// Query API version (date-based, as the content store expects).
pub const DEFAULT_CONTENT_API_VERSION: &str = "2024-01-01";

/// Whether to query the edge-cached API host.
pub const DEFAULT_CONTENT_USE_CDN: bool = true;

// ==========================================================================
// Portfolio Defaults
// ==========================================================================

/// Requested width of a portfolio card image (pixels).
pub const CARD_IMAGE_WIDTH: u32 = 600;

/// Requested height of a portfolio card image (pixels).
pub const CARD_IMAGE_HEIGHT: u32 = 400;

/// Maximum number of tags rendered on a card.
pub const MAX_CARD_TAGS: usize = 3;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_CAROUSEL_INTERVAL_MS > 0);
    assert!(MAX_CAROUSEL_INTERVAL_MS >= MIN_CAROUSEL_INTERVAL_MS);
    assert!(DEFAULT_CAROUSEL_INTERVAL_MS >= MIN_CAROUSEL_INTERVAL_MS);
    assert!(DEFAULT_CAROUSEL_INTERVAL_MS <= MAX_CAROUSEL_INTERVAL_MS);

    assert!(PARALLAX_DAMPING > 0.0);
    assert!(PARALLAX_DAMPING <= 1.0);

    assert!(CARD_IMAGE_WIDTH > 0);
    assert!(CARD_IMAGE_HEIGHT > 0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carousel_defaults_are_valid() {
        assert_eq!(DEFAULT_CAROUSEL_INTERVAL_MS, 4000);
        assert!(DEFAULT_CAROUSEL_INTERVAL_MS >= MIN_CAROUSEL_INTERVAL_MS);
        assert!(DEFAULT_CAROUSEL_INTERVAL_MS <= MAX_CAROUSEL_INTERVAL_MS);
        assert!(DEFAULT_CAROUSEL_LOOP);
    }

    #[test]
    fn parallax_damping_is_half_speed() {
        assert_eq!(PARALLAX_DAMPING, 0.5);
    }

    #[test]
    fn card_image_defaults_match_grid_aspect() {
        assert_eq!((CARD_IMAGE_WIDTH, CARD_IMAGE_HEIGHT), (600, 400));
        assert_eq!(MAX_CARD_TAGS, 3);
    }
}
