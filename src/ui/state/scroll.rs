// SPDX-License-Identifier: MPL-2.0
//! Scroll tracking for the hero parallax.
//!
//! The tracker stores the latest vertical scroll offset of the Home page and
//! derives the translation applied to the hero background. Updates are a
//! single store, so high-frequency scroll events cost nothing extra.

use super::Lifecycle;
use crate::config::PARALLAX_DAMPING;
use iced::widget::scrollable::Viewport;

/// Vertical scroll offset of the page, in logical pixels.
#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    offset: f32,
    lifecycle: Lifecycle,
    registrations: u32,
}

impl ScrollTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts listening. The offset restarts at zero on every fresh mount.
    pub fn mount(&mut self) {
        if self.lifecycle.mount() {
            self.offset = 0.0;
            self.registrations += 1;
        }
    }

    /// Stops listening. Later scroll events are dropped.
    pub fn unmount(&mut self) {
        self.lifecycle.unmount();
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.lifecycle.is_mounted()
    }

    /// Records a new offset. Negative overscroll is stored as zero.
    pub fn on_scroll(&mut self, offset: f32) {
        if !self.is_mounted() || !offset.is_finite() {
            return;
        }
        self.offset = offset.max(0.0);
    }

    /// Records the offset reported by a `scrollable` viewport.
    pub fn on_viewport(&mut self, viewport: &Viewport) {
        self.on_scroll(viewport.absolute_offset().y);
    }

    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Translation of the hero background for the current offset.
    #[must_use]
    pub fn parallax_offset(&self) -> f32 {
        self.offset * PARALLAX_DAMPING
    }

    /// How many times a listener has been registered.
    #[must_use]
    pub fn registrations(&self) -> u32 {
        self.registrations
    }
}
