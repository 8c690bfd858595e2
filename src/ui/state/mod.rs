// SPDX-License-Identifier: MPL-2.0
//! Interactive UI state owned by the Home screen.
//!
//! Each component here lives only while its screen is active. A component is
//! created `Unmounted`, mounted when the screen becomes visible and unmounted
//! when the user leaves it; while unmounted every mutating call is a no-op and
//! its subscription is empty, so the runtime drops the timer or listener.

pub mod carousel;
pub mod scroll;

pub use carousel::{CarouselOptions, Direction, Effect, Slide, SlideController};
pub use scroll::ScrollTracker;

/// Mount state shared by the interactive components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Unmounted,
    Mounted,
}

impl Lifecycle {
    #[must_use]
    pub fn is_mounted(self) -> bool {
        matches!(self, Lifecycle::Mounted)
    }

    /// Marks the component mounted. Returns `true` on the transition only.
    pub fn mount(&mut self) -> bool {
        let changed = !self.is_mounted();
        *self = Lifecycle::Mounted;
        changed
    }

    /// Marks the component unmounted. Returns `true` on the transition only.
    pub fn unmount(&mut self) -> bool {
        let changed = self.is_mounted();
        *self = Lifecycle::Unmounted;
        changed
    }
}
