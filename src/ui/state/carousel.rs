// SPDX-License-Identifier: MPL-2.0
//! Slide selection for the Home carousel.
//!
//! [`SlideController`] owns the selected index into a fixed, ordered list of
//! slides. Two producers feed it: the periodic timer ([`SlideController::tick`])
//! and the user (chevrons, dots and arrow keys). Both go through the same
//! update entry point, so the last event processed wins.
//!
//! Manual navigation is reported to the injected [`Telemetry`] handle; timer
//! advances are not.

use super::Lifecycle;
use crate::config::{CarouselConfig, DEFAULT_CAROUSEL_INTERVAL_MS, DEFAULT_CAROUSEL_LOOP};
use crate::telemetry::{CarouselAction, Telemetry};
use iced::{time, Subscription};
use std::time::{Duration, Instant};

/// One entry of the carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    /// Zero-based position in the sequence.
    pub position: usize,
    /// Image reference, relative to the asset directory.
    pub image: String,
    pub title: String,
    pub subtitle: String,
}

impl Slide {
    #[must_use]
    pub fn new(
        position: usize,
        image: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
    ) -> Self {
        Self {
            position,
            image: image.into(),
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }
}

const DEFAULT_SLIDES: [(&str, &str, &str); 12] = [
    ("/images/DJI_0006.jpg", "Aerial Majesty", "Capturing the world from above"),
    ("/images/DJI_0008.jpg", "Endless Horizons", "Where sky meets earth in perfect harmony"),
    ("/images/DJI_0013.jpg", "Patterns in Nature", "Hidden geometries revealed from the sky"),
    ("/images/DJI_0050.jpg", "Coastal Dreams", "Where waves dance with golden shores"),
    ("/images/DJI_0065.jpg", "Mountain Grandeur", "Peaks that touch the soul"),
    ("/images/DJI_0067.jpg", "Natural Architecture", "Earth's masterpiece from above"),
    ("/images/DJI_0076.jpg", "Scenic Wonder", "Beauty that takes your breath away"),
    ("/images/DJI_0094.jpg", "Aerial Symphony", "When composition meets nature"),
    ("/images/DSC00539.jpg", "Adventure Awaits", "Every moment tells a story"),
    ("/images/DSC00543.jpg", "Journey Captured", "Memories frozen in time"),
    ("/images/DSC00587.jpg", "Nature's Canvas", "Raw beauty in its purest form"),
    ("/images/DSC00599.jpg", "Epic Moments", "When adventure becomes art"),
];

/// The slides shown on the Home screen.
#[must_use]
pub fn default_slides() -> Vec<Slide> {
    DEFAULT_SLIDES
        .iter()
        .enumerate()
        .map(|(position, (image, title, subtitle))| Slide::new(position, *image, *title, *subtitle))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselOptions {
    /// Wrap around at both ends instead of stopping.
    pub loop_enabled: bool,
    /// Time between automatic advances.
    pub interval: Duration,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            loop_enabled: DEFAULT_CAROUSEL_LOOP,
            interval: Duration::from_millis(DEFAULT_CAROUSEL_INTERVAL_MS),
        }
    }
}

impl From<&CarouselConfig> for CarouselOptions {
    fn from(config: &CarouselConfig) -> Self {
        Self {
            loop_enabled: config.loop_enabled.unwrap_or(DEFAULT_CAROUSEL_LOOP),
            interval: config.interval(),
        }
    }
}

/// Outcome of a navigation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// The selection moved to this index.
    Selected(usize),
}

/// Current slide of a fixed slide sequence.
#[derive(Debug, Clone)]
pub struct SlideController {
    slides: Vec<Slide>,
    options: CarouselOptions,
    selected: usize,
    lifecycle: Lifecycle,
    telemetry: Telemetry,
}

impl SlideController {
    #[must_use]
    pub fn new(slides: Vec<Slide>, options: CarouselOptions, telemetry: Telemetry) -> Self {
        Self {
            slides,
            options,
            selected: 0,
            lifecycle: Lifecycle::Unmounted,
            telemetry,
        }
    }

    /// Mounts the controller; a fresh mount always starts at the first slide.
    pub fn mount(&mut self) {
        if self.lifecycle.mount() {
            self.selected = 0;
        }
    }

    /// Unmounts the controller. The timer subscription goes away with it.
    pub fn unmount(&mut self) {
        self.lifecycle.unmount();
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.lifecycle.is_mounted()
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    #[must_use]
    pub fn current(&self) -> Option<&Slide> {
        self.slides.get(self.selected)
    }

    #[must_use]
    pub fn options(&self) -> CarouselOptions {
        self.options
    }

    /// Moves one slide in `direction` on user request.
    pub fn advance(&mut self, direction: Direction) -> Effect {
        if !self.is_navigable() {
            return Effect::None;
        }
        let action = match direction {
            Direction::Forward => CarouselAction::Next,
            Direction::Backward => CarouselAction::Prev,
        };
        self.telemetry.carousel_interaction(action, self.selected);
        self.step(direction)
    }

    /// Selects `index` directly. Indices past the last slide are ignored.
    pub fn jump_to(&mut self, index: usize) -> Effect {
        if !self.is_navigable() || index >= self.slides.len() {
            return Effect::None;
        }
        self.telemetry
            .carousel_interaction(CarouselAction::DotNavigation, index);
        self.select(index)
    }

    /// Timer-driven advance. Same as a forward step, without telemetry.
    pub fn tick(&mut self) -> Effect {
        if !self.is_navigable() {
            return Effect::None;
        }
        self.step(Direction::Forward)
    }

    /// Periodic timer, active only while mounted with at least one slide.
    pub fn subscription(&self) -> Subscription<Instant> {
        if self.is_navigable() {
            time::every(self.options.interval)
        } else {
            Subscription::none()
        }
    }

    fn is_navigable(&self) -> bool {
        self.is_mounted() && !self.slides.is_empty()
    }

    fn step(&mut self, direction: Direction) -> Effect {
        let count = self.slides.len();
        let last = count - 1;
        let target = match (direction, self.options.loop_enabled) {
            (Direction::Forward, true) => (self.selected + 1) % count,
            (Direction::Backward, true) => (self.selected + count - 1) % count,
            (Direction::Forward, false) => (self.selected + 1).min(last),
            (Direction::Backward, false) => self.selected.saturating_sub(1),
        };
        self.select(target)
    }

    fn select(&mut self, index: usize) -> Effect {
        if index == self.selected {
            return Effect::None;
        }
        self.selected = index;
        Effect::Selected(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::{RecordingSink, TelemetryEvent};
    use std::sync::Arc;

    fn slides(count: usize) -> Vec<Slide> {
        (0..count)
            .map(|i| Slide::new(i, format!("/images/{i}.jpg"), format!("Slide {i}"), ""))
            .collect()
    }

    fn controller(count: usize, loop_enabled: bool) -> SlideController {
        let options = CarouselOptions {
            loop_enabled,
            ..CarouselOptions::default()
        };
        let mut controller = SlideController::new(slides(count), options, Telemetry::disabled());
        controller.mount();
        controller
    }

    fn recorded(count: usize) -> (SlideController, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::new());
        let mut controller = SlideController::new(
            slides(count),
            CarouselOptions::default(),
            Telemetry::new(sink.clone()),
        );
        controller.mount();
        (controller, sink)
    }

    #[test]
    fn defaults_loop_every_four_seconds() {
        let options = CarouselOptions::default();
        assert!(options.loop_enabled);
        assert_eq!(options.interval, Duration::from_millis(4000));
    }

    #[test]
    fn default_table_has_twelve_ordered_slides() {
        let slides = default_slides();
        assert_eq!(slides.len(), 12);
        assert_eq!(slides[0].title, "Aerial Majesty");
        assert_eq!(slides[11].image, "/images/DSC00599.jpg");
        assert!(slides.iter().enumerate().all(|(i, s)| s.position == i));
    }

    #[test]
    fn forward_advances_wrap_modulo_count() {
        for count in 1..=7 {
            let mut controller = controller(count, true);
            for k in 1..=20 {
                controller.advance(Direction::Forward);
                assert_eq!(controller.selected_index(), k % count);
            }
        }
    }

    #[test]
    fn backward_from_first_wraps_to_last() {
        let mut controller = controller(5, true);
        assert_eq!(controller.advance(Direction::Backward), Effect::Selected(4));
    }

    #[test]
    fn without_loop_navigation_clamps_at_both_ends() {
        let mut controller = controller(3, false);
        assert_eq!(controller.advance(Direction::Backward), Effect::None);
        assert_eq!(controller.selected_index(), 0);

        controller.advance(Direction::Forward);
        controller.advance(Direction::Forward);
        assert_eq!(controller.advance(Direction::Forward), Effect::None);
        assert_eq!(controller.tick(), Effect::None);
        assert_eq!(controller.selected_index(), 2);
    }

    #[test]
    fn jump_to_selects_any_valid_index() {
        let mut controller = controller(6, true);
        for i in (0..6).rev() {
            controller.jump_to(i);
            assert_eq!(controller.selected_index(), i);
        }
    }

    #[test]
    fn jump_to_out_of_range_is_ignored() {
        let (mut controller, sink) = recorded(4);
        controller.jump_to(2);
        assert_eq!(controller.jump_to(4), Effect::None);
        assert_eq!(controller.jump_to(usize::MAX), Effect::None);
        assert_eq!(controller.selected_index(), 2);
        assert_eq!(sink.events().len(), 1);
    }

    #[test]
    fn tick_advances_exactly_one_slide() {
        let mut controller = controller(4, true);
        assert_eq!(controller.tick(), Effect::Selected(1));
        assert_eq!(controller.tick(), Effect::Selected(2));
    }

    #[test]
    fn manual_navigation_and_ticks_interleave() {
        let mut controller = controller(5, true);
        controller.tick();
        controller.jump_to(3);
        controller.tick();
        controller.advance(Direction::Backward);
        assert_eq!(controller.selected_index(), 3);
    }

    #[test]
    fn nothing_changes_after_unmount() {
        let (mut controller, sink) = recorded(4);
        controller.tick();
        controller.unmount();

        assert_eq!(controller.tick(), Effect::None);
        assert_eq!(controller.advance(Direction::Forward), Effect::None);
        assert_eq!(controller.jump_to(3), Effect::None);

        assert_eq!(controller.selected_index(), 1);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn remount_resets_to_first_slide() {
        let mut controller = controller(4, true);
        controller.jump_to(3);
        controller.unmount();
        controller.mount();
        assert_eq!(controller.selected_index(), 0);
    }

    #[test]
    fn empty_sequence_is_inert() {
        let mut controller = controller(0, true);
        assert_eq!(controller.advance(Direction::Forward), Effect::None);
        assert_eq!(controller.advance(Direction::Backward), Effect::None);
        assert_eq!(controller.tick(), Effect::None);
        assert_eq!(controller.jump_to(0), Effect::None);
        assert!(controller.current().is_none());
    }

    #[test]
    fn timer_runs_only_when_mounted_with_slides() {
        let empty = controller(0, true);
        assert!(empty.is_mounted());
        assert!(!empty.is_navigable());

        let mut filled = controller(3, true);
        assert!(filled.is_navigable());
        filled.unmount();
        assert!(!filled.is_navigable());
    }

    #[test]
    fn single_slide_stays_put_but_reports_clicks() {
        let (mut controller, sink) = recorded(1);
        assert_eq!(controller.advance(Direction::Forward), Effect::None);
        assert_eq!(controller.tick(), Effect::None);
        assert_eq!(controller.selected_index(), 0);
        assert_eq!(sink.events().len(), 1);
    }

    #[test]
    fn manual_navigation_reports_index_at_time_of_action() {
        let (mut controller, sink) = recorded(5);
        controller.advance(Direction::Forward);
        controller.advance(Direction::Forward);
        controller.advance(Direction::Backward);
        controller.jump_to(4);

        assert_eq!(
            sink.events(),
            vec![
                TelemetryEvent::CarouselInteraction {
                    action: CarouselAction::Next,
                    index: 0,
                },
                TelemetryEvent::CarouselInteraction {
                    action: CarouselAction::Next,
                    index: 1,
                },
                TelemetryEvent::CarouselInteraction {
                    action: CarouselAction::Prev,
                    index: 2,
                },
                TelemetryEvent::CarouselInteraction {
                    action: CarouselAction::DotNavigation,
                    index: 4,
                },
            ]
        );
    }

    #[test]
    fn ticks_are_not_reported() {
        let (mut controller, sink) = recorded(3);
        controller.tick();
        controller.tick();
        assert!(sink.events().is_empty());
    }

    #[test]
    fn navigation_works_without_telemetry() {
        let mut controller = controller(3, true);
        controller.advance(Direction::Forward);
        controller.jump_to(0);
        assert_eq!(controller.selected_index(), 0);
    }

    #[test]
    fn options_follow_config() {
        let config = CarouselConfig {
            interval_ms: Some(250),
            loop_enabled: Some(false),
        };
        let options = CarouselOptions::from(&config);
        assert!(!options.loop_enabled);
        assert_eq!(options.interval, Duration::from_millis(1000));
    }
}
