// SPDX-License-Identifier: MPL-2.0
//! Navigation properties of the home carousel controller.

use adventures::telemetry::{CarouselAction, RecordingSink, Telemetry, TelemetryEvent};
use adventures::ui::state::carousel::default_slides;
use adventures::ui::state::{CarouselOptions, Direction, Slide, SlideController};
use std::sync::Arc;
use std::time::Duration;

fn slides(count: usize) -> Vec<Slide> {
    (0..count)
        .map(|i| Slide::new(i, format!("/images/{i}.jpg"), format!("Slide {i}"), ""))
        .collect()
}

fn mounted(count: usize, loop_enabled: bool) -> SlideController {
    let mut controller = SlideController::new(
        slides(count),
        CarouselOptions {
            loop_enabled,
            interval: Duration::from_millis(4000),
        },
        Telemetry::disabled(),
    );
    controller.mount();
    controller
}

#[test]
fn forward_steps_cycle_modulo_slide_count() {
    for count in 1..=13 {
        let mut controller = mounted(count, true);
        for k in 1..=(3 * count) {
            controller.advance(Direction::Forward);
            assert_eq!(controller.selected_index(), k % count, "count {count}, step {k}");
        }
    }
}

#[test]
fn backward_then_forward_returns_to_start() {
    for count in 1..=8 {
        for start in 0..count {
            let mut controller = mounted(count, true);
            controller.jump_to(start);
            controller.advance(Direction::Backward);
            controller.advance(Direction::Forward);
            assert_eq!(controller.selected_index(), start);
        }
    }
}

#[test]
fn ticks_match_forward_steps() {
    let mut ticked = mounted(12, true);
    let mut stepped = mounted(12, true);
    for _ in 0..30 {
        ticked.tick();
        stepped.advance(Direction::Forward);
        assert_eq!(ticked.selected_index(), stepped.selected_index());
    }
}

#[test]
fn clamped_carousel_never_leaves_bounds() {
    let mut controller = mounted(5, false);
    for _ in 0..10 {
        controller.advance(Direction::Forward);
        assert!(controller.selected_index() < 5);
    }
    assert_eq!(controller.selected_index(), 4);

    for _ in 0..10 {
        controller.advance(Direction::Backward);
    }
    assert_eq!(controller.selected_index(), 0);
}

#[test]
fn selection_always_in_range_after_mixed_input() {
    let mut controller = mounted(12, true);
    let script = [3usize, 17, 0, 11, 12, 5, 99, 7];
    for (step, target) in script.iter().enumerate() {
        controller.jump_to(*target);
        if step % 2 == 0 {
            controller.tick();
        } else {
            controller.advance(Direction::Backward);
        }
        assert!(controller.selected_index() < controller.slide_count());
    }
}

#[test]
fn manual_navigation_is_reported_with_the_pre_move_index() {
    let sink = Arc::new(RecordingSink::new());
    let mut controller = SlideController::new(
        default_slides(),
        CarouselOptions::default(),
        Telemetry::new(sink.clone()),
    );
    controller.mount();

    controller.tick();
    controller.advance(Direction::Backward);
    controller.advance(Direction::Backward);
    controller.jump_to(6);
    controller.jump_to(40);

    assert_eq!(
        sink.events(),
        vec![
            TelemetryEvent::CarouselInteraction {
                action: CarouselAction::Prev,
                index: 1,
            },
            TelemetryEvent::CarouselInteraction {
                action: CarouselAction::Prev,
                index: 0,
            },
            TelemetryEvent::CarouselInteraction {
                action: CarouselAction::DotNavigation,
                index: 6,
            },
        ]
    );
    assert_eq!(controller.selected_index(), 6);
}

#[test]
fn default_slides_are_the_twelve_home_photos() {
    let slides = default_slides();
    assert_eq!(slides.len(), 12);
    assert_eq!(slides[0].title, "Aerial Majesty");
    assert_eq!(slides[11].title, "Epic Moments");
    assert!(slides.iter().enumerate().all(|(i, s)| s.position == i));
}
