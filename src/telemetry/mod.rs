// SPDX-License-Identifier: MPL-2.0
//! Best-effort interaction telemetry.
//!
//! Components receive a [`Telemetry`] handle when they are built. The handle
//! may be disabled, in which case every event is dropped; recording an event
//! never fails and never blocks the caller.
//!
//! # Events
//!
//! - [`TelemetryEvent::CarouselInteraction`]: a prev/next/dot click, with the
//!   slide index at the time of the click
//! - [`TelemetryEvent::ImageView`]: an image finished loading and is shown

use std::fmt;
use std::sync::{Arc, Mutex};

/// What the user did on the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    Prev,
    Next,
    DotNavigation,
}

impl CarouselAction {
    /// Wire name of the action, as analytics dashboards expect it.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CarouselAction::Prev => "prev",
            CarouselAction::Next => "next",
            CarouselAction::DotNavigation => "dot_navigation",
        }
    }
}

impl fmt::Display for CarouselAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an image was viewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageViewContext {
    Carousel,
    Hero,
    Portfolio,
}

impl ImageViewContext {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ImageViewContext::Carousel => "carousel",
            ImageViewContext::Hero => "hero",
            ImageViewContext::Portfolio => "portfolio",
        }
    }
}

impl fmt::Display for ImageViewContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TelemetryEvent {
    CarouselInteraction {
        action: CarouselAction,
        index: usize,
    },
    ImageView {
        title: String,
        context: ImageViewContext,
    },
}

/// Destination for telemetry events.
///
/// Implementations must not panic and should return quickly; they run on the
/// UI thread inside the update loop.
pub trait TelemetrySink: Send + Sync {
    fn record(&self, event: &TelemetryEvent);
}

/// Writes events to the log as structured `tracing` records.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TelemetrySink for TracingSink {
    fn record(&self, event: &TelemetryEvent) {
        match event {
            TelemetryEvent::CarouselInteraction { action, index } => {
                tracing::info!(
                    target: "adventures::telemetry",
                    action = action.as_str(),
                    index,
                    "carousel interaction"
                );
            }
            TelemetryEvent::ImageView { title, context } => {
                tracing::info!(
                    target: "adventures::telemetry",
                    title = title.as_str(),
                    context = context.as_str(),
                    "image view"
                );
            }
        }
    }
}

/// Keeps every event in memory for later inspection.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<TelemetryEvent>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<TelemetryEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl TelemetrySink for RecordingSink {
    fn record(&self, event: &TelemetryEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }
}

/// Cheap-clone handle to an optional sink.
#[derive(Clone, Default)]
pub struct Telemetry {
    sink: Option<Arc<dyn TelemetrySink>>,
}

impl fmt::Debug for Telemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Telemetry")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

impl Telemetry {
    /// A handle that drops every event.
    #[must_use]
    pub fn disabled() -> Self {
        Self { sink: None }
    }

    #[must_use]
    pub fn new(sink: Arc<dyn TelemetrySink>) -> Self {
        Self { sink: Some(sink) }
    }

    /// Handle writing to the log, or a disabled one.
    #[must_use]
    pub fn from_config(enabled: bool) -> Self {
        if enabled {
            Self::new(Arc::new(TracingSink))
        } else {
            Self::disabled()
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn emit(&self, event: TelemetryEvent) {
        if let Some(sink) = &self.sink {
            sink.record(&event);
        }
    }

    pub fn carousel_interaction(&self, action: CarouselAction, index: usize) {
        self.emit(TelemetryEvent::CarouselInteraction { action, index });
    }

    pub fn image_view(&self, title: impl Into<String>, context: ImageViewContext) {
        if self.sink.is_some() {
            self.emit(TelemetryEvent::ImageView {
                title: title.into(),
                context,
            });
        }
    }
}
