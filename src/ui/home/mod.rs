// SPDX-License-Identifier: MPL-2.0
//! Home screen: parallax hero, photo carousel and footer in one scrollable
//! page.
//!
//! The screen owns one [`ScrollTracker`] and one carousel. Both are mounted
//! when the screen becomes active and unmounted when the user leaves it.

pub mod carousel;
pub mod hero;

use crate::i18n::fluent::I18n;
use crate::media::{ImageLocation, ImageOutcome, ImageSlot, ImageSource};
use crate::telemetry::{ImageViewContext, Telemetry};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::footer;
use crate::ui::state::{CarouselOptions, ScrollTracker, Slide};
use iced::widget::scrollable::Viewport;
use iced::widget::{scrollable, Column, Container};
use iced::{Element, Length, Subscription, Task};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Message {
    Scrolled(Viewport),
    HeroImageResolved(ImageOutcome),
    Carousel(carousel::Message),
    ViewPortfolio,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenPortfolio,
}

/// Contextual data needed to render the home screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Everything needed to build the home screen.
#[derive(Debug, Clone)]
pub struct StateConfig {
    pub slides: Vec<Slide>,
    pub carousel: CarouselOptions,
    pub asset_dir: PathBuf,
    pub images: ImageSource,
    pub telemetry: Telemetry,
}

#[derive(Debug, Clone)]
pub struct State {
    scroll: ScrollTracker,
    carousel: carousel::State,
    hero_image: ImageSlot,
    hero_requested: bool,
    asset_dir: PathBuf,
    images: ImageSource,
    telemetry: Telemetry,
}

impl State {
    #[must_use]
    pub fn new(config: StateConfig) -> Self {
        let carousel = carousel::State::new(
            config.slides,
            config.carousel,
            config.asset_dir.clone(),
            config.images.clone(),
            config.telemetry.clone(),
        );
        Self {
            scroll: ScrollTracker::new(),
            carousel,
            hero_image: ImageSlot::Pending,
            hero_requested: false,
            asset_dir: config.asset_dir,
            images: config.images,
            telemetry: config.telemetry,
        }
    }

    #[must_use]
    pub fn scroll(&self) -> &ScrollTracker {
        &self.scroll
    }

    #[must_use]
    pub fn carousel(&self) -> &carousel::State {
        &self.carousel
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.scroll.is_mounted()
    }

    /// Activates the screen. Images are requested on the first mount only.
    pub fn mount(&mut self) -> Task<Message> {
        self.scroll.mount();
        let carousel_task = self.carousel.mount().map(Message::Carousel);

        if self.hero_requested {
            return carousel_task;
        }
        self.hero_requested = true;

        let location = ImageLocation::from_reference(hero::HERO_IMAGE, &self.asset_dir);
        let images = self.images.clone();
        let hero_task = Task::perform(
            async move { images.resolve(location).await },
            Message::HeroImageResolved,
        );
        Task::batch([hero_task, carousel_task])
    }

    pub fn unmount(&mut self) {
        self.scroll.unmount();
        self.carousel.unmount();
    }

    pub fn handle_message(&mut self, message: Message) -> Event {
        match message {
            Message::Scrolled(viewport) => {
                self.scroll.on_viewport(&viewport);
                Event::None
            }
            Message::HeroImageResolved(outcome) => {
                let loaded = matches!(outcome, ImageOutcome::Ready(_));
                if self.hero_image.settle(outcome) && loaded {
                    self.telemetry
                        .image_view(hero::HERO_IMAGE, ImageViewContext::Hero);
                }
                Event::None
            }
            Message::Carousel(message) => {
                self.carousel.handle_message(message);
                Event::None
            }
            Message::ViewPortfolio => Event::OpenPortfolio,
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        self.carousel.subscription().map(Message::Carousel)
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let hero = hero::view(hero::ViewContext {
            i18n: ctx.i18n,
            background: &self.hero_image,
            parallax_offset: self.scroll.parallax_offset(),
        });

        let carousel = Container::new(
            self.carousel
                .view(carousel::ViewContext { i18n: ctx.i18n })
                .map(Message::Carousel),
        )
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .padding([spacing::SECTION, spacing::LG]);

        let page = Column::new()
            .width(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center)
            .push(hero)
            .push(carousel)
            .push(footer::view(ctx.i18n));

        scrollable(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(Message::Scrolled)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::ImageData;
    use crate::telemetry::{RecordingSink, TelemetryEvent};
    use crate::ui::state::carousel::default_slides;
    use std::sync::Arc;

    fn home(telemetry: Telemetry) -> State {
        State::new(StateConfig {
            slides: default_slides(),
            carousel: CarouselOptions::default(),
            asset_dir: PathBuf::from("/nonexistent"),
            images: ImageSource::default(),
            telemetry,
        })
    }

    #[test]
    fn mount_and_unmount_cover_both_components() {
        let mut state = home(Telemetry::disabled());
        let _ = state.mount();
        assert!(state.is_mounted());
        assert!(state.carousel().controller().is_mounted());

        state.unmount();
        assert!(!state.is_mounted());
        assert!(!state.carousel().controller().is_mounted());
    }

    #[test]
    fn view_portfolio_bubbles_up() {
        let mut state = home(Telemetry::disabled());
        assert_eq!(
            state.handle_message(Message::ViewPortfolio),
            Event::OpenPortfolio
        );
    }

    #[test]
    fn hero_image_view_is_reported_once() {
        let sink = Arc::new(RecordingSink::new());
        let mut state = home(Telemetry::new(sink.clone()));
        let outcome = || ImageOutcome::Ready(ImageData::from_rgba(1, 1, vec![0, 0, 0, 255]));

        state.handle_message(Message::HeroImageResolved(outcome()));
        state.handle_message(Message::HeroImageResolved(outcome()));

        assert_eq!(
            sink.events(),
            vec![TelemetryEvent::ImageView {
                title: hero::HERO_IMAGE.to_string(),
                context: ImageViewContext::Hero,
            }]
        );
    }

    #[test]
    fn remount_counts_a_new_scroll_registration() {
        let mut state = home(Telemetry::disabled());
        let _ = state.mount();
        let _ = state.mount();
        state.unmount();
        let _ = state.mount();
        assert_eq!(state.scroll().registrations(), 2);
    }
}
