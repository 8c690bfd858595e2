// SPDX-License-Identifier: MPL-2.0
//! Photo carousel on the Home screen.
//!
//! Wraps a [`SlideController`] with the per-slide image slots and renders
//! the current slide with its caption, the chevrons and the dot indicators.

use crate::i18n::fluent::I18n;
use crate::media::{ImageLocation, ImageOutcome, ImageSlot, ImageSource};
use crate::telemetry::{ImageViewContext, Telemetry};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::placeholder::Placeholder;
use crate::ui::state::{CarouselOptions, Direction, Slide, SlideController};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, tooltip, Column, Container, Row, Space, Stack, Text};
use iced::{ContentFit, Element, Length, Subscription, Task};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Message {
    Previous,
    Next,
    GoTo(usize),
    Tick,
    ImageResolved { index: usize, outcome: ImageOutcome },
}

/// Contextual data needed to render the carousel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub struct State {
    controller: SlideController,
    slots: Vec<ImageSlot>,
    images_requested: bool,
    asset_dir: PathBuf,
    images: ImageSource,
    telemetry: Telemetry,
}

impl State {
    #[must_use]
    pub fn new(
        slides: Vec<Slide>,
        options: CarouselOptions,
        asset_dir: PathBuf,
        images: ImageSource,
        telemetry: Telemetry,
    ) -> Self {
        let slots = vec![ImageSlot::Pending; slides.len()];
        Self {
            controller: SlideController::new(slides, options, telemetry.clone()),
            slots,
            images_requested: false,
            asset_dir,
            images,
            telemetry,
        }
    }

    #[must_use]
    pub fn controller(&self) -> &SlideController {
        &self.controller
    }

    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&ImageSlot> {
        self.slots.get(index)
    }

    /// Mounts the controller and, the first time, starts loading every slide.
    pub fn mount(&mut self) -> Task<Message> {
        self.controller.mount();
        if self.images_requested {
            return Task::none();
        }
        self.images_requested = true;

        let tasks = self
            .controller
            .slides()
            .iter()
            .enumerate()
            .map(|(index, slide)| {
                let location = ImageLocation::from_reference(&slide.image, &self.asset_dir);
                let images = self.images.clone();
                Task::perform(
                    async move { images.resolve(location).await },
                    move |outcome| Message::ImageResolved { index, outcome },
                )
            });
        Task::batch(tasks)
    }

    pub fn unmount(&mut self) {
        self.controller.unmount();
    }

    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Previous => {
                self.controller.advance(Direction::Backward);
            }
            Message::Next => {
                self.controller.advance(Direction::Forward);
            }
            Message::GoTo(index) => {
                self.controller.jump_to(index);
            }
            Message::Tick => {
                self.controller.tick();
            }
            Message::ImageResolved { index, outcome } => self.settle_image(index, outcome),
        }
    }

    fn settle_image(&mut self, index: usize, outcome: ImageOutcome) {
        let Some(slot) = self.slots.get_mut(index) else {
            return;
        };
        let loaded = matches!(outcome, ImageOutcome::Ready(_));
        if slot.settle(outcome) && loaded {
            if let Some(slide) = self.controller.slides().get(index) {
                self.telemetry
                    .image_view(slide.title.clone(), ImageViewContext::Carousel);
            }
        }
    }

    /// Auto-advance timer, present only while mounted.
    pub fn subscription(&self) -> Subscription<Message> {
        self.controller.subscription().map(|_| Message::Tick)
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let Some(slide) = self.controller.current() else {
            return Container::new(Text::new(ctx.i18n.tr("carousel-empty")).size(typography::BODY_LG))
                .width(Length::Fill)
                .height(Length::Fixed(sizing::CAROUSEL_HEIGHT))
                .center_x(Length::Fill)
                .center_y(Length::Fixed(sizing::CAROUSEL_HEIGHT))
                .style(styles::container::carousel_frame)
                .into();
        };
        let index = self.controller.selected_index();
        let current = (index + 1).to_string();
        let total = self.controller.slide_count().to_string();

        let picture: Element<'a, Message> = match self.slots.get(index).and_then(ImageSlot::image) {
            Some(data) => image(data.handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Cover)
                .into(),
            None => Placeholder::Slide.view().into(),
        };

        let caption = Container::new(
            Column::new()
                .spacing(spacing::XS)
                .push(Text::new(slide.title.as_str()).size(typography::TITLE_LG))
                .push(Text::new(slide.subtitle.as_str()).size(typography::BODY_LG))
                .push(
                    Text::new(ctx.i18n.tr_with_args(
                        "carousel-counter",
                        &[("current", current.as_str()), ("total", total.as_str())],
                    ))
                    .size(typography::CAPTION)
                    .color(palette::GRANITE),
                ),
        )
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::XL])
        .style(styles::container::caption_scrim);

        let caption_layer = Container::new(caption)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(Vertical::Bottom);

        let chevrons = Row::new()
            .width(Length::Fill)
            .padding(spacing::MD)
            .align_y(Vertical::Center)
            .push(nav_button(
                icons::chevron_left(),
                ctx.i18n.tr("carousel-previous"),
                Message::Previous,
            ))
            .push(Space::new().width(Length::Fill))
            .push(nav_button(
                icons::chevron_right(),
                ctx.i18n.tr("carousel-next"),
                Message::Next,
            ));

        let chevron_layer = Container::new(chevrons)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(Vertical::Center);

        let dots_layer = Container::new(self.view_dots(ctx.i18n))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Bottom);

        let stack = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(picture)
            .push(caption_layer)
            .push(chevron_layer)
            .push(dots_layer);

        Container::new(stack)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CAROUSEL_HEIGHT))
            .clip(true)
            .style(styles::container::carousel_frame)
            .into()
    }

    fn view_dots(&self, i18n: &I18n) -> Element<'_, Message> {
        let selected = self.controller.selected_index();
        let dots = (0..self.controller.slide_count()).map(|index| {
            let number = (index + 1).to_string();
            let label = i18n.tr_with_args("carousel-go-to-slide", &[("number", number.as_str())]);
            dot(index, index == selected, label)
        });
        Row::with_children(dots)
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .into()
    }
}

/// Dot indicator; the selected one is drawn wider.
fn dot<'a>(index: usize, selected: bool, label: String) -> Element<'a, Message> {
    let width = if selected {
        sizing::DOT_SELECTED_WIDTH
    } else {
        sizing::DOT_SIZE
    };
    let dot = button(Space::new())
        .width(Length::Fixed(width))
        .height(Length::Fixed(sizing::DOT_SIZE))
        .padding(0)
        .style(styles::button::dot(selected))
        .on_press(Message::GoTo(index));
    tooltip(dot, Text::new(label), tooltip::Position::Top)
        .gap(spacing::XXS)
        .into()
}

fn nav_button<'a>(
    icon: iced::widget::Svg<'a>,
    label: String,
    message: Message,
) -> Element<'a, Message> {
    let glyph = icons::tinted(icon, sizing::ICON_MD, palette::WHITE);
    let nav = button(
        Container::new(glyph)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fixed(sizing::CAROUSEL_NAV_BUTTON))
    .height(Length::Fixed(sizing::CAROUSEL_NAV_BUTTON))
    .padding(0)
    .style(styles::button::carousel_nav)
    .on_press(message);
    tooltip(nav, Text::new(label), tooltip::Position::Bottom)
        .gap(spacing::XXS)
        .into()
}
