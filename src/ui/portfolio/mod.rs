// SPDX-License-Identifier: MPL-2.0
//! Portfolio screen: a header, one card per photo and a call to action.
//!
//! Photos are requested once, on the first visit. Whatever the content store
//! returns is shown as is; an empty or failed query shows the sample photos
//! instead, never a mix of both.

pub mod card;

use crate::content::{load_photos, ImageUrlBuilder, Origin, Photo, PhotoList, SanityClient};
use crate::i18n::fluent::I18n;
use crate::media::{ImageLocation, ImageOutcome, ImageSlot, ImageSource};
use crate::telemetry::{ImageViewContext, Telemetry};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::footer;
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{Element, Length, Task};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub enum Message {
    PhotosLoaded(Vec<Photo>),
    ImageResolved { id: String, outcome: ImageOutcome },
}

/// Contextual data needed to render the portfolio.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Everything needed to build the portfolio screen.
#[derive(Debug, Clone)]
pub struct StateConfig {
    /// `None` when no content store is configured.
    pub client: Option<SanityClient>,
    pub images: ImageSource,
    pub telemetry: Telemetry,
}

#[derive(Debug, Clone, PartialEq)]
enum Status {
    Idle,
    Loading,
    Loaded(PhotoList),
}

#[derive(Debug, Clone)]
pub struct State {
    status: Status,
    slots: HashMap<String, ImageSlot>,
    client: Option<SanityClient>,
    urls: Option<ImageUrlBuilder>,
    images: ImageSource,
    telemetry: Telemetry,
}

impl State {
    #[must_use]
    pub fn new(config: StateConfig) -> Self {
        let urls = config
            .client
            .as_ref()
            .and_then(|client| ImageUrlBuilder::from_config(client.config()));
        Self {
            status: Status::Idle,
            slots: HashMap::new(),
            client: config.client,
            urls,
            images: config.images,
            telemetry: config.telemetry,
        }
    }

    /// Photos on display, once the query has settled.
    #[must_use]
    pub fn photos(&self) -> Option<&PhotoList> {
        match &self.status {
            Status::Loaded(list) => Some(list),
            Status::Idle | Status::Loading => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    #[must_use]
    pub fn slot(&self, id: &str) -> Option<&ImageSlot> {
        self.slots.get(id)
    }

    /// Starts the photo query on the first visit. Later visits reuse it.
    pub fn mount(&mut self) -> Task<Message> {
        if self.status != Status::Idle {
            return Task::none();
        }

        match self.client.clone() {
            Some(client) => {
                self.status = Status::Loading;
                Task::perform(
                    async move { load_photos(&client).await },
                    Message::PhotosLoaded,
                )
            }
            None => self.show(Vec::new()),
        }
    }

    pub fn handle_message(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PhotosLoaded(photos) => {
                // A second answer would mix lists.
                if matches!(self.status, Status::Loaded(_)) {
                    return Task::none();
                }
                self.show(photos)
            }
            Message::ImageResolved { id, outcome } => {
                self.settle_image(&id, outcome);
                Task::none()
            }
        }
    }

    fn show(&mut self, fetched: Vec<Photo>) -> Task<Message> {
        let list = PhotoList::select(fetched);
        let task = self.request_images(&list);
        self.status = Status::Loaded(list);
        task
    }

    fn request_images(&mut self, list: &PhotoList) -> Task<Message> {
        let Some(urls) = self.urls.as_ref() else {
            return Task::none();
        };

        let mut tasks = Vec::new();
        for photo in list.photos() {
            let Some(url) = photo.image.as_ref().and_then(|image| urls.card_url(image)) else {
                continue;
            };
            self.slots.insert(photo.id.clone(), ImageSlot::Pending);

            let images = self.images.clone();
            let id = photo.id.clone();
            tasks.push(Task::perform(
                async move { images.resolve(ImageLocation::Remote(url)).await },
                move |outcome| Message::ImageResolved {
                    id: id.clone(),
                    outcome,
                },
            ));
        }
        Task::batch(tasks)
    }

    fn settle_image(&mut self, id: &str, outcome: ImageOutcome) {
        let Some(slot) = self.slots.get_mut(id) else {
            return;
        };
        let loaded = matches!(outcome, ImageOutcome::Ready(_));
        if !slot.settle(outcome) || !loaded {
            return;
        }
        let title = self
            .photos()
            .and_then(|list| list.photos().iter().find(|photo| photo.id == id))
            .map(|photo| photo.title.clone());
        if let Some(title) = title {
            self.telemetry
                .image_view(title, ImageViewContext::Portfolio);
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let header = Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(Text::new(ctx.i18n.tr("portfolio-title")).size(typography::DISPLAY_SM))
            .push(
                Container::new(
                    Text::new(ctx.i18n.tr("portfolio-intro"))
                        .size(typography::BODY_LG)
                        .align_x(Horizontal::Center),
                )
                .max_width(sizing::CONTENT_MAX_WIDTH * 0.7),
            );

        let mut body = Column::new()
            .spacing(spacing::XL)
            .align_x(Horizontal::Center)
            .width(Length::Fill)
            .push(header);

        match &self.status {
            Status::Idle | Status::Loading => {
                body = body.push(
                    Text::new(ctx.i18n.tr("portfolio-loading"))
                        .size(typography::BODY)
                        .color(palette::MUTED),
                );
            }
            Status::Loaded(list) => {
                if list.origin() == Origin::Fallback {
                    body = body.push(
                        Text::new(ctx.i18n.tr("portfolio-sample-notice"))
                            .size(typography::CAPTION)
                            .color(palette::MUTED),
                    );
                }
                body = body.push(self.view_grid(list));
            }
        }

        let gallery = Container::new(body)
            .width(Length::Fill)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .padding([spacing::SECTION, spacing::LG]);

        let page = Column::new()
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .push(gallery)
            .push(view_call_to_action(ctx.i18n))
            .push(footer::view(ctx.i18n));

        scrollable(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn view_grid<'a>(&'a self, list: &'a PhotoList) -> Element<'a, Message> {
        let cards = list.photos().iter().enumerate().map(|(index, photo)| {
            card::view(card::ViewContext {
                photo,
                index,
                slot: self.slots.get(&photo.id),
            })
        });

        Row::with_children(cards)
            .spacing(spacing::LG)
            .wrap()
            .vertical_spacing(spacing::LG)
            .into()
    }
}

fn view_call_to_action<'a>(i18n: &I18n) -> Element<'a, Message> {
    // No contact screen exists, so the button stays inert.
    let contact = button(Text::new(i18n.tr("portfolio-cta-button")).size(typography::BODY_LG))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::cta_primary);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .max_width(sizing::CONTENT_MAX_WIDTH * 0.6)
        .push(Text::new(i18n.tr("portfolio-cta-title")).size(typography::TITLE_LG))
        .push(
            Text::new(i18n.tr("portfolio-cta-body"))
                .size(typography::BODY_LG)
                .align_x(Horizontal::Center),
        )
        .push(contact);

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::SECTION, spacing::LG])
        .center_x(Length::Fill)
        .style(styles::container::section)
        .into()
}
