// SPDX-License-Identifier: MPL-2.0
//! Parallax hero at the top of the Home screen.
//!
//! The background image sits in a clipped frame and is pushed down by the
//! parallax offset, so it scrolls at half the speed of the page.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::media::ImageSlot;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::placeholder::Placeholder;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, Column, Container, Row, Space, Stack, Text};
use iced::{ContentFit, Element, Length};

/// Background photograph, relative to the asset directory.
pub const HERO_IMAGE: &str = "/images/bulk images/DJI_0073.jpg";

/// Contextual data needed to render the hero.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub background: &'a ImageSlot,
    /// Downward shift of the background, in logical pixels.
    pub parallax_offset: f32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let background: Element<'_, Message> = match ctx.background.image() {
        Some(data) => image(data.handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::HERO_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        None => Container::new(Placeholder::Hero.view())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::HERO_HEIGHT))
            .into(),
    };

    // Clipped by the outer frame once the shift exceeds its height.
    let parallax_layer = Column::new()
        .width(Length::Fill)
        .push(Space::new().height(Length::Fixed(ctx.parallax_offset)))
        .push(background);

    let overlay = Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::hero_overlay);

    let headline = Column::new()
        .align_x(Horizontal::Center)
        .push(
            Text::new(ctx.i18n.tr("hero-title-line1"))
                .size(typography::DISPLAY)
                .color(palette::WHITE),
        )
        .push(
            Text::new(ctx.i18n.tr("hero-title-line2"))
                .size(typography::DISPLAY)
                .color(palette::LIGHTNING),
        );

    let tagline = Container::new(
        Text::new(ctx.i18n.tr("hero-tagline"))
            .size(typography::TITLE_SM)
            .color(palette::GRANITE)
            .align_x(Horizontal::Center),
    )
    .max_width(sizing::CONTENT_MAX_WIDTH * 0.6);

    let portfolio_button = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(Text::new(ctx.i18n.tr("hero-cta-portfolio")).size(typography::BODY_LG))
            .push(icons::tinted(
                icons::arrow_right(),
                sizing::ICON_SM,
                palette::MIDNIGHT_SLATE,
            )),
    )
    .padding([spacing::SM, spacing::LG])
    .style(styles::button::cta_primary)
    .on_press(Message::ViewPortfolio);

    // No blog screen exists, so the stories button stays inert.
    let stories_button = button(Text::new(ctx.i18n.tr("hero-cta-stories")).size(typography::BODY_LG))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::cta_secondary);

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(portfolio_button)
        .push(stories_button);

    let content = Container::new(
        Column::new()
            .spacing(spacing::LG)
            .align_x(Horizontal::Center)
            .push(headline)
            .push(tagline)
            .push(actions),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::XL)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center);

    let stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(parallax_layer)
        .push(overlay)
        .push(content);

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HERO_HEIGHT))
        .clip(true)
        .into()
}
