// SPDX-License-Identifier: MPL-2.0
//! One portfolio photo card.

use super::Message;
use crate::config::MAX_CARD_TAGS;
use crate::content::{CaptureSettings, Photo};
use crate::media::ImageSlot;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{image, svg, Column, Container, Row, Text};
use iced::{Color, ContentFit, Element, Length, Theme};

/// Contextual data needed to render a card.
pub struct ViewContext<'a> {
    pub photo: &'a Photo,
    /// Position in the displayed list; picks the placeholder gradient.
    pub index: usize,
    pub slot: Option<&'a ImageSlot>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let photo = ctx.photo;

    let mut details = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(photo.title.as_str()).size(typography::TITLE_SM))
        .push(muted(Text::new(photo.description.as_str()).size(typography::BODY)));

    if let Some(location) = photo.location.as_deref() {
        details = details.push(labelled(icons::map_pin(), location));
    }

    if let Some(settings) = photo.settings.as_ref() {
        if let Some(camera) = photo.camera.as_deref() {
            details = details.push(labelled(icons::camera(), camera));
        }
        details = details.push(view_settings(settings));
    }

    if !photo.tags.is_empty() {
        let tags = photo
            .tags
            .iter()
            .take(MAX_CARD_TAGS)
            .map(|label| tag(label));
        details = details.push(Row::with_children(tags).spacing(spacing::XS));
    }

    Container::new(
        Column::new()
            .push(view_picture(ctx.slot, ctx.index))
            .push(Container::new(details).padding(spacing::LG)),
    )
    .width(Length::Fixed(sizing::CARD_WIDTH))
    .clip(true)
    .style(styles::container::card)
    .into()
}

fn view_picture(slot: Option<&ImageSlot>, index: usize) -> Element<'_, Message> {
    if let Some(data) = slot.and_then(ImageSlot::image) {
        return image(data.handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into();
    }

    let glyph = icons::tinted(
        icons::camera(),
        sizing::ICON_XXL,
        Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::WHITE
        },
    );
    Container::new(glyph)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::card_placeholder(index))
        .into()
}

fn view_settings(settings: &CaptureSettings) -> Element<'_, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(
            Row::new()
                .spacing(spacing::MD)
                .push(labelled(icons::aperture(), &settings.aperture))
                .push(labelled(icons::timer(), &settings.shutter)),
        )
        .push(
            Row::new()
                .spacing(spacing::MD)
                .push(labelled(icons::cog(), &settings.iso))
                .push(labelled(icons::camera(), &settings.focal)),
        )
        .into()
}

fn tag(label: &str) -> Element<'_, Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::tag)
        .into()
}

fn labelled<'a>(icon: iced::widget::Svg<'a>, label: &'a str) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(tinted_muted(icon))
        .push(muted(Text::new(label).size(typography::BODY)))
        .into()
}

fn tinted_muted(icon: iced::widget::Svg<'_>) -> iced::widget::Svg<'_> {
    icons::sized(icon, sizing::ICON_SM).style(|theme: &Theme, _status: svg::Status| svg::Style {
        color: Some(ColorScheme::for_theme(theme).text_muted),
    })
}

fn muted(text: Text<'_>) -> Text<'_> {
    text.style(|theme: &Theme| iced::widget::text::Style {
        color: Some(ColorScheme::for_theme(theme).text_secondary),
    })
}
