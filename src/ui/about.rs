// SPDX-License-Identifier: MPL-2.0
//! About screen: application name, version, description and license.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::footer;
use iced::{
    alignment::Horizontal,
    widget::{button, rule, scrollable, text, Column, Container, Text},
    Element, Length,
};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Contextual data needed to render the about screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the about screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Back,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Back,
}

/// Process an about screen message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::Back => Event::Back,
    }
}

/// Render the about screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let back_button = button(text(format!("← {}", ctx.i18n.tr("about-back"))).size(typography::BODY))
        .on_press(Message::Back);

    let version = ctx
        .i18n
        .tr_with_args("about-version", &[("version", APP_VERSION)]);

    let content = Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH * 0.6)
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .push(back_button)
        .push(Text::new(ctx.i18n.tr("about-title")).size(typography::DISPLAY_SM))
        .push(
            Column::new()
                .spacing(spacing::XS)
                .push(
                    Text::new(ctx.i18n.tr("nav-brand"))
                        .size(typography::TITLE_MD)
                        .color(palette::LIGHTNING),
                )
                .push(Text::new(version).size(typography::BODY).color(palette::MUTED)),
        )
        .push(Text::new(ctx.i18n.tr("about-description")).size(typography::BODY_LG))
        .push(rule::horizontal(1))
        .push(Text::new(ctx.i18n.tr("about-license")).size(typography::BODY));

    let page = Column::new()
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(Container::new(content).center_x(Length::Fill))
        .push(footer::view(ctx.i18n));

    scrollable(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext { i18n: &i18n });
    }

    #[test]
    fn back_emits_event() {
        assert_eq!(update(Message::Back), Event::Back);
    }

    #[test]
    fn version_line_uses_package_version() {
        let i18n = I18n::default();
        let line = i18n.tr_with_args("about-version", &[("version", APP_VERSION)]);
        assert_eq!(line, format!("Version {APP_VERSION}"));
    }
}
