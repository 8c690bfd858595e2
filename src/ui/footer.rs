// SPDX-License-Identifier: MPL-2.0
//! Site footer shared by the Home and Portfolio screens.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{rule, Column, Container, Text};
use iced::{Element, Length};

pub fn view<'a, M: 'a>(i18n: &I18n) -> Element<'a, M> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(
            Text::new(i18n.tr("footer-brand"))
                .size(typography::TITLE_MD)
                .color(palette::LIGHTNING),
        )
        .push(Text::new(i18n.tr("footer-tagline")).size(typography::BODY))
        .push(rule::horizontal(1))
        .push(
            Text::new(i18n.tr("footer-copyright"))
                .size(typography::CAPTION)
                .color(palette::MUTED),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::LG])
        .center_x(Length::Fill)
        .style(styles::container::footer)
        .into()
}
