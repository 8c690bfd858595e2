// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Every screen sits below the same navbar, inside a page-colored container.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::about::{self, ViewContext as AboutViewContext};
use crate::ui::home::{self, ViewContext as HomeViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::portfolio::{self, ViewContext as PortfolioViewContext};
use crate::ui::styles;
use iced::{
    widget::{Column, Container},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub dark: bool,
    pub home: &'a home::State,
    pub portfolio: &'a portfolio::State,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Home => ctx
            .home
            .view(HomeViewContext { i18n: ctx.i18n })
            .map(Message::Home),
        Screen::Portfolio => ctx
            .portfolio
            .view(PortfolioViewContext { i18n: ctx.i18n })
            .map(Message::Portfolio),
        Screen::About => about::view(AboutViewContext { i18n: ctx.i18n }).map(Message::About),
    };

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        active: ctx.screen,
        dark: ctx.dark,
    })
    .map(Message::Navbar);

    let column = Column::new().push(navbar_view).push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}
