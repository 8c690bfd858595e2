// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar shared by every screen.
//!
//! Links to screens that do not exist in the app (blog, contact) are drawn
//! disabled so the bar keeps the site's layout.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Screen,
    /// Whether the dark palette is in use; picks the toggle label.
    pub dark: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Open(Screen),
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    OpenScreen(Screen),
    ToggleTheme,
}

/// Process a navbar message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::Open(screen) => Event::OpenScreen(screen),
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let brand = button(Text::new(ctx.i18n.tr("nav-brand")).size(typography::TITLE_MD))
        .padding(0)
        .style(styles::button::nav_link(false))
        .on_press(Message::Open(Screen::Home));

    let links = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(link(&ctx, "nav-home", Some(Screen::Home)))
        .push(link(&ctx, "nav-blog", None))
        .push(link(&ctx, "nav-portfolio", Some(Screen::Portfolio)))
        .push(link(&ctx, "nav-about", Some(Screen::About)))
        .push(link(&ctx, "nav-contact", None));

    let theme_key = if ctx.dark {
        "nav-theme-light"
    } else {
        "nav-theme-dark"
    };
    let theme_toggle = button(Text::new(ctx.i18n.tr(theme_key)).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::nav_link(false))
        .on_press(Message::ToggleTheme);

    let bar = Row::new()
        .width(Length::Fill)
        .align_y(Vertical::Center)
        .spacing(spacing::LG)
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(links)
        .push(theme_toggle);

    Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .padding([0.0, spacing::LG])
        .align_y(Vertical::Center)
        .style(styles::container::navbar)
        .into()
}

/// One link; `None` targets render disabled.
fn link<'a>(ctx: &ViewContext<'a>, key: &str, target: Option<Screen>) -> Element<'a, Message> {
    let active = target == Some(ctx.active);
    let label = button(Text::new(ctx.i18n.tr(key)).size(typography::BODY_LG))
        .padding(0)
        .style(styles::button::nav_link(active));
    match target {
        Some(screen) => label.on_press(Message::Open(screen)).into(),
        None => label.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_view_renders_for_every_screen() {
        let i18n = I18n::default();
        for active in [Screen::Home, Screen::Portfolio, Screen::About] {
            let _element = view(ViewContext {
                i18n: &i18n,
                active,
                dark: true,
            });
        }
    }

    #[test]
    fn links_emit_open_screen() {
        assert_eq!(
            update(Message::Open(Screen::Portfolio)),
            Event::OpenScreen(Screen::Portfolio)
        );
        assert_eq!(
            update(Message::Open(Screen::Home)),
            Event::OpenScreen(Screen::Home)
        );
    }

    #[test]
    fn theme_toggle_emits_event() {
        assert_eq!(update(Message::ToggleTheme), Event::ToggleTheme);
    }
}
