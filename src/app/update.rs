// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Screen changes go through [`handle_screen_switch`], which unmounts the
//! screen being left before mounting the next one. That keeps at most one
//! carousel timer and one scroll registration alive.

use super::{Message, Screen};
use crate::config::{self, Config};
use crate::ui::about::{self, Event as AboutEvent};
use crate::ui::home::{self, Event as HomeEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::portfolio;
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::path::PathBuf;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub theme_mode: &'a mut ThemeMode,
    pub config: &'a mut Config,
    pub config_dir: &'a Option<PathBuf>,
    pub home: &'a mut home::State,
    pub portfolio: &'a mut portfolio::State,
}

/// Handles navbar messages.
pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message) {
        NavbarEvent::OpenScreen(target) => handle_screen_switch(ctx, target),
        NavbarEvent::ToggleTheme => {
            toggle_theme(ctx);
            Task::none()
        }
    }
}

/// Handles home screen messages.
pub fn handle_home_message(ctx: &mut UpdateContext<'_>, message: home::Message) -> Task<Message> {
    match ctx.home.handle_message(message) {
        HomeEvent::None => Task::none(),
        HomeEvent::OpenPortfolio => handle_screen_switch(ctx, Screen::Portfolio),
    }
}

/// Handles portfolio screen messages.
pub fn handle_portfolio_message(
    ctx: &mut UpdateContext<'_>,
    message: portfolio::Message,
) -> Task<Message> {
    ctx.portfolio
        .handle_message(message)
        .map(Message::Portfolio)
}

/// Handles about screen messages.
pub fn handle_about_message(ctx: &mut UpdateContext<'_>, message: about::Message) -> Task<Message> {
    match about::update(message) {
        AboutEvent::Back => handle_screen_switch(ctx, Screen::Home),
    }
}

/// Leaves the current screen and enters `target`.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    if *ctx.screen == target {
        return Task::none();
    }

    if *ctx.screen == Screen::Home {
        ctx.home.unmount();
    }
    tracing::debug!(from = %ctx.screen, to = %target, "switching screen");
    *ctx.screen = target;

    mount_screen(target, ctx.home, ctx.portfolio)
}

/// Mounts `screen` and returns whatever loading it starts.
pub fn mount_screen(
    screen: Screen,
    home: &mut home::State,
    portfolio: &mut portfolio::State,
) -> Task<Message> {
    match screen {
        Screen::Home => home.mount().map(Message::Home),
        Screen::Portfolio => portfolio.mount().map(Message::Portfolio),
        Screen::About => Task::none(),
    }
}

/// Flips between the light and dark palettes and saves the choice.
fn toggle_theme(ctx: &mut UpdateContext<'_>) {
    let next = if ctx.theme_mode.is_dark() {
        ThemeMode::Light
    } else {
        ThemeMode::Dark
    };
    *ctx.theme_mode = next;
    ctx.config.general.theme_mode = next;

    if let Err(err) = config::save_with_override(ctx.config, ctx.config_dir.clone()) {
        tracing::warn!(error = %err, "failed to save theme preference");
    }
}
