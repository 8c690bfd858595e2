// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the Home, Portfolio and
//! About screens.
//!
//! The `App` struct wires together localization, configuration, telemetry and
//! the screen components, and translates messages into screen switches,
//! image loading and preference persistence.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::content::{client, SanityClient};
use crate::i18n::fluent::I18n;
use crate::media::ImageSource;
use crate::telemetry::Telemetry;
use crate::ui::home::{self, StateConfig as HomeConfig};
use crate::ui::portfolio::{self, StateConfig as PortfolioConfig};
use crate::ui::state::carousel::default_slides;
use crate::ui::state::CarouselOptions;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    theme_mode: ThemeMode,
    config: Config,
    /// Directory the config was read from, reused when saving.
    config_dir: Option<PathBuf>,
    home: home::State,
    portfolio: portfolio::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("theme_mode", &self.theme_mode)
            .field("home_mounted", &self.home.is_mounted())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 860;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 800;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Content store client, when a project is configured.
fn content_client(config: &Config) -> Option<SanityClient> {
    client::endpoint(&config.content)?;
    match SanityClient::new(config.content.clone()) {
        Ok(client) => Some(client),
        Err(err) => {
            tracing::warn!(error = %err, "content store client unavailable, using sample photos");
            None
        }
    }
}

impl App {
    /// Initializes application state and mounts the startup screen, which may
    /// start loading images or photos.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let i18n = I18n::new(flags.lang, flags.i18n_dir.map(PathBuf::from), &config);

        if let Some(key) = config_warning {
            tracing::warn!("{}", i18n.tr(&key));
        }

        let telemetry = Telemetry::from_config(flags.telemetry || config.telemetry.enabled);
        let images = ImageSource::default();
        let asset_dir =
            paths::get_asset_dir(config.media.asset_dir.clone()).unwrap_or_else(|| PathBuf::from("."));
        tracing::debug!(asset_dir = %asset_dir.display(), "resolved asset directory");

        let home = home::State::new(HomeConfig {
            slides: default_slides(),
            carousel: CarouselOptions::from(&config.carousel),
            asset_dir,
            images: images.clone(),
            telemetry: telemetry.clone(),
        });
        let portfolio = portfolio::State::new(PortfolioConfig {
            client: content_client(&config),
            images,
            telemetry,
        });

        let mut app = App {
            i18n,
            screen: flags.screen.unwrap_or_default(),
            theme_mode: config.general.theme_mode,
            config,
            config_dir,
            home,
            portfolio,
        };

        let task = update::mount_screen(app.screen, &mut app.home, &mut app.portfolio);
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.screen {
            Screen::Home => app_name,
            Screen::Portfolio => format!("{} - {app_name}", self.i18n.tr("nav-portfolio")),
            Screen::About => format!("{} - {app_name}", self.i18n.tr("nav-about")),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let keyboard_sub = subscription::create_keyboard_subscription(self.screen);
        let home_sub = self.home.subscription().map(Message::Home);

        Subscription::batch([keyboard_sub, home_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            theme_mode: &mut self.theme_mode,
            config: &mut self.config,
            config_dir: &self.config_dir,
            home: &mut self.home,
            portfolio: &mut self.portfolio,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Home(home_message) => update::handle_home_message(&mut ctx, home_message),
            Message::Portfolio(portfolio_message) => {
                update::handle_portfolio_message(&mut ctx, portfolio_message)
            }
            Message::About(about_message) => update::handle_about_message(&mut ctx, about_message),
            Message::SwitchScreen(target) => update::handle_screen_switch(&mut ctx, target),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            dark: self.theme_mode.is_dark(),
            home: &self.home,
            portfolio: &self.portfolio,
        })
    }
}
