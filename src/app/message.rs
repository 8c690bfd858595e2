// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::Screen;
use crate::ui::about;
use crate::ui::home;
use crate::ui::navbar;
use crate::ui::portfolio;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Home(home::Message),
    Portfolio(portfolio::Message),
    About(about::Message),
    SwitchScreen(Screen),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ADVENTURES_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Screen shown at startup. Defaults to the home screen.
    pub screen: Option<Screen>,
    /// Record interaction telemetry even if the config leaves it off.
    pub telemetry: bool,
}
