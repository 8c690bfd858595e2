// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--asset-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`ADVENTURES_ASSET_DIR`, `ADVENTURES_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! The asset directory holds the photographs referenced by the carousel and
//! hero (`/images/DJI_0006.jpg` resolves to `<asset dir>/images/DJI_0006.jpg`).

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "Adventures";

/// Environment variable to override the asset directory.
pub const ENV_ASSET_DIR: &str = "ADVENTURES_ASSET_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ADVENTURES_CONFIG_DIR";

static CLI_ASSET_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for asset and config directories.
///
/// Called once at startup, before any path resolution. Later calls are
/// ignored so a second window or a test harness cannot clobber the values.
pub fn init_cli_overrides(asset_dir: Option<String>, config_dir: Option<String>) {
    let _ = CLI_ASSET_DIR.set(asset_dir.map(PathBuf::from));
    let _ = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from));
}

fn get_cli_asset_dir() -> Option<PathBuf> {
    CLI_ASSET_DIR.get().and_then(Clone::clone)
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn non_empty_env(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the directory that slide and hero image references resolve against.
///
/// # Resolution Order
///
/// 1. `override_path` parameter (if `Some`), usually `[media] asset_dir`
/// 2. CLI argument `--asset-dir`
/// 3. `ADVENTURES_ASSET_DIR` environment variable (if set and non-empty)
/// 4. Platform data directory with the app name appended
///    (`~/.local/share/Adventures/` on Linux)
pub fn get_asset_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_asset_dir() {
        return Some(path);
    }

    if let Some(path) = non_empty_env(ENV_ASSET_DIR) {
        return Some(path);
    }

    dirs::data_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the asset directory, letting the CLI and environment win over the
/// `[media] asset_dir` setting.
pub fn get_asset_dir(configured: Option<PathBuf>) -> Option<PathBuf> {
    if get_cli_asset_dir().is_some() || non_empty_env(ENV_ASSET_DIR).is_some() {
        return get_asset_dir_with_override(None);
    }
    get_asset_dir_with_override(configured)
}

/// Returns the application config directory path.
///
/// - Linux: `~/.config/Adventures/`
/// - macOS: `~/Library/Application Support/Adventures/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\Adventures\`
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Some(path) = non_empty_env(ENV_CONFIG_DIR) {
        return Some(path);
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
