// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use std::fmt;
use std::str::FromStr;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Portfolio,
    About,
}

impl Screen {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::Portfolio => "portfolio",
            Screen::About => "about",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Screen {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(Screen::Home),
            "portfolio" => Ok(Screen::Portfolio),
            "about" => Ok(Screen::About),
            other => Err(format!("unknown screen '{other}' (expected home, portfolio or about)")),
        }
    }
}
