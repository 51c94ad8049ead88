use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Color theme preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub const fn palette(self) -> ThemePalette {
        match self {
            Self::Light => ThemePalette::LIGHT,
            Self::Dark => ThemePalette::DARK,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = crate::error::CardboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(crate::error::CardboardError::InvalidTheme(s.to_string())),
        }
    }
}

/// Colors for each surface of the board UI, as `#RRGGBB` (`#AARRGGBB` when translucent)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub background: &'static str,
    pub card_background: &'static str,
    pub sidebar: &'static str,
    pub appbar: &'static str,
    pub text: &'static str,
    pub secondary_text: &'static str,
    pub button: &'static str,
    pub border: &'static str,
    pub hover: &'static str,
    pub board_text: &'static str,
    pub sidebar_text: &'static str,
    pub list_title: &'static str,
    pub item_text: &'static str,
}

impl ThemePalette {
    pub const LIGHT: Self = Self {
        background: "#EEEEEE",
        card_background: "#FFFFFF",
        sidebar: "#9E9E9E",
        appbar: "#AB47BC",
        text: "#000000",
        secondary_text: "#424242",
        button: "#AB47BC",
        border: "#1F000000",
        hover: "#BDBDBD",
        board_text: "#000000",
        sidebar_text: "#000000",
        list_title: "#000000",
        item_text: "#000000",
    };

    pub const DARK: Self = Self {
        background: "#212121",
        card_background: "#424242",
        sidebar: "#424242",
        appbar: "#4A148C",
        text: "#FFFFFF",
        secondary_text: "#E0E0E0",
        button: "#7B1FA2",
        border: "#616161",
        hover: "#616161",
        board_text: "#FFFFFF",
        sidebar_text: "#FFFFFF",
        list_title: "#FFFFFF",
        item_text: "#FFFFFF",
    };
}

/// A local account.
///
/// The password is kept in clear text and compared verbatim. This is a
/// convenience login for a single-user board, not an authentication system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    password: String,
    pub theme: Theme,
}

impl User {
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
            theme: Theme::default(),
        }
    }

    pub fn check_password(&self, password: &str) -> bool {
        self.password == password
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switches between light and dark and returns the new theme
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        self.theme
    }
}
