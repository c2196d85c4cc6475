// Copyright (c) The tree-report Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `[ui]` section of the user config.

use crate::reporter::Theme;
use serde::Deserialize;
use std::fmt;

/// Which theme to draw the tree with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeSetting {
    /// Unicode if stdout supports it, ASCII otherwise.
    #[default]
    Auto,
    /// Always use [`Theme::Unicode`].
    Unicode,
    /// Always use [`Theme::Ascii`].
    Ascii,
}

impl ThemeSetting {
    /// Resolves this setting to a concrete theme.
    pub fn resolve(self) -> Theme {
        match self {
            Self::Auto => Theme::detect(),
            Self::Unicode => Theme::Unicode,
            Self::Ascii => Theme::Ascii,
        }
    }
}

impl fmt::Display for ThemeSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Unicode => write!(f, "unicode"),
            Self::Ascii => write!(f, "ascii"),
        }
    }
}

/// When to color the output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorSetting {
    /// Color if the output stream supports it.
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

/// UI configuration (deserialized form). Unset fields are `None`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(super) struct DeserializedUiConfig {
    pub(super) theme: Option<ThemeSetting>,
    pub(super) color: Option<ColorSetting>,
}

/// Resolved UI configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiConfig {
    /// Which theme to draw the tree with.
    pub theme: ThemeSetting,
    /// When to color the output.
    pub color: ColorSetting,
}

impl UiConfig {
    pub(super) fn resolve(user: Option<&DeserializedUiConfig>) -> Self {
        let defaults = Self::default();
        match user {
            Some(user) => Self {
                theme: user.theme.unwrap_or(defaults.theme),
                color: user.color.unwrap_or(defaults.color),
            },
            None => defaults,
        }
    }
}
