// Copyright (c) The tree-report Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{errors::ThemeParseError, model::ResultStatus};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The set of glyphs used to draw the tree.
///
/// Themes are plain lookup tables. Pick [`Theme::Ascii`] for terminals that
/// can't display Unicode; the printer never falls back on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    /// Box-drawing characters and check marks.
    Unicode,
    /// Plain ASCII.
    Ascii,
}

impl Theme {
    /// Returns the Unicode theme if stdout supports Unicode, the ASCII theme otherwise.
    pub fn detect() -> Self {
        if supports_unicode::on(supports_unicode::Stream::Stdout) {
            Self::Unicode
        } else {
            Self::Ascii
        }
    }

    /// The line printed above the tree.
    pub fn root(self) -> &'static str {
        match self {
            Self::Unicode => "╷",
            Self::Ascii => ".",
        }
    }

    /// One indentation unit below a node that has more siblings after it.
    pub fn vertical(self) -> &'static str {
        match self {
            Self::Unicode => "│  ",
            Self::Ascii => "| ",
        }
    }

    /// One indentation unit below a node that is the last of its siblings.
    ///
    /// Always as wide as [`vertical`](Self::vertical).
    pub fn blank(self) -> &'static str {
        match self {
            Self::Unicode => "   ",
            Self::Ascii => "  ",
        }
    }

    /// The bullet of a node that has more siblings after it.
    pub fn entry(self) -> &'static str {
        match self {
            Self::Unicode => "├─",
            Self::Ascii => "+--",
        }
    }

    /// The bullet of the last node among its siblings.
    pub fn end(self) -> &'static str {
        match self {
            Self::Unicode => "└─",
            Self::Ascii => "'--",
        }
    }

    /// The icon for a finished node.
    pub fn status(self, status: ResultStatus) -> &'static str {
        match (self, status) {
            (Self::Unicode, ResultStatus::Successful) => "✔",
            (Self::Unicode, ResultStatus::Aborted) => "■",
            (Self::Unicode, ResultStatus::Failed) => "✘",
            (Self::Ascii, ResultStatus::Successful) => "[OK]",
            (Self::Ascii, ResultStatus::Aborted) => "[A]",
            (Self::Ascii, ResultStatus::Failed) => "[X]",
        }
    }

    /// The icon for a node without a result.
    pub fn skipped(self) -> &'static str {
        match self {
            Self::Unicode => "↷",
            Self::Ascii => "[S]",
        }
    }

    /// Returns the string representations of all known themes.
    pub fn variants() -> &'static [&'static str] {
        &["unicode", "ascii"]
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unicode => write!(f, "unicode"),
            Self::Ascii => write!(f, "ascii"),
        }
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unicode" => Ok(Self::Unicode),
            "ascii" => Ok(Self::Ascii),
            other => Err(ThemeParseError::new(other)),
        }
    }
}
