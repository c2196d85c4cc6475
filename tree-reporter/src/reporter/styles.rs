// Copyright (c) The tree-report Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::model::{IdentifierKind, ResultStatus};
use owo_colors::{Style, Styled};

/// A semantic color used by the tree printer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// No color: text is always written as is.
    None,
    /// Successful results.
    Successful,
    /// Aborted results.
    Aborted,
    /// Failed results and failure messages.
    Failed,
    /// Skipped nodes, skip reasons, and the placeholder icon.
    Skipped,
    /// Tree structure, durations, and engine or container captions.
    Container,
    /// Test captions.
    Test,
    /// Keys of report entries.
    ReportKey,
    /// Values of report entries.
    ReportValue,
}

impl Color {
    /// The color for a result status.
    pub fn for_status(status: ResultStatus) -> Self {
        match status {
            ResultStatus::Successful => Self::Successful,
            ResultStatus::Aborted => Self::Aborted,
            ResultStatus::Failed => Self::Failed,
        }
    }

    /// The default caption color for a kind of unit.
    pub fn for_kind(kind: IdentifierKind) -> Self {
        match kind {
            IdentifierKind::Engine | IdentifierKind::Container => Self::Container,
            IdentifierKind::Test => Self::Test,
        }
    }
}

/// The styles applied to each [`Color`].
///
/// All styles are plain by default, which makes [`paint`](Self::paint) write
/// text unchanged. Call [`colorize`](Self::colorize) to turn on ANSI escapes.
#[derive(Clone, Debug, Default)]
pub struct Styles {
    is_colorized: bool,
    successful: Style,
    aborted: Style,
    failed: Style,
    skipped: Style,
    container: Style,
    test: Style,
    report_key: Style,
    report_value: Style,
}

impl Styles {
    /// Returns plain styles if `should_colorize` is false, ANSI styles otherwise.
    pub fn new(should_colorize: bool) -> Self {
        let mut styles = Self::default();
        if should_colorize {
            styles.colorize();
        }
        styles
    }

    /// Switches every color to its ANSI style.
    pub fn colorize(&mut self) {
        self.is_colorized = true;
        self.successful = Style::new().green();
        self.aborted = Style::new().yellow();
        self.failed = Style::new().red();
        self.skipped = Style::new().magenta();
        self.container = Style::new().cyan();
        self.test = Style::new().blue();
        self.report_key = Style::new().yellow();
        self.report_value = Style::new().green();
    }

    /// Whether [`colorize`](Self::colorize) was called.
    pub fn is_colorized(&self) -> bool {
        self.is_colorized
    }

    /// Returns the style for a color.
    pub fn style(&self, color: Color) -> Style {
        match color {
            Color::None => Style::new(),
            Color::Successful => self.successful,
            Color::Aborted => self.aborted,
            Color::Failed => self.failed,
            Color::Skipped => self.skipped,
            Color::Container => self.container,
            Color::Test => self.test,
            Color::ReportKey => self.report_key,
            Color::ReportValue => self.report_value,
        }
    }

    /// Wraps `text` in the start and reset escapes of `color`.
    ///
    /// Writes `text` unchanged if colors are off or `color` is [`Color::None`].
    pub fn paint<'a>(&self, color: Color, text: &'a str) -> Styled<&'a str> {
        self.style(color).style(text)
    }
}
