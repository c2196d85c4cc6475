// Copyright (c) The tree-report Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Display helpers for timestamps, durations and messages.

use chrono::NaiveDateTime;
use std::{fmt, time::Duration};

/// Leaf nodes that ran longer than this show their duration.
pub(super) const SLOW_LEAF_THRESHOLD: Duration = Duration::from_millis(10_000);

/// Formats a report entry timestamp as `yyyy-MM-ddTHH:mm:ss.SSS`.
pub(super) struct DisplayReportTimestamp(pub(super) NaiveDateTime);

impl fmt::Display for DisplayReportTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S%.3f"))
    }
}

/// Formats a duration as whole milliseconds, e.g. `15000 ms`.
pub(super) struct DisplayDurationMillis(pub(super) Duration);

impl fmt::Display for DisplayDurationMillis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ms", self.0.as_millis())
    }
}

/// Splits a message on any line break: `\r\n`, `\n`, `\r`, vertical tab, form
/// feed, next line, line separator or paragraph separator.
///
/// Trailing empty lines are dropped. At least one line is always returned,
/// even for an empty message or one made only of line breaks.
pub(super) fn split_message_lines(message: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = message.char_indices().peekable();
    while let Some((index, c)) = chars.next() {
        match c {
            '\r' => {
                lines.push(&message[start..index]);
                start = index + 1;
                if let Some((next_index, '\n')) = chars.peek().copied() {
                    chars.next();
                    start = next_index + 1;
                }
            }
            '\n' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}' => {
                lines.push(&message[start..index]);
                start = index + c.len_utf8();
            }
            _ => {}
        }
    }
    lines.push(&message[start..]);

    while lines.len() > 1 && lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Returns true if the line contains nothing but spaces and control characters.
pub(super) fn is_blank(line: &str) -> bool {
    line.chars().all(|c| c <= ' ')
}
