// Copyright (c) The tree-report Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Documented exit codes for `tree-report` failures.
///
/// Unknown/unexpected failures will always result in exit code 1.
pub enum TreeReportExitCode {}

impl TreeReportExitCode {
    /// No errors occurred and the tree was printed.
    pub const OK: i32 = 0;

    /// A user issue happened while setting up a `tree-report` invocation, for
    /// example an invalid user config or an unreadable event stream.
    pub const SETUP_ERROR: i32 = 96;

    /// The event stream could not be parsed, or an event violated the
    /// lifecycle of a node.
    pub const EVENT_STREAM_INVALID: i32 = 104;

    /// Writing data to stdout or stderr produced an error.
    pub const WRITE_OUTPUT_ERROR: i32 = 110;
}
