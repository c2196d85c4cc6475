// Copyright (c) The tree-report Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Draws a recorded test run as a tree on the console.
//!
//! `tree-report` reads execution events (one JSON object per line) from a file
//! or standard input, builds the tree of engines, containers and tests, and
//! prints it with the Unicode or ASCII theme.

#![warn(missing_docs)]

mod dispatch;
mod errors;
mod exit_codes;
mod input;
mod output;

#[doc(hidden)]
pub use dispatch::*;
#[doc(hidden)]
pub use errors::*;
pub use exit_codes::TreeReportExitCode;
#[doc(hidden)]
pub use output::OutputWriter;
