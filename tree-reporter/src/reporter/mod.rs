// Copyright (c) The tree-report Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Console rendering of an execution tree.

mod formatters;
mod printer;
mod styles;
mod theme;

pub use printer::*;
pub use styles::*;
pub use theme::*;
