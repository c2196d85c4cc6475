// Copyright (c) The tree-report Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! Tree model and console renderer for the results of a hierarchical test run.
//!
//! A run is recorded as a tree of engines, containers and tests. The tree is
//! built incrementally by a [`TreeBuilder`](model::TreeBuilder) as execution
//! events arrive, then handed off as an immutable
//! [`ExecutionTree`](model::ExecutionTree) to a
//! [`TreePrinter`](reporter::TreePrinter), which draws it with the glyphs of
//! a [`Theme`](reporter::Theme).
//!
//! The printed output is byte-for-byte stable for a given tree, theme and
//! color setting, so it can be compared against golden text.

pub mod errors;
pub mod model;
pub mod reporter;
mod time;
pub mod user_config;
