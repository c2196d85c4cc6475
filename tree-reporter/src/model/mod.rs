// Copyright (c) The tree-report Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The in-memory tree of a test run.
//!
//! The main types here are [`TreeBuilder`], which applies execution events
//! one at a time, and [`ExecutionTree`], the sealed result that gets printed.

mod builder;
mod events;
mod identifier;
mod node;
mod report_entry;

pub use builder::*;
pub use events::*;
pub use identifier::*;
pub use node::*;
pub use report_entry::*;
