// Copyright (c) The tree-report Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User-specific configuration for tree-report.
//!
//! ## Config file location
//!
//! The user config file is looked up at `$XDG_CONFIG_HOME/tree-report/config.toml`,
//! falling back to `~/.config/tree-report/config.toml`.
//!
//! ## Configuration hierarchy
//!
//! Settings are resolved in the following order (highest priority first):
//!
//! 1. CLI arguments (e.g. `--theme=ascii`)
//! 2. Environment variables (e.g. `TREE_REPORT_THEME=ascii`)
//! 3. User config (`[ui]` section)
//! 4. Auto-detection

mod discovery;
mod elements;
mod imp;

pub use discovery::*;
pub use elements::*;
pub use imp::*;
