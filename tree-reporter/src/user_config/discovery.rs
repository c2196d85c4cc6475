// Copyright (c) The tree-report Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Discovery of user config file location.

use crate::errors::UserConfigError;
use camino::Utf8PathBuf;
use etcetera::{BaseStrategy, HomeDirError, base_strategy::Xdg};

/// The name of the directory under the config dir that holds tree-report's config.
pub const USER_CONFIG_DIR_NAME: &str = "tree-report";

/// Returns the path the user config file is expected at, if a home directory
/// can be determined.
///
/// This is `$XDG_CONFIG_HOME/tree-report/config.toml`, or
/// `~/.config/tree-report/config.toml` if `XDG_CONFIG_HOME` is unset. The
/// `Xdg` strategy is used on all platforms.
pub fn user_config_path() -> Result<Option<Utf8PathBuf>, UserConfigError> {
    let strategy = match Xdg::new() {
        Ok(s) => s,
        Err(HomeDirError) => return Ok(None),
    };

    let config_path = strategy
        .config_dir()
        .join(USER_CONFIG_DIR_NAME)
        .join("config.toml");

    Utf8PathBuf::try_from(config_path)
        .map(Some)
        .map_err(|error| UserConfigError::NonUtf8Path { error })
}
