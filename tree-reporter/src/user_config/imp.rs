// Copyright (c) The tree-report Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User config implementation.

use super::{
    discovery::user_config_path,
    elements::{DeserializedUiConfig, UiConfig},
};
use crate::errors::UserConfigError;
use camino::Utf8Path;
use serde::Deserialize;
use std::{collections::BTreeSet, io};
use tracing::{debug, warn};

/// Special value for `--user-config-file` and `TREE_REPORT_USER_CONFIG_FILE`
/// that skips user config loading entirely.
pub const USER_CONFIG_NONE: &str = "none";

/// Specifies where to load user configuration from.
#[derive(Clone, Copy, Debug)]
pub enum UserConfigLocation<'a> {
    /// Discover user config from the default location.
    Default,

    /// Skip user config loading entirely, using only built-in defaults.
    Isolated,

    /// Load user config from an explicit path.
    ///
    /// Returns an error if the file does not exist.
    Explicit(&'a Utf8Path),
}

impl<'a> UserConfigLocation<'a> {
    /// Creates a user config location from a CLI or environment variable value.
    ///
    /// Returns `Default` if `None`, `Isolated` if `"none"`, otherwise
    /// `Explicit` with the path.
    pub fn from_cli_or_env(s: Option<&'a str>) -> Self {
        match s {
            None => Self::Default,
            Some(s) if s == USER_CONFIG_NONE => Self::Isolated,
            Some(s) => Self::Explicit(Utf8Path::new(s)),
        }
    }
}

/// User configuration with defaults filled in.
#[derive(Clone, Debug, Default)]
pub struct UserConfig {
    /// Resolved UI configuration.
    pub ui: UiConfig,
}

impl UserConfig {
    /// Loads and resolves user configuration.
    pub fn from_location(location: UserConfigLocation<'_>) -> Result<Self, UserConfigError> {
        Self::from_location_with_warnings(location, &mut DefaultUserConfigWarnings)
    }

    fn from_location_with_warnings(
        location: UserConfigLocation<'_>,
        warnings: &mut impl UserConfigWarnings,
    ) -> Result<Self, UserConfigError> {
        let user_config = match location {
            UserConfigLocation::Isolated => {
                debug!("user config: skipping (isolated)");
                None
            }
            UserConfigLocation::Explicit(path) => {
                debug!("user config: loading from explicit path {path}");
                match DeserializedUserConfig::from_path_with_warnings(path, warnings)? {
                    Some(config) => Some(config),
                    None => {
                        return Err(UserConfigError::FileNotFound {
                            path: path.to_owned(),
                        });
                    }
                }
            }
            UserConfigLocation::Default => match user_config_path()? {
                Some(path) => DeserializedUserConfig::from_path_with_warnings(&path, warnings)?,
                None => {
                    debug!("user config: could not determine config directory");
                    None
                }
            },
        };

        Ok(Self {
            ui: UiConfig::resolve(user_config.as_ref().map(|config| &config.ui)),
        })
    }
}

/// Handles warnings produced while loading user config.
trait UserConfigWarnings {
    /// Handle unknown configuration keys found in a user config file.
    fn unknown_config_keys(&mut self, config_file: &Utf8Path, unknown: &BTreeSet<String>);
}

/// Logs warnings through `tracing`.
struct DefaultUserConfigWarnings;

impl UserConfigWarnings for DefaultUserConfigWarnings {
    fn unknown_config_keys(&mut self, config_file: &Utf8Path, unknown: &BTreeSet<String>) {
        let mut unknown_str = String::new();
        match unknown.first() {
            Some(key) if unknown.len() == 1 => {
                // Print this on the same line.
                unknown_str.push_str("key: ");
                unknown_str.push_str(key);
            }
            _ => {
                unknown_str.push_str("keys:\n");
                for ignored_key in unknown {
                    unknown_str.push('\n');
                    unknown_str.push_str("  - ");
                    unknown_str.push_str(ignored_key);
                }
            }
        }

        warn!(
            "in user config file {}, ignoring unknown configuration {unknown_str}",
            config_file,
        );
    }
}

/// User-specific configuration (deserialized form).
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct DeserializedUserConfig {
    #[serde(default)]
    ui: DeserializedUiConfig,
}

impl DeserializedUserConfig {
    /// Returns `Ok(None)` if the file does not exist.
    fn from_path_with_warnings(
        path: &Utf8Path,
        warnings: &mut impl UserConfigWarnings,
    ) -> Result<Option<Self>, UserConfigError> {
        debug!("user config: attempting to load from {path}");
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                debug!("user config: file does not exist at {path}");
                return Ok(None);
            }
            Err(error) => {
                return Err(UserConfigError::Read {
                    path: path.to_owned(),
                    error,
                });
            }
        };

        let (config, unknown) =
            Self::deserialize_toml(&contents).map_err(|error| UserConfigError::Parse {
                path: path.to_owned(),
                error,
            })?;

        if !unknown.is_empty() {
            warnings.unknown_config_keys(path, &unknown);
        }

        debug!("user config: loaded successfully from {path}");
        Ok(Some(config))
    }

    fn deserialize_toml(contents: &str) -> Result<(Self, BTreeSet<String>), toml::de::Error> {
        let deserializer = toml::Deserializer::parse(contents)?;
        let mut unknown = BTreeSet::new();
        let config: DeserializedUserConfig = serde_ignored::deserialize(deserializer, |path| {
            unknown.insert(path.to_string());
        })?;
        Ok((config, unknown))
    }
}
