// Copyright (c) The tree-report Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors produced by tree-reporter.

use crate::model::UniqueId;
use camino::Utf8PathBuf;
use std::{fmt, io};
use thiserror::Error;

/// An execution event that violates the lifecycle of a tree node.
///
/// Lifecycle violations are bugs in whatever produces the events. They are
/// reported instead of being applied, so that the single-assignment state of
/// each node is never overwritten.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum TreeEventError {
    /// A start or skip event arrived for an identifier that is already in the tree.
    #[error("execution of `{id}` was already started")]
    AlreadyStarted {
        /// The identifier.
        id: UniqueId,
    },

    /// The parent of a new node is not in the tree.
    #[error("`{id}` has parent `{parent_id}`, which was never started")]
    UnknownParent {
        /// The identifier of the new node.
        id: UniqueId,
        /// The missing parent.
        parent_id: UniqueId,
    },

    /// A start or skip event named a parent that was already finished or skipped.
    #[error("`{id}` has parent `{parent_id}`, which was already {sealed}")]
    ParentSealed {
        /// The identifier of the new node.
        id: UniqueId,
        /// The sealed parent.
        parent_id: UniqueId,
        /// How the parent was sealed.
        sealed: SealedKind,
    },

    /// A report or finish event arrived for an identifier that was never started.
    #[error("cannot {action} `{id}`: execution was never started")]
    NotStarted {
        /// The identifier.
        id: UniqueId,
        /// What the event tried to do.
        action: LifecycleAction,
    },

    /// An event arrived for a node that was already finished or skipped.
    #[error("cannot {action} `{id}`: it was already {sealed}")]
    AlreadySealed {
        /// The identifier.
        id: UniqueId,
        /// What the event tried to do.
        action: LifecycleAction,
        /// How the node was sealed.
        sealed: SealedKind,
    },
}

/// The operation a rejected lifecycle event attempted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleAction {
    /// Skip the node.
    Skip,
    /// Attach a report entry.
    Report,
    /// Finish the node.
    Finish,
}

impl fmt::Display for LifecycleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skip => write!(f, "skip"),
            Self::Report => write!(f, "report an entry for"),
            Self::Finish => write!(f, "finish"),
        }
    }
}

/// The terminal state a node was already in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SealedKind {
    /// The node was skipped.
    Skipped,
    /// The node finished with a result.
    Finished,
}

impl fmt::Display for SealedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skipped => write!(f, "skipped"),
            Self::Finished => write!(f, "finished"),
        }
    }
}

/// Error returned while parsing a [`Theme`](crate::reporter::Theme) from a string.
#[derive(Clone, Debug, Error)]
#[error(
    "unrecognized value for theme: {input}\n(known values: {})",
    crate::reporter::Theme::variants().join(", ")
)]
pub struct ThemeParseError {
    input: String,
}

impl ThemeParseError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// An error that occurred while loading the user config.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UserConfigError {
    /// The user config file was explicitly requested but does not exist.
    #[error("user config file not found at {path}")]
    FileNotFound {
        /// The path that was requested.
        path: Utf8PathBuf,
    },

    /// The user config file could not be read.
    #[error("failed to read user config at {path}")]
    Read {
        /// The path to the file.
        path: Utf8PathBuf,
        /// The underlying error.
        #[source]
        error: io::Error,
    },

    /// The user config file is not valid TOML, or has invalid values.
    #[error("failed to parse user config at {path}")]
    Parse {
        /// The path to the file.
        path: Utf8PathBuf,
        /// The underlying error.
        #[source]
        error: toml::de::Error,
    },

    /// The user config directory is not valid UTF-8.
    #[error("user config directory path is not valid UTF-8")]
    NonUtf8Path {
        /// The underlying error.
        #[source]
        error: camino::FromPathBufError,
    },
}
