// Copyright (c) The tree-report Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{exit_codes::TreeReportExitCode, input::EventSource, output::StderrStyles};
use owo_colors::OwoColorize;
use std::error::Error;
use thiserror::Error;
use tree_reporter::errors::{TreeEventError, UserConfigError};

pub(crate) type Result<T, E = ExpectedError> = std::result::Result<T, E>;

// Note that the #[error()] strings are mostly placeholder messages -- the expected way to print out
// errors is with the display_to_stderr method, which colorizes errors.

/// An expected failure: bad input or an unusable environment, not a bug in tree-report.
#[derive(Debug, Error)]
#[doc(hidden)]
pub enum ExpectedError {
    #[error("user config error")]
    UserConfigError {
        #[from]
        err: UserConfigError,
    },
    #[error("failed to open event stream")]
    EventsOpenError {
        source_name: EventSource,
        #[source]
        err: std::io::Error,
    },
    #[error("failed to read event stream")]
    EventsReadError {
        source_name: EventSource,
        line: usize,
        #[source]
        err: std::io::Error,
    },
    #[error("failed to parse event")]
    EventParseError {
        source_name: EventSource,
        line: usize,
        #[source]
        err: serde_json::Error,
    },
    #[error("event violates the node lifecycle")]
    EventLifecycleError {
        source_name: EventSource,
        line: usize,
        #[source]
        err: TreeEventError,
    },
    #[error("failed to write tree")]
    WriteOutputError {
        #[source]
        err: std::io::Error,
    },
}

impl ExpectedError {
    /// Returns the exit code for the process.
    pub fn process_exit_code(&self) -> i32 {
        match self {
            Self::UserConfigError { .. }
            | Self::EventsOpenError { .. }
            | Self::EventsReadError { .. } => TreeReportExitCode::SETUP_ERROR,
            Self::EventParseError { .. } | Self::EventLifecycleError { .. } => {
                TreeReportExitCode::EVENT_STREAM_INVALID
            }
            Self::WriteOutputError { .. } => TreeReportExitCode::WRITE_OUTPUT_ERROR,
        }
    }

    /// Displays this error to stderr.
    pub fn display_to_stderr(&self, styles: &StderrStyles) {
        let mut next_error = match &self {
            Self::UserConfigError { err } => {
                tracing::error!("{err}");
                err.source()
            }
            Self::EventsOpenError { source_name, err } => {
                tracing::error!(
                    "failed to open event stream at {}",
                    source_name.style(styles.bold)
                );
                Some(err as &dyn Error)
            }
            Self::EventsReadError {
                source_name,
                line,
                err,
            } => {
                tracing::error!(
                    "failed to read line {} of {}",
                    line.style(styles.bold),
                    source_name.style(styles.bold)
                );
                Some(err as &dyn Error)
            }
            Self::EventParseError {
                source_name,
                line,
                err,
            } => {
                tracing::error!(
                    "invalid event at line {} of {}",
                    line.style(styles.bold),
                    source_name.style(styles.bold)
                );
                Some(err as &dyn Error)
            }
            Self::EventLifecycleError {
                source_name,
                line,
                err,
            } => {
                tracing::error!(
                    "event at line {} of {} cannot be applied",
                    line.style(styles.bold),
                    source_name.style(styles.bold)
                );
                Some(err as &dyn Error)
            }
            Self::WriteOutputError { err } => {
                tracing::error!("failed to write tree to stdout");
                Some(err as &dyn Error)
            }
        };

        while let Some(err) = next_error {
            tracing::error!(target: "tree_report::no_heading", "\nCaused by:\n  {}", err);
            next_error = err.source();
        }
    }
}
