// Copyright (c) The tree-report Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reading execution events, one JSON object per line.

use crate::errors::{ExpectedError, Result};
use camino::Utf8PathBuf;
use std::{
    fmt,
    fs::File,
    io::{self, BufRead, BufReader},
};
use tracing::debug;
use tree_reporter::model::{ExecutionEvent, TreeBuilder};

/// Where events are read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventSource {
    /// Standard input.
    Stdin,
    /// A file on disk.
    File(Utf8PathBuf),
}

impl EventSource {
    /// `-` or no path at all means standard input.
    pub(crate) fn from_arg(path: Option<Utf8PathBuf>) -> Self {
        match path {
            Some(path) if path.as_str() != "-" => Self::File(path),
            _ => Self::Stdin,
        }
    }

    pub(crate) fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            Self::Stdin => Ok(Box::new(io::stdin().lock())),
            Self::File(path) => {
                let file = File::open(path).map_err(|err| ExpectedError::EventsOpenError {
                    source_name: self.clone(),
                    err,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

impl fmt::Display for EventSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => write!(f, "standard input"),
            Self::File(path) => write!(f, "{path}"),
        }
    }
}

/// Applies every event in `reader` to `builder`, stopping at the first bad
/// line. Blank lines are skipped. Returns the number of events applied.
pub(crate) fn apply_events(
    source_name: &EventSource,
    reader: impl BufRead,
    builder: &mut TreeBuilder,
) -> Result<usize> {
    let mut applied = 0;
    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|err| ExpectedError::EventsReadError {
            source_name: source_name.clone(),
            line: line_number,
            err,
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let event: ExecutionEvent =
            serde_json::from_str(&line).map_err(|err| ExpectedError::EventParseError {
                source_name: source_name.clone(),
                line: line_number,
                err,
            })?;
        builder
            .apply(event)
            .map_err(|err| ExpectedError::EventLifecycleError {
                source_name: source_name.clone(),
                line: line_number,
                err,
            })?;
        applied += 1;
    }

    debug!("applied {applied} event(s) from {source_name}");
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tree_reporter::errors::TreeEventError;

    fn source() -> EventSource {
        EventSource::File("events.jsonl".into())
    }

    #[test]
    fn source_from_arg() {
        assert_eq!(EventSource::from_arg(None), EventSource::Stdin);
        assert_eq!(EventSource::from_arg(Some("-".into())), EventSource::Stdin);
        assert_eq!(
            EventSource::from_arg(Some("a.jsonl".into())),
            EventSource::File("a.jsonl".into())
        );
    }

    #[test]
    fn skips_blank_lines() {
        let events = indoc! {r#"
            {"event":"started","id":"c","display-name":"c","kind":"container"}

            {"event":"finished","id":"c","status":"successful"}
        "#};
        let mut builder = TreeBuilder::new("plan");
        let applied = apply_events(&source(), events.as_bytes(), &mut builder).unwrap();
        assert_eq!(applied, 2);
        assert_eq!(builder.build().primary_line_count(), 2);
    }

    #[test]
    fn parse_error_line_number() {
        let events = indoc! {r#"
            {"event":"started","id":"c","display-name":"c","kind":"container"}

            {"event":"exploded","id":"c"}
        "#};
        let mut builder = TreeBuilder::new("plan");
        let error = apply_events(&source(), events.as_bytes(), &mut builder).unwrap_err();
        assert!(
            matches!(error, ExpectedError::EventParseError { line: 3, .. }),
            "unexpected error: {error:?}"
        );
    }

    #[test]
    fn lifecycle_error_line_number() {
        let events = indoc! {r#"
            {"event":"started","id":"c","display-name":"c","kind":"container"}
            {"event":"started","id":"c","display-name":"c","kind":"container"}
        "#};
        let mut builder = TreeBuilder::new("plan");
        let error = apply_events(&source(), events.as_bytes(), &mut builder).unwrap_err();
        match error {
            ExpectedError::EventLifecycleError { line, err, .. } => {
                assert_eq!(line, 2);
                assert_eq!(err, TreeEventError::AlreadyStarted { id: "c".into() });
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
