// Copyright (c) The tree-report Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{FailureDetail, ReportEntry, ResultStatus, TestExecutionResult, TestIdentifier, UniqueId};
use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A serialized execution event, as recorded by an execution listener.
///
/// An event stream is a sequence of these, one JSON object per line:
///
/// ```json
/// {"event":"started","id":"e","display-name":"Engine","kind":"engine"}
/// {"event":"skipped","id":"t","parent-id":"e","display-name":"t()","kind":"test","reason":"slow"}
/// {"event":"finished","id":"e","status":"successful","duration-ms":5}
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case", rename_all_fields = "kebab-case")]
pub enum ExecutionEvent {
    /// A unit started executing.
    Started {
        /// The unit.
        #[serde(flatten)]
        identifier: TestIdentifier,
    },

    /// A unit was skipped.
    Skipped {
        /// The unit.
        #[serde(flatten)]
        identifier: TestIdentifier,
        /// Why it was skipped.
        reason: String,
    },

    /// A running unit published a report entry.
    Reported {
        /// The unit.
        id: UniqueId,
        /// The entry.
        #[serde(flatten)]
        entry: ReportRecord,
    },

    /// A unit finished.
    Finished {
        /// The unit.
        id: UniqueId,
        /// The result.
        #[serde(flatten)]
        result: ResultRecord,
        /// How long the unit ran. If absent, the time since the start event is used.
        #[serde(default)]
        duration_ms: Option<u64>,
    },
}

/// The serialized form of a [`ReportEntry`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRecord {
    /// When the entry was published. Defaults to the time the event is applied.
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
    /// The key-value pairs, in order.
    pub pairs: IndexMap<String, String>,
}

impl From<ReportRecord> for ReportEntry {
    fn from(record: ReportRecord) -> Self {
        let mut entry = match record.timestamp {
            Some(timestamp) => ReportEntry::new(timestamp),
            None => ReportEntry::now(),
        };
        for (key, value) in record.pairs {
            entry.insert(key, value);
        }
        entry
    }
}

/// The serialized form of a [`TestExecutionResult`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// The outcome.
    pub status: ResultStatus,
    /// The failure message, if any.
    #[serde(default)]
    pub message: Option<String>,
}

impl From<ResultRecord> for TestExecutionResult {
    fn from(record: ResultRecord) -> Self {
        TestExecutionResult {
            status: record.status,
            failure: record.message.map(FailureDetail::new),
        }
    }
}
