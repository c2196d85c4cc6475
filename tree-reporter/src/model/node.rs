// Copyright (c) The tree-report Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{IdentifierKind, ReportEntry};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Display names longer than this many characters are truncated.
pub const MAX_CAPTION_CHARS: usize = 80;

/// The outcome of a finished unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResultStatus {
    /// The unit passed.
    Successful,
    /// The unit was started but aborted, for example by a failed assumption.
    Aborted,
    /// The unit failed.
    Failed,
}

/// Details about why a unit aborted or failed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FailureDetail {
    /// The failure message, possibly spanning several lines.
    pub message: Option<String>,
}

impl FailureDetail {
    /// Creates a failure detail with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

/// The terminal result of a unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestExecutionResult {
    /// The outcome.
    pub status: ResultStatus,
    /// What went wrong, if anything was recorded.
    pub failure: Option<FailureDetail>,
}

impl TestExecutionResult {
    /// A successful result.
    pub fn successful() -> Self {
        Self {
            status: ResultStatus::Successful,
            failure: None,
        }
    }

    /// An aborted result.
    pub fn aborted(failure: Option<FailureDetail>) -> Self {
        Self {
            status: ResultStatus::Aborted,
            failure,
        }
    }

    /// A failed result.
    pub fn failed(failure: Option<FailureDetail>) -> Self {
        Self {
            status: ResultStatus::Failed,
            failure,
        }
    }

    /// Returns the failure message, if one was recorded.
    pub fn failure_message(&self) -> Option<&str> {
        self.failure.as_ref()?.message.as_deref()
    }
}

/// Where a node is in its lifecycle.
///
/// A node starts out `Running` and is sealed exactly once, either as
/// `Skipped` or as `Finished`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeState {
    /// Started, but neither skipped nor finished yet.
    Running,
    /// Skipped, with the reason given.
    Skipped {
        /// Why the unit was skipped.
        reason: String,
    },
    /// Finished with a result.
    Finished(TestExecutionResult),
}

impl NodeState {
    /// Returns the result, if the node finished.
    pub fn result(&self) -> Option<&TestExecutionResult> {
        match self {
            Self::Finished(result) => Some(result),
            Self::Running | Self::Skipped { .. } => None,
        }
    }

    /// Returns the skip reason, if the node was skipped.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Skipped { reason } => Some(reason),
            Self::Running | Self::Finished(_) => None,
        }
    }

    /// Returns true if the node is still running.
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

/// A node in the execution tree.
#[derive(Clone, Debug)]
pub struct TreeNode {
    caption: String,
    kind: IdentifierKind,
    visible: bool,
    pub(super) state: NodeState,
    pub(super) duration: Duration,
    pub(super) reports: Vec<ReportEntry>,
    pub(super) children: Vec<TreeNode>,
}

impl TreeNode {
    pub(super) fn new(display_name: &str, kind: IdentifierKind, visible: bool) -> Self {
        Self {
            caption: create_caption(display_name),
            kind,
            visible,
            state: NodeState::Running,
            duration: Duration::ZERO,
            reports: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The text shown for this node.
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// The kind of unit this node represents.
    pub fn kind(&self) -> IdentifierKind {
        self.kind
    }

    /// Whether this node gets a line of its own.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The lifecycle state of this node.
    pub fn state(&self) -> &NodeState {
        &self.state
    }

    /// Time between start and finish. Zero for nodes that never finished.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Report entries, in the order they were published.
    pub fn reports(&self) -> &[ReportEntry] {
        &self.reports
    }

    /// Children, in the order they were started.
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    /// Counts this node and all of its descendants that are visible.
    pub fn visible_count(&self) -> usize {
        usize::from(self.visible)
            + self
                .children
                .iter()
                .map(TreeNode::visible_count)
                .sum::<usize>()
    }
}

/// A sealed execution tree, ready to be printed.
#[derive(Clone, Debug)]
pub struct ExecutionTree {
    pub(super) root: TreeNode,
}

impl ExecutionTree {
    /// The synthetic node that stands for the whole run.
    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// The number of lines a printer emits for this tree outside of messages
    /// and report entries: one for the root plus one per visible node below it.
    pub fn primary_line_count(&self) -> usize {
        1 + self
            .root
            .children
            .iter()
            .map(TreeNode::visible_count)
            .sum::<usize>()
    }
}

/// Turns a display name into a single-line caption.
///
/// Names over [`MAX_CAPTION_CHARS`] characters are cut and end in `...`.
/// Tabs, line breaks, vertical tabs and form feeds become spaces.
pub fn create_caption(display_name: &str) -> String {
    let mut chars = display_name.chars();
    let mut caption: String = chars
        .by_ref()
        .take(MAX_CAPTION_CHARS)
        .map(|c| match c {
            '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' => ' ',
            c => c,
        })
        .collect();
    if chars.next().is_some() {
        caption.push_str("...");
    }
    caption
}
