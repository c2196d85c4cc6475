// Copyright (c) The tree-report Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    ExecutionEvent, ExecutionTree, IdentifierKind, NodeState, ReportEntry, TestExecutionResult,
    TestIdentifier, TreeNode, UniqueId,
};
use crate::{
    errors::{LifecycleAction, SealedKind, TreeEventError},
    time::{StopwatchStart, stopwatch},
};
use std::{collections::HashMap, time::Duration};
use tracing::debug;

/// Builds an [`ExecutionTree`] from execution events.
///
/// Each event is matched to a node by its identifier. Events that break the
/// node lifecycle (finishing a node twice, reporting for a node that was never
/// started, and so on) are rejected with a [`TreeEventError`] and leave the
/// tree untouched.
///
/// Calling [`build`](Self::build) consumes the builder, so a tree can only be
/// printed after every mutation is done.
#[derive(Debug)]
pub struct TreeBuilder {
    root: TreeNode,
    nodes: HashMap<UniqueId, NodeEntry>,
}

#[derive(Debug)]
struct NodeEntry {
    // Child indexes leading from the root to this node.
    path: Vec<usize>,
    stopwatch: StopwatchStart,
}

impl TreeBuilder {
    /// Creates a builder whose synthetic root node has the given caption.
    pub fn new(plan_caption: &str) -> Self {
        Self {
            root: TreeNode::new(plan_caption, IdentifierKind::Container, true),
            nodes: HashMap::new(),
        }
    }

    /// Records that a unit started executing.
    pub fn on_start(&mut self, identifier: TestIdentifier) -> Result<(), TreeEventError> {
        debug!("started: {}", identifier.unique_id);
        self.insert(&identifier, NodeState::Running)
    }

    /// Records that a unit was skipped.
    ///
    /// Skipped units are normally never started, in which case the node is
    /// created here. A unit that is still running is sealed as skipped.
    pub fn on_skip(
        &mut self,
        identifier: TestIdentifier,
        reason: impl Into<String>,
    ) -> Result<(), TreeEventError> {
        let reason = reason.into();
        debug!("skipped: {} ({reason})", identifier.unique_id);
        if self.nodes.contains_key(&identifier.unique_id) {
            let (node, _) = self.running_node_mut(&identifier.unique_id, LifecycleAction::Skip)?;
            node.state = NodeState::Skipped { reason };
            Ok(())
        } else {
            self.insert(&identifier, NodeState::Skipped { reason })
        }
    }

    /// Attaches a report entry to a running unit.
    pub fn on_report(&mut self, id: &UniqueId, entry: ReportEntry) -> Result<(), TreeEventError> {
        debug!("report entry for {id}");
        let (node, _) = self.running_node_mut(id, LifecycleAction::Report)?;
        node.reports.push(entry);
        Ok(())
    }

    /// Records that a unit finished, measuring its duration from the start event.
    pub fn on_finish(
        &mut self,
        id: &UniqueId,
        result: TestExecutionResult,
    ) -> Result<(), TreeEventError> {
        let (node, stopwatch) = self.running_node_mut(id, LifecycleAction::Finish)?;
        let duration = stopwatch.elapsed();
        Self::seal_finished(id, node, result, duration);
        Ok(())
    }

    /// Records that a unit finished after running for `duration`.
    ///
    /// Used when replaying events that were recorded earlier, where the time
    /// between events no longer reflects the run.
    pub fn on_finish_with_duration(
        &mut self,
        id: &UniqueId,
        result: TestExecutionResult,
        duration: Duration,
    ) -> Result<(), TreeEventError> {
        let (node, _) = self.running_node_mut(id, LifecycleAction::Finish)?;
        Self::seal_finished(id, node, result, duration);
        Ok(())
    }

    /// Applies a serialized execution event.
    pub fn apply(&mut self, event: ExecutionEvent) -> Result<(), TreeEventError> {
        match event {
            ExecutionEvent::Started { identifier } => self.on_start(identifier),
            ExecutionEvent::Skipped { identifier, reason } => self.on_skip(identifier, reason),
            ExecutionEvent::Reported { id, entry } => self.on_report(&id, entry.into()),
            ExecutionEvent::Finished {
                id,
                result,
                duration_ms,
            } => match duration_ms {
                Some(millis) => {
                    self.on_finish_with_duration(&id, result.into(), Duration::from_millis(millis))
                }
                None => self.on_finish(&id, result.into()),
            },
        }
    }

    /// Seals the tree.
    ///
    /// Units that never finished stay in the [`Running`](NodeState::Running)
    /// state.
    pub fn build(self) -> ExecutionTree {
        let running = self
            .nodes
            .values()
            .filter(|entry| node_at(&self.root, &entry.path).state.is_running())
            .count();
        if running > 0 {
            debug!("building tree with {running} unit(s) still running");
        }
        ExecutionTree { root: self.root }
    }

    fn insert(
        &mut self,
        identifier: &TestIdentifier,
        state: NodeState,
    ) -> Result<(), TreeEventError> {
        if self.nodes.contains_key(&identifier.unique_id) {
            return Err(TreeEventError::AlreadyStarted {
                id: identifier.unique_id.clone(),
            });
        }

        let mut path = match &identifier.parent_id {
            None => Vec::new(),
            Some(parent_id) => match self.nodes.get(parent_id) {
                Some(parent) => {
                    if let Some(sealed) = sealed_kind(node_at(&self.root, &parent.path)) {
                        return Err(TreeEventError::ParentSealed {
                            id: identifier.unique_id.clone(),
                            parent_id: parent_id.clone(),
                            sealed,
                        });
                    }
                    parent.path.clone()
                }
                None => {
                    return Err(TreeEventError::UnknownParent {
                        id: identifier.unique_id.clone(),
                        parent_id: parent_id.clone(),
                    });
                }
            },
        };

        let mut node = TreeNode::new(
            &identifier.display_name,
            identifier.kind,
            identifier.visible,
        );
        node.state = state;

        let parent = node_at_mut(&mut self.root, &path);
        path.push(parent.children.len());
        parent.children.push(node);

        self.nodes.insert(
            identifier.unique_id.clone(),
            NodeEntry {
                path,
                stopwatch: stopwatch(),
            },
        );
        Ok(())
    }

    fn running_node_mut(
        &mut self,
        id: &UniqueId,
        action: LifecycleAction,
    ) -> Result<(&mut TreeNode, &StopwatchStart), TreeEventError> {
        let entry = self
            .nodes
            .get(id)
            .ok_or_else(|| TreeEventError::NotStarted {
                id: id.clone(),
                action,
            })?;
        let node = node_at_mut(&mut self.root, &entry.path);
        match sealed_kind(node) {
            None => Ok((node, &entry.stopwatch)),
            Some(sealed) => Err(TreeEventError::AlreadySealed {
                id: id.clone(),
                action,
                sealed,
            }),
        }
    }

    fn seal_finished(
        id: &UniqueId,
        node: &mut TreeNode,
        result: TestExecutionResult,
        duration: Duration,
    ) {
        debug!(
            "finished: {id} ({:?} after {} ms)",
            result.status,
            duration.as_millis()
        );
        node.duration = duration;
        node.state = NodeState::Finished(result);
    }
}

fn sealed_kind(node: &TreeNode) -> Option<SealedKind> {
    match node.state {
        NodeState::Running => None,
        NodeState::Skipped { .. } => Some(SealedKind::Skipped),
        NodeState::Finished(_) => Some(SealedKind::Finished),
    }
}

fn node_at<'a>(root: &'a TreeNode, path: &[usize]) -> &'a TreeNode {
    path.iter().fold(root, |node, &index| &node.children[index])
}

fn node_at_mut<'a>(root: &'a mut TreeNode, path: &[usize]) -> &'a mut TreeNode {
    path.iter()
        .fold(root, |node, &index| &mut node.children[index])
}
