// Copyright (c) The tree-report Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt;

/// The unique identifier of an engine, container or test within a run.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UniqueId(SmolStr);

impl UniqueId {
    /// Creates a new identifier.
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(SmolStr::new(id))
    }

    /// Returns the identifier as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UniqueId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for UniqueId {
    fn from(id: String) -> Self {
        Self(SmolStr::from(id))
    }
}

/// What kind of unit an identifier refers to.
///
/// Only used to pick the default caption color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdentifierKind {
    /// A test engine, the top level of a run.
    Engine,
    /// A container of tests, such as a class or module.
    Container,
    /// A single test.
    Test,
}

/// Describes a unit of execution at the time it is started or skipped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TestIdentifier {
    /// The identifier of this unit.
    #[serde(rename = "id")]
    pub unique_id: UniqueId,

    /// The enclosing unit, or `None` for units attached directly to the run.
    #[serde(default)]
    pub parent_id: Option<UniqueId>,

    /// The name shown in the tree.
    pub display_name: String,

    /// The kind of unit.
    pub kind: IdentifierKind,

    /// Whether the unit gets a line of its own in the tree.
    ///
    /// Children of a hidden unit are drawn as if they belonged to the hidden
    /// unit's parent.
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl TestIdentifier {
    /// Creates a visible identifier with no parent.
    pub fn new(
        unique_id: impl Into<UniqueId>,
        display_name: impl Into<String>,
        kind: IdentifierKind,
    ) -> Self {
        Self {
            unique_id: unique_id.into(),
            parent_id: None,
            display_name: display_name.into(),
            kind,
            visible: true,
        }
    }

    /// Sets the parent of this identifier.
    pub fn with_parent(mut self, parent_id: impl Into<UniqueId>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Marks this identifier as hidden.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}
