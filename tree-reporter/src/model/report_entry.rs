// Copyright (c) The tree-report Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{Local, NaiveDateTime};
use indexmap::IndexMap;

/// A timestamped set of key-value pairs published by a running test.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportEntry {
    timestamp: NaiveDateTime,
    key_value_pairs: IndexMap<String, String>,
}

impl ReportEntry {
    /// Creates an empty entry with the given timestamp.
    pub fn new(timestamp: NaiveDateTime) -> Self {
        Self {
            timestamp,
            key_value_pairs: IndexMap::new(),
        }
    }

    /// Creates an empty entry stamped with the current local time.
    pub fn now() -> Self {
        Self::new(Local::now().naive_local())
    }

    /// Creates an entry with a single key-value pair, stamped with the current local time.
    pub fn from_key_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entry = Self::now();
        entry.insert(key, value);
        entry
    }

    /// Adds a key-value pair. Pairs are kept in insertion order.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.key_value_pairs.insert(key.into(), value.into());
    }

    /// Adds a key-value pair, returning `self` for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns the time the entry was published.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the key-value pairs in insertion order.
    pub fn key_value_pairs(&self) -> &IndexMap<String, String> {
        &self.key_value_pairs
    }
}
