//! Accumulated answers keyed by response field.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mutable field → raw answer mapping owned by a flow engine.
///
/// Values are stored exactly as received; parsing is left to consumers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseStore {
    answers: BTreeMap<String, String>,
}

impl ResponseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, replacing any earlier value for the field.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.answers.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.answers.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.answers.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    /// Copies the current answers.
    pub fn snapshot(&self) -> ResponseSnapshot {
        ResponseSnapshot(self.answers.clone())
    }
}

/// Immutable copy of the answers at one point in the dialogue.
///
/// Serializes as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSnapshot(BTreeMap<String, String>);

impl ResponseSnapshot {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
