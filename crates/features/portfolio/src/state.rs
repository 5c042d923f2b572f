//! Session-scoped view state: expansion flags and the current selection.
//!
//! Both are plain serializable value objects. They never touch node data;
//! the tree itself stays immutable for the whole session.

use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Per-node expansion flags keyed by node id.
///
/// Absence means collapsed; only expanded ids are stored, so structural
/// equality coincides with the rendered state. Ids without children (or not
/// present in the tree at all) may be toggled freely — the entry is carried
/// but nothing renders from it.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpansionState {
    expanded: FxHashSet<String>,
}

impl ExpansionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a state with the given ids already expanded.
    pub fn with_expanded<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { expanded: ids.into_iter().map(Into::into).collect() }
    }

    /// Whether `id` is currently expanded. Absent ids are collapsed.
    #[must_use]
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Flips exactly this id's flag, leaving every other id untouched.
    ///
    /// Self-inverse: toggling twice restores the previous state.
    pub fn toggle(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_owned());
        }
    }

    /// Number of currently expanded ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.expanded.len()
    }
}

/// The single node id, if any, chosen for detail display.
///
/// Selection is replaced atomically and never validated here: resolving an
/// unknown id is a read-time concern, not a mutation-time rejection.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    current: Option<String>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current selection with `id`.
    pub fn select(&mut self, id: impl Into<String>) {
        self.current = Some(id.into());
    }

    /// Drops the selection entirely.
    pub fn clear(&mut self) {
        self.current = None;
    }

    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.current.as_deref() == Some(id)
    }
}
