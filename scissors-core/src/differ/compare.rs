//! Per-entry comparison of two corresponding mapping entries.

use crate::differ::summary::Change;
use crate::types::{
    ClassEntry, FieldEntry, LocalVariableEntry, MethodEntry, ParameterEntry, DISTINCT, SHARED,
};

/// Access to the per-namespace names and documentation of an entry.
pub trait Mapped {
    fn names(&self) -> &[String];

    /// Documentation lines. Entries without documentation return nothing.
    fn comments(&self) -> &[String] {
        &[]
    }

    /// Name in the shared namespace, the cross-version key.
    fn shared_name(&self) -> &str {
        self.names().get(SHARED).map(String::as_str).unwrap_or_default()
    }

    /// Name in the distinct namespace, if present.
    fn distinct_name(&self) -> Option<&str> {
        self.names().get(DISTINCT).map(String::as_str)
    }
}

impl Mapped for ClassEntry {
    fn names(&self) -> &[String] {
        &self.names
    }

    fn comments(&self) -> &[String] {
        &self.comments
    }
}

impl Mapped for FieldEntry {
    fn names(&self) -> &[String] {
        &self.names
    }

    fn comments(&self) -> &[String] {
        &self.comments
    }
}

impl Mapped for MethodEntry {
    fn names(&self) -> &[String] {
        &self.names
    }

    fn comments(&self) -> &[String] {
        &self.comments
    }
}

impl Mapped for ParameterEntry {
    fn names(&self) -> &[String] {
        &self.names
    }
}

impl Mapped for LocalVariableEntry {
    fn names(&self) -> &[String] {
        &self.names
    }
}

/// Entries matched by local-variable slot rather than by name.
pub trait Slotted: Mapped {
    fn lv_index(&self) -> u32;
}

impl Slotted for ParameterEntry {
    fn lv_index(&self) -> u32 {
        self.lv_index
    }
}

impl Slotted for LocalVariableEntry {
    fn lv_index(&self) -> u32 {
        self.lv_index
    }
}

/// Which dimensions of an entry changed between two versions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EntryDelta {
    /// Distinct-namespace name differs.
    pub renamed: bool,
    /// Documentation differs (order-sensitive).
    pub doc_changed: bool,
}

impl EntryDelta {
    pub fn between<T: Mapped>(entry: &T, other: &T) -> Self {
        Self {
            renamed: entry.distinct_name() != other.distinct_name(),
            doc_changed: entry.comments() != other.comments(),
        }
    }

    /// Whether the entry's own name or documentation must be shown.
    pub fn is_changed(&self) -> bool {
        self.renamed || self.doc_changed
    }
}

/// Compare a parameter or local variable against the slots of the other method.
///
/// The counterpart is the first entry with the same `lv_index`. A missing
/// counterpart always counts as a change; there is no positional fallback.
pub fn slot_change<T: Slotted>(entry: &T, others: &[T]) -> Option<Change> {
    match others.iter().find(|o| o.lv_index() == entry.lv_index()) {
        None => Some(Change::Added),
        Some(other) if entry.distinct_name() != other.distinct_name() => Some(Change::Updated),
        Some(_) => None,
    }
}
