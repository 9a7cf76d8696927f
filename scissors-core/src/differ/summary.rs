//! Change kinds and summary statistics for a tree diff.

use serde::{Deserialize, Serialize};

/// Why an entry appears in the output tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Change {
    /// No counterpart in the other tree; copied verbatim.
    Added,
    /// Own distinct name or documentation changed; emitted with full names.
    Updated,
    /// Own identity unchanged but a descendant changed; names truncated.
    Nested,
}

impl Change {
    pub fn as_str(&self) -> &'static str {
        match self {
            Change::Added => "added",
            Change::Updated => "updated",
            Change::Nested => "nested",
        }
    }
}

/// Kind of mapping entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Class,
    Field,
    Method,
    Parameter,
    LocalVariable,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Class => "class",
            EntryKind::Field => "field",
            EntryKind::Method => "method",
            EntryKind::Parameter => "parameter",
            EntryKind::LocalVariable => "local variable",
        }
    }
}

/// Summary statistics for a diff.
///
/// Entries copied verbatim as part of an added parent are not counted on
/// their own; only the parent is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub classes_added: u32,
    pub classes_updated: u32,
    pub classes_nested: u32,

    pub fields_added: u32,
    pub fields_updated: u32,

    pub methods_added: u32,
    pub methods_updated: u32,
    pub methods_nested: u32,

    pub parameters_added: u32,
    pub parameters_updated: u32,

    pub local_variables_added: u32,
    pub local_variables_updated: u32,
}

impl DiffSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the counter for an entry kind and change.
    ///
    /// Fields, parameters and local variables are never emitted truncated,
    /// so a `Nested` record for them is ignored.
    pub fn record(&mut self, kind: EntryKind, change: Change) {
        match kind {
            EntryKind::Class => match change {
                Change::Added => self.classes_added += 1,
                Change::Updated => self.classes_updated += 1,
                Change::Nested => self.classes_nested += 1,
            },
            EntryKind::Field => match change {
                Change::Added => self.fields_added += 1,
                Change::Updated => self.fields_updated += 1,
                Change::Nested => {}
            },
            EntryKind::Method => match change {
                Change::Added => self.methods_added += 1,
                Change::Updated => self.methods_updated += 1,
                Change::Nested => self.methods_nested += 1,
            },
            EntryKind::Parameter => match change {
                Change::Added => self.parameters_added += 1,
                Change::Updated => self.parameters_updated += 1,
                Change::Nested => {}
            },
            EntryKind::LocalVariable => match change {
                Change::Added => self.local_variables_added += 1,
                Change::Updated => self.local_variables_updated += 1,
                Change::Nested => {}
            },
        }
    }

    /// Add every counter of `other` into `self`.
    pub fn merge(&mut self, other: &DiffSummary) {
        self.classes_added += other.classes_added;
        self.classes_updated += other.classes_updated;
        self.classes_nested += other.classes_nested;
        self.fields_added += other.fields_added;
        self.fields_updated += other.fields_updated;
        self.methods_added += other.methods_added;
        self.methods_updated += other.methods_updated;
        self.methods_nested += other.methods_nested;
        self.parameters_added += other.parameters_added;
        self.parameters_updated += other.parameters_updated;
        self.local_variables_added += other.local_variables_added;
        self.local_variables_updated += other.local_variables_updated;
    }

    /// Total number of recorded entries.
    pub fn total(&self) -> u32 {
        self.classes_added
            + self.classes_updated
            + self.classes_nested
            + self.fields_added
            + self.fields_updated
            + self.methods_added
            + self.methods_updated
            + self.methods_nested
            + self.parameters_added
            + self.parameters_updated
            + self.local_variables_added
            + self.local_variables_updated
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Generate human-readable summary string.
    pub fn text(&self) -> String {
        let groups = [
            (
                "classes",
                [self.classes_added, self.classes_updated, self.classes_nested],
            ),
            ("fields", [self.fields_added, self.fields_updated, 0]),
            (
                "methods",
                [self.methods_added, self.methods_updated, self.methods_nested],
            ),
            ("parameters", [self.parameters_added, self.parameters_updated, 0]),
            (
                "local variables",
                [self.local_variables_added, self.local_variables_updated, 0],
            ),
        ];
        let labels = [Change::Added, Change::Updated, Change::Nested];

        let parts: Vec<String> = groups
            .iter()
            .filter(|(_, counts)| counts.iter().any(|&n| n > 0))
            .map(|(name, counts)| {
                let counted: Vec<String> = counts
                    .iter()
                    .zip(labels.iter())
                    .filter(|&(&n, _)| n > 0)
                    .map(|(n, change)| format!("{} {}", n, change.as_str()))
                    .collect();
                format!("{}: {}", name, counted.join(", "))
            })
            .collect();

        if parts.is_empty() {
            "No changes".to_string()
        } else {
            parts.join("; ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_as_str() {
        assert_eq!(Change::Added.as_str(), "added");
        assert_eq!(Change::Updated.as_str(), "updated");
        assert_eq!(Change::Nested.as_str(), "nested");
    }

    #[test]
    fn test_entry_kind_as_str() {
        assert_eq!(EntryKind::Class.as_str(), "class");
        assert_eq!(EntryKind::LocalVariable.as_str(), "local variable");
    }

    #[test]
    fn test_record() {
        let mut summary = DiffSummary::new();

        summary.record(EntryKind::Method, Change::Nested);
        assert_eq!(summary.methods_nested, 1);

        summary.record(EntryKind::Parameter, Change::Added);
        summary.record(EntryKind::Parameter, Change::Updated);
        assert_eq!(summary.parameters_added, 1);
        assert_eq!(summary.parameters_updated, 1);

        // Fields are never truncated
        summary.record(EntryKind::Field, Change::Nested);
        assert_eq!(summary.total(), 3);
    }

    #[test]
    fn test_merge() {
        let mut left = DiffSummary {
            classes_added: 1,
            fields_updated: 2,
            ..Default::default()
        };
        let right = DiffSummary {
            classes_added: 2,
            local_variables_added: 1,
            ..Default::default()
        };

        left.merge(&right);

        assert_eq!(left.classes_added, 3);
        assert_eq!(left.fields_updated, 2);
        assert_eq!(left.local_variables_added, 1);
        assert_eq!(left.total(), 6);
    }

    #[test]
    fn test_text() {
        let summary = DiffSummary {
            classes_nested: 1,
            methods_added: 2,
            methods_updated: 1,
            ..Default::default()
        };

        assert_eq!(
            summary.text(),
            "classes: 1 nested; methods: 2 added, 1 updated"
        );
    }

    #[test]
    fn test_text_no_changes() {
        let summary = DiffSummary::default();
        assert!(summary.is_empty());
        assert_eq!(summary.text(), "No changes");
    }
}
