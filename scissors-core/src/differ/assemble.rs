//! Output tree assembly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::differ::propagate::Emitted;
use crate::differ::summary::DiffSummary;
use crate::types::{ClassEntry, MappingTree};

/// Major version written to the output tree header.
pub const OUTPUT_MAJOR_VERSION: u32 = 2;

/// Minor version written to the output tree header.
pub const OUTPUT_MINOR_VERSION: u32 = 0;

/// Number of namespaces in the output header.
pub const OUTPUT_NAMESPACES: usize = 2;

pub const DEFAULT_SHARED_NAMESPACE: &str = "intermediary";
pub const DEFAULT_DISTINCT_NAMESPACE: &str = "named";

/// Options for a tree diff.
///
/// The namespace names only label the output header; comparison always uses
/// namespace indices 0 and 1 of the inputs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffOptions {
    pub shared_namespace: String,
    pub distinct_namespace: String,
    /// Diff classes on the rayon thread pool. Output order is unaffected.
    pub parallel: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            shared_namespace: DEFAULT_SHARED_NAMESPACE.to_string(),
            distinct_namespace: DEFAULT_DISTINCT_NAMESPACE.to_string(),
            parallel: false,
        }
    }
}

impl DiffOptions {
    pub fn new(
        shared_namespace: impl Into<String>,
        distinct_namespace: impl Into<String>,
    ) -> Self {
        Self {
            shared_namespace: shared_namespace.into(),
            distinct_namespace: distinct_namespace.into(),
            parallel: false,
        }
    }

    /// Builder: enable parallel diffing
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Complete result of a tree diff.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TreeDiff {
    /// The change-set tree.
    pub tree: MappingTree,

    /// Counts of emitted entries by kind and change.
    pub summary: DiffSummary,

    /// Duration of the diff in milliseconds
    pub duration_ms: f64,
}

impl TreeDiff {
    pub fn has_changes(&self) -> bool {
        !self.tree.classes.is_empty()
    }
}

/// Drop names beyond the output header's namespaces, at every level.
fn fit_to_header(mut class: ClassEntry) -> ClassEntry {
    class.names.truncate(OUTPUT_NAMESPACES);
    for field in &mut class.fields {
        field.names.truncate(OUTPUT_NAMESPACES);
    }
    for method in &mut class.methods {
        method.names.truncate(OUTPUT_NAMESPACES);
        for parameter in &mut method.parameters {
            parameter.names.truncate(OUTPUT_NAMESPACES);
        }
        for variable in &mut method.local_variables {
            variable.names.truncate(OUTPUT_NAMESPACES);
        }
    }
    class
}

/// Build the output tree from per-class outcomes, in tree A's class order.
///
/// Inputs may declare extra namespaces; only the shared and distinct names
/// are kept so every entry matches the two-namespace header.
pub fn assemble(
    outcomes: impl IntoIterator<Item = Option<Emitted<ClassEntry>>>,
    options: &DiffOptions,
) -> TreeDiff {
    let mut summary = DiffSummary::new();
    let classes: Vec<ClassEntry> = outcomes
        .into_iter()
        .flatten()
        .map(|emitted| {
            summary.merge(&emitted.summary);
            fit_to_header(emitted.entry)
        })
        .collect();

    let tree = MappingTree {
        namespaces: vec![
            options.shared_namespace.clone(),
            options.distinct_namespace.clone(),
        ],
        major_version: OUTPUT_MAJOR_VERSION,
        minor_version: OUTPUT_MINOR_VERSION,
        properties: BTreeMap::new(),
        classes,
    };

    TreeDiff {
        tree,
        summary,
        duration_ms: 0.0,
    }
}
