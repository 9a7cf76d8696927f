//! Change-set diff between two versions of a mapping tree.
//!
//! Given tree A and tree B over the same shared namespace, produces a tree
//! holding only what in A is new relative to B or carries a different
//! distinct name or documentation.
//!
//! # Stages
//!
//! - **Indexing**: classes, fields and methods of B by their shared key
//! - **Comparison**: per matched pair, did the name or documentation change
//! - **Propagation**: child changes decide whether a parent is emitted, and
//!   whether it is emitted renamed or truncated to its shared name
//! - **Assembly**: the output tree in A's order with a two-namespace header
//!
//! # Example
//!
//! ```
//! use scissors_core::{diff_trees, ClassEntry, DiffOptions, MappingTree, MethodEntry};
//!
//! let ns = vec!["intermediary".to_string(), "named".to_string()];
//! let class = |method: &str| {
//!     ClassEntry::new(vec!["a/Foo".into(), "Foo".into()])
//!         .with_method(MethodEntry::new("(I)V", vec!["m".into(), method.into()]))
//! };
//! let a = MappingTree::new(ns.clone(), vec![class("bar")]);
//! let b = MappingTree::new(ns, vec![class("baz")]);
//!
//! let diff = diff_trees(&a, &b, &DiffOptions::default()).unwrap();
//! assert_eq!(diff.tree.classes[0].names, vec!["a/Foo"]);
//! assert_eq!(diff.tree.classes[0].methods[0].names, vec!["m", "bar"]);
//! ```

pub mod assemble;
pub mod compare;
pub mod index;
pub mod propagate;
pub mod summary;

use std::time::Instant;

use rayon::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::types::MappingTree;
use crate::validate::{index_tree, validate_tree};

use self::compare::Mapped;
use self::propagate::diff_class;

pub use assemble::{assemble, DiffOptions, TreeDiff};
pub use propagate::Emitted;
pub use summary::{Change, DiffSummary, EntryKind};

/// Compute the change-set of `tree_a` relative to `tree_b`.
///
/// The diff is directional: classes and members that exist only in B never
/// appear. Both trees are validated first; a malformed tree aborts the diff.
pub fn diff_trees(
    tree_a: &MappingTree,
    tree_b: &MappingTree,
    options: &DiffOptions,
) -> Result<TreeDiff> {
    let start = Instant::now();

    validate_tree(tree_a)?;
    let classes_b = index_tree(tree_b)?;
    debug!(
        classes_a = tree_a.classes.len(),
        classes_b = classes_b.len(),
        parallel = options.parallel,
        "diffing mapping trees"
    );

    // Indexed collect keeps A's class order in both modes
    let outcomes = if options.parallel {
        tree_a
            .classes
            .par_iter()
            .map(|class| diff_class(class, classes_b.get(class.shared_name())))
            .collect::<Vec<_>>()
    } else {
        tree_a
            .classes
            .iter()
            .map(|class| diff_class(class, classes_b.get(class.shared_name())))
            .collect::<Vec<_>>()
    };

    let mut result = assemble(outcomes, options);
    result.duration_ms = start.elapsed().as_secs_f64() * 1000.0;

    debug!(
        classes = result.tree.classes.len(),
        summary = %result.summary.text(),
        duration_ms = result.duration_ms,
        "diff complete"
    );
    Ok(result)
}
