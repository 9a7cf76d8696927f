//! Scissors core - minimal change-set diffing for name-mapping trees.
//!
//! Two versions of a mapping tree share a stable key namespace (index 0) and
//! carry a human-authored namespace (index 1). This crate computes the tree
//! of entries whose human-authored name or documentation differs between the
//! versions, or which are new, so that the change can be applied on top of
//! the older version.
//!
//! # Features
//!
//! - **Key matching**: classes and fields by shared name, methods by shared
//!   name plus descriptor, parameters and locals by slot index
//! - **Minimal output**: unchanged entries never appear; parents whose own
//!   name is unchanged are truncated to their shared name
//! - **Strict input**: duplicate keys or mis-sized name lists are rejected
//! - **Parallel diffing**: per-class work on Rayon with stable output order
//!
//! I/O lives outside this crate: callers hand in two [`MappingTree`] values
//! and receive a third one.

pub mod differ;
pub mod error;
pub mod types;
pub mod validate;

pub use differ::{diff_trees, Change, DiffOptions, DiffSummary, EntryKind, TreeDiff};
pub use error::{DiffError, Result};
pub use types::{
    ClassEntry, FieldEntry, LocalVariableEntry, MappingTree, MethodEntry, ParameterEntry,
};
pub use validate::validate_tree;

/// Get the version of scissors-core.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
