//! Input tree validation.
//!
//! Matching assumes every tree has at least the shared and distinct
//! namespaces, that every entry carries exactly one name per namespace, and
//! that sibling keys are unique. Trees breaking any of these are rejected
//! before diffing starts.

use crate::differ::compare::Mapped;
use crate::differ::index::ClassIndex;
use crate::error::{DiffError, Result};
use crate::types::MappingTree;

/// Minimum number of namespaces a diffable tree must declare.
pub const MIN_NAMESPACES: usize = 2;

fn check_names<T: Mapped>(kind: &str, entry: &T, expected: usize, owner: &str) -> Result<()> {
    let found = entry.names().len();
    if found == expected {
        return Ok(());
    }

    let location = if owner.is_empty() {
        String::new()
    } else {
        format!(" in class '{}'", owner)
    };
    Err(DiffError::malformed(format!(
        "{} '{}'{} has {} names, header declares {} namespaces",
        kind,
        entry.shared_name(),
        location,
        found,
        expected
    )))
}

/// Check the shape and key uniqueness of a tree.
pub fn validate_tree(tree: &MappingTree) -> Result<()> {
    index_tree(tree).map(|_| ())
}

/// Validate a tree and hand back its key index for matching.
pub(crate) fn index_tree(tree: &MappingTree) -> Result<ClassIndex<'_>> {
    let expected = tree.namespaces.len();
    if expected < MIN_NAMESPACES {
        return Err(DiffError::malformed(format!(
            "expected at least {} namespaces, found {}",
            MIN_NAMESPACES, expected
        )));
    }

    for class in &tree.classes {
        check_names("class", class, expected, "")?;
        let owner = class.shared_name();

        for field in &class.fields {
            check_names("field", field, expected, owner)?;
        }
        for method in &class.methods {
            check_names("method", method, expected, owner)?;
            for parameter in &method.parameters {
                check_names("parameter", parameter, expected, owner)?;
            }
            for variable in &method.local_variables {
                check_names("local variable", variable, expected, owner)?;
            }
        }
    }

    ClassIndex::build(tree)
}
