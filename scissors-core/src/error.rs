//! Error types for scissors-core.

use thiserror::Error;

/// Result type alias for scissors-core operations.
pub type Result<T> = std::result::Result<T, DiffError>;

/// Errors that can occur while diffing two mapping trees.
///
/// Divergence between the trees (missing counterparts, renames) is expected
/// data, never an error. Only input that breaks the tree invariants fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// An input tree violates a uniqueness or shape invariant.
    #[error("Malformed tree: {message}")]
    MalformedTree {
        /// Description of the violated invariant.
        message: String,
    },
}

impl DiffError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        DiffError::MalformedTree {
            message: message.into(),
        }
    }

    pub(crate) fn duplicate(kind: &str, key: &str, owner: Option<&str>) -> Self {
        match owner {
            Some(owner) => Self::malformed(format!(
                "duplicate {} key '{}' in class '{}'",
                kind, key, owner
            )),
            None => Self::malformed(format!("duplicate {} key '{}'", kind, key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DiffError::duplicate("class", "a/Foo", None);
        assert_eq!(err.to_string(), "Malformed tree: duplicate class key 'a/Foo'");

        let err = DiffError::duplicate("field", "x", Some("a/Foo"));
        assert!(err.to_string().contains("'x'"));
        assert!(err.to_string().contains("'a/Foo'"));
    }
}
