//! Reading and writing mapping tree snapshots.
//!
//! A snapshot is the JSON serialization of a `MappingTree`. Converting from
//! and to concrete mapping file formats happens outside this tool.

use std::fs;
use std::path::Path;

use anyhow::Context;
use scissors_core::MappingTree;

/// Read a mapping tree snapshot from disk.
pub fn read_tree(path: &Path) -> anyhow::Result<MappingTree> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let tree: MappingTree = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as a mapping tree", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        classes = tree.classes.len(),
        namespaces = ?tree.namespaces,
        "read mapping tree"
    );
    Ok(tree)
}

/// Write a mapping tree snapshot, creating parent directories as needed.
pub fn write_tree(path: &Path, tree: &MappingTree, compact: bool) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let mut json = if compact {
        serde_json::to_string(tree)?
    } else {
        serde_json::to_string_pretty(tree)?
    };
    json.push('\n');

    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), classes = tree.classes.len(), "wrote mapping tree");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scissors_core::ClassEntry;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read_nested_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out/nested/diff.json");
        let tree = MappingTree::new(
            vec!["intermediary".into(), "named".into()],
            vec![ClassEntry::new(vec!["a/Foo".into()])],
        );

        write_tree(&path, &tree, true).unwrap();
        assert_eq!(read_tree(&path).unwrap(), tree);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_tree(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_read_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ \"classes\": ").unwrap();

        let err = read_tree(&path).unwrap_err();
        assert!(err.to_string().contains("as a mapping tree"));
    }
}
