//! Validate command - Check snapshots before diffing them
//!
//! Reports, per file, whether the tree has enough namespaces, correctly
//! sized name lists and unique sibling keys.

use std::path::{Path, PathBuf};

use colored::Colorize;
use serde::Serialize;

use scissors_core::validate_tree;

use crate::output::{Output, OutputConfig, TableDisplay};
use crate::snapshot::read_tree;

/// Validation outcome for one file
#[derive(Debug, Clone, Serialize)]
pub struct FileStatus {
    pub path: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Validation results for all files
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub files: Vec<FileStatus>,
}

impl ValidationReport {
    pub fn invalid_count(&self) -> usize {
        self.files.iter().filter(|f| !f.valid).count()
    }
}

impl TableDisplay for ValidationReport {
    fn to_table(&self) -> String {
        let mut output = String::new();

        for file in &self.files {
            if file.valid {
                output.push_str(&format!(
                    "  {} {} ({} classes)\n",
                    "ok".green().bold(),
                    file.path,
                    file.classes.unwrap_or_default()
                ));
            } else {
                output.push_str(&format!("  {} {}\n", "error".red().bold(), file.path));
                if let Some(ref error) = file.error {
                    output.push_str(&format!("     {}\n", error.dimmed()));
                }
            }
        }

        let invalid = self.invalid_count();
        if invalid == 0 {
            output.push_str(&format!("\n{} files valid", self.files.len()));
        } else {
            output.push_str(&format!(
                "\n{} of {} files invalid",
                invalid.to_string().red(),
                self.files.len()
            ));
        }
        output
    }
}

fn check(path: &Path) -> FileStatus {
    let outcome = read_tree(path).and_then(|tree| {
        validate_tree(&tree)?;
        Ok(tree.classes.len())
    });

    match outcome {
        Ok(classes) => FileStatus {
            path: path.display().to_string(),
            valid: true,
            classes: Some(classes),
            error: None,
        },
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "validation failed");
            FileStatus {
                path: path.display().to_string(),
                valid: false,
                classes: None,
                error: Some(format!("{:#}", e)),
            }
        }
    }
}

/// Run the validate command
pub fn run(paths: &[PathBuf], output_config: OutputConfig) -> anyhow::Result<()> {
    let report = ValidationReport {
        files: paths.iter().map(|path| check(path)).collect(),
    };
    let invalid = report.invalid_count();

    Output::with_config(report, output_config).render()?;

    if invalid > 0 {
        anyhow::bail!("{} of {} files are malformed", invalid, paths.len());
    }
    Ok(())
}
