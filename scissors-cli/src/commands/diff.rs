//! Diff command - Change-set between two mapping tree snapshots
//!
//! Reads tree A and tree B, keeps only what in A is new or renamed relative
//! to B, and writes the result as a new snapshot.

use std::path::Path;

use colored::Colorize;
use serde::Serialize;
use tracing::info;

use scissors_core::{diff_trees, DiffOptions, DiffSummary};

use crate::output::{Output, OutputConfig, TableDisplay};
use crate::snapshot::{read_tree, write_tree};

/// Report printed after a diff
#[derive(Debug, Serialize)]
pub struct DiffReport {
    pub input_a: String,
    pub input_b: String,
    pub output: String,
    pub namespaces: Vec<String>,
    pub classes: usize,
    pub summary: DiffSummary,
    pub summary_text: String,
    pub duration_ms: f64,
}

impl DiffReport {
    fn counts(&self) -> Vec<(&'static str, [u32; 3])> {
        let s = &self.summary;
        vec![
            (
                "classes",
                [s.classes_added, s.classes_updated, s.classes_nested],
            ),
            ("fields", [s.fields_added, s.fields_updated, 0]),
            (
                "methods",
                [s.methods_added, s.methods_updated, s.methods_nested],
            ),
            ("parameters", [s.parameters_added, s.parameters_updated, 0]),
            (
                "local variables",
                [s.local_variables_added, s.local_variables_updated, 0],
            ),
        ]
    }
}

impl TableDisplay for DiffReport {
    fn to_table(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {} -> {}\n",
            "DIFF:".cyan().bold(),
            self.input_b.yellow(),
            self.input_a.green()
        ));
        output.push_str(&format!(
            "Wrote {} classes to {} [{}] ({:.1}ms)\n\n",
            self.classes.to_string().cyan(),
            self.output,
            self.namespaces.join(", ").dimmed(),
            self.duration_ms
        ));

        if self.summary.is_empty() {
            output.push_str(&format!("{}\n", "No mapping changes detected.".dimmed()));
            return output;
        }

        output.push_str(&format!(
            "  {:<16} {:>8} {:>8} {:>8}\n",
            "", "ADDED", "UPDATED", "NESTED"
        ));
        output.push_str(&format!("  {}\n", "-".repeat(43)));
        for (kind, [added, updated, nested]) in self.counts() {
            if added + updated + nested == 0 {
                continue;
            }
            output.push_str(&format!(
                "  {:<16} {:>8} {:>8} {:>8}\n",
                kind,
                added.to_string().green(),
                updated.to_string().yellow(),
                nested.to_string().dimmed()
            ));
        }

        output
    }
}

/// Run the diff command
pub fn run(
    input_a: &Path,
    input_b: &Path,
    output: &Path,
    options: &DiffOptions,
    output_config: OutputConfig,
) -> anyhow::Result<()> {
    info!("Parsing inputs...");
    let tree_a = read_tree(input_a)?;
    let tree_b = read_tree(input_b)?;

    info!("Scanning...");
    let result = diff_trees(&tree_a, &tree_b, options)?;

    info!(classes = result.tree.classes.len(), "Writing output...");
    write_tree(output, &result.tree, output_config.compact)?;
    info!("Done!");

    let report = DiffReport {
        input_a: input_a.display().to_string(),
        input_b: input_b.display().to_string(),
        output: output.display().to_string(),
        namespaces: result.tree.namespaces.clone(),
        classes: result.tree.classes.len(),
        summary_text: result.summary.text(),
        summary: result.summary,
        duration_ms: result.duration_ms,
    };

    Output::with_config(report, output_config).render()
}
