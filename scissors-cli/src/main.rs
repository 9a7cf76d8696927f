//! Scissors CLI - Cut a minimal change-set out of two mapping trees
//!
//! Compares two versions of a name-mapping tree that share a stable key
//! namespace and writes only the renamed, re-documented or new entries.

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;
mod snapshot;

use commands::*;
use config::ScissorsConfig;
use output::{OutputConfig, OutputFormat};

/// Minimal change-set diffs between two mapping tree versions.
///
/// Entries are matched by their shared-namespace name (plus descriptor for
/// methods, slot index for parameters and locals). Only what in INPUT_A is
/// new or differs from INPUT_B in name or documentation is written.
#[derive(Parser)]
#[command(name = "scissors")]
#[command(author, version)]
#[command(about = "Minimal change-set diffs between two mapping tree versions")]
#[command(propagate_version = true)]
#[command(after_help = "Examples:
  scissors diff new.json old.json diff.json
  scissors diff new.json old.json diff.json --different-namespace mojmap
  scissors validate new.json old.json")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Report format (overrides config default)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the entries of INPUT_A that are new or renamed relative to INPUT_B
    Diff {
        /// Newer mapping tree snapshot
        input_a: PathBuf,

        /// Older mapping tree snapshot
        input_b: PathBuf,

        /// Where to write the change-set snapshot
        output: PathBuf,

        /// Label of the shared namespace in the output header
        #[arg(long)]
        shared_namespace: Option<String>,

        /// Label of the distinct namespace in the output header
        #[arg(long, visible_alias = "distinct-namespace")]
        different_namespace: Option<String>,

        /// Diff classes in parallel
        #[arg(long)]
        parallel: bool,

        /// Write compact (single-line) JSON
        #[arg(long)]
        compact: bool,
    },

    /// Check that snapshots are well-formed mapping trees
    Validate {
        /// Snapshots to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Load configuration from .scissorsrc.toml
    let config = ScissorsConfig::load(std::path::Path::new("."));

    // Resolve output format: CLI flag > config default > Table
    let format = cli.format.unwrap_or_else(|| {
        config
            .default_format()
            .and_then(|f| f.parse().ok())
            .unwrap_or(OutputFormat::Table)
    });

    // Apply color override from config if set
    if let Some(use_color) = config.use_color() {
        colored::control::set_override(use_color);
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Print help if no command provided
            let _ = Cli::command().print_help();
            println!();
            return Ok(());
        }
    };

    match command {
        Commands::Diff {
            input_a,
            input_b,
            output,
            shared_namespace,
            different_namespace,
            parallel,
            compact,
        } => {
            let options = config.diff_options(
                shared_namespace.as_deref(),
                different_namespace.as_deref(),
                parallel,
            );
            let mut output_config = OutputConfig::new(format);
            if compact || config.compact() {
                output_config = output_config.compact();
            }
            diff::run(&input_a, &input_b, &output, &options, output_config)
        }
        Commands::Validate { files } => validate::run(&files, OutputConfig::new(format)),
    }
}
