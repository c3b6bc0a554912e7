//! CLI for the laned benchmark chart generator.
//!
//! This crate provides the `lanechart` command: it parses the single
//! input-path argument, wires the plotters backend, and sequences the
//! three report pipelines via [`pipeline::execute`].
//!
//! Exit status reflects only load-time failures. A report whose filter
//! matches no records is skipped with an informational status line, not
//! an error.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod pipeline;

use clap::Parser;
use colored::Colorize;
use lanechart_render::{ChartStyle, PlottersBackend};
use pipeline::ReportStatus;
use std::path::PathBuf;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Generate comparison charts from a laned JMH benchmark result file.
///
/// Reads the JSON result file written by the benchmark suite and
/// produces up to three SVG charts next to it: `hol_impact`,
/// `strategy_comparison` and `selection_overhead`. Reports without
/// matching benchmark records are skipped.
#[derive(Parser, Debug)]
#[command(name = "lanechart", version, about)]
pub struct Cli {
    /// Path to the JMH JSON result file.
    pub input: PathBuf,
}

/// Run the CLI with the process arguments.
///
/// # Returns
///
/// Returns `Ok(())` on success, or an error when the arguments are
/// invalid or the result file cannot be loaded.
pub fn run() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version terminate the run but are not failures.
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => anyhow::bail!("{err}"),
    };

    init_tracing();

    let backend = PlottersBackend::new(ChartStyle::default());
    let summary = pipeline::execute(&cli.input, &backend)?;

    println!(
        "Loaded {} benchmark records from {}",
        summary.record_count,
        cli.input.display()
    );

    for (name, status) in &summary.reports {
        match status {
            ReportStatus::Generated(path) => {
                println!(
                    "{} {} -> {}",
                    "generated".green().bold(),
                    name,
                    path.display()
                );
            }
            ReportStatus::NoData => {
                println!(
                    "{} {} (no matching benchmark records)",
                    "skipped".yellow().bold(),
                    name
                );
            }
            ReportStatus::Failed(err) => {
                println!("{} {} ({})", "failed".red().bold(), name, err);
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_single_positional_argument() {
        let cli = Cli::try_parse_from(["lanechart", "results.json"]).expect("should parse");
        assert_eq!(cli.input, PathBuf::from("results.json"));
    }

    #[test]
    fn test_cli_rejects_missing_argument() {
        assert!(Cli::try_parse_from(["lanechart"]).is_err());
    }

    #[test]
    fn test_cli_rejects_extra_arguments() {
        assert!(Cli::try_parse_from(["lanechart", "a.json", "b.json"]).is_err());
    }
}
