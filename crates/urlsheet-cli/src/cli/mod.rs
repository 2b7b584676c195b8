//! CLI for the urlsheet converter.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use urlsheet_core::config;

use commands::{run_convert, run_export_url, run_probe};

/// Top-level CLI for the urlsheet converter.
#[derive(Debug, Parser)]
#[command(name = "urlsheet")]
#[command(
    about = "urlsheet: convert a URL spreadsheet (CSV export) into a link-metadata table",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Convert a CSV of URLs into the structured export table.
    Convert {
        /// Input CSV file ("-" reads stdin).
        input: PathBuf,

        /// Spreadsheet column holding the URLs (e.g. "B"). Resolved from the
        /// header and first data row when omitted.
        #[arg(long, value_name = "LABEL")]
        column: Option<String>,

        /// Output file. Defaults to a timestamped name in the configured
        /// output directory.
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Print the export CSV to stdout instead of writing a file.
        #[arg(long)]
        stdout: bool,

        /// Print the extracted records as JSON instead of CSV.
        #[arg(long)]
        json: bool,
    },

    /// Show the header row with column labels and the resolved URL column.
    Probe {
        /// Input CSV file ("-" reads stdin).
        input: PathBuf,
    },

    /// Rewrite a Google Sheets link to its CSV export endpoint.
    ExportUrl {
        /// Public Google Sheets link or direct CSV URL.
        sheet_url: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Convert {
                input,
                column,
                output,
                stdout,
                json,
            } => run_convert(
                &cfg,
                &input,
                column.as_deref(),
                output.as_deref(),
                stdout,
                json,
            )?,
            CliCommand::Probe { input } => run_probe(&input)?,
            CliCommand::ExportUrl { sheet_url } => run_export_url(&sheet_url)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
