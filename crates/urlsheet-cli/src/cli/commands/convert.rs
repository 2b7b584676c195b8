//! `urlsheet convert <input>` – run the pipeline and export the table.

use anyhow::{Context, Result};
use chrono::Local;
use std::path::{Path, PathBuf};
use urlsheet_core::column;
use urlsheet_core::config::UrlsheetConfig;
use urlsheet_core::convert::convert;
use urlsheet_core::export;

use super::read_input;

pub fn run_convert(
    cfg: &UrlsheetConfig,
    input: &Path,
    column_label: Option<&str>,
    output: Option<&Path>,
    to_stdout: bool,
    as_json: bool,
) -> Result<()> {
    let text = read_input(input)?;
    let column_override = match column_label {
        Some(label) => Some(column::label_to_index(label)?),
        None => None,
    };

    let conversion = convert(&text, column_override);
    tracing::info!(records = conversion.records.len(), "conversion finished");

    if as_json {
        println!("{}", serde_json::to_string_pretty(&conversion.records)?);
        return Ok(());
    }
    if to_stdout {
        println!("{}", conversion.export_text);
        return Ok(());
    }

    let path = output_path(cfg, output);
    let body = if cfg.include_bom {
        export::with_bom(&conversion.export_text)
    } else {
        conversion.export_text.clone()
    };
    std::fs::write(&path, body)
        .with_context(|| format!("write export file: {}", path.display()))?;
    println!(
        "Wrote {} record(s) to {}",
        conversion.records.len(),
        path.display()
    );
    Ok(())
}

/// Explicit `--output` path, or a timestamped name in the configured
/// output directory (current directory when unset).
fn output_path(cfg: &UrlsheetConfig, output: Option<&Path>) -> PathBuf {
    match output {
        Some(p) => p.to_path_buf(),
        None => {
            let name = export::timestamp_filename(&Local::now());
            match &cfg.output_dir {
                Some(dir) => dir.join(name),
                None => PathBuf::from(name),
            }
        }
    }
}
