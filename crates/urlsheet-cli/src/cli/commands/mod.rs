//! CLI subcommand implementations.

mod convert;
mod export_url;
mod probe;

pub use convert::run_convert;
pub use export_url::run_export_url;
pub use probe::run_probe;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Reads the input CSV from a file, or from stdin when the path is "-".
/// A leading UTF-8 BOM (common in spreadsheet exports) is stripped; the
/// codec itself never sees one.
fn read_input(path: &Path) -> Result<String> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("read CSV from stdin")?;
        text
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("read CSV file: {}", path.display()))?
    };
    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}
