//! `urlsheet export-url <link>` – rewrite a Sheets link to its CSV endpoint.

use anyhow::Result;
use urlsheet_core::sheet_link;

pub fn run_export_url(sheet_url: &str) -> Result<()> {
    sheet_link::validate_sheet_url(sheet_url)?;
    println!("{}", sheet_link::to_csv_export_url(sheet_url));
    Ok(())
}
