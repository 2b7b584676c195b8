//! `urlsheet probe <input>` – inspect the header and resolved URL column.

use anyhow::Result;
use std::path::Path;
use urlsheet_core::column::index_to_label;
use urlsheet_core::convert::resolve_url_column;
use urlsheet_core::csv;

use super::read_input;

pub fn run_probe(input: &Path) -> Result<()> {
    let text = read_input(input)?;
    let matrix = csv::decode(&text);
    let header = matrix.first().map(|r| r.as_slice()).unwrap_or(&[]);

    if header.is_empty() {
        println!("No header row found.");
        return Ok(());
    }

    for (i, cell) in header.iter().enumerate() {
        let name = if cell.is_empty() { "(empty)" } else { cell.as_str() };
        println!("{:>4}  {}", index_to_label(i), name);
    }

    let column = resolve_url_column(header, matrix.get(1).map(|r| r.as_slice()));
    println!("URL column: {}", index_to_label(column));
    Ok(())
}
