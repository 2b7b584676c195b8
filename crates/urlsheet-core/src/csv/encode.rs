//! CSV encoding: minimal quoting, CRLF row terminators.

/// Serializes a matrix back to CSV text.
///
/// Cells are joined with `,` and rows with `\r\n` (the CSV interchange
/// convention). A cell is quoted only when it contains a `"`, a `,`, or a
/// newline character; internal quotes are doubled. Exact inverse of
/// [`decode`](super::decode) for matrices of defined string cells.
pub fn encode(matrix: &[Vec<String>]) -> String {
    matrix
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| escape_cell(cell))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\r\n")
}

fn escape_cell(cell: &str) -> String {
    let needs_quotes = cell.contains(|c| c == '"' || c == ',' || c == '\n' || c == '\r');
    if needs_quotes {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
