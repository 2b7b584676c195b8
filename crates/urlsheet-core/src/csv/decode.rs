//! CSV decoding: single-pass two-state scanner.

use super::Matrix;

/// Scanner state: inside a quoted field or not.
enum Mode {
    Field,
    Quoted,
}

/// Parses CSV text into a matrix of raw string cells.
///
/// One left-to-right scan, no backtracking. Outside quotes, `,` ends the
/// field and `\n`, `\r\n`, or a lone `\r` ends the row. Inside quotes,
/// `""` unescapes to a literal `"` and everything else (delimiters and
/// newlines included) is taken verbatim. The last field and row are flushed
/// at EOF even without a trailing terminator; an unterminated quote is not
/// an error. A final row holding a single empty field is the artifact of a
/// trailing terminator and is dropped.
pub fn decode(text: &str) -> Matrix {
    let mut rows: Matrix = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut mode = Mode::Field;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match mode {
            Mode::Quoted => {
                if c == '"' {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        mode = Mode::Field;
                    }
                } else {
                    field.push(c);
                }
            }
            Mode::Field => match c {
                '"' => mode = Mode::Quoted,
                ',' => row.push(std::mem::take(&mut field)),
                '\n' => {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                _ => field.push(c),
            },
        }
    }

    row.push(field);
    rows.push(row);

    // Trailing line terminator leaves a single empty field; not a data row.
    if rows.last().map_or(false, |r| r.len() == 1 && r[0].is_empty()) {
        rows.pop();
    }

    rows
}
