//! Export conventions: timestamped filenames and the UTF-8 BOM spreadsheet
//! apps expect on a downloaded CSV.

use chrono::{DateTime, Datelike, Local, Timelike};

/// Byte-order mark prepended to export files so Excel detects UTF-8.
pub const UTF8_BOM: &str = "\u{feff}";

/// Returns `text` with the UTF-8 BOM prepended.
pub fn with_bom(text: &str) -> String {
    format!("{UTF8_BOM}{text}")
}

/// Builds the `yyyy-mm-dd_h-mm-ss.csv` export filename.
/// Hours are unpadded; minutes and seconds are zero-padded.
pub fn timestamp_filename(now: &DateTime<Local>) -> String {
    format!(
        "{}-{:02}-{:02}_{}-{:02}-{:02}.csv",
        now.year(),
        now.month(),
        now.day(),
        now.hour(),
        now.minute(),
        now.second()
    )
}
