//! URL column resolution: header name match first, content sniff as fallback.

/// Column used when neither the header nor the sample row gives a hint.
/// Matches the common layout where column A is a row label and B the URL.
pub const FALLBACK_URL_COLUMN: usize = 1;

/// Decides which column index holds the URLs.
///
/// In order, first match wins:
/// 1. a header cell whose trimmed text equals `"url"` case-insensitively;
/// 2. the first sample-row cell containing `http://` or `https://`;
/// 3. [`FALLBACK_URL_COLUMN`].
pub fn resolve_url_column(header: &[String], sample: Option<&[String]>) -> usize {
    if let Some(idx) = header
        .iter()
        .position(|cell| cell.trim().eq_ignore_ascii_case("url"))
    {
        return idx;
    }

    if let Some(sample) = sample {
        if let Some(idx) = sample.iter().position(|cell| contains_url(cell)) {
            return idx;
        }
    }

    FALLBACK_URL_COLUMN
}

fn contains_url(cell: &str) -> bool {
    let lower = cell.to_ascii_lowercase();
    lower.contains("http://") || lower.contains("https://")
}
