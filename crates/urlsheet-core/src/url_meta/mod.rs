//! URL metadata extraction.
//!
//! Decomposes an absolute URL into the fields of the export table: domain,
//! first path segment ("channel"), a numeric identifier, and a
//! human-readable title derived from the path.

mod title;

/// Fields extracted from one URL. Extraction never fails: an unparsable URL
/// yields all-empty fields so one bad cell cannot sink the rest of the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlMeta {
    /// Host with a leading `www.` stripped.
    pub domain: String,
    /// First path segment, or empty.
    pub channel: String,
    /// First all-digit path segment, or empty.
    pub id: String,
    /// Lower-cased, de-slugged title from the last meaningful path segment.
    pub title: String,
}

/// Extracts [`UrlMeta`] from a single URL string.
///
/// # Examples
///
/// - `extract_url_meta("https://example.com/news/123/breaking-story.html")`
///   → domain `example.com`, channel `news`, id `123`, title `breaking story`
/// - `extract_url_meta("not a url")` → all fields empty
pub fn extract_url_meta(input: &str) -> UrlMeta {
    let parsed = match url::Url::parse(input) {
        Ok(u) => u,
        Err(_) => return UrlMeta::default(),
    };

    let host = parsed.host_str().unwrap_or("");
    let domain = host.strip_prefix("www.").unwrap_or(host).to_string();

    let segments: Vec<&str> = parsed.path().split('/').filter(|s| !s.is_empty()).collect();
    let channel = segments.first().copied().unwrap_or("").to_string();
    let id = segments
        .iter()
        .copied()
        .find(|s| is_numeric(s))
        .unwrap_or("")
        .to_string();
    let title = title::derive_title(&segments);

    UrlMeta {
        domain,
        channel,
        id,
        title,
    }
}

/// True for a non-empty run of ASCII decimal digits.
pub(crate) fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
