//! Title derivation from URL path segments.

use super::is_numeric;

/// Derives the human-readable title from a URL's path segments.
///
/// Starts from the last segment: percent-decode it (keeping the raw segment
/// if the encoding is malformed), then strip one trailing `.ext` suffix. If
/// what remains is purely numeric and there is a preceding segment, that
/// preceding segment is the real slug (shape `/.../my-story/12345`) and is
/// used instead, verbatim. The slug is then de-hyphenated, whitespace-
/// collapsed, trimmed, and lower-cased.
pub(super) fn derive_title(segments: &[&str]) -> String {
    let last = match segments.last() {
        Some(s) => *s,
        None => return String::new(),
    };

    let decoded = percent_decode(last).unwrap_or_else(|| last.to_string());
    let stripped = strip_extension(&decoded);

    let source = if is_numeric(stripped) && segments.len() >= 2 {
        segments[segments.len() - 2]
    } else {
        stripped
    };

    slug_to_words(source)
}

/// Removes a trailing `.<alnum>+` extension, if any.
fn strip_extension(segment: &str) -> &str {
    if let Some(dot) = segment.rfind('.') {
        let ext = &segment[dot + 1..];
        if !ext.is_empty() && ext.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return &segment[..dot];
        }
    }
    segment
}

/// Replaces runs of `-`/`_`/whitespace with single spaces, trims, lower-cases.
fn slug_to_words(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_space = true;

    for c in raw.chars() {
        if c == '-' || c == '_' || c.is_whitespace() {
            if !prev_space {
                out.push(' ');
            }
            prev_space = true;
        } else {
            out.extend(c.to_lowercase());
            prev_space = false;
        }
    }

    out.trim_end().to_string()
}

/// Strict percent-decode: `None` on a malformed escape or invalid UTF-8,
/// so the caller can keep the raw segment instead.
fn percent_decode(input: &str) -> Option<String> {
    let mut out = Vec::with_capacity(input.len());
    let mut bytes = input.bytes();
    while let Some(b) = bytes.next() {
        if b == b'%' {
            let high = bytes.next().and_then(hex_digit)?;
            let low = bytes.next().and_then(hex_digit)?;
            out.push(high << 4 | low);
        } else {
            out.push(b);
        }
    }
    String::from_utf8(out).ok()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
