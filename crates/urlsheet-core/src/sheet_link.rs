//! Sheet link handling: validate a pasted link and rewrite Google Sheets
//! URLs to their CSV export endpoint. No fetching happens here; the caller
//! decides what to do with the rewritten URL.

use thiserror::Error;
use url::Url;

/// A pasted link that cannot serve as a CSV source.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SheetUrlError {
    #[error("invalid URL format")]
    Invalid,
    #[error("URL must start with http(s)")]
    NotHttp,
    #[error("provide a public Google Sheets link or a direct CSV URL")]
    NotSheetOrCsv,
}

/// Checks that a link is an http(s) Google Sheets link or a direct CSV URL.
pub fn validate_sheet_url(input: &str) -> Result<(), SheetUrlError> {
    let parsed = Url::parse(input).map_err(|_| SheetUrlError::Invalid)?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(SheetUrlError::NotHttp);
    }
    let is_sheet = parsed
        .host_str()
        .map_or(false, |h| h.contains("docs.google.com"))
        && parsed.path().contains("/spreadsheets/");
    if !is_sheet && !parsed.path().ends_with(".csv") {
        return Err(SheetUrlError::NotSheetOrCsv);
    }
    Ok(())
}

/// Rewrites a Google Sheets link to its CSV export endpoint.
///
/// `https://docs.google.com/spreadsheets/d/<ID>/edit#gid=<GID>` becomes
/// `https://docs.google.com/spreadsheets/d/<ID>/export?format=csv&gid=<GID>`.
/// The `gid` is taken from the fragment (parsed as a query string) or, failing
/// that, from the query. Anything that is not a Sheets document link (or does
/// not parse) is returned unchanged.
pub fn to_csv_export_url(input: &str) -> String {
    let parsed = match Url::parse(input) {
        Ok(u) => u,
        Err(_) => return input.to_string(),
    };

    let is_sheet = parsed
        .host_str()
        .map_or(false, |h| h.contains("docs.google.com"))
        && parsed.path().contains("/spreadsheets/d/");
    if !is_sheet {
        return input.to_string();
    }

    let segments: Vec<&str> = parsed.path().split('/').filter(|s| !s.is_empty()).collect();
    let sheet_id = match segments.iter().position(|s| *s == "d") {
        Some(i) => segments.get(i + 1).copied().unwrap_or(""),
        None => segments.last().copied().unwrap_or(""),
    };

    let base = format!("https://docs.google.com/spreadsheets/d/{sheet_id}/export?format=csv");
    match gid_param(&parsed) {
        Some(gid) => format!("{base}&gid={gid}"),
        None => base,
    }
}

/// The `gid` parameter from the fragment (preferred) or the query.
fn gid_param(parsed: &Url) -> Option<String> {
    if let Some(fragment) = parsed.fragment() {
        if fragment.contains("gid=") {
            let gid = url::form_urlencoded::parse(fragment.as_bytes())
                .find(|(k, _)| k == "gid")
                .map(|(_, v)| v.into_owned());
            return gid.filter(|v| !v.is_empty());
        }
    }
    parsed
        .query_pairs()
        .find(|(k, _)| k == "gid")
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}
