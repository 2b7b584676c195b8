//! Conversion pipeline: CSV text in, structured records and export CSV out.
//!
//! Decode → resolve the URL column → extract metadata per data row →
//! re-encode. Purely synchronous and stateless; one call, one table.

mod resolve;

pub use resolve::{resolve_url_column, FALLBACK_URL_COLUMN};

use serde::Serialize;

use crate::csv;
use crate::url_meta;

/// Header of the exported table.
pub const EXPORT_HEADER: [&str; 6] = ["#", "URL", "Domain", "Channel", "ID", "Title"];

/// One converted table row. Extraction fields are empty strings when the URL
/// could not be parsed; they are never absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlRecord {
    /// 1-based position among the kept records, in input order.
    pub ordinal: u32,
    pub url: String,
    pub domain: String,
    pub channel: String,
    pub id: String,
    pub title: String,
}

/// Result of one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub records: Vec<UrlRecord>,
    /// The records re-serialized as CSV under [`EXPORT_HEADER`].
    pub export_text: String,
}

/// Runs the full pipeline over raw CSV text.
///
/// Without `column_override`, the URL column is resolved from the first two
/// rows. Data rows whose URL cell is blank after trimming are skipped
/// silently; ordinals stay consecutive over the kept rows. Empty input is
/// not an error: it yields zero records and a header-only export.
pub fn convert(text: &str, column_override: Option<usize>) -> Conversion {
    let matrix = csv::decode(text);

    let column = column_override.unwrap_or_else(|| {
        let header = matrix.first().map(|r| r.as_slice()).unwrap_or(&[]);
        resolve_url_column(header, matrix.get(1).map(|r| r.as_slice()))
    });
    tracing::debug!(column, rows = matrix.len(), "converting matrix");

    let mut records: Vec<UrlRecord> = Vec::new();
    for row in matrix.iter().skip(1) {
        let raw = row.get(column).map(|cell| cell.trim()).unwrap_or("");
        if raw.is_empty() {
            continue;
        }
        let meta = url_meta::extract_url_meta(raw);
        records.push(UrlRecord {
            ordinal: records.len() as u32 + 1,
            url: raw.to_string(),
            domain: meta.domain,
            channel: meta.channel,
            id: meta.id,
            title: meta.title,
        });
    }

    let mut out: csv::Matrix = Vec::with_capacity(records.len() + 1);
    out.push(EXPORT_HEADER.iter().map(|h| h.to_string()).collect());
    for r in &records {
        out.push(vec![
            r.ordinal.to_string(),
            r.url.clone(),
            r.domain.clone(),
            r.channel.clone(),
            r.id.clone(),
            r.title.clone(),
        ]);
    }

    Conversion {
        records,
        export_text: csv::encode(&out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_url_header_column() {
        let text = "Row,URL\n1,https://a.com/ch/99/My-Title.html\n";
        let conversion = convert(text, None);
        assert_eq!(conversion.records.len(), 1);
        let r = &conversion.records[0];
        assert_eq!(r.ordinal, 1);
        assert_eq!(r.url, "https://a.com/ch/99/My-Title.html");
        assert_eq!(r.domain, "a.com");
        assert_eq!(r.channel, "ch");
        assert_eq!(r.id, "99");
        assert_eq!(r.title, "my title");
    }

    #[test]
    fn blank_cells_skipped_ordinals_consecutive() {
        let text = "URL\nhttps://a.com/x\n   \n\nhttps://b.com/y\n";
        let conversion = convert(text, None);
        let ordinals: Vec<u32> = conversion.records.iter().map(|r| r.ordinal).collect();
        assert_eq!(ordinals, vec![1, 2]);
        assert_eq!(conversion.records[1].domain, "b.com");
    }

    #[test]
    fn override_wins_over_resolution() {
        let text = "URL,Mirror\nhttps://a.com/x,https://b.com/y\n";
        let conversion = convert(text, Some(1));
        assert_eq!(conversion.records[0].domain, "b.com");
    }

    #[test]
    fn bad_url_keeps_row_with_empty_fields() {
        let text = "URL\nnot a url\nhttps://a.com/x\n";
        let conversion = convert(text, None);
        assert_eq!(conversion.records.len(), 2);
        assert_eq!(conversion.records[0].domain, "");
        assert_eq!(conversion.records[0].title, "");
        assert_eq!(conversion.records[1].domain, "a.com");
    }

    #[test]
    fn empty_input_yields_header_only_export() {
        let conversion = convert("", None);
        assert!(conversion.records.is_empty());
        assert_eq!(conversion.export_text, "#,URL,Domain,Channel,ID,Title");
    }

    #[test]
    fn missing_cells_treated_as_blank() {
        // Second data row is shorter than the resolved column index.
        let text = "Row,URL\n1,https://a.com/x\n2\n";
        let conversion = convert(text, None);
        assert_eq!(conversion.records.len(), 1);
    }

    #[test]
    fn export_text_round_trips_through_codec() {
        let text = "URL\nhttps://a.com/news/7/some-story.html\n";
        let conversion = convert(text, None);
        let matrix = csv::decode(&conversion.export_text);
        assert_eq!(matrix[0], EXPORT_HEADER.to_vec());
        assert_eq!(matrix[1], vec![
            "1",
            "https://a.com/news/7/some-story.html",
            "a.com",
            "news",
            "7",
            "some story"
        ]);
    }

    #[test]
    fn idempotent_export() {
        let text = "URL\nhttps://a.com/a/1/x.html\nhttps://b.com/b/2/y.html\n";
        assert_eq!(convert(text, None).export_text, convert(text, None).export_text);
    }
}
