//! Tests for probe and export-url, plus a file-backed convert run.

use super::parse;
use crate::cli::commands::run_convert;
use crate::cli::CliCommand;
use std::path::PathBuf;
use urlsheet_core::config::UrlsheetConfig;

#[test]
fn cli_parse_probe() {
    match parse(&["urlsheet", "probe", "links.csv"]) {
        CliCommand::Probe { input } => assert_eq!(input, PathBuf::from("links.csv")),
        _ => panic!("expected Probe"),
    }
}

#[test]
fn cli_parse_export_url() {
    match parse(&[
        "urlsheet",
        "export-url",
        "https://docs.google.com/spreadsheets/d/abc/edit#gid=0",
    ]) {
        CliCommand::ExportUrl { sheet_url } => {
            assert!(sheet_url.contains("/spreadsheets/d/abc"));
        }
        _ => panic!("expected ExportUrl"),
    }
}

#[test]
fn run_convert_writes_export_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("links.csv");
    std::fs::write(
        &input,
        "Row,URL\n1,https://a.com/ch/99/My-Title.html\n2,\n3,https://b.com/x/7/other_story.html\n",
    )
    .unwrap();
    let output = dir.path().join("out.csv");

    let cfg = UrlsheetConfig::default();
    run_convert(&cfg, &input, None, Some(output.as_path()), false, false).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    // BOM first (config default), then the fixed header.
    assert!(written.starts_with('\u{feff}'));
    let body = written.trim_start_matches('\u{feff}');
    let mut lines = body.split("\r\n");
    assert_eq!(lines.next(), Some("#,URL,Domain,Channel,ID,Title"));
    assert_eq!(
        lines.next(),
        Some("1,https://a.com/ch/99/My-Title.html,a.com,ch,99,my title")
    );
    // Blank URL row skipped; ordinals stay consecutive.
    assert_eq!(
        lines.next(),
        Some("2,https://b.com/x/7/other_story.html,b.com,x,7,other story")
    );
}

#[test]
fn run_convert_rejects_bad_column_label() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("links.csv");
    std::fs::write(&input, "URL\nhttps://a.com/x\n").unwrap();

    let cfg = UrlsheetConfig::default();
    let err = run_convert(&cfg, &input, Some("B2"), None, true, false).unwrap_err();
    assert!(err.to_string().contains("column label"));
}

#[test]
fn run_convert_strips_input_bom() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("links.csv");
    std::fs::write(&input, "\u{feff}URL\nhttps://a.com/n/1/t.html\n").unwrap();
    let output = dir.path().join("out.csv");

    let cfg = UrlsheetConfig {
        include_bom: false,
        output_dir: None,
    };
    run_convert(&cfg, &input, None, Some(output.as_path()), false, false).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    // Input BOM must not defeat the "URL" header match or leak into output.
    assert!(written.starts_with("#,URL"));
    assert!(written.contains("a.com"));
}
