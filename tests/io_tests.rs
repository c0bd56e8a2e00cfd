use modmap::io::output::{JsonWriter, OutputFormat, TerminalWriter};
use modmap::io::read_source;
use modmap::{analyze_source, OutputWriter};
use std::io::Write;

#[test]
fn reads_source_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "import os\nx = 1\n").unwrap();

    let content = read_source(file.path()).unwrap();
    let report = analyze_source(&content);
    assert_eq!(report.metrics.dependencies, vec!["os".to_string()]);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = read_source(std::path::Path::new("/nonexistent/source.py")).unwrap_err();
    assert!(err.to_string().starts_with("IO error"));
}

#[test]
fn json_report_round_trips_through_a_file() {
    let report = analyze_source("def f(xs=[]):\n    return xs\n");

    let mut file = tempfile::NamedTempFile::new().unwrap();
    JsonWriter::new(&mut file).write_report(&report).unwrap();

    let written = std::fs::read_to_string(file.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["anti_patterns"][0]["name"], "Mutable Default Arguments");
    assert_eq!(value["risk_level"], "low");
}

#[test]
fn terminal_report_skips_empty_sections() {
    let report = analyze_source("x = 1\n");
    let mut buf = Vec::new();
    TerminalWriter::new(&mut buf).write_report(&report).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("METRICS SUMMARY"));
    assert!(!text.contains("ANTI-PATTERNS DETECTED"));
    assert!(!text.contains("MODERNIZATION RECOMMENDATIONS"));
}

#[test]
fn format_strings_parse() {
    assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert!("xml".parse::<OutputFormat>().is_err());
}
