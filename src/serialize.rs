//! Text serializers for the record snapshot and the derived target lists.
//!
//! These operate purely on the data handed to them: no re-validation, no
//! re-sorting. The CSV and JSON shapes are literal contracts consumed by
//! downstream tooling, so the escaping and defaulting rules here are exact.

use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

use crate::errors::ReportResult;
use crate::models::VisitRecord;

/// Column order of the record CSV exports.
pub const CSV_COLUMNS: [&str; 7] = [
    "Target",
    "Port",
    "Response",
    "First Visit",
    "Last Visit",
    "User Agent",
    "Screenshot",
];

/// Serialize records to CSV: one header row, one row per record, `\n`
/// terminated. Fields use the display defaults (`-`, `N/A`) and are quoted
/// iff they contain a comma, a double quote, or a newline; embedded quotes
/// are doubled.
pub fn to_csv(records: &[VisitRecord]) -> String {
    let mut csv = String::new();
    csv.push_str(&csv_header());
    csv.push('\n');
    for record in records {
        csv.push_str(&csv_row(record));
        csv.push('\n');
    }
    csv
}

/// The comma-joined header line, without the trailing newline.
pub fn csv_header() -> String {
    CSV_COLUMNS.join(",")
}

/// One escaped CSV row for a record, without the trailing newline.
pub fn csv_row(record: &VisitRecord) -> String {
    let columns = record.display_columns();
    let escaped: Vec<String> = columns.iter().map(|field| escape_csv(field)).collect();
    escaped.join(",")
}

fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Pretty-printed JSON (2-space indentation), used for the full-payload and
/// current-view exports alike.
pub fn to_json_pretty<T: Serialize>(value: &T) -> ReportResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Convert newline-delimited list content into a pretty JSON string array.
/// Blank lines are dropped; line text is otherwise untouched.
pub fn lines_to_json(text: &str) -> String {
    let lines = non_blank_lines(text);
    serde_json::to_string_pretty(&lines).unwrap_or_else(|_| "[]".to_string())
}

/// Convert newline-delimited list content into semicolon CSV. With
/// `has_port`, each line splits on its last colon into `target;port`
/// (a line with no colon gets an empty port field) under a `url;port`
/// header; otherwise each line becomes a row under a `url` header.
pub fn lines_to_csv(text: &str, has_port: bool) -> String {
    let mut csv = String::new();

    if has_port {
        csv.push_str("url;port\n");
        for line in non_blank_lines(text) {
            match line.rsplit_once(':') {
                Some((target, port)) => {
                    csv.push_str(target);
                    csv.push(';');
                    csv.push_str(port);
                }
                None => {
                    csv.push_str(line);
                    csv.push(';');
                }
            }
            csv.push('\n');
        }
    } else {
        csv.push_str("url\n");
        for line in non_blank_lines(text) {
            csv.push_str(line);
            csv.push('\n');
        }
    }

    csv
}

fn non_blank_lines(text: &str) -> Vec<&str> {
    text.split('\n').filter(|line| !line.trim().is_empty()).collect()
}

/// Export formats for the target-list outputs and their download MIME types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
    Txt,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Json, OutputFormat::Csv, OutputFormat::Txt];

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Txt => "txt",
        }
    }

    pub fn mime_type(self) -> &'static str {
        mime_for(self.extension())
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// MIME type for a download format tag. Unknown tags fall back to
/// `text/plain`.
pub fn mime_for(tag: &str) -> &'static str {
    match tag {
        "json" => "application/json",
        "csv" => "text/csv",
        "txt" => "text/plain",
        _ => "text/plain",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten::flatten;
    use crate::models::test_support::record;
    use serde_json::json;

    #[test]
    fn test_csv_header_and_rows() {
        let records = vec![record("10.0.0.1", "80", "200")];
        let csv = to_csv(&records);
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(
            lines[0],
            "Target,Port,Response,First Visit,Last Visit,User Agent,Screenshot"
        );
        assert_eq!(lines[1], "10.0.0.1,80,200,N/A,N/A,N/A,N/A");
        // Newline-terminated rows, so the final split element is empty.
        assert_eq!(lines[2], "");
        assert!(!csv.contains('\r'));
    }

    #[test]
    fn test_csv_escapes_commas_and_quotes() {
        let mut visit = record("10.0.0.1", "80", "200");
        visit.user_agent = Some("Mozilla/5.0 (X11, \"Linux\")".to_string());
        let csv = to_csv(&[visit.clone()]);
        assert!(csv.contains("\"Mozilla/5.0 (X11, \"\"Linux\"\")\""));

        // Unescaping the field recovers the original string.
        let row = csv.lines().nth(1).unwrap();
        let start = row.find('"').unwrap();
        let quoted = &row[start + 1..row.rfind('"').unwrap()];
        assert_eq!(quoted.replace("\"\"", "\""), visit.user_agent.unwrap());
    }

    #[test]
    fn test_full_payload_json_round_trips() {
        let payload = json!({"ips": [
            {"ip": "10.0.0.1", "url": "", "ports": [
                {"80": {"response": "200", "visited_first": "2026-08-07 10:00:00"}},
            ]},
        ]});
        let text = to_json_pretty(&payload).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, payload);
        // 2-space indentation.
        assert!(text.contains("\n  \"ips\""));
    }

    #[test]
    fn test_current_view_json_shape() {
        let records = flatten(&json!({"ips": [
            {"ip": "10.0.0.1", "ports": [{"80": {"response": "200"}}]},
        ]}));
        let text = to_json_pretty(&records).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[0]["ip"], "10.0.0.1");
        assert_eq!(parsed[0]["port"], "80");
    }

    #[test]
    fn test_lines_to_json_drops_blanks() {
        let text = "a.com\n\n  \nb.com";
        let json_text = lines_to_json(text);
        let parsed: Vec<String> = serde_json::from_str(&json_text).unwrap();
        assert_eq!(parsed, vec!["a.com", "b.com"]);
    }

    #[test]
    fn test_lines_to_csv_with_ports() {
        let csv = lines_to_csv("a.com:80\nb.com", true);
        assert_eq!(csv, "url;port\na.com;80\nb.com;\n");
    }

    #[test]
    fn test_lines_to_csv_splits_on_last_colon() {
        let csv = lines_to_csv("::1:8080", true);
        assert_eq!(csv, "url;port\n::1;8080\n");
    }

    #[test]
    fn test_lines_to_csv_without_ports() {
        let csv = lines_to_csv("a.com\nb.com\n", false);
        assert_eq!(csv, "url\na.com\nb.com\n");
    }

    #[test]
    fn test_mime_contract() {
        assert_eq!(mime_for("json"), "application/json");
        assert_eq!(mime_for("csv"), "text/csv");
        assert_eq!(mime_for("txt"), "text/plain");
        assert_eq!(mime_for("exe"), "text/plain");
        assert_eq!(OutputFormat::Json.mime_type(), "application/json");
    }
}
