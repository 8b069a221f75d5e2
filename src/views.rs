//! Pure derived views over a flattened record snapshot.
//!
//! Nothing in here mutates its input or holds state; every function is a
//! plain fold over `&[VisitRecord]` so the report renderer and the export
//! paths can consume identical results.

use std::collections::HashSet;

use serde_json::Value;

use crate::models::{Stats, VisitRecord};

/// Numeric interpretation of a response (or port) value: JSON numbers
/// truncate toward zero, strings parse their leading integer (optional sign
/// after leading whitespace, then decimal digits). Anything else fails.
pub fn status_code(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => int_prefix(s),
        _ => None,
    }
}

fn int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    let n: i64 = digits.parse().ok()?;
    Some(if negative { -n } else { n })
}

/// A visit is reachable iff its response parses numerically into [200, 400).
/// Parse failure (missing response, `timeout`, `refused`, ...) is never an
/// error; it simply falls outside the success range.
pub fn is_reachable(record: &VisitRecord) -> bool {
    matches!(status_code(record.response.as_ref()), Some(code) if (200..400).contains(&code))
}

/// Reachability counters. `accessible + unreachable == total` always holds.
pub fn stats(records: &[VisitRecord]) -> Stats {
    let total = records.len();
    let accessible = records.iter().filter(|r| is_reachable(r)).count();
    Stats {
        total,
        accessible,
        unreachable: total - accessible,
    }
}

/// Status bucket used to colour response codes in the rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    Danger,
    Neutral,
}

impl StatusClass {
    /// CSS class carried by the status badge; neutral has none.
    pub fn css_class(self) -> &'static str {
        match self {
            StatusClass::Success => "success",
            StatusClass::Danger => "danger",
            StatusClass::Neutral => "",
        }
    }
}

/// [200, 300) is a success, >= 400 a failure; redirects and anything that
/// does not parse stay neutral.
pub fn status_class(response: Option<&Value>) -> StatusClass {
    match status_code(response) {
        Some(code) if (200..300).contains(&code) => StatusClass::Success,
        Some(code) if code >= 400 => StatusClass::Danger,
        _ => StatusClass::Neutral,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    pub fn label(self) -> &'static str {
        match self {
            Protocol::Http => "HTTP",
            Protocol::Https => "HTTPS",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Protocol::Http => "protocol-http",
            Protocol::Https => "protocol-https",
        }
    }
}

/// Heuristic protocol tag for a visit: HTTPS iff the port is 443 or the
/// screenshot filename contains the substring `https` (case-sensitive).
///
/// This is not protocol-accurate detection: an HTTPS service on a
/// non-standard port whose screenshot name lacks `https` is tagged HTTP.
/// The behavior is kept as-is because downstream consumers read the tag.
pub fn protocol_of(record: &VisitRecord) -> Protocol {
    let https_port = int_prefix(&record.port) == Some(443);
    let https_name = record
        .screenshot_filename
        .as_deref()
        .is_some_and(|name| name.contains("https"));
    if https_port || https_name {
        Protocol::Https
    } else {
        Protocol::Http
    }
}

/// Options for [`unique_targets`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TargetOptions {
    /// Keep only records that captured a screenshot.
    pub require_screenshot: bool,
    /// Emit `target:port` instead of the bare display target.
    pub with_port: bool,
}

/// Display targets of the snapshot, deduplicated preserving first-seen order.
pub fn unique_targets(records: &[VisitRecord], opts: TargetOptions) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut targets = Vec::new();
    for record in records {
        if opts.require_screenshot && !record.has_screenshot() {
            continue;
        }
        let label = if opts.with_port {
            record.socket()
        } else {
            record.display_target().to_string()
        };
        if seen.insert(label.clone()) {
            targets.push(label);
        }
    }
    targets
}

/// Display targets of every visit that failed [`is_reachable`], including
/// those whose response never parsed as a number, deduplicated preserving
/// first-seen order.
pub fn unreachable_targets(records: &[VisitRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut targets = Vec::new();
    for record in records {
        if is_reachable(record) {
            continue;
        }
        let label = record.display_target().to_string();
        if seen.insert(label.clone()) {
            targets.push(label);
        }
    }
    targets
}

/// The five exportable target lists shown as output panels in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputVariant {
    AllTargetsNoPorts,
    AllTargetsWithPorts,
    ScreenshotsNoPorts,
    ScreenshotsWithPorts,
    Unreachable,
}

impl OutputVariant {
    pub const ALL: [OutputVariant; 5] = [
        OutputVariant::AllTargetsNoPorts,
        OutputVariant::AllTargetsWithPorts,
        OutputVariant::ScreenshotsNoPorts,
        OutputVariant::ScreenshotsWithPorts,
        OutputVariant::Unreachable,
    ];

    /// Stable identifier; export filenames (`pagehawk-<id>.<format>`) and
    /// the report's panel element ids are built from it.
    pub fn id(self) -> &'static str {
        match self {
            OutputVariant::AllTargetsNoPorts => "all-targets-no-ports",
            OutputVariant::AllTargetsWithPorts => "all-targets-with-ports",
            OutputVariant::ScreenshotsNoPorts => "screenshots-no-ports",
            OutputVariant::ScreenshotsWithPorts => "screenshots-with-ports",
            OutputVariant::Unreachable => "unreachable",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            OutputVariant::AllTargetsNoPorts => "All Targets (without ports)",
            OutputVariant::AllTargetsWithPorts => "All Targets (with ports)",
            OutputVariant::ScreenshotsNoPorts => "Targets With Screenshots (without ports)",
            OutputVariant::ScreenshotsWithPorts => "Targets With Screenshots (with ports)",
            OutputVariant::Unreachable => "Unreachable Targets",
        }
    }

    /// Whether each line carries a `:port` suffix; drives the line-list CSV
    /// conversion.
    pub fn has_port(self) -> bool {
        matches!(
            self,
            OutputVariant::AllTargetsWithPorts | OutputVariant::ScreenshotsWithPorts
        )
    }

    /// Newline-joined list content for this variant.
    pub fn content(self, records: &[VisitRecord]) -> String {
        let lines = match self {
            OutputVariant::AllTargetsNoPorts => unique_targets(records, TargetOptions::default()),
            OutputVariant::AllTargetsWithPorts => unique_targets(
                records,
                TargetOptions {
                    with_port: true,
                    ..TargetOptions::default()
                },
            ),
            OutputVariant::ScreenshotsNoPorts => unique_targets(
                records,
                TargetOptions {
                    require_screenshot: true,
                    with_port: false,
                },
            ),
            OutputVariant::ScreenshotsWithPorts => unique_targets(
                records,
                TargetOptions {
                    require_screenshot: true,
                    with_port: true,
                },
            ),
            OutputVariant::Unreachable => unreachable_targets(records),
        };
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten::flatten;
    use crate::models::test_support::record;
    use serde_json::json;

    fn example_records() -> Vec<VisitRecord> {
        flatten(&json!({"ips": [
            {"ip": "10.0.0.1", "ports": [
                {"80": {"response": "200"}},
                {"443": {"response": "502", "screenshot_filename": "a_https.png"}},
            ]},
        ]}))
    }

    #[test]
    fn test_status_code_parsing() {
        assert_eq!(status_code(Some(&json!("200"))), Some(200));
        assert_eq!(status_code(Some(&json!(" 302 Found"))), Some(302));
        assert_eq!(status_code(Some(&json!(503))), Some(503));
        assert_eq!(status_code(Some(&json!(200.9))), Some(200));
        assert_eq!(status_code(Some(&json!("-1"))), Some(-1));
        assert_eq!(status_code(Some(&json!("timeout"))), None);
        assert_eq!(status_code(Some(&json!(""))), None);
        assert_eq!(status_code(None), None);
    }

    #[test]
    fn test_reachable_range_bounds() {
        let make = |resp: &str| record("10.0.0.1", "80", resp);
        assert!(!is_reachable(&make("199")));
        assert!(is_reachable(&make("200")));
        assert!(is_reachable(&make("399")));
        assert!(!is_reachable(&make("400")));
        assert!(!is_reachable(&make("refused")));
        assert!(!is_reachable(&make("")));
    }

    #[test]
    fn test_stats_example() {
        let records = example_records();
        let s = stats(&records);
        assert_eq!(s.total, 2);
        assert_eq!(s.accessible, 1);
        assert_eq!(s.unreachable, 1);
        assert_eq!(s.accessible + s.unreachable, s.total);
    }

    #[test]
    fn test_stats_counts_parse_failures_as_unreachable() {
        let records = vec![
            record("10.0.0.1", "80", "200"),
            record("10.0.0.1", "81", "timeout"),
            record("10.0.0.1", "82", "100"),
        ];
        let s = stats(&records);
        assert_eq!(s.accessible, 1);
        assert_eq!(s.unreachable, 2);
    }

    #[test]
    fn test_status_class_buckets() {
        assert_eq!(status_class(Some(&json!("204"))), StatusClass::Success);
        assert_eq!(status_class(Some(&json!("301"))), StatusClass::Neutral);
        assert_eq!(status_class(Some(&json!("404"))), StatusClass::Danger);
        assert_eq!(status_class(Some(&json!("unreachable"))), StatusClass::Neutral);
        assert_eq!(status_class(None), StatusClass::Neutral);
        assert_eq!(StatusClass::Neutral.css_class(), "");
    }

    #[test]
    fn test_protocol_heuristic() {
        let records = example_records();
        assert_eq!(protocol_of(&records[0]), Protocol::Http);
        // Port 443 wins even though the filename check would also match.
        assert_eq!(protocol_of(&records[1]), Protocol::Https);

        let mut by_name = record("10.0.0.1", "8443", "200");
        by_name.screenshot_filename = Some("host_8443_https_fallback.png".to_string());
        assert_eq!(protocol_of(&by_name), Protocol::Https);

        // The filename match is case-sensitive.
        by_name.screenshot_filename = Some("host_8443_HTTPS.png".to_string());
        assert_eq!(protocol_of(&by_name), Protocol::Http);
    }

    #[test]
    fn test_unique_targets_with_ports_example() {
        let records = example_records();
        let targets = unique_targets(
            &records,
            TargetOptions {
                with_port: true,
                ..TargetOptions::default()
            },
        );
        assert_eq!(targets, vec!["10.0.0.1:80", "10.0.0.1:443"]);
    }

    #[test]
    fn test_unique_targets_collapse_without_ports() {
        let records = example_records();
        let targets = unique_targets(&records, TargetOptions::default());
        assert_eq!(targets, vec!["10.0.0.1"]);
    }

    #[test]
    fn test_unique_targets_require_screenshot() {
        let records = example_records();
        let targets = unique_targets(
            &records,
            TargetOptions {
                require_screenshot: true,
                with_port: true,
            },
        );
        assert_eq!(targets, vec!["10.0.0.1:443"]);
    }

    #[test]
    fn test_unreachable_targets_complement_and_dedup() {
        let mut records = vec![
            record("10.0.0.1", "80", "200"),
            record("10.0.0.2", "80", "timeout"),
            record("10.0.0.2", "443", "500"),
            record("10.0.0.3", "80", "100"),
        ];
        records.push(record("10.0.0.1", "443", "301"));
        let targets = unreachable_targets(&records);
        assert_eq!(targets, vec!["10.0.0.2", "10.0.0.3"]);
    }

    #[test]
    fn test_output_variant_ids_match_export_contract() {
        let ids: Vec<&str> = OutputVariant::ALL.iter().map(|v| v.id()).collect();
        assert_eq!(
            ids,
            vec![
                "all-targets-no-ports",
                "all-targets-with-ports",
                "screenshots-no-ports",
                "screenshots-with-ports",
                "unreachable",
            ]
        );
    }

    #[test]
    fn test_output_variant_content() {
        let records = example_records();
        assert_eq!(
            OutputVariant::AllTargetsWithPorts.content(&records),
            "10.0.0.1:80\n10.0.0.1:443"
        );
        assert_eq!(
            OutputVariant::ScreenshotsNoPorts.content(&records),
            "10.0.0.1"
        );
        assert_eq!(OutputVariant::Unreachable.content(&records), "10.0.0.1");
        assert!(OutputVariant::AllTargetsWithPorts.has_port());
        assert!(!OutputVariant::Unreachable.has_port());
    }
}
