//! Conversion of the nested scan payload into the flat record sequence.
//!
//! The payload shape is `{ips: [{ip, url, ports: [{"<port>": {..detail..}}]}]}`.
//! Flattening is total and permissive: a missing or malformed payload yields
//! an empty sequence, a malformed target entry contributes zero records, and
//! field access never validates types beyond "is it the shape I can read".

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::errors::{ReportError, ReportResult};
use crate::models::VisitRecord;

/// Flatten the nested payload into one record per (target, port-key) pair.
///
/// Order is stable and equals input traversal order: outer targets in
/// sequence order, ports in sequence order, and within a port entry its keys
/// in enumeration order. A port entry normally carries exactly one key; if
/// it carries more, each key produces a record.
pub fn flatten(payload: &Value) -> Vec<VisitRecord> {
    let mut records = Vec::new();

    let Some(targets) = payload.get("ips").and_then(Value::as_array) else {
        return records;
    };

    for entry in targets {
        let ip = entry
            .get("ip")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let url = entry
            .get("url")
            .and_then(Value::as_str)
            .map(str::to_string);

        let Some(ports) = entry.get("ports").and_then(Value::as_array) else {
            continue;
        };

        for port_entry in ports {
            let Some(port_map) = port_entry.as_object() else {
                continue;
            };
            for (port, detail) in port_map {
                records.push(VisitRecord {
                    ip: ip.clone(),
                    url: url.clone(),
                    port: port.clone(),
                    // Direct passthrough, string or number alike; numeric
                    // interpretation is left to the views.
                    response: detail.get("response").filter(|v| !v.is_null()).cloned(),
                    visited_first: str_field(detail, "visited_first"),
                    visited_last: str_field(detail, "visited_last"),
                    user_agent: str_field(detail, "user_agent"),
                    screenshot_path_full: str_field(detail, "screenshot_path_full"),
                    screenshot_path_relative: str_field(detail, "screenshot_path_relative"),
                    screenshot_pathname: str_field(detail, "screenshot_pathname"),
                    screenshot_filename: str_field(detail, "screenshot_filename"),
                });
            }
        }
    }

    records
}

/// Read and parse a results file.
pub fn read_payload(path: &Path) -> ReportResult<Value> {
    let raw = fs::read_to_string(path).map_err(|e| ReportError::io(e, Some(path.to_path_buf())))?;
    Ok(serde_json::from_str(&raw)?)
}

/// Best-effort payload load: a missing or malformed file is logged and the
/// pipeline carries on with an empty payload, per the one-shot load contract.
pub fn load_payload(path: &Path) -> Value {
    match read_payload(path) {
        Ok(payload) => payload,
        Err(e) => {
            log::error!("Could not load results from {}: {}", path.display(), e);
            Value::Null
        }
    }
}

fn str_field(detail: &Value, key: &str) -> Option<String> {
    detail.get(key).and_then(Value::as_str).map(str::to_string)
}
