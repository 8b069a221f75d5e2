use serde::Serialize;
use serde_json::Value;

/// One observed (target, port) interaction from the recon run, flattened out
/// of the nested results payload. Records are immutable once produced: every
/// derived view and export reads from the same snapshot, none write back.
///
/// `response` is carried exactly as it appeared in the payload (string or
/// number, possibly absent); numeric interpretation happens only in the
/// consuming views.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VisitRecord {
    pub ip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub port: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visited_first: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visited_last: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot_path_full: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot_path_relative: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot_pathname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot_filename: Option<String>,
}

/// Aggregate reachability counters for one record snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub accessible: usize,
    pub unreachable: usize,
}

impl VisitRecord {
    /// The human-facing label for this record's target: the URL when one is
    /// present and non-empty, the IP otherwise.
    pub fn display_target(&self) -> &str {
        match self.url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => &self.ip,
        }
    }

    /// `target:port` form of the display target.
    pub fn socket(&self) -> String {
        format!("{}:{}", self.display_target(), self.port)
    }

    /// Whether a screenshot was captured for this visit. Empty string and
    /// absent field both count as "no screenshot".
    pub fn has_screenshot(&self) -> bool {
        self.screenshot_filename
            .as_deref()
            .is_some_and(|name| !name.is_empty())
    }

    /// The raw response rendered as text, without the JSON quoting. Absent
    /// response renders empty.
    pub fn response_text(&self) -> String {
        match &self.response {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        }
    }

    /// The seven display columns (Target, Port, Response, First Visit,
    /// Last Visit, User Agent, Screenshot) with the render-time defaults
    /// applied: `-` for a missing port or response, `N/A` for the rest.
    ///
    /// This is the single textual rendering shared by the report table, the
    /// CSV serializer, and the search filter, so a record matches the filter
    /// exactly when its visible row would.
    pub fn display_columns(&self) -> [String; 7] {
        let response = self.response_text();
        [
            self.display_target().to_string(),
            text_or(&self.port, "-"),
            text_or(&response, "-"),
            opt_or(self.visited_first.as_deref(), "N/A"),
            opt_or(self.visited_last.as_deref(), "N/A"),
            opt_or(self.user_agent.as_deref(), "N/A"),
            opt_or(self.screenshot_filename.as_deref(), "N/A"),
        ]
    }
}

fn text_or(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

fn opt_or(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Bare record with every optional field absent.
    pub fn record(ip: &str, port: &str, response: &str) -> VisitRecord {
        VisitRecord {
            ip: ip.to_string(),
            url: None,
            port: port.to_string(),
            response: if response.is_empty() {
                None
            } else {
                Some(Value::String(response.to_string()))
            },
            visited_first: None,
            visited_last: None,
            user_agent: None,
            screenshot_path_full: None,
            screenshot_path_relative: None,
            screenshot_pathname: None,
            screenshot_filename: None,
        }
    }
}
