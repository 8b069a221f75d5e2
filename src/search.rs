//! Case-insensitive substring filtering over the record snapshot.
//!
//! The filter operates on the same textual rendering the report table shows
//! (see [`VisitRecord::display_columns`]), so the set of matching records and
//! the set of visible rows cannot drift apart.

use crate::models::VisitRecord;

/// One visibility flag per record, in record order. A record is visible iff
/// the lower-cased concatenation of its displayed fields contains the
/// lower-cased query. An empty query keeps everything visible.
pub fn visibility_mask(records: &[VisitRecord], query: &str) -> Vec<bool> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return vec![true; records.len()];
    }
    records
        .iter()
        .map(|record| haystack(record).contains(&needle))
        .collect()
}

/// Apply a mask, keeping the records whose flag is set.
pub fn visible_records(records: &[VisitRecord], mask: &[bool]) -> Vec<VisitRecord> {
    records
        .iter()
        .zip(mask)
        .filter(|(_, visible)| **visible)
        .map(|(record, _)| record.clone())
        .collect()
}

/// The lower-cased text a record is matched against: its displayed fields,
/// concatenated. The report embeds this same text per table row so the
/// in-page filter and the export filter see identical data.
pub fn haystack(record: &VisitRecord) -> String {
    record.display_columns().concat().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten::flatten;
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
    fn test_empty_query_shows_everything() {
        let records = example_records();
        assert_eq!(visibility_mask(&records, ""), vec![true, true]);
    }

    #[test]
    fn test_query_matches_single_row() {
        let records = example_records();
        assert_eq!(visibility_mask(&records, "502"), vec![false, true]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let records = example_records();
        assert_eq!(visibility_mask(&records, "A_HTTPS"), vec![false, true]);
        assert_eq!(visibility_mask(&records, "10.0.0.1"), vec![true, true]);
    }

    #[test]
    fn test_query_matches_rendered_defaults() {
        // Unvisited records render N/A; the filter sees what the table shows.
        let records = example_records();
        assert_eq!(visibility_mask(&records, "n/a"), vec![true, true]);
    }

    #[test]
    fn test_visible_records_applies_mask() {
        let records = example_records();
        let mask = visibility_mask(&records, "502");
        let visible = visible_records(&records, &mask);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].port, "443");
    }

    #[test]
    fn test_mask_on_empty_snapshot() {
        assert!(visibility_mask(&[], "anything").is_empty());
    }
}
