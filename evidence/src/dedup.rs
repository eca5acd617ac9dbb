//! Title-based deduplication of evidence sources.
//!
//! Two records are duplicates when their titles are equal after trimming
//! surrounding whitespace and lower-casing. There is no fuzzy matching.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde_json::{Map, Value};
use tracing::debug;

use crate::record::EvidenceRecord;

/// Anything that may carry a title.
///
/// A missing or non-string title is `None` and counts as empty.
pub trait Titled {
    fn title(&self) -> Option<&str>;
}

impl Titled for EvidenceRecord {
    fn title(&self) -> Option<&str> {
        Some(&self.title)
    }
}

impl Titled for HashMap<String, String> {
    fn title(&self) -> Option<&str> {
        self.get("title").map(String::as_str)
    }
}

impl Titled for BTreeMap<String, String> {
    fn title(&self) -> Option<&str> {
        self.get("title").map(String::as_str)
    }
}

impl Titled for Map<String, Value> {
    fn title(&self) -> Option<&str> {
        self.get("title").and_then(Value::as_str)
    }
}

impl Titled for Value {
    fn title(&self) -> Option<&str> {
        self.get("title").and_then(Value::as_str)
    }
}

impl<T: Titled + ?Sized> Titled for &T {
    fn title(&self) -> Option<&str> {
        (**self).title()
    }
}

/// Comparison key for a title: trimmed and lower-cased.
pub fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}

/// Keep the first record for each distinct normalized title.
///
/// Records whose normalized title is empty (including a missing title) are
/// always dropped. The result is an order-preserving subsequence of the
/// input; records are moved through untouched.
pub fn deduplicate_sources<T, I>(records: I) -> Vec<T>
where
    T: Titled,
    I: IntoIterator<Item = T>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique = Vec::new();
    let mut dropped = 0usize;

    for record in records {
        let normalized = normalize_title(record.title().unwrap_or_default());
        if !normalized.is_empty() && seen.insert(normalized) {
            unique.push(record);
        } else {
            dropped += 1;
        }
    }

    debug!(kept = unique.len(), dropped, "deduplicated sources");
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{format_evidence, FormatEvidenceArgs};
    use serde_json::json;

    fn titles(values: &[Value]) -> Vec<&str> {
        values.iter().map(|v| v["title"].as_str().unwrap()).collect()
    }

    #[test]
    fn test_normalize_title() {
        assert_eq!(normalize_title("  Climate Report\t"), "climate report");
        assert_eq!(normalize_title("   "), "");
        assert_eq!(normalize_title("Inner  Space"), "inner  space");
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let input = vec![
            json!({"title": "Climate Report", "source": "first"}),
            json!({"title": " climate report ", "source": "second"}),
            json!({"title": "CLIMATE REPORT", "source": "third"}),
        ];
        let out = deduplicate_sources(input);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0]["source"], "first");
    }

    #[test]
    fn test_empty_titles_always_dropped() {
        let input = vec![json!({"title": ""}), json!({"title": "A"}), json!({"title": ""})];
        let out = deduplicate_sources(input);
        assert_eq!(out, vec![json!({"title": "A"})]);
    }

    #[test]
    fn test_whitespace_only_and_missing_titles_dropped() {
        let input = vec![
            json!({"title": "   "}),
            json!({"snippet": "no title here"}),
            json!({"title": 42}),
            json!({"title": "Kept"}),
        ];
        let out = deduplicate_sources(input);
        assert_eq!(titles(&out), vec!["Kept"]);
    }

    #[test]
    fn test_sea_levels_scenario() {
        let input = vec![
            json!({"title": "Sea Levels Rising"}),
            json!({"title": "sea levels rising"}),
            json!({"title": "New Study"}),
        ];
        let out = deduplicate_sources(input);
        assert_eq!(
            out,
            vec![json!({"title": "Sea Levels Rising"}), json!({"title": "New Study"})]
        );
    }

    #[test]
    fn test_idempotent() {
        let input = vec![
            json!({"title": "B"}),
            json!({"title": "a"}),
            json!({"title": "A "}),
            json!({"title": ""}),
            json!({"title": "c"}),
            json!({"title": "b"}),
        ];
        let once = deduplicate_sources(input);
        let twice = deduplicate_sources(once.clone());
        assert_eq!(once, twice);
        assert_eq!(titles(&once), vec!["B", "a", "c"]);
    }

    #[test]
    fn test_output_is_order_preserving_subsequence() {
        let input: Vec<Value> = ["x", "Y", "x", "z", "y", "W"]
            .iter()
            .enumerate()
            .map(|(i, t)| json!({"title": t, "pos": i}))
            .collect();
        let out = deduplicate_sources(&input);
        let positions: Vec<u64> = out.iter().map(|v| v["pos"].as_u64().unwrap()).collect();
        assert_eq!(positions, vec![0, 1, 3, 5]);
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(std::ptr::eq(out[0], &input[0]));
    }

    #[test]
    fn test_formatted_records_and_string_maps() {
        let a = format_evidence(FormatEvidenceArgs::new("Report", "one", "Nature"));
        let b = format_evidence(FormatEvidenceArgs::new("report", "two", "BBC News"));
        let out = deduplicate_sources(vec![a.clone(), b]);
        assert_eq!(out, vec![a]);

        let mut m1 = BTreeMap::new();
        m1.insert("title".to_string(), "Same".to_string());
        let m2 = m1.clone();
        let out = deduplicate_sources(vec![m1, m2, BTreeMap::new()]);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let out: Vec<Value> = deduplicate_sources(Vec::new());
        assert!(out.is_empty());
    }
}
