// Record Expander
//
// Two-stage explode: source lists fan out first, then target lists, so a row
// with list-valued source and target yields the full cross-product
// (source-major). Blank endpoints and self-loops are dropped afterwards.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::shared::models::{EdgeCandidate, Record};

/// Counters describing one expansion run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionStats {
    /// Input records
    pub records: usize,
    /// Rows after fan-out, before filtering
    pub expanded: usize,
    /// Rows dropped for a missing or blank endpoint
    pub dropped_missing: usize,
    /// Rows dropped because source == target
    pub dropped_self_loops: usize,
    /// Surviving edge candidates
    pub candidates: usize,
}

/// Expands records into edge candidates
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordExpander;

impl RecordExpander {
    pub fn new() -> Self {
        Self
    }

    pub fn expand(&self, records: &[Record]) -> Vec<EdgeCandidate> {
        self.expand_with_stats(records).0
    }

    pub fn expand_with_stats(&self, records: &[Record]) -> (Vec<EdgeCandidate>, ExpansionStats) {
        let mut stats = ExpansionStats {
            records: records.len(),
            ..ExpansionStats::default()
        };
        let mut candidates = Vec::new();

        for record in records {
            let targets = record.target.branches();
            for source in record.source.branches() {
                for target in &targets {
                    stats.expanded += 1;

                    let (source, target) = match (source, *target) {
                        (Some(s), Some(t)) if !is_blank(s) && !is_blank(t) => (s, t),
                        _ => {
                            stats.dropped_missing += 1;
                            continue;
                        }
                    };

                    if source == target {
                        stats.dropped_self_loops += 1;
                        continue;
                    }

                    candidates.push(EdgeCandidate {
                        source: source.to_string(),
                        target: target.to_string(),
                        attributes: record.attributes.clone(),
                    });
                }
            }
        }

        stats.candidates = candidates.len();
        debug!(
            records = stats.records,
            expanded = stats.expanded,
            dropped_missing = stats.dropped_missing,
            dropped_self_loops = stats.dropped_self_loops,
            candidates = stats.candidates,
            "expanded records"
        );
        (candidates, stats)
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::ExtractedValue;

    fn scalar(s: &str) -> ExtractedValue {
        ExtractedValue::Scalar(s.to_string())
    }

    fn list(items: &[&str]) -> ExtractedValue {
        ExtractedValue::List(items.iter().map(|s| s.to_string()).collect())
    }

    fn pairs(candidates: &[EdgeCandidate]) -> Vec<(&str, &str)> {
        candidates
            .iter()
            .map(|c| (c.source.as_str(), c.target.as_str()))
            .collect()
    }

    #[test]
    fn test_scalar_pair_passes_through() {
        let records = vec![Record::new(scalar("a"), scalar("b"))];
        let out = RecordExpander::new().expand(&records);
        assert_eq!(pairs(&out), vec![("a", "b")]);
    }

    #[test]
    fn test_cross_product_is_source_major() {
        let records = vec![Record::new(list(&["a", "b"]), list(&["x", "y"]))];
        let out = RecordExpander::new().expand(&records);
        assert_eq!(
            pairs(&out),
            vec![("a", "x"), ("a", "y"), ("b", "x"), ("b", "y")]
        );
    }

    #[test]
    fn test_record_order_is_preserved() {
        let records = vec![
            Record::new(list(&["b", "a"]), scalar("z")),
            Record::new(scalar("c"), scalar("z")),
        ];
        let out = RecordExpander::new().expand(&records);
        assert_eq!(pairs(&out), vec![("b", "z"), ("a", "z"), ("c", "z")]);
    }

    #[test]
    fn test_empty_list_drops_row() {
        let records = vec![Record::new(list(&[]), scalar("carol"))];
        let (out, stats) = RecordExpander::new().expand_with_stats(&records);
        assert!(out.is_empty());
        assert_eq!(stats.expanded, 0);
        assert_eq!(stats.candidates, 0);
    }

    #[test]
    fn test_missing_and_blank_endpoints_are_dropped() {
        let records = vec![
            Record::new(ExtractedValue::Missing, scalar("b")),
            Record::new(scalar("a"), ExtractedValue::Missing),
            Record::new(scalar(" "), scalar("b")),
            Record::new(list(&["a", ""]), scalar("b")),
        ];
        let (out, stats) = RecordExpander::new().expand_with_stats(&records);

        assert_eq!(pairs(&out), vec![("a", "b")]);
        assert_eq!(stats.dropped_missing, 4);
    }

    #[test]
    fn test_self_loops_are_dropped() {
        let records = vec![Record::new(list(&["a", "b"]), scalar("a"))];
        let (out, stats) = RecordExpander::new().expand_with_stats(&records);

        assert_eq!(pairs(&out), vec![("b", "a")]);
        assert_eq!(stats.dropped_self_loops, 1);
    }

    #[test]
    fn test_attributes_follow_every_branch() {
        let records = vec![Record::new(list(&["a", "b"]), scalar("c"))
            .with_attribute("lang", Some("en".to_string()))];
        let out = RecordExpander::new().expand(&records);

        assert_eq!(out.len(), 2);
        for candidate in &out {
            assert_eq!(
                candidate.attributes,
                vec![("lang".to_string(), Some("en".to_string()))]
            );
        }
    }
}
