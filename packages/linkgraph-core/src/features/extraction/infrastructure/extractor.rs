// Column Extractor
//
// Maps a raw text column to extracted values, one per row. Every mode works
// on the lowercased cell; missing or blank cells stay missing in every mode.

use tracing::debug;

use super::patterns::{find_hashtags, find_mentions, network_location, split_list};
use crate::features::extraction::domain::ExtractionMode;
use crate::shared::models::ExtractedValue;

/// Applies an extraction mode to whole columns
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnExtractor;

impl ColumnExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract every value of a column
    ///
    /// Output has the same length and order as the input.
    pub fn extract(&self, values: &[Option<&str>], mode: ExtractionMode) -> Vec<ExtractedValue> {
        let extracted: Vec<ExtractedValue> = values
            .iter()
            .map(|value| extract_value(*value, mode))
            .collect();

        debug!(
            mode = %mode,
            rows = extracted.len(),
            missing = extracted.iter().filter(|v| v.is_missing()).count(),
            "extracted column"
        );
        extracted
    }
}

/// Extract one cell
pub fn extract_value(raw: Option<&str>, mode: ExtractionMode) -> ExtractedValue {
    let text = match raw {
        Some(text) if !text.trim().is_empty() => text.to_lowercase(),
        _ => return ExtractedValue::Missing,
    };

    match mode {
        ExtractionMode::None => ExtractedValue::Scalar(text),
        ExtractionMode::HashtagsFreetext => ExtractedValue::List(find_hashtags(&text)),
        ExtractionMode::MentionsFreetext => ExtractedValue::List(find_mentions(&text)),
        ExtractionMode::DomainsFreetext => match network_location(&text) {
            Some(host) => ExtractedValue::Scalar(host),
            None => ExtractedValue::Missing,
        },
        ExtractionMode::HashtagsList => ExtractedValue::List(
            split_list(&text)
                .filter(|item| item.starts_with('#'))
                .map(str::to_string)
                .collect(),
        ),
        ExtractionMode::MentionsList => ExtractedValue::List(
            split_list(&text)
                .filter_map(|item| item.strip_prefix('@'))
                .filter(|handle| !handle.is_empty())
                .map(str::to_string)
                .collect(),
        ),
        ExtractionMode::DomainsList => {
            ExtractedValue::List(split_list(&text).filter_map(network_location).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> ExtractedValue {
        ExtractedValue::List(items.iter().map(|s| s.to_string()).collect())
    }

    fn scalar(s: &str) -> ExtractedValue {
        ExtractedValue::Scalar(s.to_string())
    }

    #[test]
    fn test_missing_and_blank_stay_missing_in_every_mode() {
        for mode in ExtractionMode::ALL {
            assert_eq!(extract_value(None, mode), ExtractedValue::Missing, "{}", mode);
            assert_eq!(extract_value(Some(""), mode), ExtractedValue::Missing, "{}", mode);
            assert_eq!(extract_value(Some("   "), mode), ExtractedValue::Missing, "{}", mode);
        }
    }

    #[test]
    fn test_none_lowercases() {
        assert_eq!(extract_value(Some("Alice"), ExtractionMode::None), scalar("alice"));
    }

    #[test]
    fn test_hashtags_freetext() {
        assert_eq!(
            extract_value(Some("Big news #Rust #rust2024"), ExtractionMode::HashtagsFreetext),
            list(&["#rust", "#rust2024"])
        );
        assert_eq!(
            extract_value(Some("nothing to see"), ExtractionMode::HashtagsFreetext),
            list(&[])
        );
    }

    #[test]
    fn test_mentions_freetext() {
        assert_eq!(
            extract_value(
                Some("@Alice shared this with @bob"),
                ExtractionMode::MentionsFreetext
            ),
            list(&["alice", "bob"])
        );
        assert_eq!(
            extract_value(Some("no handles"), ExtractionMode::MentionsFreetext),
            list(&[])
        );
    }

    #[test]
    fn test_domains_freetext_is_scalar() {
        assert_eq!(
            extract_value(Some("HTTPS://News.Example.COM/story"), ExtractionMode::DomainsFreetext),
            scalar("news.example.com")
        );
        assert_eq!(
            extract_value(Some("example.com"), ExtractionMode::DomainsFreetext),
            ExtractedValue::Missing
        );
    }

    #[test]
    fn test_hashtags_list_keeps_prefixed_items() {
        assert_eq!(
            extract_value(Some("#A, b , #C"), ExtractionMode::HashtagsList),
            list(&["#a", "#c"])
        );
        assert_eq!(
            extract_value(Some("Alice, Bob"), ExtractionMode::HashtagsList),
            list(&[])
        );
    }

    #[test]
    fn test_mentions_list_strips_prefix() {
        assert_eq!(
            extract_value(Some("@Alice, carol, @bob, @"), ExtractionMode::MentionsList),
            list(&["alice", "bob"])
        );
    }

    #[test]
    fn test_domains_list_drops_hostless_items() {
        assert_eq!(
            extract_value(
                Some("https://a.com/x, not a url, http://b.org"),
                ExtractionMode::DomainsList
            ),
            list(&["a.com", "b.org"])
        );
    }

    #[test]
    fn test_extract_column_preserves_order() {
        let extractor = ColumnExtractor::new();
        let values = vec![Some("#x"), None, Some("plain")];

        let out = extractor.extract(&values, ExtractionMode::HashtagsFreetext);

        assert_eq!(out, vec![list(&["#x"]), ExtractedValue::Missing, list(&[])]);
    }
}
