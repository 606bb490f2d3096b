//! Extracted cell values

use serde::{Deserialize, Serialize};

/// Result of running an extraction mode over one cell
///
/// `List` may be empty: a list mode that found no entities still produced a
/// list, and that row later disappears during expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ExtractedValue {
    Scalar(String),
    List(Vec<String>),
    Missing,
}

impl ExtractedValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, ExtractedValue::Missing)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, ExtractedValue::List(_))
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            ExtractedValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ExtractedValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// One entry per fan-out branch
    ///
    /// - `Scalar` → one present branch
    /// - `Missing` → one absent branch (kept so the row can be counted as dropped)
    /// - `List` → one branch per item, none for an empty list
    pub fn branches(&self) -> Vec<Option<&str>> {
        match self {
            ExtractedValue::Scalar(s) => vec![Some(s.as_str())],
            ExtractedValue::Missing => vec![None],
            ExtractedValue::List(items) => items.iter().map(|s| Some(s.as_str())).collect(),
        }
    }
}

impl From<Option<String>> for ExtractedValue {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(s) => ExtractedValue::Scalar(s),
            None => ExtractedValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branches() {
        assert_eq!(ExtractedValue::Scalar("a".into()).branches(), vec![Some("a")]);
        assert_eq!(ExtractedValue::Missing.branches(), vec![None]);
        assert!(ExtractedValue::List(vec![]).branches().is_empty());
        assert_eq!(
            ExtractedValue::List(vec!["a".into(), "b".into()]).branches(),
            vec![Some("a"), Some("b")]
        );
    }

    #[test]
    fn test_accessors() {
        let list = ExtractedValue::List(vec!["#rust".into()]);
        assert!(list.is_list());
        assert_eq!(list.as_list().unwrap(), &["#rust".to_string()][..]);
        assert!(list.as_scalar().is_none());

        assert!(ExtractedValue::from(None).is_missing());
        assert_eq!(ExtractedValue::from(Some("x".to_string())).as_scalar(), Some("x"));
    }
}
