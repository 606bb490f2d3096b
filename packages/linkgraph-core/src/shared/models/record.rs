//! Rows flowing between pipeline stages

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::value::ExtractedValue;

/// Named attribute values carried from an input row, in column order
pub type AttrValues = Vec<(String, Option<String>)>;

/// Node / edge attribute mapping on the assembled graph
pub type AttrMap = BTreeMap<String, String>;

/// One input row after extraction
///
/// `source` and `target` hold the extracted values of the designated
/// columns; `attributes` holds the raw values of the attribute columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub source: ExtractedValue,
    pub target: ExtractedValue,
    #[serde(default)]
    pub attributes: AttrValues,
}

impl Record {
    pub fn new(source: ExtractedValue, target: ExtractedValue) -> Self {
        Self {
            source,
            target,
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: Option<String>) -> Self {
        self.attributes.push((name.into(), value));
        self
    }
}

/// Prospective edge produced by expansion
///
/// Both endpoints are scalar, non-blank and distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeCandidate {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub attributes: AttrValues,
}

impl EdgeCandidate {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), Some(value.into())));
        self
    }

    /// Present attribute values whose name is in `columns`
    pub fn selected_attributes<'a>(
        &'a self,
        columns: &'a [String],
    ) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.attributes.iter().filter_map(move |(name, value)| {
            let value = value.as_deref()?;
            columns
                .iter()
                .any(|c| c == name)
                .then_some((name.as_str(), value))
        })
    }
}
