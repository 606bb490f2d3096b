// Extraction Domain Models
//
// The named strategies that turn one raw text column into node identities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Extraction mode applied to a source or target column
///
/// `*-freetext` modes scan arbitrary text; `*-list` modes expect a
/// comma-separated list of items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractionMode {
    /// Lowercased cell value, unchanged otherwise
    #[default]
    None,
    /// Every `#word` token in the text
    HashtagsFreetext,
    /// Network location of the text parsed as a URL
    DomainsFreetext,
    /// Every `@word` token in the text, without the `@`
    MentionsFreetext,
    /// Comma-separated items starting with `#`
    HashtagsList,
    /// Hosts of comma-separated URLs
    DomainsList,
    /// Comma-separated items starting with `@`, without the `@`
    MentionsList,
}

impl ExtractionMode {
    pub const ALL: [ExtractionMode; 7] = [
        ExtractionMode::None,
        ExtractionMode::HashtagsFreetext,
        ExtractionMode::DomainsFreetext,
        ExtractionMode::MentionsFreetext,
        ExtractionMode::HashtagsList,
        ExtractionMode::DomainsList,
        ExtractionMode::MentionsList,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionMode::None => "none",
            ExtractionMode::HashtagsFreetext => "hashtags-freetext",
            ExtractionMode::DomainsFreetext => "domains-freetext",
            ExtractionMode::MentionsFreetext => "mentions-freetext",
            ExtractionMode::HashtagsList => "hashtags-list",
            ExtractionMode::DomainsList => "domains-list",
            ExtractionMode::MentionsList => "mentions-list",
        }
    }
}

impl fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtractionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| {
                format!(
                    "Unknown extraction mode '{}'. Valid modes: {}",
                    s,
                    Self::ALL.map(|m| m.as_str()).join(", ")
                )
            })
    }
}
