//! Token patterns and URL host parsing

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// `#` followed by one or more word characters
pub static HASHTAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#\w+").expect("hashtag pattern is valid"));

/// `@` followed by one or more word characters; group 1 is the handle
pub static MENTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@(\w+)").expect("mention pattern is valid"));

/// All hashtag tokens, `#` included
pub fn find_hashtags(text: &str) -> Vec<String> {
    HASHTAG_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// All mention handles, `@` stripped
pub fn find_mentions(text: &str) -> Vec<String> {
    MENTION_PATTERN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Network location of `text` parsed as a URL
///
/// Returns the authority exactly as written: userinfo, host and any port,
/// with scheme and path stripped. Scheme-relative `//host/path` is accepted.
/// Text that does not parse as a URL with a host yields `None`.
pub fn network_location(text: &str) -> Option<String> {
    let text = text.trim();
    let (candidate, rest) = match text.strip_prefix("//") {
        Some(rest) => (Cow::Owned(format!("http:{}", text)), rest),
        None => (Cow::Borrowed(text), text.split_once("://")?.1),
    };

    let url = Url::parse(&candidate).ok()?;
    url.host_str().filter(|h| !h.is_empty())?;

    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..end];
    (!authority.is_empty()).then(|| authority.to_string())
}

/// Comma-separated items, trimmed, blanks dropped
pub fn split_list(text: &str) -> impl Iterator<Item = &str> {
    text.split(',').map(str::trim).filter(|item| !item.is_empty())
}
