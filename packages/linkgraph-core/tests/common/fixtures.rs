//! Test fixtures
//!
//! Small CSV exports shaped like the social-media data the pipeline is
//! usually pointed at.

use std::path::{Path, PathBuf};

/// Tweet export with two preamble lines before the header
pub const TWEETS_CSV: &str = "\
exported by the archiver
2026-01-01
text,user,lang
\"RT @Bob: loving #rust and #serde\",alice,en
\"@carol @bob thoughts?\",Dave,fr
no mentions here,erin,en
\"\",frank,
";

pub const TWEETS_SKIP_ROWS: usize = 2;

/// Attribute table keyed by `handle`
pub const USERS_CSV: &str = "\
handle,followers,verified
BOB,120,yes
dave,7,
zed,1,no
";

/// Link sharing export
pub const LINKS_CSV: &str = "\
author,urls
alice,\"https://Example.com/a, http://blog.example.org:8080/post\"
bob,not a url
carol,https://example.com/b
";

/// YAML configuration matching `TWEETS_CSV` and `USERS_CSV`
pub const TWEETS_CONFIG_YAML: &str = "\
version: 1
pipeline:
  source_column: text
  target_column: user
  source_processing: mentions-freetext
  attribute_columns: [lang]
  skip_rows: 2
  attribute_table:
    key_column: handle
";

/// Write `contents` to `dir/name` and return the path
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
