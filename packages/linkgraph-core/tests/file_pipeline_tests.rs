//! File-based runs: preamble skipping, YAML configuration, attribute tables

mod common;

use common::*;
use linkgraph_core::features::export::ExportArtifact;
use linkgraph_core::{
    ConfigError, Dataset, Pipeline, PipelineConfig, PipelineContext, PipelineError,
};
use linkgraph_table::{preview_lines, read_csv, ErrorKind, ReadOptions};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn load(dir: &TempDir) -> (Dataset, Dataset, PipelineConfig) {
    let tweets = write_fixture(dir.path(), "tweets.csv", TWEETS_CSV);
    let users = write_fixture(dir.path(), "users.csv", USERS_CSV);
    let config_path = write_fixture(dir.path(), "network.yaml", TWEETS_CONFIG_YAML);

    let config = PipelineConfig::from_yaml(&config_path).unwrap();
    let dataset = read_csv(&tweets, &ReadOptions::default().skip_rows(config.skip_rows)).unwrap();
    let table = read_csv(&users, &ReadOptions::default()).unwrap();
    (dataset, table, config)
}

#[test]
fn test_preview_shows_preamble() {
    let dir = TempDir::new().unwrap();
    let tweets = write_fixture(dir.path(), "tweets.csv", TWEETS_CSV);

    let head = preview_lines(&tweets, TWEETS_SKIP_ROWS + 1).unwrap();
    assert_eq!(head, strings(&["exported by the archiver", "2026-01-01", "text,user,lang"]));
}

#[test]
fn test_full_run_from_files() {
    let dir = TempDir::new().unwrap();
    let (dataset, table, config) = load(&dir);
    assert_eq!(dataset.columns().to_vec(), strings(&["text", "user", "lang"]));

    let mut ctx = PipelineContext::new(dataset, config).unwrap();
    let result = Pipeline::new().run(&mut ctx, Some(&table)).unwrap();

    assert_eq!(result.stats.rows, 4);
    assert_eq!(result.stats.expansion.candidates, 3);

    let tables = match result.artifact {
        ExportArtifact::Tabular(tables) => tables,
        other => panic!("expected tables, got {:?}", other.format()),
    };

    assert_eq!(
        tables.nodes.headers,
        strings(&["Id", "Label", "followers", "lang", "verified"])
    );
    assert_eq!(
        tables.nodes.rows,
        vec![
            strings(&["bob", "bob", "120", "fr", "yes"]),
            strings(&["alice", "alice", "No Data", "", "No Data"]),
            strings(&["carol", "carol", "No Data", "fr", "No Data"]),
            strings(&["dave", "dave", "7", "", ""]),
        ]
    );

    assert_eq!(tables.edges.headers, strings(&["Source", "Target", "lang"]));
    assert_eq!(
        tables.edges.rows,
        vec![
            strings(&["bob", "alice", "en"]),
            strings(&["carol", "dave", "fr"]),
            strings(&["bob", "dave", "fr"]),
        ]
    );
}

#[test]
fn test_stats_serialize_for_json_output() {
    let dir = TempDir::new().unwrap();
    let (dataset, table, config) = load(&dir);

    let mut ctx = PipelineContext::new(dataset, config).unwrap();
    let result = Pipeline::new().run(&mut ctx, Some(&table)).unwrap();
    let json: serde_json::Value = serde_json::to_value(&result.stats).unwrap();

    assert_eq!(json["graph"]["nodes"], 4);
    assert_eq!(json["graph"]["edges"], 3);
    assert_eq!(json["mapping"]["matched"], 2);
    assert_eq!(json["mapping"]["unmatched"], 2);
}

#[test]
fn test_wrong_skip_rows_is_schema_error() {
    let dir = TempDir::new().unwrap();
    let tweets = write_fixture(dir.path(), "tweets.csv", TWEETS_CSV);

    let err = read_csv(&tweets, &ReadOptions::default().skip_rows(1)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Schema);
}

#[test]
fn test_missing_key_column_in_attribute_file() {
    let dir = TempDir::new().unwrap();
    let (dataset, _, config) = load(&dir);
    let wrong = write_fixture(dir.path(), "wrong.csv", "user,followers\nbob,1\n");
    let table = read_csv(&wrong, &ReadOptions::default()).unwrap();

    let mut ctx = PipelineContext::new(dataset, config).unwrap();
    let err = Pipeline::new().run(&mut ctx, Some(&table)).unwrap_err();
    assert!(matches!(err, PipelineError::MissingColumn { role: "key", .. }));
    assert!(!ctx.has_graph());
}

#[test]
fn test_config_file_errors() {
    let dir = TempDir::new().unwrap();
    let no_version = write_fixture(dir.path(), "a.yaml", "pipeline:\n  source_column: a\n  target_column: b\n");
    let missing = dir.path().join("absent.yaml");

    assert!(matches!(
        PipelineConfig::from_yaml(&no_version),
        Err(ConfigError::MissingVersion)
    ));
    assert!(matches!(PipelineConfig::from_yaml(&missing), Err(ConfigError::Io(_))));
}
