#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic, clippy::float_cmp)]
//! Integration tests for loading configuration files from disk.

use confstore::{ConfigError, ConfigStore, column_names, parse_columns};
use pretty_assertions::assert_eq;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temporary config file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temporary config file");
    file
}

#[test]
fn load_demo_fixture() {
    let store = ConfigStore::load(fixture("demo.ini")).expect("demo.ini should load");

    assert_eq!(store.get("mysql.db1.Host"), "127.0.0.1");
    assert_eq!(store.get("mysql.db1.Name"), "etl");
    assert_eq!(store.get("mysql.db1.User"), "root");
    assert_eq!(store.get("mysql.db1.Pwd"), "secret");
    assert_eq!(store.get_int("mysql.db1.Port").unwrap(), 3306);
    assert_eq!(store.get("tcp.Port"), "8080");
    assert_eq!(store.get_float64("tcp.Timeout").unwrap(), 2.5);
    assert_eq!(store.get_int64("tcp.MaxBytes").unwrap(), 9_000_000_000);
    assert!(store.get_int("tcp.MaxBytes").is_err());
}

#[test]
fn load_demo_fixture_reopened_section() {
    let store = ConfigStore::load(fixture("demo.ini")).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.get("mysql.db1.Host"), "127.0.0.1");
    assert_eq!(store.get("mysql.db2.Host"), "10.0.0.2");
}

#[test]
fn load_demo_fixture_column_list() {
    let store = ConfigStore::load(fixture("demo.ini")).unwrap();
    let value = store.get("mysql.db1.colname");
    assert_eq!(value, "id:int,name:varchar(32),created:datetime");

    let columns = parse_columns(&value);
    assert_eq!(columns.len(), 3);
    assert_eq!(columns[1].col_type.as_deref(), Some("varchar(32)"));
    assert_eq!(column_names(&columns), "id,name,created");
}

#[test]
fn load_mysql_example() {
    let file = config_file("[mysql]\nHost=127.0.0.1\nPort = 3306\n");
    let store = ConfigStore::load(file.path()).unwrap();

    assert_eq!(store.get("mysql.Host"), "127.0.0.1");
    assert_eq!(store.get_int("mysql.Port").unwrap(), 3306);
    assert_eq!(store.get("mysql.Missing"), "");
}

#[test]
fn load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.ini");

    match ConfigStore::load(&path) {
        Err(ConfigError::FileNotFound { path: reported }) => assert_eq!(reported, path),
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

#[test]
fn load_directory_is_not_a_valid_config() {
    let dir = tempfile::tempdir().unwrap();
    assert!(ConfigStore::load(dir.path()).is_err());
}

#[test]
fn load_unclosed_header_reports_line() {
    let file = config_file("[ok]\nk=v\n[mysql\nHost=h\n");
    let err = ConfigStore::load(file.path()).unwrap_err();

    assert!(err.to_string().contains("[mysql"));
    assert!(matches!(err, ConfigError::Parse { line: 3, .. }));
}

#[test]
fn load_assignment_without_equals_reports_line() {
    let file = config_file("[s]\nk=v\nHost 127.0.0.1\n");
    let err = ConfigStore::load(file.path()).unwrap_err();

    match err {
        ConfigError::Parse { line, text } => {
            assert_eq!(line, 3);
            assert_eq!(text, "Host 127.0.0.1");
        }
        other => panic!("expected Parse, got {other:?}"),
    }
}

#[test]
fn load_key_before_any_header() {
    let file = config_file("Host=h\n[s]\n");
    let err = ConfigStore::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::MissingSection { line: 1, .. }));
}

#[test]
fn load_invalid_utf8_is_a_read_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[s]\nk=\xff\xfe\n").unwrap();

    match ConfigStore::load(file.path()).unwrap_err() {
        ConfigError::Read { path, .. } => assert_eq!(path, file.path()),
        other => panic!("expected Read, got {other:?}"),
    }
}
