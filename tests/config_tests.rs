use std::io::Write;

use exasol_sql_normalizer::config::{Config, HandlersConfig};
use tempfile::NamedTempFile;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert!(config.handlers.disabled.is_empty());
}

#[test]
fn test_handlers_config_with_disabled() {
    let config = HandlersConfig {
        disabled: vec!["regexp-like".to_string(), "convert-charset".to_string()]
    };

    assert_eq!(config.disabled.len(), 2);
    assert!(config.disabled.contains(&"regexp-like".to_string()));
}

#[test]
fn test_load_explicit_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[handlers]\ndisabled = [\"group-concat\"]").unwrap();

    let config = Config::load(Some(file.path())).unwrap();
    assert_eq!(config.handlers.disabled, vec!["group-concat".to_string()]);
}

#[test]
fn test_load_explicit_file_missing_section_defaults() {
    let file = NamedTempFile::new().unwrap();

    let config = Config::load(Some(file.path())).unwrap();
    assert!(config.handlers.disabled.is_empty());
}

#[test]
fn test_load_explicit_file_not_found() {
    let result = Config::load(Some(std::path::Path::new("/nonexistent/config.toml")));

    assert!(result.is_err());
}

#[test]
fn test_load_invalid_toml() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[handlers\ndisabled = oops").unwrap();

    assert!(Config::load(Some(file.path())).is_err());
}
