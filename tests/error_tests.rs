use exasol_sql_normalizer::error::{check_error, config_error, file_read_error, file_write_error};

#[test]
fn test_file_read_error() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = file_read_error("/path/to/file.sql", io_error);
    let msg = error.to_string();
    assert!(!msg.is_empty());
}

#[test]
fn test_file_write_error() {
    let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error = file_write_error("/path/to/out.sql", io_error);
    let _msg = error.to_string();
}

#[test]
fn test_config_error() {
    let error = config_error("Invalid configuration value");
    let _msg = error.to_string();
}

#[test]
fn test_check_error() {
    let error = check_error("Unexpected token");
    let _msg = error.to_string();
}

#[test]
fn test_check_error_with_position() {
    let error = check_error("Expected an expression at Line: 3, Column 25");
    let _msg = error.to_string();
}

#[test]
fn test_check_error_with_large_position() {
    let error = check_error("Error at Line: 999, Column 12345");
    let _msg = error.to_string();
}

#[test]
fn test_error_types_are_different() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let read_err = file_read_error("x.sql", io_error);
    let config_err = config_error("test");
    let check_err = check_error("test");
    assert!(!read_err.to_string().is_empty());
    assert!(!config_err.to_string().is_empty());
    assert!(!check_err.to_string().is_empty());
}
