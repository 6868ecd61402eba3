use exasol_sql_normalizer::handlers::import_into::normalize_import_into;

#[test]
fn test_simple_import_into() {
    let sql = "SELECT * FROM (\n    IMPORT INTO (col1 INT, col2 VARCHAR(50))\n    FROM JDBC AT MY_CONNECTION\n    STATEMENT 'SELECT a, b FROM remote_table'\n)";
    let result = normalize_import_into(sql);

    assert!(result.contains("SELECT col1, col2 FROM __JDBC_IMPORT__MY_CONNECTION"));
    assert!(!result.contains("IMPORT INTO"));
    assert!(!result.contains("STATEMENT"));
}

#[test]
fn test_multiline_column_defs() {
    let sql = "SELECT * FROM (\nIMPORT INTO\n(\nrow_id INT\n, user_permissions NVARCHAR(1000)\n)\nFROM JDBC AT CON_PRODUCTION\nSTATEMENT\n'\nSELECT t.\"RowID\", convert(varchar(1000), t.\"Permissions\",1) as Permissions\nFROM dbo.users t\n'\n)";
    let result = normalize_import_into(sql);

    assert!(result.contains("SELECT row_id, user_permissions FROM __JDBC_IMPORT__CON_PRODUCTION"));
    assert!(!result.contains("IMPORT INTO"));
}

#[test]
fn test_quoted_column_names() {
    let sql = "SELECT * FROM (\n    IMPORT INTO (\"RowID\" DECIMAL(10,0), order_id VARCHAR(50) UTF8)\n    FROM JDBC AT CON_GATEWAY\n    STATEMENT 'SELECT a, b FROM remote'\n)";
    let result = normalize_import_into(sql);

    assert!(result.contains("SELECT RowID, order_id FROM __JDBC_IMPORT__CON_GATEWAY"));
}

#[test]
fn test_charset_in_column_type() {
    let sql = "SELECT * FROM (\n    IMPORT INTO (name VARCHAR(50) UTF8, id INT)\n    FROM JDBC AT CONN1\n    STATEMENT 'SELECT name, id FROM t'\n)";
    let result = normalize_import_into(sql);

    assert!(result.contains("SELECT name, id FROM __JDBC_IMPORT__CONN1"));
}

#[test]
fn test_comment_connection_token() {
    let sql = "IMPORT INTO (a INT) FROM JDBC AT /* injected at runtime */ STATEMENT 'SELECT 1'";
    let result = normalize_import_into(sql);

    assert!(result.contains("SELECT a FROM __JDBC_IMPORT__/* injected at runtime */"));
}

#[test]
fn test_statement_with_escaped_quotes() {
    let sql = "SELECT * FROM (\n    IMPORT INTO (col1 INT)\n    FROM JDBC AT CONN1\n    STATEMENT 'SELECT ''hello'' FROM t'\n)";
    let result = normalize_import_into(sql);

    assert!(result.contains("SELECT col1 FROM __JDBC_IMPORT__CONN1"));
    assert!(!result.contains("STATEMENT"));
}

#[test]
fn test_multiple_imports() {
    let sql = "SELECT * FROM (\n    IMPORT INTO (a INT) FROM JDBC AT CONN1 STATEMENT 'SELECT 1'\n) t1\nJOIN (\n    IMPORT INTO (b INT) FROM JDBC AT CONN2 STATEMENT 'SELECT 2'\n) t2 ON t1.a = t2.b";
    let result = normalize_import_into(sql);

    assert!(result.contains("SELECT a FROM __JDBC_IMPORT__CONN1"));
    assert!(result.contains("SELECT b FROM __JDBC_IMPORT__CONN2"));
    assert!(!result.contains("IMPORT INTO"));
}

#[test]
fn test_import_keyword_in_string_literal_not_matched() {
    let sql = "SELECT 'IMPORT INTO something' AS label FROM t";
    assert_eq!(normalize_import_into(sql), sql);
}

#[test]
fn test_missing_jdbc_clause_left_alone() {
    let sql = "IMPORT INTO (a INT) FROM CSV AT CONN1";
    assert_eq!(normalize_import_into(sql), sql);
}

#[test]
fn test_unbalanced_paren_left_alone() {
    let sql = "IMPORT INTO (a INT, b FROM JDBC AT CONN1";
    assert_eq!(normalize_import_into(sql), sql);
}

#[test]
fn test_standard_sql_unchanged() {
    let sql = "SELECT a, b FROM my_table WHERE x > 1";
    assert_eq!(normalize_import_into(sql), sql);
}

#[test]
fn test_empty_string() {
    assert_eq!(normalize_import_into(""), "");
}

#[test]
fn test_select_with_subquery() {
    let sql = "SELECT * FROM (SELECT a FROM t) sub";
    assert_eq!(normalize_import_into(sql), sql);
}
