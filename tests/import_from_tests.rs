use exasol_sql_normalizer::handlers::import_from::normalize_import_from;

#[test]
fn test_simple_import_from() {
    let sql = "SELECT * FROM (\n    IMPORT FROM JDBC AT CON_ANALYTICS\n    STATEMENT 'SELECT a, b FROM remote_table'\n)";
    let result = normalize_import_from(sql);

    assert!(result.contains("SELECT * FROM __JDBC_IMPORT__CON_ANALYTICS"));
    assert!(!result.contains("IMPORT FROM JDBC"));
    assert!(!result.contains("STATEMENT"));
}

#[test]
fn test_multiline_statement() {
    let sql = "SELECT col1, col2 FROM (\n    IMPORT FROM JDBC AT CON_ANALYTICS\n    STATEMENT '\n        SELECT\n            q1.promoter_name AS [promoter_name]\n        FROM [replica_db].[dbo].[orders] AS TDL_T\n    '\n)";
    let result = normalize_import_from(sql);

    assert!(result.contains("SELECT * FROM __JDBC_IMPORT__CON_ANALYTICS"));
    assert!(!result.contains("IMPORT FROM JDBC"));
}

#[test]
fn test_preserves_surrounding_sql() {
    let sql = "SELECT\n    promoter_name AS promoter_name\nFROM\n(\n    IMPORT FROM JDBC AT CON_ANALYTICS\n    STATEMENT 'SELECT 1'\n)\nWHERE x = 1";
    let result = normalize_import_from(sql);

    assert!(result.contains("promoter_name AS promoter_name"));
    assert!(result.contains("WHERE x = 1"));
    assert!(result.contains("SELECT * FROM __JDBC_IMPORT__CON_ANALYTICS"));
}

#[test]
fn test_import_keyword_in_string_not_matched() {
    let sql = "SELECT 'IMPORT FROM something' AS label FROM t";
    assert_eq!(normalize_import_from(sql), sql);
}

#[test]
fn test_statement_with_escaped_quotes() {
    let sql = "SELECT * FROM (\n    IMPORT FROM JDBC AT CONN1\n    STATEMENT 'SELECT ''hello'' FROM t'\n)";
    let result = normalize_import_from(sql);

    assert!(result.contains("SELECT * FROM __JDBC_IMPORT__CONN1"));
    assert!(!result.contains("STATEMENT"));
}

#[test]
fn test_standard_sql_unchanged() {
    let sql = "SELECT a, b FROM my_table WHERE x > 1";
    assert_eq!(normalize_import_from(sql), sql);
}

#[test]
fn test_empty_string() {
    assert_eq!(normalize_import_from(""), "");
}

#[test]
fn test_import_into_not_matched() {
    // IMPORT INTO is the other handler's construct; this one must leave it.
    let sql = "SELECT * FROM (\n    IMPORT INTO (col1 INT)\n    FROM JDBC AT CONN1\n    STATEMENT 'SELECT 1'\n)";
    let result = normalize_import_from(sql);

    assert!(result.contains("IMPORT INTO"));
}
