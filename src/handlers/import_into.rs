//! `IMPORT INTO` normalization.
//!
//! Rewrites:
//!
//! ```sql
//! IMPORT INTO (col1 INT, col2 VARCHAR(50))
//! FROM JDBC AT MY_CONNECTION
//! STATEMENT 'SELECT a, b FROM remote_table'
//! ```
//!
//! to:
//!
//! ```sql
//! SELECT col1, col2 FROM __JDBC_IMPORT__MY_CONNECTION
//! ```
//!
//! Column types, charsets, and constraints are discarded; only the names
//! survive. The remote `STATEMENT` payload is dropped. The connection may be
//! a bare token or a `/*...*/` block-comment token.

use std::sync::LazyLock;

use compact_str::CompactString;
use regex::Regex;
use smallvec::SmallVec;

use super::{Outcome, rewrite_all};
use crate::scan;

/// Column names extracted from one definition block (typically < 8).
type ColumnVec = SmallVec<[CompactString; 8]>;

/// Matches `FROM JDBC AT <connection>` where the connection is a bare token
/// or a `/*...*/` block comment.
static FROM_JDBC_AT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^FROM\s+JDBC\s+AT\s+(/\*[^*]*\*+(?:[^/*][^*]*\*+)*/|\S+)")
        .expect("valid regex")
});

/// Leading identifier of an unquoted column definition.
static COLUMN_HEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+").expect("valid regex"));

/// Replace every `IMPORT INTO (...) FROM JDBC AT ...` block with an
/// equivalent `SELECT` statement.
pub fn normalize_import_into(sql: &str) -> String {
    rewrite_all(sql, "IMPORT", attempt)
}

fn attempt(sql: &str, _seg_start: usize, pos: usize) -> Outcome {
    let kw_end = pos + "IMPORT".len();
    let bytes = sql.as_bytes();

    let mut cursor = scan::skip_whitespace(sql, kw_end);
    if !scan::matches_at(sql, cursor, "INTO") {
        return Outcome::Pass {
            resume: kw_end
        };
    }
    cursor = scan::skip_whitespace(sql, cursor + "INTO".len());

    if bytes.get(cursor) != Some(&b'(') {
        return Outcome::Pass {
            resume: kw_end
        };
    }
    let Some(close) = scan::matching_paren(sql, cursor) else {
        return Outcome::Pass {
            resume: kw_end
        };
    };

    let columns = extract_column_names(&sql[cursor + 1..close]);

    cursor = scan::skip_whitespace(sql, close + 1);
    let Some(caps) = FROM_JDBC_AT.captures(&sql[cursor..]) else {
        // Looked like IMPORT INTO but the JDBC clause is missing; keep the
        // whole block as written.
        return Outcome::Pass {
            resume: close + 1
        };
    };
    let connection = caps.get(1).map_or("", |m| m.as_str());
    cursor += caps.get(0).map_or(0, |m| m.end());

    cursor = skip_statement_clause(sql, cursor);

    let col_list = if columns.is_empty() {
        String::from("*")
    } else {
        columns.join(", ")
    };
    Outcome::Rewrite {
        keep_to:     pos,
        replacement: format!("SELECT {} FROM __JDBC_IMPORT__{}", col_list, connection),
        resume:      cursor
    }
}

/// Skip an optional `STATEMENT '...'` clause starting at `pos`.
pub(crate) fn skip_statement_clause(sql: &str, pos: usize) -> usize {
    let mut cursor = scan::skip_whitespace(sql, pos);
    if scan::matches_at(sql, cursor, "STATEMENT") {
        cursor = scan::skip_whitespace(sql, cursor + "STATEMENT".len());
        cursor = scan::skip_quoted_string(sql, cursor);
    }
    cursor
}

/// Extract column names from a column definition block.
fn extract_column_names(col_defs: &str) -> ColumnVec {
    split_column_defs(col_defs)
        .into_iter()
        .filter_map(|part| column_name(part.trim()))
        .map(CompactString::from)
        .collect()
}

/// Split column definitions on top-level commas; commas inside a type's
/// precision parens do not split.
fn split_column_defs(col_defs: &str) -> Vec<&str> {
    let bytes = col_defs.as_bytes();
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;

    for (i, b) in bytes.iter().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' => depth -= 1,
            b',' if depth == 0 => {
                parts.push(&col_defs[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if start < col_defs.len() {
        parts.push(&col_defs[start..]);
    }
    parts
}

/// The name at the head of a single column definition, unquoted if it was
/// double-quoted. The declared type and any trailing clauses are ignored.
fn column_name(col_def: &str) -> Option<&str> {
    if col_def.is_empty() {
        return None;
    }
    if let Some(rest) = col_def.strip_prefix('"') {
        return match rest.find('"') {
            Some(end) => Some(&rest[..end]),
            None => Some(rest)
        };
    }
    COLUMN_HEAD.find(col_def).map(|m| m.as_str())
}
