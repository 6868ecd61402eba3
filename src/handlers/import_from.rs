//! `IMPORT FROM` normalization.
//!
//! Rewrites the column-less form:
//!
//! ```sql
//! IMPORT FROM JDBC AT CON_ANALYTICS STATEMENT 'SELECT 1'
//! ```
//!
//! to:
//!
//! ```sql
//! SELECT * FROM __JDBC_IMPORT__CON_ANALYTICS
//! ```
//!
//! Runs after the `IMPORT INTO` handler in the pipeline, so any `IMPORT`
//! still present here is the bare form; an `IMPORT INTO` block simply fails
//! the `FROM JDBC AT` match and passes through.

use std::sync::LazyLock;

use regex::Regex;

use super::{Outcome, import_into::skip_statement_clause, rewrite_all};
use crate::scan;

static FROM_JDBC_AT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^FROM\s+JDBC\s+AT\s+(\S+)").expect("valid regex"));

/// Replace every `IMPORT FROM JDBC AT ...` block with a `SELECT *` statement.
pub fn normalize_import_from(sql: &str) -> String {
    rewrite_all(sql, "IMPORT", attempt)
}

fn attempt(sql: &str, _seg_start: usize, pos: usize) -> Outcome {
    let kw_end = pos + "IMPORT".len();

    let mut cursor = scan::skip_whitespace(sql, kw_end);
    let Some(caps) = FROM_JDBC_AT.captures(&sql[cursor..]) else {
        return Outcome::Pass {
            resume: kw_end
        };
    };
    let connection = caps.get(1).map_or("", |m| m.as_str());
    cursor += caps.get(0).map_or(0, |m| m.end());

    cursor = skip_statement_clause(sql, cursor);

    Outcome::Rewrite {
        keep_to:     pos,
        replacement: format!("SELECT * FROM __JDBC_IMPORT__{}", connection),
        resume:      cursor
    }
}
