//! Rewrite handlers for Exasol-specific SQL constructs.
//!
//! Each submodule rewrites exactly one construct and exposes a single pure
//! function from SQL text to SQL text:
//!
//! - [`import_into`]: `IMPORT INTO (...) FROM JDBC AT conn` → `SELECT ... FROM __JDBC_IMPORT__conn`
//! - [`import_from`]: `IMPORT FROM JDBC AT conn` → `SELECT * FROM __JDBC_IMPORT__conn`
//! - [`group_concat`]: strips `SEPARATOR '...'` from `GROUP_CONCAT(...)`
//! - [`convert`]: `CONVERT(type charset, expr)` → `CAST(expr AS type)`
//! - [`regexp_like`]: infix `col REGEXP_LIKE(...)` → `REGEXP_LIKE(col, ...)`
//!
//! # Architecture
//!
//! All handlers share one loop: find the next standalone keyword occurrence
//! outside string literals, attempt to parse the surrounding construct, and
//! either splice in a replacement or pass the occurrence through untouched.
//! A handler never fails — malformed or ambiguous constructs (missing paren,
//! unbalanced delimiters, wrong grammar shape) are left exactly as written
//! and the scan resumes after them.
//!
//! # Example
//!
//! ```
//! use exasol_sql_normalizer::handlers::convert::normalize_convert_charset;
//!
//! let sql = "SELECT CONVERT(VARCHAR(100) UTF8, col) FROM t";
//! assert_eq!(
//!     normalize_convert_charset(sql),
//!     "SELECT CAST(col AS VARCHAR(100)) FROM t"
//! );
//! ```

pub mod convert;
pub mod group_concat;
pub mod import_from;
pub mod import_into;
pub mod regexp_like;

use crate::scan;

/// Decision for one keyword occurrence.
pub(crate) enum Outcome {
    /// Replace `sql[keep_to..resume]` with `replacement`; text between the
    /// segment start and `keep_to` is emitted verbatim.
    Rewrite {
        keep_to:     usize,
        replacement: String,
        resume:      usize
    },
    /// Not this construct: pass the original text through up to `resume`.
    Pass { resume: usize }
}

/// Scan `sql` for standalone occurrences of `keyword` and let `attempt`
/// decide each one.
///
/// `attempt` receives the segment start (the first offset not yet emitted,
/// relevant for handlers that consume text *before* the keyword) and the
/// keyword offset.
pub(crate) fn rewrite_all(
    sql: &str,
    keyword: &str,
    attempt: impl Fn(&str, usize, usize) -> Outcome
) -> String {
    let mut out = String::with_capacity(sql.len());
    let mut from = 0;

    while let Some(pos) = scan::find_keyword(sql, keyword, from) {
        match attempt(sql, from, pos) {
            Outcome::Rewrite {
                keep_to,
                replacement,
                resume
            } => {
                out.push_str(&sql[from..keep_to]);
                out.push_str(&replacement);
                from = resume;
            }
            Outcome::Pass {
                resume
            } => {
                out.push_str(&sql[from..resume]);
                from = resume;
            }
        }
    }

    out.push_str(&sql[from..]);
    out
}
