//! Post-normalization parse verification.
//!
//! The normalizer itself never parses SQL; it only rewrites text. This module
//! is the optional `--check` collaborator layered on top: it feeds the
//! normalized output to `sqlparser`'s generic dialect and reports a failure
//! if the result is not standard SQL a downstream tool could consume.

use sqlparser::{dialect::GenericDialect, parser::Parser};

use crate::error::{AppResult, check_error};

/// Parse `sql` as standard SQL, returning the number of statements.
pub fn verify(sql: &str) -> AppResult<usize> {
    let statements =
        Parser::parse_sql(&GenericDialect {}, sql).map_err(|e| check_error(e.to_string()))?;
    Ok(statements.len())
}
