//! `GROUP_CONCAT ... SEPARATOR` normalization.
//!
//! Rewrites:
//!
//! ```sql
//! GROUP_CONCAT(DISTINCT col ORDER BY col SEPARATOR '|')
//! ```
//!
//! to:
//!
//! ```sql
//! GROUP_CONCAT(DISTINCT col ORDER BY col)
//! ```
//!
//! Only the `SEPARATOR '...'` tail is removed; `DISTINCT`, the expression,
//! and `ORDER BY` stay as written. The separator clause is always the last
//! clause before the closing paren, so the cut point is the last standalone
//! `SEPARATOR` token at nesting depth zero.

use super::{Outcome, rewrite_all};
use crate::scan;

/// Remove `SEPARATOR '...'` clauses from all `GROUP_CONCAT` calls.
pub fn normalize_group_concat(sql: &str) -> String {
    rewrite_all(sql, "GROUP_CONCAT", attempt)
}

fn attempt(sql: &str, _seg_start: usize, pos: usize) -> Outcome {
    let kw_end = pos + "GROUP_CONCAT".len();
    let bytes = sql.as_bytes();

    let paren = scan::skip_whitespace(sql, kw_end);
    if bytes.get(paren) != Some(&b'(') {
        return Outcome::Pass {
            resume: kw_end
        };
    }
    let Some(close) = scan::matching_paren(sql, paren) else {
        return Outcome::Pass {
            resume: kw_end
        };
    };

    let inner = &sql[paren + 1..close];
    Outcome::Rewrite {
        keep_to:     paren + 1,
        replacement: format!("{})", strip_separator(inner)),
        resume:      close + 1
    }
}

/// The body with any trailing `SEPARATOR ...` clause removed.
///
/// Scans left to right at depth zero, treating strings, quoted identifiers,
/// and nested paren groups as opaque, and cuts at the last standalone
/// `SEPARATOR` found. Returns the body unchanged when there is none.
fn strip_separator(inner: &str) -> &str {
    let bytes = inner.as_bytes();
    let mut last_sep = None;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\'' => {
                i = scan::skip_quoted_string(inner, i);
            }
            b'"' => {
                i += 1;
                while i < bytes.len() && bytes[i] != b'"' {
                    i += 1;
                }
                i += 1;
            }
            b'(' => {
                i = scan::matching_paren(inner, i).map_or(bytes.len(), |close| close + 1);
            }
            _ => {
                if scan::matches_at(inner, i, "SEPARATOR")
                    && !inner[..i].chars().next_back().is_some_and(scan::is_ident_char)
                    && !inner[i + "SEPARATOR".len()..]
                        .chars()
                        .next()
                        .is_some_and(scan::is_ident_char)
                {
                    last_sep = Some(i);
                }
                i += 1;
            }
        }
    }

    match last_sep {
        Some(cut) => inner[..cut].trim_end(),
        None => inner
    }
}
