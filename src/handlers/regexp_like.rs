//! Infix `REGEXP_LIKE` normalization.
//!
//! Rewrites the infix operator form:
//!
//! ```sql
//! col REGEXP_LIKE('[0-9]+')
//! ```
//!
//! to function-call syntax:
//!
//! ```sql
//! REGEXP_LIKE(col, '[0-9]+')
//! ```
//!
//! The token before the keyword decides which form this is: a trailing
//! identifier (possibly dot-qualified or double-quoted) is the infix operand;
//! a SQL keyword such as `WHERE` or `AND` means the call is already in
//! function form. The keyword list is a fixed set, so a column literally
//! named `VALUES` would be misread as function-call context; that ambiguity
//! is inherent to the infix syntax.

use super::{Outcome, rewrite_all};
use crate::scan;

/// Keywords that legitimately precede a function call.
const PRECEDING_KEYWORDS: [&str; 16] = [
    "WHERE", "AND", "OR", "ON", "WHEN", "THEN", "ELSE", "CASE", "NOT", "SELECT", "FROM", "SET",
    "VALUES", "HAVING", "IF", "ELSEIF"
];

/// Rewrite every infix `REGEXP_LIKE` occurrence to function-call syntax.
pub fn normalize_regexp_like(sql: &str) -> String {
    rewrite_all(sql, "REGEXP_LIKE", attempt)
}

fn attempt(sql: &str, seg_start: usize, pos: usize) -> Outcome {
    let kw_end = pos + "REGEXP_LIKE".len();
    let bytes = sql.as_bytes();

    let before = sql[seg_start..pos].trim_end();
    let Some(operand) = trailing_identifier(before) else {
        return Outcome::Pass {
            resume: kw_end
        };
    };
    if PRECEDING_KEYWORDS.iter().any(|k| operand.eq_ignore_ascii_case(k)) {
        return Outcome::Pass {
            resume: kw_end
        };
    }

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

    let args = &sql[paren + 1..close];
    Outcome::Rewrite {
        keep_to:     seg_start + before.len() - operand.len(),
        replacement: format!("REGEXP_LIKE({}, {})", operand, args),
        resume:      close + 1
    }
}

/// The identifier `s` ends with, if any.
///
/// Handles `col`, `t.col`, `schema.t.col`, `"Quoted"`, and `t."Quoted"`.
fn trailing_identifier(s: &str) -> Option<&str> {
    let last = s.chars().next_back()?;

    if last == '"' {
        let open = s[..s.len() - 1].rfind('"')?;
        // Qualified quoted name: walk back over the qualifier chain.
        if open > 0 && s.as_bytes()[open - 1] == b'.' {
            let mut start = open - 1;
            for (idx, ch) in s[..open - 1].char_indices().rev() {
                if scan::is_ident_char(ch) || ch == '.' {
                    start = idx;
                } else {
                    break;
                }
            }
            return Some(&s[start..]);
        }
        return Some(&s[open..]);
    }

    if !scan::is_ident_char(last) {
        return None;
    }
    let mut start = s.len() - last.len_utf8();
    for (idx, ch) in s.char_indices().rev() {
        if scan::is_ident_char(ch) || ch == '.' {
            start = idx;
        } else {
            break;
        }
    }
    Some(&s[start..])
}
