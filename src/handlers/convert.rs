//! Charset `CONVERT` normalization.
//!
//! Rewrites Exasol's charset form:
//!
//! ```sql
//! CONVERT(VARCHAR(10000) UTF8, expr)
//! ```
//!
//! to:
//!
//! ```sql
//! CAST(expr AS VARCHAR(10000))
//! ```
//!
//! The charset tag after the type is what identifies the Exasol form. A
//! `CONVERT(type, expr [, style])` call without one is assumed to be the
//! unrelated positional form and left untouched. The recognized tags are a
//! fixed set; an identifier outside it means "positional form" even if the
//! dialect one day grows another charset.

use super::{Outcome, rewrite_all};
use crate::scan;

/// Charset tags that identify Exasol's `CONVERT` form.
const CHARSETS: [&str; 2] = ["UTF8", "ASCII"];

/// Rewrite every charset `CONVERT(type charset, expr)` as `CAST(expr AS type)`.
pub fn normalize_convert_charset(sql: &str) -> String {
    rewrite_all(sql, "CONVERT", attempt)
}

fn attempt(sql: &str, _seg_start: usize, pos: usize) -> Outcome {
    let kw_end = pos + "CONVERT".len();
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

    match parse_charset_convert(&sql[paren + 1..close]) {
        Some((type_str, expr)) => Outcome::Rewrite {
            keep_to:     pos,
            replacement: format!("CAST({} AS {})", expr, type_str),
            resume:      close + 1
        },
        // No charset tag: the unrelated positional CONVERT. Keep the call.
        None => Outcome::Pass {
            resume: close + 1
        }
    }
}

/// Decompose the inside of `CONVERT(...)` into `(type, expression)`.
///
/// Expects `type-name [(precision)] charset , expression`. The precision
/// suffix is reproduced verbatim (glued to the type name); returns `None`
/// unless every piece is present, which callers treat as "not the Exasol
/// form".
fn parse_charset_convert(inner: &str) -> Option<(String, &str)> {
    let bytes = inner.as_bytes();

    let type_start = scan::skip_whitespace(inner, 0);
    let mut i = scan::ident_end(inner, type_start);
    if i == type_start {
        return None;
    }
    let mut type_str = String::from(&inner[type_start..i]);

    i = scan::skip_whitespace(inner, i);
    if bytes.get(i) == Some(&b'(') {
        let suffix_start = i;
        let mut depth = 1usize;
        let mut j = i + 1;
        while j < bytes.len() && depth > 0 {
            match bytes[j] {
                b'(' => depth += 1,
                b')' => depth -= 1,
                _ => {}
            }
            j += 1;
        }
        type_str.push_str(&inner[suffix_start..j]);
        i = j;
    }

    i = scan::skip_whitespace(inner, i);
    let charset_end = scan::ident_end(inner, i);
    let charset = &inner[i..charset_end];
    if !CHARSETS.iter().any(|c| charset.eq_ignore_ascii_case(c)) {
        return None;
    }

    i = scan::skip_whitespace(inner, charset_end);
    if bytes.get(i) != Some(&b',') {
        return None;
    }

    let expr = inner[i + 1..].trim();
    if expr.is_empty() {
        return None;
    }
    Some((type_str, expr))
}
