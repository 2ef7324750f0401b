//! Helpers for constructing AST nodes and asserting parser errors in tests.
//!
//! These functions reduce boilerplate when comparing parsed [`Exprs`] and
//! patterns against expected trees, and when checking that failures report
//! the right position.
//!
//! [`Exprs`]: crate::ast::Exprs

mod assertions;
mod expressions;
mod literals;
mod patterns;

pub use assertions::{assert_parse_error, parse_ok};
pub use expressions::{
    apply, call, expr, fun_ref, improper_list, lit, list, primop, tuple, values, var,
};
pub use literals::{atom, catom, int, nil, string};
pub use patterns::{palias, plit, plist, ptuple, pvar};

use crate::{Span, SyntaxKind, tokenize_without_trivia};

/// Token kinds of `src`, trivia removed.
///
/// # Examples
///
/// ```rust,no_run
/// # #[cfg(feature = "test-support")]
/// # {
/// use cerl::{SyntaxKind, test_util::kinds};
/// assert_eq!(kinds("'a'"), vec![SyntaxKind::T_ATOM]);
/// # }
/// ```
#[must_use]
pub fn kinds(src: &str) -> Vec<SyntaxKind> {
    tokenize_without_trivia(src)
        .into_iter()
        .map(|(kind, _)| kind)
        .collect()
}

/// Tokens of `src` with the text each one covers, trivia removed.
#[must_use]
pub fn tokens_with_text(src: &str) -> Vec<(SyntaxKind, String)> {
    tokenize_without_trivia(src)
        .into_iter()
        .map(|(kind, span): (SyntaxKind, Span)| {
            (kind, src.get(span).unwrap_or_default().to_string())
        })
        .collect()
}
