//! Shared helpers for comma-separated, delimited sequences.
//!
//! Core Erlang wraps nearly every sequence in a pair of delimiters: argument
//! lists in parentheses, value lists in angle brackets, tuples in braces and
//! lists in brackets. Keeping the combinators here makes every rule treat
//! separators the same way (no trailing comma, empty sequence allowed).

use chumsky::prelude::*;

use super::SyntaxError;
use super::ast::List;
use crate::SyntaxKind;

/// `open item, ..., item close`, possibly empty.
pub(crate) fn delimited_list<'a, T: 'a>(
    item: impl Parser<SyntaxKind, T, Error = SyntaxError> + Clone + 'a,
    open: SyntaxKind,
    close: SyntaxKind,
) -> impl Parser<SyntaxKind, Vec<T>, Error = SyntaxError> + Clone + 'a {
    item.separated_by(just(SyntaxKind::T_COMMA))
        .delimited_by(just(open), just(close))
}

/// `( item, ... )`.
pub(crate) fn parens<'a, T: 'a>(
    item: impl Parser<SyntaxKind, T, Error = SyntaxError> + Clone + 'a,
) -> impl Parser<SyntaxKind, Vec<T>, Error = SyntaxError> + Clone + 'a {
    delimited_list(item, SyntaxKind::T_LPAREN, SyntaxKind::T_RPAREN)
}

/// `< item, ... >`.
pub(crate) fn angles<'a, T: 'a>(
    item: impl Parser<SyntaxKind, T, Error = SyntaxError> + Clone + 'a,
) -> impl Parser<SyntaxKind, Vec<T>, Error = SyntaxError> + Clone + 'a {
    delimited_list(item, SyntaxKind::T_LT, SyntaxKind::T_GT)
}

/// `{ item, ... }`.
pub(crate) fn braces<'a, T: 'a>(
    item: impl Parser<SyntaxKind, T, Error = SyntaxError> + Clone + 'a,
) -> impl Parser<SyntaxKind, Vec<T>, Error = SyntaxError> + Clone + 'a {
    delimited_list(item, SyntaxKind::T_LBRACE, SyntaxKind::T_RBRACE)
}

/// `[ item, ... ]`.
pub(crate) fn brackets<'a, T: 'a>(
    item: impl Parser<SyntaxKind, T, Error = SyntaxError> + Clone + 'a,
) -> impl Parser<SyntaxKind, Vec<T>, Error = SyntaxError> + Clone + 'a {
    delimited_list(item, SyntaxKind::T_LBRACKET, SyntaxKind::T_RBRACKET)
}

/// `[e1, ..., en]` or `[e1, ..., en | tail]` with at least one element.
///
/// The empty list is a literal (`Nil`) and is recognised by the literal rule.
pub(crate) fn list_of<'a, T: 'a>(
    item: impl Parser<SyntaxKind, T, Error = SyntaxError> + Clone + 'a,
) -> impl Parser<SyntaxKind, List<T>, Error = SyntaxError> + Clone + 'a {
    item.clone()
        .separated_by(just(SyntaxKind::T_COMMA))
        .at_least(1)
        .then(just(SyntaxKind::T_PIPE).ignore_then(item).or_not())
        .delimited_by(just(SyntaxKind::T_LBRACKET), just(SyntaxKind::T_RBRACKET))
        .map(|(elems, tail)| match tail {
            Some(tail) => List::Improper(elems, Box::new(tail)),
            None => List::Proper(elems),
        })
}
