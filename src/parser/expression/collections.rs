//! Tuples, lists, binaries and maps.
//!
//! The three map forms share the `~{` opener and differ only in the pair
//! operator and the trailing `| Map`, so each is tried as a whole.
//! Trying them in this order reads the pairs of a plain `=>` map twice, once
//! for the failed extend form and once for the build form, so maps nested `n`
//! deep cost on the order of `2^n` parses.

use chumsky::prelude::*;

use super::Grammar;
use crate::SyntaxKind;
use crate::parser::ast::{BitString, Expr, Exprs, MapExpr};
use crate::parser::delimiter::{braces, list_of, parens};
use crate::parser::{BoxedRule, SyntaxError};

/// `{E1, ..., En}`.
pub(super) fn tuple<'a>(g: &Grammar<'a>) -> BoxedRule<'a, Expr> {
    braces(g.exprs.clone()).map(Expr::Tuple).boxed()
}

/// `[E1, ..., En]` or `[E1, ..., En | Tail]`.
pub(super) fn list<'a>(g: &Grammar<'a>) -> BoxedRule<'a, Expr> {
    list_of(g.exprs.clone()).map(Expr::List).boxed()
}

/// `#{ #<V>(A, ...), ... }#` with segment values read by `value`.
///
/// Shared by binary expressions and binary patterns.
pub(crate) fn bit_strings<'a, T: 'a>(
    value: impl Parser<SyntaxKind, T, Error = SyntaxError> + Clone + 'a,
    exprs: BoxedRule<'a, Exprs>,
) -> impl Parser<SyntaxKind, Vec<BitString<T>>, Error = SyntaxError> + Clone + 'a {
    let segment = just(SyntaxKind::T_HASH)
        .ignore_then(value.delimited_by(just(SyntaxKind::T_LT), just(SyntaxKind::T_GT)))
        .then(parens(exprs))
        .map(|(value, args)| BitString { value, args });
    braces(segment).delimited_by(just(SyntaxKind::T_HASH), just(SyntaxKind::T_HASH))
}

/// Binary expression.
pub(super) fn binary<'a>(g: &Grammar<'a>) -> BoxedRule<'a, Expr> {
    bit_strings(g.exprs.clone(), g.exprs.clone())
        .map(Expr::Binary)
        .boxed()
}

fn pairs<'a>(
    g: &Grammar<'a>,
    op: SyntaxKind,
) -> impl Parser<SyntaxKind, Vec<(Exprs, Exprs)>, Error = SyntaxError> + Clone + 'a + use<'a> {
    g.exprs
        .clone()
        .then_ignore(just(op))
        .then(g.exprs.clone())
        .separated_by(just(SyntaxKind::T_COMMA))
}

fn map_with_base<'a>(
    g: &Grammar<'a>,
    op: SyntaxKind,
) -> impl Parser<SyntaxKind, (Vec<(Exprs, Exprs)>, Box<Exprs>), Error = SyntaxError>
+ Clone
+ 'a
+ use<'a> {
    pairs(g, op)
        .then_ignore(just(SyntaxKind::T_PIPE))
        .then(g.exprs.clone().map(Box::new))
        .delimited_by(just(SyntaxKind::T_MAP_OPEN), just(SyntaxKind::T_MAP_CLOSE))
}

/// `~{K => V, ... | M}~`.
pub(super) fn map_extend<'a>(g: &Grammar<'a>) -> BoxedRule<'a, Expr> {
    map_with_base(g, SyntaxKind::T_FAT_ARROW)
        .map(|(pairs, map)| Expr::Map(MapExpr::Extend { pairs, map }))
        .boxed()
}

/// `~{K := V, ... | M}~`.
pub(super) fn map_update<'a>(g: &Grammar<'a>) -> BoxedRule<'a, Expr> {
    map_with_base(g, SyntaxKind::T_COLON_EQ)
        .map(|(pairs, map)| Expr::Map(MapExpr::Update { pairs, map }))
        .boxed()
}

/// `~{K => V, ...}~`.
pub(super) fn map_build<'a>(g: &Grammar<'a>) -> BoxedRule<'a, Expr> {
    pairs(g, SyntaxKind::T_FAT_ARROW)
        .delimited_by(just(SyntaxKind::T_MAP_OPEN), just(SyntaxKind::T_MAP_CLOSE))
        .map(|pairs| Expr::Map(MapExpr::Build(pairs)))
        .boxed()
}
