//! Pattern grammar used by `case` and `receive` clauses.
//!
//! Patterns mirror the literal and collection shapes of expressions and add
//! aliases (`V = P`). Map patterns only accept `:=` pairs whose keys are
//! variables or literals. Binary segment arguments are full expressions, so the
//! pattern rule is built from a [`Grammar`] that already carries the
//! expression rule.

use chumsky::prelude::*;
use chumsky::recursive::Recursive;

use super::annotation::skip_annotation;
use super::ast::{Alias, Annotated, MapKey, Pats, Pattern};
use super::delimiter::{angles, braces, list_of};
use super::expression::{Grammar, bit_strings};
use super::literals::{literal, variable};
use super::{BoxedRule, SyntaxError};
use crate::SyntaxKind;

/// The annotated pattern rule.
///
/// An alias is tried before the annotation wrapper so that
/// `(V -| [...]) = P` keeps the annotation on the variable. Inside the
/// wrapper the alternatives are alias, variable, literal, tuple, list, binary
/// and map, in that order.
pub(crate) fn pattern<'a>(g: &Grammar<'a>) -> BoxedRule<'a, Annotated<Pattern>> {
    recursive(
        |pattern: Recursive<'a, SyntaxKind, Annotated<Pattern>, SyntaxError>| {
            let alias = g
                .annotated_var()
                .then_ignore(just(SyntaxKind::T_EQ))
                .then(pattern.clone())
                .map(|(var, pattern)| {
                    Pattern::Alias(Alias {
                        var,
                        pattern: Box::new(pattern),
                    })
                });
            let key = skip_annotation(
                variable(g.src)
                    .map(MapKey::Var)
                    .or(literal(g.src).map(MapKey::Lit)),
                g.constant.clone(),
            );
            let map = key
                .then_ignore(just(SyntaxKind::T_COLON_EQ))
                .then(pattern.clone())
                .separated_by(just(SyntaxKind::T_COMMA))
                .delimited_by(
                    just(SyntaxKind::T_MAP_OPEN),
                    just(SyntaxKind::T_MAP_CLOSE),
                )
                .map(Pattern::Map);
            let single = choice((
                alias.clone(),
                variable(g.src).map(Pattern::Var),
                literal(g.src).map(Pattern::Lit),
                braces(pattern.clone()).map(Pattern::Tuple),
                list_of(pattern.clone()).map(Pattern::List),
                bit_strings(pattern, g.exprs.clone()).map(Pattern::Binary),
                map,
            ));
            alias.map(Annotated::bare).or(g.annotated(single))
        },
    )
    .boxed()
}

/// A clause head: one pattern or `<P1, ..., Pn>`.
pub(crate) fn pats<'a>(
    pattern: BoxedRule<'a, Annotated<Pattern>>,
) -> impl Parser<SyntaxKind, Pats, Error = SyntaxError> + Clone + 'a {
    angles(pattern.clone())
        .map(Pats::Many)
        .or(pattern.map(Pats::One))
}

#[cfg(test)]
mod tests;
