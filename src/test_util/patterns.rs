//! Builders for unannotated patterns.

use crate::ast::{Alias, Annotated, List, Literal, Pattern, Var};

/// A variable pattern.
#[must_use]
pub fn pvar(name: &str) -> Annotated<Pattern> {
    Annotated::bare(Pattern::Var(Var::from(name)))
}

/// A literal pattern.
#[must_use]
pub fn plit(literal: Literal) -> Annotated<Pattern> {
    Annotated::bare(Pattern::Lit(literal))
}

/// `{p1, ..., pn}`.
#[must_use]
pub fn ptuple(items: Vec<Annotated<Pattern>>) -> Annotated<Pattern> {
    Annotated::bare(Pattern::Tuple(items))
}

/// `[p1, ..., pn]`, or `[p1, ..., pn | tail]` when `tail` is given.
#[must_use]
pub fn plist(items: Vec<Annotated<Pattern>>, tail: Option<Annotated<Pattern>>) -> Annotated<Pattern> {
    let list = match tail {
        Some(tail) => List::Improper(items, Box::new(tail)),
        None => List::Proper(items),
    };
    Annotated::bare(Pattern::List(list))
}

/// `V = P`.
#[must_use]
pub fn palias(name: &str, pattern: Annotated<Pattern>) -> Annotated<Pattern> {
    Annotated::bare(Pattern::Alias(Alias {
        var: Annotated::bare(Var::from(name)),
        pattern: Box::new(pattern),
    }))
}
