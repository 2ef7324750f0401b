//! Literal and constant builders.

use crate::ast::{Atom, Const, Literal};

/// An atom literal.
#[must_use]
pub fn atom(name: &str) -> Literal {
    Literal::Atom(Atom::from(name))
}

/// An integer literal.
#[must_use]
pub fn int(value: i64) -> Literal {
    Literal::Int(value)
}

/// A string literal.
#[must_use]
pub fn string(text: &str) -> Literal {
    Literal::String(text.to_string())
}

/// The empty list.
#[must_use]
pub fn nil() -> Literal {
    Literal::Nil
}

/// An atom constant, as found in annotations and attributes.
#[must_use]
pub fn catom(name: &str) -> Const {
    Const::Lit(atom(name))
}
