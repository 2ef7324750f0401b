//! Shared test utilities for integration tests.
//!
//! These helpers build AST nodes and unwrap parse results. They mirror a
//! subset of the `cerl::test_util` module without requiring the
//! `test-support` feature, so integration tests compile against the published
//! library.

#![expect(
    dead_code,
    reason = "helpers are reused across multiple tests so some may be unused"
)]

use cerl::ParseError;
use cerl::ast::{Annotated, Atom, Const, Expr, Exprs, FunName, Literal, Var};

/// Unwrap a successful parse.
#[track_caller]
pub fn parse_ok<T>(result: Result<T, ParseError>) -> T {
    result.unwrap_or_else(|err| panic!("unexpected parse error: {err}"))
}

/// Unwrap a failed parse.
#[track_caller]
pub fn parse_err<T: std::fmt::Debug>(result: Result<T, ParseError>) -> ParseError {
    match result {
        Ok(value) => panic!("expected a parse error, got {value:?}"),
        Err(err) => err,
    }
}

/// An unannotated single expression.
#[must_use]
pub fn expr(e: Expr) -> Exprs {
    Exprs::One(Annotated::bare(e))
}

/// A variable reference.
#[must_use]
pub fn var(name: &str) -> Exprs {
    expr(Expr::Var(Var::from(name)))
}

/// An atom literal.
#[must_use]
pub fn atom(name: &str) -> Literal {
    Literal::Atom(Atom::from(name))
}

/// A literal expression.
#[must_use]
pub fn lit(literal: Literal) -> Exprs {
    expr(Expr::Lit(literal))
}

/// An atom constant.
#[must_use]
pub fn catom(name: &str) -> Const {
    Const::Lit(atom(name))
}

/// `'name'/arity`.
#[must_use]
pub fn fun_ref(name: &str, arity: u32) -> Exprs {
    expr(Expr::Fun(FunName::new(name, arity)))
}

/// `apply F (args)`.
#[must_use]
pub fn apply(fun: Exprs, args: Vec<Exprs>) -> Exprs {
    expr(Expr::App {
        fun: Box::new(fun),
        args,
    })
}
