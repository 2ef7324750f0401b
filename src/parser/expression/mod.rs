//! Expression grammar for Core Erlang.
//!
//! [`expression`] builds the recursive `Exprs` rule. The work is split across
//! submodules: [`functions`] covers function references, lambdas and calls,
//! [`control_flow`] the binding and branching forms, and [`collections`]
//! tuples, lists, binaries and maps. Every sub-rule receives a [`Grammar`]
//! holding the recursive handles it needs.
//!
//! Alternatives are tried in a fixed order. Several forms share a prefix, so
//! each alternative rewinds the input on failure and the order decides which
//! one wins:
//!
//! - `'f'/N` is tried before literals because both start with an atom;
//! - `fun 'm':'f'/N` is tried before `fun (...) -> ...`;
//! - lists are tried before literals because `[]` is a literal;
//! - the two `~{ ... | M }~` map forms are tried before the plain map.

mod collections;
mod control_flow;
mod functions;

use chumsky::prelude::*;
use chumsky::recursive::Recursive;

use super::annotation::annotated;
use super::ast::{Annotated, Const, Exprs, Expr, Var};
use super::delimiter::{angles, parens};
use super::literals::{constant, literal, variable};
use super::pattern::pattern;
use super::{BoxedRule, SyntaxError};
use crate::SyntaxKind;

pub(crate) use collections::bit_strings;
pub(crate) use functions::fundef;

/// Shared building blocks for the expression and pattern rules.
#[derive(Clone)]
pub(crate) struct Grammar<'a> {
    pub(crate) src: &'a str,
    pub(crate) constant: BoxedRule<'a, Const>,
    pub(crate) exprs: BoxedRule<'a, Exprs>,
}

impl<'a> Grammar<'a> {
    /// Build the complete grammar over `src`.
    pub(crate) fn new(src: &'a str) -> Self {
        let constant = constant(src).boxed();
        let exprs = expression(src, constant.clone());
        Self {
            src,
            constant,
            exprs,
        }
    }

    /// Wrap `inner` in the annotation syntax.
    ///
    /// The returned parser owns its handles and does not borrow `self`.
    pub(crate) fn annotated<T, P>(
        &self,
        inner: P,
    ) -> impl Parser<SyntaxKind, Annotated<T>, Error = SyntaxError> + Clone + 'a + use<'a, T, P>
    where
        T: 'a,
        P: Parser<SyntaxKind, T, Error = SyntaxError> + Clone + 'a,
    {
        annotated(inner, self.constant.clone())
    }

    /// `( E, ... )` argument list.
    pub(crate) fn args(
        &self,
    ) -> impl Parser<SyntaxKind, Vec<Exprs>, Error = SyntaxError> + Clone + 'a + use<'a> {
        parens(self.exprs.clone())
    }

    /// A single, possibly annotated, variable.
    pub(crate) fn annotated_var(
        &self,
    ) -> impl Parser<SyntaxKind, Annotated<Var>, Error = SyntaxError> + Clone + 'a + use<'a> {
        self.annotated(variable(self.src))
    }

    /// One variable or `< V, ... >`, as bound by `let` and `try`.
    pub(crate) fn vars(
        &self,
    ) -> impl Parser<SyntaxKind, Vec<Annotated<Var>>, Error = SyntaxError> + Clone + 'a + use<'a> {
        self.annotated_var()
            .map(|var| vec![var])
            .or(angles(self.annotated_var()))
    }
}

/// The `Exprs` rule: a `< ... >` value list or a single expression.
///
/// The value list is tried first; both forms may carry an annotation.
pub(crate) fn expression<'a>(src: &'a str, constant: BoxedRule<'a, Const>) -> BoxedRule<'a, Exprs> {
    recursive(move |exprs: Recursive<'a, SyntaxKind, Exprs, SyntaxError>| {
        let g = Grammar {
            src,
            constant,
            exprs: exprs.boxed(),
        };
        let single = single_expression(&g);
        let values = g
            .annotated(angles(g.annotated(single.clone())))
            .map(Exprs::Many);
        values.or(g.annotated(single).map(Exprs::One))
    })
    .boxed()
}

/// All single-expression alternatives in their disambiguating order.
fn single_expression<'a>(g: &Grammar<'a>) -> BoxedRule<'a, Expr> {
    let pattern = pattern(g);
    choice((
        functions::apply(g),
        control_flow::catch(g),
        control_flow::case(g, &pattern),
        control_flow::let_in(g),
        functions::fun_ref(g),
        functions::ext_fun_ref(g),
        functions::lambda(g).map(Expr::Lambda).boxed(),
        control_flow::letrec(g),
        collections::binary(g),
        collections::list(g),
        collections::map_extend(g),
        collections::map_update(g),
        collections::map_build(g),
        literal(g.src).map(Expr::Lit).boxed(),
        functions::mod_call(g),
        functions::prim_op(g),
        control_flow::receive(g, &pattern),
        control_flow::seq(g),
        control_flow::try_catch(g),
        collections::tuple(g),
        variable(g.src).map(Expr::Var).boxed(),
    ))
    .boxed()
}
