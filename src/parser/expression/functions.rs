//! Function references, lambdas, definitions and the three call forms.

use chumsky::prelude::*;

use super::Grammar;
use crate::SyntaxKind;
use crate::parser::BoxedRule;
use crate::parser::SyntaxError;
use crate::parser::ast::{Expr, FunDef, Lambda};
use crate::parser::delimiter::parens;
use crate::parser::literals::{atom, fun_name};

/// `apply F (A1, ..., An)`.
pub(super) fn apply<'a>(g: &Grammar<'a>) -> BoxedRule<'a, Expr> {
    just(SyntaxKind::K_APPLY)
        .ignore_then(g.exprs.clone())
        .then(g.args())
        .map(|(fun, args)| Expr::App {
            fun: Box::new(fun),
            args,
        })
        .boxed()
}

/// `'f'/N`.
pub(super) fn fun_ref<'a>(g: &Grammar<'a>) -> BoxedRule<'a, Expr> {
    fun_name(g.src).map(Expr::Fun).boxed()
}

/// `fun 'm':'f'/N`.
pub(super) fn ext_fun_ref<'a>(g: &Grammar<'a>) -> BoxedRule<'a, Expr> {
    just(SyntaxKind::K_FUN)
        .ignore_then(atom(g.src))
        .then_ignore(just(SyntaxKind::T_COLON))
        .then(fun_name(g.src))
        .map(|(module, fun)| Expr::ExtFun { module, fun })
        .boxed()
}

/// `fun (V1, ..., Vn) -> Body`.
pub(crate) fn lambda<'a>(
    g: &Grammar<'a>,
) -> impl Parser<SyntaxKind, Lambda, Error = SyntaxError> + Clone + 'a + use<'a> {
    just(SyntaxKind::K_FUN)
        .ignore_then(parens(g.annotated_var()))
        .then_ignore(just(SyntaxKind::T_ARROW))
        .then(g.exprs.clone())
        .map(|(params, body)| Lambda {
            params,
            body: Box::new(body),
        })
}

/// `'f'/N = fun (...) -> ...`, each side optionally annotated.
pub(crate) fn fundef<'a>(
    g: &Grammar<'a>,
) -> impl Parser<SyntaxKind, FunDef, Error = SyntaxError> + Clone + 'a + use<'a> {
    g.annotated(fun_name(g.src))
        .then_ignore(just(SyntaxKind::T_EQ))
        .then(g.annotated(lambda(g)))
        .map(|(name, body)| FunDef { name, body })
}

/// `call M : F (A1, ..., An)`.
pub(super) fn mod_call<'a>(g: &Grammar<'a>) -> BoxedRule<'a, Expr> {
    just(SyntaxKind::K_CALL)
        .ignore_then(g.exprs.clone())
        .then_ignore(just(SyntaxKind::T_COLON))
        .then(g.exprs.clone())
        .then(g.args())
        .map(|((module, fun), args)| Expr::ModCall {
            module: Box::new(module),
            fun: Box::new(fun),
            args,
        })
        .boxed()
}

/// `primop 'name' (A1, ..., An)`.
pub(super) fn prim_op<'a>(g: &Grammar<'a>) -> BoxedRule<'a, Expr> {
    just(SyntaxKind::K_PRIMOP)
        .ignore_then(atom(g.src))
        .then(g.args())
        .map(|(name, args)| Expr::PrimOp { name, args })
        .boxed()
}
