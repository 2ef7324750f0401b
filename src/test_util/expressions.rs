//! Builders for unannotated expression trees.

use crate::ast::{Annotated, Atom, Expr, Exprs, FunName, List, Literal, Var};

/// Wrap an [`Expr`] as an unannotated single expression.
#[must_use]
pub fn expr(e: Expr) -> Exprs {
    Exprs::from(e)
}

/// A variable reference.
#[must_use]
pub fn var(name: &str) -> Exprs {
    expr(Expr::Var(Var::from(name)))
}

/// A literal expression.
#[must_use]
pub fn lit(literal: Literal) -> Exprs {
    expr(Expr::Lit(literal))
}

/// `'name'/arity`.
#[must_use]
pub fn fun_ref(name: &str, arity: u32) -> Exprs {
    expr(Expr::Fun(FunName::new(name, arity)))
}

/// `{e1, ..., en}`.
#[must_use]
pub fn tuple(items: Vec<Exprs>) -> Exprs {
    expr(Expr::Tuple(items))
}

/// `[e1, ..., en]`.
#[must_use]
pub fn list(items: Vec<Exprs>) -> Exprs {
    expr(Expr::List(List::Proper(items)))
}

/// `[e1, ..., en | tail]`.
#[must_use]
pub fn improper_list(items: Vec<Exprs>, tail: Exprs) -> Exprs {
    expr(Expr::List(List::Improper(items, Box::new(tail))))
}

/// `apply F (args)`.
#[must_use]
pub fn apply(fun: Exprs, args: Vec<Exprs>) -> Exprs {
    expr(Expr::App {
        fun: Box::new(fun),
        args,
    })
}

/// `call 'module':'fun' (args)`.
#[must_use]
pub fn call(module: &str, fun: &str, args: Vec<Exprs>) -> Exprs {
    expr(Expr::ModCall {
        module: Box::new(lit(Literal::Atom(Atom::from(module)))),
        fun: Box::new(lit(Literal::Atom(Atom::from(fun)))),
        args,
    })
}

/// `primop 'name' (args)`.
#[must_use]
pub fn primop(name: &str, args: Vec<Exprs>) -> Exprs {
    expr(Expr::PrimOp {
        name: Atom::from(name),
        args,
    })
}

/// `<e1, ..., en>` with no annotations.
#[must_use]
pub fn values(items: Vec<Expr>) -> Exprs {
    Exprs::Many(Annotated::bare(
        items.into_iter().map(Annotated::bare).collect(),
    ))
}
