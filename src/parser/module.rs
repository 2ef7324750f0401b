//! The `module ... end` envelope.

use chumsky::prelude::*;

use super::annotation::skip_annotation;
use super::ast::{Annotated, Module};
use super::delimiter::brackets;
use super::expression::{Grammar, fundef};
use super::literals::{atom, fun_name};
use super::BoxedRule;
use crate::SyntaxKind;

/// `module 'name' [exports] attributes [key = const, ...] FunDef* end`.
///
/// Export entries and attribute keys may be annotated; those annotations are
/// checked and dropped.
pub(crate) fn module<'a>(g: &Grammar<'a>) -> BoxedRule<'a, Annotated<Module>> {
    let exports = brackets(skip_annotation(fun_name(g.src), g.constant.clone()));
    let attribute = skip_annotation(atom(g.src), g.constant.clone())
        .then_ignore(just(SyntaxKind::T_EQ))
        .then(g.constant.clone());
    let body = just(SyntaxKind::K_MODULE)
        .ignore_then(atom(g.src))
        .then(exports)
        .then_ignore(just(SyntaxKind::K_ATTRIBUTES))
        .then(brackets(attribute))
        .then(fundef(g).repeated())
        .then_ignore(just(SyntaxKind::K_END))
        .map(|(((name, exports), attributes), defs)| Module {
            name,
            exports,
            attributes,
            defs,
        });
    g.annotated(body).boxed()
}
