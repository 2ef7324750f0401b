//! Binding, branching and sequencing forms: `case`, `let`, `letrec`,
//! `receive`, `do`, `try` and `catch`.

use chumsky::prelude::*;

use super::{Grammar, fundef};
use crate::SyntaxKind;
use crate::parser::ast::{Alt, Annotated, Expr, Pattern, TimeOut};
use crate::parser::pattern::pats;
use crate::parser::{BoxedRule, SyntaxError};

/// `Pats [when Guard] -> Body`, optionally annotated as a whole.
fn clause<'a>(
    g: &Grammar<'a>,
    pattern: &BoxedRule<'a, Annotated<Pattern>>,
) -> impl Parser<SyntaxKind, Annotated<Alt>, Error = SyntaxError> + Clone + 'a + use<'a> {
    let guard = just(SyntaxKind::K_WHEN).ignore_then(g.exprs.clone()).or_not();
    let alt = pats(pattern.clone())
        .then(guard)
        .then_ignore(just(SyntaxKind::T_ARROW))
        .then(g.exprs.clone())
        .map(|((pats, guard), body)| Alt { pats, guard, body });
    g.annotated(alt)
}

/// `catch E`.
pub(super) fn catch<'a>(g: &Grammar<'a>) -> BoxedRule<'a, Expr> {
    just(SyntaxKind::K_CATCH)
        .ignore_then(g.exprs.clone())
        .map(|body| Expr::Catch(Box::new(body)))
        .boxed()
}

/// `case E of Alt+ end`.
pub(super) fn case<'a>(
    g: &Grammar<'a>,
    pattern: &BoxedRule<'a, Annotated<Pattern>>,
) -> BoxedRule<'a, Expr> {
    just(SyntaxKind::K_CASE)
        .ignore_then(g.exprs.clone())
        .then_ignore(just(SyntaxKind::K_OF))
        .then(clause(g, pattern).repeated().at_least(1))
        .then_ignore(just(SyntaxKind::K_END))
        .map(|(scrutinee, alts)| Expr::Case {
            scrutinee: Box::new(scrutinee),
            alts,
        })
        .boxed()
}

/// `let Vars = E in Body`.
pub(super) fn let_in<'a>(g: &Grammar<'a>) -> BoxedRule<'a, Expr> {
    just(SyntaxKind::K_LET)
        .ignore_then(g.vars())
        .then_ignore(just(SyntaxKind::T_EQ))
        .then(g.exprs.clone())
        .then_ignore(just(SyntaxKind::K_IN))
        .then(g.exprs.clone())
        .map(|((vars, bound), body)| Expr::Let {
            vars,
            bound: Box::new(bound),
            body: Box::new(body),
        })
        .boxed()
}

/// `letrec FunDef* in Body`.
pub(super) fn letrec<'a>(g: &Grammar<'a>) -> BoxedRule<'a, Expr> {
    just(SyntaxKind::K_LETREC)
        .ignore_then(fundef(g).repeated())
        .then_ignore(just(SyntaxKind::K_IN))
        .then(g.exprs.clone())
        .map(|(defs, body)| Expr::LetRec {
            defs,
            body: Box::new(body),
        })
        .boxed()
}

/// `receive Alt* after Timeout -> Body`.
pub(super) fn receive<'a>(
    g: &Grammar<'a>,
    pattern: &BoxedRule<'a, Annotated<Pattern>>,
) -> BoxedRule<'a, Expr> {
    let timeout = just(SyntaxKind::K_AFTER)
        .ignore_then(g.exprs.clone())
        .then_ignore(just(SyntaxKind::T_ARROW))
        .then(g.exprs.clone())
        .map(|(after, body)| TimeOut {
            after: Box::new(after),
            body: Box::new(body),
        });
    just(SyntaxKind::K_RECEIVE)
        .ignore_then(clause(g, pattern).repeated())
        .then(timeout)
        .map(|(alts, timeout)| Expr::Receive { alts, timeout })
        .boxed()
}

/// `do E1 E2`.
pub(super) fn seq<'a>(g: &Grammar<'a>) -> BoxedRule<'a, Expr> {
    just(SyntaxKind::K_DO)
        .ignore_then(g.exprs.clone())
        .then(g.exprs.clone())
        .map(|(first, then)| Expr::Seq(Box::new(first), Box::new(then)))
        .boxed()
}

/// `try E of Vars -> Body catch Vars -> Handler`.
pub(super) fn try_catch<'a>(g: &Grammar<'a>) -> BoxedRule<'a, Expr> {
    let branch = |keyword: SyntaxKind| {
        just(keyword)
            .ignore_then(g.vars())
            .then_ignore(just(SyntaxKind::T_ARROW))
            .then(g.exprs.clone())
    };
    just(SyntaxKind::K_TRY)
        .ignore_then(g.exprs.clone())
        .then(branch(SyntaxKind::K_OF))
        .then(branch(SyntaxKind::K_CATCH))
        .map(|((body, (of_vars, of_body)), (catch_vars, catch_body))| Expr::Try {
            body: Box::new(body),
            of_vars,
            of_body: Box::new(of_body),
            catch_vars,
            catch_body: Box::new(catch_body),
        })
        .boxed()
}
