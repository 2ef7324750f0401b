//! Chumsky-based parser producing the Core Erlang AST.
//!
//! Every entry point tokenises the whole input with
//! [`tokenize_without_trivia`], rejects unrecognised input and input nested
//! deeper than [`MAX_DEPTH`], and runs one grammar rule followed by an
//! end-of-input check over the token stream.
//! Failures are converted into a single [`ParseError`]; there is no recovery
//! and no partial result.

use std::fmt;
use std::panic;
use std::str::FromStr;
use std::thread;

use chumsky::{BoxedParser, Stream};
use chumsky::prelude::*;
use log::debug;
use thiserror::Error;

use crate::{SyntaxKind, tokenize_without_trivia};

pub mod ast;

mod annotation;
mod delimiter;
mod error;
mod expression;
mod literals;
mod module;
mod nesting;
mod pattern;

#[cfg(test)]
mod tests;

pub use error::{DEFAULT_ORIGIN, ParseError};
pub use nesting::MAX_DEPTH;

use ast::{Annotated, Const, Exprs, Literal, Module, Pattern};
use expression::Grammar;

/// Error type produced by the grammar rules.
pub(crate) type SyntaxError = Simple<SyntaxKind>;

/// Type-erased grammar rule.
pub(crate) type BoxedRule<'a, O> = BoxedParser<'a, SyntaxKind, O, SyntaxError>;

/// Stack reserved for the thread running the grammar.
///
/// Input nested [`MAX_DEPTH`] levels deep fits with room to spare in
/// unoptimised builds.
const PARSER_STACK_SIZE: usize = 128 * 1024 * 1024;

/// Run the rule built by `rule` over the whole of `src`.
///
/// The token stream is checked for unrecognised input, undecodable literals
/// and excessive nesting first. The grammar itself runs on a dedicated thread
/// with a [`PARSER_STACK_SIZE`] stack, so `rule` builds the parser there.
pub(crate) fn run<T, P>(src: &str, rule: impl FnOnce() -> P + Send) -> Result<T, ParseError>
where
    T: Send,
    P: Parser<SyntaxKind, T, Error = SyntaxError>,
{
    let tokens = tokenize_without_trivia(src);
    if let Some((_, span)) = tokens.iter().find(|(kind, _)| *kind == SyntaxKind::N_ERROR) {
        let text = src.get(span.clone()).unwrap_or_default();
        return Err(ParseError::new(
            src,
            span.clone(),
            format!("unrecognised input `{text}`"),
        ));
    }
    if let Some((span, message)) = literals::first_invalid_literal(src, &tokens) {
        return Err(ParseError::new(src, span, message));
    }
    if let Some(span) = nesting::first_too_deep(&tokens) {
        return Err(ParseError::new(
            src,
            span,
            format!("nesting exceeds the maximum depth of {MAX_DEPTH}"),
        ));
    }
    debug!("parsing {} tokens", tokens.len());
    let eoi = src.len()..src.len();
    let outcome = thread::scope(|scope| {
        thread::Builder::new()
            .name("cerl-parser".to_string())
            .stack_size(PARSER_STACK_SIZE)
            .spawn_scoped(scope, move || {
                rule()
                    .then_ignore(end())
                    .parse(Stream::from_iter(eoi, tokens.into_iter()))
            })
            .map(|worker| worker.join())
    });
    match outcome {
        Ok(Ok(parsed)) => parsed.map_err(|errors| ParseError::from_syntax_errors(src, errors)),
        Ok(Err(payload)) => panic::resume_unwind(payload),
        Err(err) => Err(ParseError::new(
            src,
            0..0,
            format!("cannot start the parser thread: {err}"),
        )),
    }
}

/// Parse a complete `module ... end` unit.
///
/// Trailing input after the closing `end` is an error.
///
/// # Errors
/// Returns a [`ParseError`] describing the furthest point the parser reached.
///
/// # Examples
///
/// ```
/// let module = cerl::parse("module 'm' [] attributes [] end").unwrap();
/// assert_eq!(module.node.name.as_str(), "m");
/// ```
pub fn parse(src: &str) -> Result<Annotated<Module>, ParseError> {
    let result = run(src, || module::module(&Grammar::new(src)));
    match &result {
        Ok(module) => debug!(
            "parsed module {} with {} definitions",
            module.node.name,
            module.node.defs.len()
        ),
        Err(err) => debug!("module parse failed: {err}"),
    }
    result
}

/// Parse a single `Exprs` value: one expression or a `<...>` value list.
///
/// # Errors
/// Returns a [`ParseError`] if `src` is not exactly one expression.
pub fn parse_expression(src: &str) -> Result<Exprs, ParseError> {
    run(src, || Grammar::new(src).exprs)
}

/// Parse a single, possibly annotated, pattern.
///
/// # Errors
/// Returns a [`ParseError`] if `src` is not exactly one pattern.
pub fn parse_pattern(src: &str) -> Result<Annotated<Pattern>, ParseError> {
    run(src, || pattern::pattern(&Grammar::new(src)))
}

/// Parse a constant term.
///
/// # Errors
/// Returns a [`ParseError`] if `src` is not exactly one constant.
pub fn parse_constant(src: &str) -> Result<Const, ParseError> {
    run(src, || literals::constant(src))
}

/// Grammar rules that [`parse_rule`] can run directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Module,
    Expression,
    Pattern,
    Constant,
    Literal,
}

impl Rule {
    /// Lowercase rule name as accepted by [`Rule::from_str`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::Expression => "expression",
            Self::Pattern => "pattern",
            Self::Constant => "constant",
            Self::Literal => "literal",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a rule name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown grammar rule `{0}`")]
pub struct UnknownRule(pub String);

impl FromStr for Rule {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "module" => Ok(Self::Module),
            "expression" => Ok(Self::Expression),
            "pattern" => Ok(Self::Pattern),
            "constant" => Ok(Self::Constant),
            "literal" => Ok(Self::Literal),
            other => Err(UnknownRule(other.to_string())),
        }
    }
}

/// Output of [`parse_rule`], one variant per [`Rule`].
#[derive(Debug, Clone, PartialEq)]
pub enum RuleOutput {
    Module(Annotated<Module>),
    Expression(Exprs),
    Pattern(Annotated<Pattern>),
    Constant(Const),
    Literal(Literal),
}

/// Run one grammar rule against `src`, reporting errors against `origin`.
///
/// Intended for debugging grammar issues; the production entry point is
/// [`parse`].
///
/// # Errors
/// Returns a [`ParseError`] whose origin is `origin`.
pub fn parse_rule(rule: Rule, origin: &str, src: &str) -> Result<RuleOutput, ParseError> {
    debug!("running rule {rule} on {origin}");
    let output = match rule {
        Rule::Module => parse(src).map(RuleOutput::Module),
        Rule::Expression => parse_expression(src).map(RuleOutput::Expression),
        Rule::Pattern => parse_pattern(src).map(RuleOutput::Pattern),
        Rule::Constant => parse_constant(src).map(RuleOutput::Constant),
        Rule::Literal => run(src, || literals::literal(src)).map(RuleOutput::Literal),
    };
    output.map_err(|err| err.with_origin(origin))
}
