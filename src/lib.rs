//! Library crate for cerl.
//!
//! Parses the textual Core Erlang intermediate representation into an owned
//! abstract syntax tree. [`parse`] is the main entry point; the tokeniser and
//! sub-grammar entry points are exposed for tooling and debugging.

#![forbid(unsafe_code)]

pub mod language;
pub mod parser;
pub mod tokenizer;

// Only expose test utilities to tests and opt-in consumers.
#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_util;

pub use language::SyntaxKind;
pub use parser::{
    DEFAULT_ORIGIN, MAX_DEPTH, ParseError, Rule, RuleOutput, UnknownRule, ast, parse,
    parse_constant, parse_expression, parse_pattern, parse_rule,
};
pub use tokenizer::{Span, tokenize_with_trivia, tokenize_without_trivia};
