//! The error type returned by every parse entry point.
//!
//! Grammar rules fail with `chumsky`'s [`Simple`] errors. When a parse fails,
//! the entry point keeps the error that reached furthest into the input and
//! converts it into a [`ParseError`] with a line and column and a readable
//! description of what was expected.

use chumsky::error::{Simple, SimpleReason};
use thiserror::Error;

use crate::{Span, SyntaxKind};

/// Origin name used when the caller does not supply one.
pub const DEFAULT_ORIGIN: &str = "<input>";

/// A failed parse.
///
/// Rendered as `origin:line:column: message`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{origin}:{line}:{column}: {message}")]
pub struct ParseError {
    origin: String,
    span: Span,
    line: usize,
    column: usize,
    message: String,
}

impl ParseError {
    /// Build an error at `span` within `src`.
    pub(crate) fn new(src: &str, span: Span, message: impl Into<String>) -> Self {
        let (line, column) = line_column(src, span.start);
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            span,
            line,
            column,
            message: message.into(),
        }
    }

    /// Convert the furthest-reaching grammar error into a `ParseError`.
    ///
    /// `errors` is never empty when `chumsky` reports a failure; an empty list
    /// is reported at the end of input.
    pub(crate) fn from_syntax_errors(src: &str, errors: Vec<Simple<SyntaxKind>>) -> Self {
        let furthest = errors.into_iter().max_by_key(|e| e.span().start);
        match furthest {
            Some(err) => Self::new(src, err.span(), describe(&err)),
            None => Self::new(src, src.len()..src.len(), "invalid input"),
        }
    }

    /// Attach the name of the input source, e.g. a file path.
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Name of the input source.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Byte range of the offending token.
    #[must_use]
    pub fn span(&self) -> Span {
        self.span.clone()
    }

    /// Byte offset where the error starts.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.span.start
    }

    /// 1-based line number.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column, counted in characters.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Description of what was expected and what was found.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

fn line_column(src: &str, offset: usize) -> (usize, usize) {
    let before = src.get(..offset).unwrap_or(src);
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before.get(line_start..).map_or(0, |s| s.chars().count()) + 1;
    (line, column)
}

fn render(kind: Option<&SyntaxKind>) -> String {
    kind.map_or_else(|| "end of input".to_string(), ToString::to_string)
}

fn describe(err: &Simple<SyntaxKind>) -> String {
    match err.reason() {
        SimpleReason::Custom(msg) => return msg.clone(),
        SimpleReason::Unclosed { delimiter, .. } => {
            return format!("unclosed delimiter {delimiter}");
        }
        SimpleReason::Unexpected => {}
    }
    let found = render(err.found());
    // A label names one rule among the merged alternatives; the tokens the
    // other alternatives expected are still listed.
    let mut expected: Vec<String> = err
        .expected()
        .map(|e| render(e.as_ref()))
        .chain(err.label().map(ToString::to_string))
        .collect();
    expected.sort();
    expected.dedup();
    match expected.as_slice() {
        [] => format!("unexpected {found}"),
        [one] => format!("expected {one}, found {found}"),
        many => format!("expected one of {}, found {found}", many.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chumsky::error::Error as _;
    use rstest::rstest;

    #[rstest]
    #[case("abc", 0, (1, 1))]
    #[case("abc", 2, (1, 3))]
    #[case("a\nbc", 3, (2, 2))]
    #[case("a\n\n", 3, (3, 1))]
    fn computes_line_and_column(
        #[case] src: &str,
        #[case] offset: usize,
        #[case] expected: (usize, usize),
    ) {
        assert_eq!(line_column(src, offset), expected);
    }

    #[rstest]
    fn describes_expected_tokens() {
        let err = Simple::expected_input_found(
            4..5,
            [Some(SyntaxKind::K_END), Some(SyntaxKind::T_ATOM)],
            Some(SyntaxKind::T_COMMA),
        );
        let parsed = ParseError::from_syntax_errors("    ,", vec![err]);
        assert_eq!(parsed.message(), "expected one of 'end', atom, found ','");
        assert_eq!(
            parsed.to_string(),
            "<input>:1:5: expected one of 'end', atom, found ','"
        );
    }

    #[rstest]
    fn label_is_listed_with_expected_tokens() {
        let err = Simple::expected_input_found(28..28, [Some(SyntaxKind::K_END)], None)
            .with_label("atom");
        let parsed = ParseError::from_syntax_errors(&" ".repeat(28), vec![err]);
        assert_eq!(
            parsed.message(),
            "expected one of 'end', atom, found end of input"
        );
    }

    #[rstest]
    fn keeps_the_furthest_error() {
        let near = Simple::custom(0..1, "near");
        let far = Simple::custom(3..4, "far");
        let parsed = ParseError::from_syntax_errors("abcd", vec![near, far]);
        assert_eq!(parsed.message(), "far");
        assert_eq!(parsed.offset(), 3);
    }

    #[rstest]
    fn origin_is_rendered() {
        let err = ParseError::new("x", 0..1, "bad").with_origin("m.core");
        assert_eq!(err.to_string(), "m.core:1:1: bad");
    }
}
