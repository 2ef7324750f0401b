//! Assertion helpers for parser results.

use crate::ParseError;

/// Unwrap a successful parse, panicking with the rendered error otherwise.
///
/// # Panics
/// Panics if `result` is an error.
#[track_caller]
pub fn parse_ok<T>(result: Result<T, ParseError>) -> T {
    result.unwrap_or_else(|err| panic!("unexpected parse error: {err}"))
}

/// Assert that parsing failed at `line`:`column` with a message containing
/// `fragment`, and return the error for further checks.
///
/// # Examples
///
/// ```rust,no_run
/// # #[cfg(feature = "test-support")]
/// # {
/// use cerl::{parse_expression, test_util::assert_parse_error};
/// assert_parse_error(parse_expression("{1,"), 1, 4, "expected");
/// # }
/// ```
///
/// # Panics
/// Panics if `result` is `Ok` or the error does not match.
#[track_caller]
pub fn assert_parse_error<T: std::fmt::Debug>(
    result: Result<T, ParseError>,
    line: usize,
    column: usize,
    fragment: &str,
) -> ParseError {
    let err = match result {
        Ok(value) => panic!("expected a parse error, got {value:?}"),
        Err(err) => err,
    };
    assert_eq!(
        (err.line(), err.column()),
        (line, column),
        "unexpected position for {err}"
    );
    assert!(
        err.message().contains(fragment),
        "expected message containing {fragment:?}, got {err}"
    );
    err
}
