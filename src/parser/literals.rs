//! Terminal parsers: literals, atoms, variables, function names and constants.
//!
//! Tokens only carry a kind and a span, so these parsers slice the source to
//! recover the text and decode it. Escape sequences in atoms, strings and
//! character literals share one decoder.

use chumsky::prelude::*;
use chumsky::recursive::Recursive;

use super::SyntaxError;
use super::ast::{Atom, Const, FunName, Literal, Var};
use super::delimiter::{braces, list_of};
use crate::{Span, SyntaxKind};

const LITERAL_KINDS: [SyntaxKind; 5] = [
    SyntaxKind::T_INT,
    SyntaxKind::T_FLOAT,
    SyntaxKind::T_ATOM,
    SyntaxKind::T_CHAR,
    SyntaxKind::T_STRING,
];

fn slice<'a>(src: &'a str, span: &Span) -> &'a str {
    src.get(span.clone()).unwrap_or_default()
}

fn expected(span: Span, kinds: &[SyntaxKind], found: SyntaxKind) -> SyntaxError {
    Simple::expected_input_found(span, kinds.iter().copied().map(Some), Some(found))
}

/// Decode the escape sequences in the body of a quoted token.
///
/// Supports `\NNN` (one to three octal digits, at most `\377`), `\^C` control
/// characters for `C` in `@..=_`, and the named escapes
/// `\b \d \e \f \n \r \s \t \v \" \' \\`.
///
/// # Errors
/// Returns a description of the first malformed escape.
pub(crate) fn unescape(body: &str) -> Result<String, String> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(esc) = chars.next() else {
            return Err("unterminated escape sequence".to_string());
        };
        let decoded = match esc {
            '0'..='7' => {
                let mut value = esc.to_digit(8).unwrap_or_default();
                for _ in 0..2 {
                    let Some(digit) = chars.peek().and_then(|d| d.to_digit(8)) else {
                        break;
                    };
                    value = value * 8 + digit;
                    chars.next();
                }
                if value > 0o377 {
                    return Err(format!("octal escape \\{value:o} is out of range"));
                }
                char::from_u32(value)
            }
            '^' => match chars.next() {
                Some(ctrl @ '@'..='_') => char::from_u32(u32::from(ctrl) & 0x1f),
                Some(other) => return Err(format!("invalid control escape \\^{other}")),
                None => return Err("unterminated control escape".to_string()),
            },
            'b' => Some('\u{8}'),
            'd' => Some('\u{7f}'),
            'e' => Some('\u{1b}'),
            'f' => Some('\u{c}'),
            'n' => Some('\n'),
            'r' => Some('\r'),
            's' => Some(' '),
            't' => Some('\t'),
            'v' => Some('\u{b}'),
            '"' | '\'' | '\\' => Some(esc),
            other => return Err(format!("unknown escape sequence \\{other}")),
        };
        out.extend(decoded);
    }
    Ok(out)
}

fn quoted(text: &str, quote: char) -> Result<String, String> {
    text.strip_prefix(quote)
        .and_then(|rest| rest.strip_suffix(quote))
        .ok_or_else(|| format!("unterminated literal {text}"))
        .and_then(unescape)
}

fn character(text: &str) -> Result<char, String> {
    let decoded = text
        .strip_prefix('$')
        .ok_or_else(|| format!("malformed character literal {text}"))
        .and_then(unescape)?;
    let mut chars = decoded.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("malformed character literal {text}")),
    }
}

fn decode(src: &str, span: &Span, kind: SyntaxKind) -> Option<Result<Literal, String>> {
    let text = slice(src, span);
    let decoded = match kind {
        SyntaxKind::T_INT => text
            .parse::<i64>()
            .map(Literal::Int)
            .map_err(|_| format!("integer literal {text} is out of range")),
        SyntaxKind::T_FLOAT => text
            .parse::<f64>()
            .map(Literal::Float)
            .map_err(|e| format!("invalid float literal {text}: {e}")),
        SyntaxKind::T_ATOM => quoted(text, '\'').map(|s| Literal::Atom(Atom(s))),
        SyntaxKind::T_STRING => quoted(text, '"').map(Literal::String),
        SyntaxKind::T_CHAR => character(text).map(Literal::Char),
        _ => return None,
    };
    Some(decoded)
}

fn token_literal(src: &str, span: Span, kind: SyntaxKind) -> Result<Literal, SyntaxError> {
    match decode(src, &span, kind) {
        Some(decoded) => decoded.map_err(|msg| Simple::custom(span, msg)),
        None => Err(expected(span, &LITERAL_KINDS, kind)),
    }
}

/// The first literal token that cannot be decoded, with the reason.
///
/// Checked before parsing so the reason is reported even when the grammar
/// would otherwise fold it into an "expected ..." error.
pub(crate) fn first_invalid_literal(
    src: &str,
    tokens: &[(SyntaxKind, Span)],
) -> Option<(Span, String)> {
    tokens
        .iter()
        .find_map(|(kind, span)| match decode(src, span, *kind) {
            Some(Err(msg)) => Some((span.clone(), msg)),
            _ => None,
        })
}

/// Any literal: integer, float, atom, character, string or `[]`.
pub(crate) fn literal(src: &str) -> impl Parser<SyntaxKind, Literal, Error = SyntaxError> + Clone + '_ {
    let token = filter_map(move |span: Span, kind| token_literal(src, span, kind));
    let nil = just(SyntaxKind::T_LBRACKET)
        .then(just(SyntaxKind::T_RBRACKET))
        .to(Literal::Nil);
    token.or(nil).labelled("literal")
}

/// A quoted atom.
pub(crate) fn atom(src: &str) -> impl Parser<SyntaxKind, Atom, Error = SyntaxError> + Clone + '_ {
    filter_map(move |span: Span, kind| match kind {
        SyntaxKind::T_ATOM => quoted(slice(src, &span), '\'')
            .map(Atom)
            .map_err(|msg| Simple::custom(span, msg)),
        _ => Err(expected(span, &[SyntaxKind::T_ATOM], kind)),
    })
    .labelled("atom")
}

/// A variable name.
pub(crate) fn variable(src: &str) -> impl Parser<SyntaxKind, Var, Error = SyntaxError> + Clone + '_ {
    filter_map(move |span: Span, kind| match kind {
        SyntaxKind::T_VAR => Ok(Var(slice(src, &span).to_string())),
        _ => Err(expected(span, &[SyntaxKind::T_VAR], kind)),
    })
    .labelled("variable")
}

fn arity(src: &str) -> impl Parser<SyntaxKind, u32, Error = SyntaxError> + Clone + '_ {
    filter_map(move |span: Span, kind| {
        let text = slice(src, &span);
        match kind {
            SyntaxKind::T_INT if text.starts_with(|c: char| c.is_ascii_digit()) => text
                .parse::<u32>()
                .map_err(|_| Simple::custom(span, format!("arity {text} is out of range"))),
            _ => Err(expected(span, &[SyntaxKind::T_INT], kind)),
        }
    })
    .labelled("arity")
}

/// `'name'/arity`.
pub(crate) fn fun_name(src: &str) -> impl Parser<SyntaxKind, FunName, Error = SyntaxError> + Clone + '_ {
    atom(src)
        .then_ignore(just(SyntaxKind::T_SLASH))
        .then(arity(src))
        .map(|(name, arity)| FunName { name, arity })
}

/// Constant terms: literals, tuples, lists and maps of constants.
pub(crate) fn constant<'a>(
    src: &'a str,
) -> impl Parser<SyntaxKind, Const, Error = SyntaxError> + Clone + 'a {
    recursive(move |constant: Recursive<'a, SyntaxKind, Const, SyntaxError>| {
        let tuple = braces(constant.clone()).map(Const::Tuple);
        let list = list_of(constant.clone()).map(Const::List);
        let map = constant
            .clone()
            .then_ignore(just(SyntaxKind::T_FAT_ARROW))
            .then(constant)
            .separated_by(just(SyntaxKind::T_COMMA))
            .delimited_by(
                just(SyntaxKind::T_MAP_OPEN),
                just(SyntaxKind::T_MAP_CLOSE),
            )
            .map(Const::Map);
        choice((literal(src).map(Const::Lit), tuple, list, map))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("plain", "plain")]
    #[case(r"a\nb", "a\nb")]
    #[case(r"\101\102", "AB")]
    #[case(r"\0", "\0")]
    #[case(r"\1234", "S4")]
    #[case(r"\^G", "\u{7}")]
    #[case(r"\^@", "\0")]
    #[case(r"\s\t\v", " \t\u{b}")]
    #[case(r"\b\d\e\f\r", "\u{8}\u{7f}\u{1b}\u{c}\r")]
    #[case(r#"\"\'\\"#, "\"'\\")]
    fn decodes_escapes(#[case] body: &str, #[case] expected: &str) {
        assert_eq!(unescape(body), Ok(expected.to_string()));
    }

    #[rstest]
    #[case(r"\x")]
    #[case(r"\^a")]
    #[case("\\")]
    fn rejects_bad_escapes(#[case] body: &str) {
        assert!(unescape(body).is_err());
    }

    #[rstest]
    fn rejects_octal_escape_above_byte_range() {
        let err = unescape(r"\777").unwrap_or_else(|e| e);
        assert!(err.contains("out of range"), "got {err}");
    }

    #[rstest]
    #[case("$a", 'a')]
    #[case(r"$\n", '\n')]
    #[case(r"$\s", ' ')]
    #[case("$é", 'é')]
    fn decodes_characters(#[case] text: &str, #[case] expected: char) {
        assert_eq!(character(text), Ok(expected));
    }

    #[rstest]
    fn finds_first_undecodable_literal() {
        let src = "{1, 99999999999999999999, '\\777'}";
        let tokens = crate::tokenize_without_trivia(src);
        let (span, msg) = first_invalid_literal(src, &tokens)
            .unwrap_or_else(|| panic!("overflow should be reported"));
        assert_eq!(span, 4..24);
        assert!(msg.contains("out of range"), "got {msg}");
        let valid = "{1, 'a'}";
        let tokens = crate::tokenize_without_trivia(valid);
        assert_eq!(first_invalid_literal(valid, &tokens), None);
    }
}
