//! Lexical analysis for Core Erlang source.
//!
//! This module exposes `tokenize_with_trivia` and `tokenize_without_trivia`
//! functions which convert raw source text into a sequence of
//! `(SyntaxKind, Span)` pairs. It uses the `logos` crate to recognise tokens;
//! literal values are decoded later by the grammar, which slices the source
//! with each token's span.

use log::{trace, warn};
use logos::Logos;
use phf::phf_map;

use crate::SyntaxKind;

/// Byte range for a token within the source.
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,
    #[regex(r"%[^\n]*")]
    Comment,
    #[regex(r"[A-Z_][A-Za-z0-9@_]*")]
    Var,
    #[regex(r"[a-z][A-Za-z0-9@_]*")]
    Word,
    #[regex(r#"'([^'\\\n\r]|\\([0-7][0-7]?[0-7]?|\^[@-_]|[bdefnrstv"'\\]))*'"#)]
    Atom,
    #[regex(r#""([^"\\\n\r]|\\([0-7][0-7]?[0-7]?|\^[@-_]|[bdefnrstv"'\\]))*""#)]
    String,
    #[regex(r#"\$([^\\\n\r ]|\\([0-7][0-7]?[0-7]?|\^[@-_]|[bdefnrstv"'\\]))"#)]
    Char,
    #[regex(r"[+-]?[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?")]
    Float,
    #[regex(r"[+-]?[0-9]+")]
    Int,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token(",")]
    Comma,
    #[token("|")]
    Pipe,
    #[token(":")]
    Colon,
    #[token("/")]
    Slash,
    #[token("=")]
    Eq,
    #[token("#")]
    Hash,
    #[token("->")]
    Arrow,
    #[token("-|")]
    Annotate,
    #[token("=>")]
    FatArrow,
    #[token(":=")]
    ColonEq,
    #[token("~{")]
    MapOpen,
    #[token("}~")]
    MapClose,
}

/// Maps bare lowercase words to their reserved-word `SyntaxKind`.
///
/// Core Erlang has no unquoted atoms, so a lowercase word that is not listed
/// here is unrecognised input.
static KEYWORDS: phf::Map<&'static str, SyntaxKind> = phf_map! {
    "after" => SyntaxKind::K_AFTER,
    "apply" => SyntaxKind::K_APPLY,
    "attributes" => SyntaxKind::K_ATTRIBUTES,
    "call" => SyntaxKind::K_CALL,
    "case" => SyntaxKind::K_CASE,
    "catch" => SyntaxKind::K_CATCH,
    "do" => SyntaxKind::K_DO,
    "end" => SyntaxKind::K_END,
    "fun" => SyntaxKind::K_FUN,
    "in" => SyntaxKind::K_IN,
    "let" => SyntaxKind::K_LET,
    "letrec" => SyntaxKind::K_LETREC,
    "module" => SyntaxKind::K_MODULE,
    "of" => SyntaxKind::K_OF,
    "primop" => SyntaxKind::K_PRIMOP,
    "receive" => SyntaxKind::K_RECEIVE,
    "try" => SyntaxKind::K_TRY,
    "when" => SyntaxKind::K_WHEN,
};

fn keyword_kind(word: &str) -> Option<SyntaxKind> {
    KEYWORDS.get(word).copied()
}

#[must_use]
fn tokenize_impl(src: &str) -> Vec<(SyntaxKind, Span)> {
    let mut lexer = Token::lexer(src);
    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "rough capacity estimate"
    )]
    let estimated_tokens = src.len() / 4; // roughly four chars per token
    let mut out = Vec::with_capacity(estimated_tokens);
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let Ok(token) = result else {
            warn!("unrecognised input at {span:?}");
            out.push((SyntaxKind::N_ERROR, span));
            continue;
        };
        let kind = match token {
            Token::Whitespace => SyntaxKind::T_WHITESPACE,
            Token::Comment => SyntaxKind::T_COMMENT,
            Token::Var => SyntaxKind::T_VAR,
            Token::Word => {
                let word = lexer.slice();
                keyword_kind(word).unwrap_or_else(|| {
                    warn!("bare word `{word}` at {span:?} is not a reserved word");
                    SyntaxKind::N_ERROR
                })
            }
            Token::Atom => SyntaxKind::T_ATOM,
            Token::String => SyntaxKind::T_STRING,
            Token::Char => SyntaxKind::T_CHAR,
            Token::Float => SyntaxKind::T_FLOAT,
            Token::Int => SyntaxKind::T_INT,
            Token::LParen => SyntaxKind::T_LPAREN,
            Token::RParen => SyntaxKind::T_RPAREN,
            Token::LBracket => SyntaxKind::T_LBRACKET,
            Token::RBracket => SyntaxKind::T_RBRACKET,
            Token::LBrace => SyntaxKind::T_LBRACE,
            Token::RBrace => SyntaxKind::T_RBRACE,
            Token::Lt => SyntaxKind::T_LT,
            Token::Gt => SyntaxKind::T_GT,
            Token::Comma => SyntaxKind::T_COMMA,
            Token::Pipe => SyntaxKind::T_PIPE,
            Token::Colon => SyntaxKind::T_COLON,
            Token::Slash => SyntaxKind::T_SLASH,
            Token::Eq => SyntaxKind::T_EQ,
            Token::Hash => SyntaxKind::T_HASH,
            Token::Arrow => SyntaxKind::T_ARROW,
            Token::Annotate => SyntaxKind::T_ANNOTATE,
            Token::FatArrow => SyntaxKind::T_FAT_ARROW,
            Token::ColonEq => SyntaxKind::T_COLON_EQ,
            Token::MapOpen => SyntaxKind::T_MAP_OPEN,
            Token::MapClose => SyntaxKind::T_MAP_CLOSE,
        };
        out.push((kind, span));
    }
    trace!("tokenised {} bytes into {} tokens", src.len(), out.len());
    out
}

/// Tokenise the source, excluding whitespace and comments.
///
/// Returns only significant tokens for use by the grammar.
///
/// # Examples
///
/// ```rust
/// use cerl::{tokenize_without_trivia, SyntaxKind};
///
/// let tokens = tokenize_without_trivia("module 'm' [] % comment\n");
/// assert!(!tokens.iter().any(|(k, _)| k.is_trivia()));
/// assert_eq!(tokens[0].0, SyntaxKind::K_MODULE);
/// ```
#[must_use]
pub fn tokenize_without_trivia(src: &str) -> Vec<(SyntaxKind, Span)> {
    tokenize_impl(src)
        .into_iter()
        .filter(|(k, _)| !k.is_trivia())
        .collect()
}

/// Tokenise the provided Core Erlang source.
///
/// This variant retains whitespace and comment tokens so the spans cover the
/// whole input.
///
/// # Examples
///
/// ```rust
/// use cerl::{tokenize_with_trivia, SyntaxKind};
///
/// let tokens = tokenize_with_trivia("apply F ()");
/// assert_eq!(tokens.len(), 6);
/// assert_eq!(tokens[0].0, SyntaxKind::K_APPLY);
/// ```
#[must_use]
pub fn tokenize_with_trivia(src: &str) -> Vec<(SyntaxKind, Span)> {
    tokenize_impl(src)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{kinds, tokens_with_text};
    use rstest::rstest;

    #[rstest]
    #[case("42", SyntaxKind::T_INT)]
    #[case("-42", SyntaxKind::T_INT)]
    #[case("+7", SyntaxKind::T_INT)]
    #[case("3.5", SyntaxKind::T_FLOAT)]
    #[case("-3.5e-2", SyntaxKind::T_FLOAT)]
    #[case("'foo'", SyntaxKind::T_ATOM)]
    #[case(r"'it\'s'", SyntaxKind::T_ATOM)]
    #[case(r"'\101\^G'", SyntaxKind::T_ATOM)]
    #[case("\"ab\"", SyntaxKind::T_STRING)]
    #[case("$a", SyntaxKind::T_CHAR)]
    #[case(r"$\n", SyntaxKind::T_CHAR)]
    #[case("X", SyntaxKind::T_VAR)]
    #[case("_cor0", SyntaxKind::T_VAR)]
    #[case("Name@Host", SyntaxKind::T_VAR)]
    #[case("-|", SyntaxKind::T_ANNOTATE)]
    #[case("~{", SyntaxKind::T_MAP_OPEN)]
    #[case("}~", SyntaxKind::T_MAP_CLOSE)]
    #[case(":=", SyntaxKind::T_COLON_EQ)]
    #[case("letrec", SyntaxKind::K_LETREC)]
    fn single_token(#[case] src: &str, #[case] expected: SyntaxKind) {
        assert_eq!(kinds(src), vec![expected]);
    }

    #[rstest]
    fn float_wins_over_integer_then_dot() {
        let tokens = tokenize_without_trivia("1.25");
        assert_eq!(tokens, vec![(SyntaxKind::T_FLOAT, 0..4)]);
    }

    #[rstest]
    fn comments_run_to_end_of_line() {
        let tokens = tokenize_with_trivia("% 'not an atom'\n'a'");
        let ks: Vec<_> = tokens.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            ks,
            vec![
                SyntaxKind::T_COMMENT,
                SyntaxKind::T_WHITESPACE,
                SyntaxKind::T_ATOM
            ]
        );
    }

    #[rstest]
    #[case("foo")]
    #[case("?")]
    #[case("'unterminated")]
    #[case("$ ")]
    fn unrecognised_input_produces_error(#[case] src: &str) {
        assert!(kinds(src).contains(&SyntaxKind::N_ERROR));
    }

    #[rstest]
    fn arrow_and_annotation_do_not_merge_with_numbers() {
        assert_eq!(
            kinds("->-|-1"),
            vec![
                SyntaxKind::T_ARROW,
                SyntaxKind::T_ANNOTATE,
                SyntaxKind::T_INT
            ]
        );
    }

    #[rstest]
    fn keywords_and_atoms_keep_their_text() {
        assert_eq!(
            tokens_with_text("case 'case' of"),
            vec![
                (SyntaxKind::K_CASE, "case".to_string()),
                (SyntaxKind::T_ATOM, "'case'".to_string()),
                (SyntaxKind::K_OF, "of".to_string()),
            ]
        );
    }
}
