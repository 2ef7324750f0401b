//! Syntax kinds for Core Erlang source.
//!
//! This module defines the `SyntaxKind` enum covering every token and
//! reserved word the lexer can produce. The grammar combinators match on these
//! kinds directly, and error messages render them through [`Display`] so that
//! diagnostics read `'->'` or `'end'` rather than the enum variant names.
//!
//! [`Display`]: std::fmt::Display

use std::fmt;

/// Every possible token in Core Erlang source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[expect(non_camel_case_types, reason = "token kinds use an upper-case prefix scheme")]
pub enum SyntaxKind {
    // Trivia
    T_COMMENT,
    T_WHITESPACE,
    // Terminals
    T_ATOM,
    T_VAR,
    T_INT,
    T_FLOAT,
    T_CHAR,
    T_STRING,
    // Punctuation
    T_LPAREN,
    T_RPAREN,
    T_LBRACKET,
    T_RBRACKET,
    T_LBRACE,
    T_RBRACE,
    T_LT,
    T_GT,
    T_COMMA,
    T_PIPE,
    T_COLON,
    T_SLASH,
    T_EQ,
    T_HASH,
    T_ARROW,
    T_ANNOTATE,
    T_FAT_ARROW,
    T_COLON_EQ,
    T_MAP_OPEN,
    T_MAP_CLOSE,
    // Reserved words
    K_AFTER,
    K_APPLY,
    K_ATTRIBUTES,
    K_CALL,
    K_CASE,
    K_CATCH,
    K_DO,
    K_END,
    K_FUN,
    K_IN,
    K_LET,
    K_LETREC,
    K_MODULE,
    K_OF,
    K_PRIMOP,
    K_RECEIVE,
    K_TRY,
    K_WHEN,
    // Unrecognised input
    N_ERROR,
}

impl SyntaxKind {
    /// True for whitespace and comments.
    #[must_use]
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::T_WHITESPACE | Self::T_COMMENT)
    }

    /// True for reserved words such as `module` or `letrec`.
    #[must_use]
    pub fn is_keyword(self) -> bool {
        (Self::K_AFTER..=Self::K_WHEN).contains(&self)
    }

    /// Human-readable description used in diagnostics.
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Self::T_COMMENT => "comment",
            Self::T_WHITESPACE => "whitespace",
            Self::T_ATOM => "atom",
            Self::T_VAR => "variable",
            Self::T_INT => "integer",
            Self::T_FLOAT => "float",
            Self::T_CHAR => "character",
            Self::T_STRING => "string",
            Self::T_LPAREN => "'('",
            Self::T_RPAREN => "')'",
            Self::T_LBRACKET => "'['",
            Self::T_RBRACKET => "']'",
            Self::T_LBRACE => "'{'",
            Self::T_RBRACE => "'}'",
            Self::T_LT => "'<'",
            Self::T_GT => "'>'",
            Self::T_COMMA => "','",
            Self::T_PIPE => "'|'",
            Self::T_COLON => "':'",
            Self::T_SLASH => "'/'",
            Self::T_EQ => "'='",
            Self::T_HASH => "'#'",
            Self::T_ARROW => "'->'",
            Self::T_ANNOTATE => "'-|'",
            Self::T_FAT_ARROW => "'=>'",
            Self::T_COLON_EQ => "':='",
            Self::T_MAP_OPEN => "'~{'",
            Self::T_MAP_CLOSE => "'}~'",
            Self::K_AFTER => "'after'",
            Self::K_APPLY => "'apply'",
            Self::K_ATTRIBUTES => "'attributes'",
            Self::K_CALL => "'call'",
            Self::K_CASE => "'case'",
            Self::K_CATCH => "'catch'",
            Self::K_DO => "'do'",
            Self::K_END => "'end'",
            Self::K_FUN => "'fun'",
            Self::K_IN => "'in'",
            Self::K_LET => "'let'",
            Self::K_LETREC => "'letrec'",
            Self::K_MODULE => "'module'",
            Self::K_OF => "'of'",
            Self::K_PRIMOP => "'primop'",
            Self::K_RECEIVE => "'receive'",
            Self::K_TRY => "'try'",
            Self::K_WHEN => "'when'",
            Self::N_ERROR => "unrecognised input",
        }
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}
