//! Terminal values: atoms, variables, function names, literals and constants.
//!
//! Text-bearing literals store their decoded contents, so `'a\nb'` holds a
//! real newline rather than the two source characters.

use std::fmt;

/// A quoted atom such as `'foo'`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Atom(pub String);

impl Atom {
    /// The decoded atom text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Atom {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Atom {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.0)
    }
}

/// A variable name such as `X` or `_cor3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Var(pub String);

impl Var {
    /// The variable name as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Var {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A function identified by name and arity, written `'f'/2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunName {
    pub name: Atom,
    pub arity: u32,
}

impl FunName {
    #[must_use]
    pub fn new(name: impl Into<Atom>, arity: u32) -> Self {
        Self {
            name: name.into(),
            arity,
        }
    }
}

impl fmt::Display for FunName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.arity)
    }
}

/// Literal values shared by expressions, patterns and constants.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Atom(Atom),
    Char(char),
    String(String),
    /// The empty list `[]`.
    Nil,
}

/// A non-empty list, either nil-terminated or with an explicit tail.
#[derive(Debug, Clone, PartialEq)]
pub enum List<T> {
    /// `[e1, ..., en]`.
    Proper(Vec<T>),
    /// `[e1, ..., en | tail]`.
    Improper(Vec<T>, Box<T>),
}

impl<T> List<T> {
    /// Elements before the tail.
    #[must_use]
    pub fn elements(&self) -> &[T] {
        match self {
            Self::Proper(elems) | Self::Improper(elems, _) => elems,
        }
    }

    /// The explicit tail of an improper list.
    #[must_use]
    pub fn tail(&self) -> Option<&T> {
        match self {
            Self::Proper(_) => None,
            Self::Improper(_, tail) => Some(tail),
        }
    }

    /// True when the list ends in nil.
    #[must_use]
    pub fn is_proper(&self) -> bool {
        matches!(self, Self::Proper(_))
    }
}

/// Constant terms allowed in module attributes and annotations.
#[derive(Debug, Clone, PartialEq)]
pub enum Const {
    Lit(Literal),
    Tuple(Vec<Const>),
    List(List<Const>),
    /// `~{k => v, ...}~`.
    Map(Vec<(Const, Const)>),
}

impl From<Literal> for Const {
    fn from(lit: Literal) -> Self {
        Self::Lit(lit)
    }
}
