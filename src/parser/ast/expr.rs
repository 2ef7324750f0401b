//! Expression AST for Core Erlang.
//!
//! Expressions nest through [`Exprs`], which is either a single annotated
//! expression or a `<e1, ..., en>` value list. Every position that the grammar
//! reads with the `expression` rule holds an [`Exprs`].

use super::{Annotated, Atom, FunName, List, Literal, Pats, Var};

/// Either one expression or a bracketed multi-value sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Exprs {
    /// A single (possibly annotated) expression.
    One(Annotated<Expr>),
    /// `<e1, ..., en>`, which may be empty.
    Many(Annotated<Vec<Annotated<Expr>>>),
}

impl Exprs {
    /// Number of values the sequence produces.
    #[must_use]
    pub fn arity(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(values) => values.node.len(),
        }
    }

    /// The single expression, if this is not a value list.
    #[must_use]
    pub fn as_single(&self) -> Option<&Expr> {
        match self {
            Self::One(expr) => Some(&expr.node),
            Self::Many(_) => None,
        }
    }
}

impl From<Expr> for Exprs {
    fn from(expr: Expr) -> Self {
        Self::One(Annotated::bare(expr))
    }
}

/// `fun (V1, ..., Vn) -> Body`.
#[derive(Debug, Clone, PartialEq)]
pub struct Lambda {
    pub params: Vec<Annotated<Var>>,
    pub body: Box<Exprs>,
}

/// A named function definition at module level or inside `letrec`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunDef {
    pub name: Annotated<FunName>,
    pub body: Annotated<Lambda>,
}

/// One clause of a `case` or `receive`.
#[derive(Debug, Clone, PartialEq)]
pub struct Alt {
    pub pats: Pats,
    pub guard: Option<Exprs>,
    pub body: Exprs,
}

/// The `after Timeout -> Body` part of a `receive`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeOut {
    pub after: Box<Exprs>,
    pub body: Box<Exprs>,
}

/// One `#<value>(size, unit, type, flags)` segment of a binary.
#[derive(Debug, Clone, PartialEq)]
pub struct BitString<T> {
    pub value: T,
    pub args: Vec<Exprs>,
}

/// The three map expression forms sharing the `~{` opener.
#[derive(Debug, Clone, PartialEq)]
pub enum MapExpr {
    /// `~{k => v, ...}~` builds a fresh map.
    Build(Vec<(Exprs, Exprs)>),
    /// `~{k => v, ... | M}~` inserts or overwrites keys in `M`.
    Extend {
        pairs: Vec<(Exprs, Exprs)>,
        map: Box<Exprs>,
    },
    /// `~{k := v, ... | M}~` updates keys that must already exist in `M`.
    Update {
        pairs: Vec<(Exprs, Exprs)>,
        map: Box<Exprs>,
    },
}

impl MapExpr {
    /// Key/value pairs regardless of form.
    #[must_use]
    pub fn pairs(&self) -> &[(Exprs, Exprs)] {
        match self {
            Self::Build(pairs) | Self::Extend { pairs, .. } | Self::Update { pairs, .. } => pairs,
        }
    }
}

/// Parsed expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Var(Var),
    Lit(Literal),
    /// Local function reference `'f'/N`.
    Fun(FunName),
    /// External function reference `fun 'm':'f'/N`.
    ExtFun {
        module: Atom,
        fun: FunName,
    },
    Lambda(Lambda),
    LetRec {
        defs: Vec<FunDef>,
        body: Box<Exprs>,
    },
    Let {
        vars: Vec<Annotated<Var>>,
        bound: Box<Exprs>,
        body: Box<Exprs>,
    },
    App {
        fun: Box<Exprs>,
        args: Vec<Exprs>,
    },
    ModCall {
        module: Box<Exprs>,
        fun: Box<Exprs>,
        args: Vec<Exprs>,
    },
    PrimOp {
        name: Atom,
        args: Vec<Exprs>,
    },
    Case {
        scrutinee: Box<Exprs>,
        alts: Vec<Annotated<Alt>>,
    },
    Receive {
        alts: Vec<Annotated<Alt>>,
        timeout: TimeOut,
    },
    Try {
        body: Box<Exprs>,
        of_vars: Vec<Annotated<Var>>,
        of_body: Box<Exprs>,
        catch_vars: Vec<Annotated<Var>>,
        catch_body: Box<Exprs>,
    },
    Catch(Box<Exprs>),
    /// `do E1 E2`: evaluates `E1`, yields `E2`.
    Seq(Box<Exprs>, Box<Exprs>),
    Tuple(Vec<Exprs>),
    List(List<Exprs>),
    Binary(Vec<BitString<Exprs>>),
    Map(MapExpr),
}

impl From<Literal> for Expr {
    fn from(lit: Literal) -> Self {
        Self::Lit(lit)
    }
}
