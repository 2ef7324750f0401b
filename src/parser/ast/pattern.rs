//! Pattern AST nodes.
//!
//! Patterns appear in `case` and `receive` clauses. They mirror the literal,
//! tuple, list, binary and map shapes of expressions, add aliases, and never
//! contain general expressions except for binary segment sizes.

use super::{Annotated, BitString, List, Literal, Var};

/// Key of a map pattern; only variables and literals are allowed.
#[derive(Debug, Clone, PartialEq)]
pub enum MapKey {
    Var(Var),
    Lit(Literal),
}

/// `V = P`: binds `V` to the value matched by `P`.
#[derive(Debug, Clone, PartialEq)]
pub struct Alias {
    pub var: Annotated<Var>,
    pub pattern: Box<Annotated<Pattern>>,
}

/// Pattern nodes used in clause heads.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    Var(Var),
    Lit(Literal),
    Tuple(Vec<Annotated<Pattern>>),
    List(List<Annotated<Pattern>>),
    Binary(Vec<BitString<Annotated<Pattern>>>),
    /// `~{k := p, ...}~`; matches maps holding at least these keys.
    Map(Vec<(MapKey, Annotated<Pattern>)>),
    Alias(Alias),
}

impl Pattern {
    /// Variables bound by this pattern, in left-to-right order.
    #[must_use]
    pub fn bound_vars(&self) -> Vec<&Var> {
        let mut out = Vec::new();
        self.collect_vars(&mut out);
        out
    }

    fn collect_vars<'a>(&'a self, out: &mut Vec<&'a Var>) {
        match self {
            Self::Var(v) => out.push(v),
            Self::Lit(_) => {}
            Self::Tuple(items) => items.iter().for_each(|p| p.node.collect_vars(out)),
            Self::List(list) => {
                list.elements().iter().for_each(|p| p.node.collect_vars(out));
                if let Some(tail) = list.tail() {
                    tail.node.collect_vars(out);
                }
            }
            Self::Binary(segments) => segments
                .iter()
                .for_each(|seg| seg.value.node.collect_vars(out)),
            Self::Map(pairs) => pairs.iter().for_each(|(_, p)| p.node.collect_vars(out)),
            Self::Alias(alias) => {
                out.push(&alias.var.node);
                alias.pattern.node.collect_vars(out);
            }
        }
    }
}

/// Clause head: one pattern or `<p1, ..., pn>`.
#[derive(Debug, Clone, PartialEq)]
pub enum Pats {
    One(Annotated<Pattern>),
    Many(Vec<Annotated<Pattern>>),
}

impl Pats {
    /// Patterns in order, treating a single pattern as a one-element list.
    #[must_use]
    pub fn as_slice(&self) -> &[Annotated<Pattern>] {
        match self {
            Self::One(p) => std::slice::from_ref(p),
            Self::Many(ps) => ps,
        }
    }
}
