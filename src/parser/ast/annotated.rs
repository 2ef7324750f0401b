//! Annotation wrapper shared by every annotatable node.
//!
//! Core Erlang lets almost any node be written as `( node -| [c1, ..., cn] )`.
//! [`Annotated`] records the node together with that constant list and keeps
//! the bare form distinguishable from an explicitly empty annotation.

use super::Const;

/// A syntax node with an optional list of constant annotations.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotated<T> {
    /// The wrapped node.
    pub node: T,
    /// `None` when the node was written bare, `Some` for `( node -| [...] )`.
    pub annotation: Option<Vec<Const>>,
}

impl<T> Annotated<T> {
    /// Wrap a node written without annotation syntax.
    #[must_use]
    pub fn bare(node: T) -> Self {
        Self {
            node,
            annotation: None,
        }
    }

    /// Wrap a node written as `( node -| [annotation...] )`.
    #[must_use]
    pub fn with_annotation(node: T, annotation: Vec<Const>) -> Self {
        Self {
            node,
            annotation: Some(annotation),
        }
    }

    /// The annotation constants; empty for bare nodes.
    #[must_use]
    pub fn annotation(&self) -> &[Const] {
        self.annotation.as_deref().unwrap_or_default()
    }

    /// True when the source used the parenthesised annotation form.
    #[must_use]
    pub fn is_annotated(&self) -> bool {
        self.annotation.is_some()
    }

    /// Discard the annotation and return the node.
    #[must_use]
    pub fn into_node(self) -> T {
        self.node
    }

    /// Transform the node while keeping the annotation.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Annotated<U> {
        Annotated {
            node: f(self.node),
            annotation: self.annotation,
        }
    }
}

impl<T> From<T> for Annotated<T> {
    fn from(node: T) -> Self {
        Self::bare(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::{Atom, Literal};
    use rstest::rstest;

    #[rstest]
    fn bare_and_empty_annotation_differ_only_in_syntax() {
        let bare = Annotated::bare(Literal::Int(1));
        let empty = Annotated::with_annotation(Literal::Int(1), Vec::new());
        assert_eq!(bare.annotation(), empty.annotation());
        assert_eq!(bare.node, empty.node);
        assert!(!bare.is_annotated());
        assert!(empty.is_annotated());
        assert_ne!(bare, empty);
    }

    #[rstest]
    fn map_keeps_annotation() {
        let ann = vec![Const::Lit(Literal::Atom(Atom::from("a")))];
        let wrapped = Annotated::with_annotation(1_i64, ann.clone()).map(Literal::Int);
        assert_eq!(wrapped.node, Literal::Int(1));
        assert_eq!(wrapped.annotation(), ann.as_slice());
    }
}
