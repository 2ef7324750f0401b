//! The annotation wrapper applied around most grammar rules.
//!
//! Any annotatable node may be written either bare or as
//! `( node -| [c1, ..., cn] )`. Both wrappers below accept exactly that
//! syntax: [`annotated`] keeps the constant list, [`skip_annotation`] checks it
//! and drops it for positions where the tree has no room for one.

use chumsky::prelude::*;

use super::SyntaxError;
use super::ast::{Annotated, Const};
use super::delimiter::brackets;
use crate::SyntaxKind;

/// `-| [c1, ..., cn]`.
fn annotation<'a>(
    constant: impl Parser<SyntaxKind, Const, Error = SyntaxError> + Clone + 'a,
) -> impl Parser<SyntaxKind, Vec<Const>, Error = SyntaxError> + Clone + 'a {
    just(SyntaxKind::T_ANNOTATE).ignore_then(brackets(constant))
}

/// Parse `( inner -| [...] )` or a bare `inner`, keeping the annotation.
///
/// The parenthesised form is tried first; if it fails the input is rewound and
/// `inner` is parsed on its own.
pub(crate) fn annotated<'a, T: 'a>(
    inner: impl Parser<SyntaxKind, T, Error = SyntaxError> + Clone + 'a,
    constant: impl Parser<SyntaxKind, Const, Error = SyntaxError> + Clone + 'a,
) -> impl Parser<SyntaxKind, Annotated<T>, Error = SyntaxError> + Clone + 'a {
    let wrapped = inner
        .clone()
        .then(annotation(constant))
        .delimited_by(just(SyntaxKind::T_LPAREN), just(SyntaxKind::T_RPAREN))
        .map(|(node, consts)| Annotated::with_annotation(node, consts));
    wrapped.or(inner.map(Annotated::bare))
}

/// Same syntax as [`annotated`], returning only the node.
pub(crate) fn skip_annotation<'a, T: 'a>(
    inner: impl Parser<SyntaxKind, T, Error = SyntaxError> + Clone + 'a,
    constant: impl Parser<SyntaxKind, Const, Error = SyntaxError> + Clone + 'a,
) -> impl Parser<SyntaxKind, T, Error = SyntaxError> + Clone + 'a {
    annotated(inner, constant).map(Annotated::into_node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::{Atom, Literal};
    use crate::parser::literals::{constant, literal};
    use crate::parser::run;
    use rstest::rstest;

    fn annotated_literal(src: &str) -> Annotated<Literal> {
        run(src, || annotated(literal(src), constant(src)))
            .unwrap_or_else(|e| panic!("parse failed: {e}"))
    }

    #[rstest]
    fn bare_literal_has_no_annotation() {
        let lit = annotated_literal("1");
        assert_eq!(lit, Annotated::bare(Literal::Int(1)));
    }

    #[rstest]
    fn parenthesised_literal_keeps_annotation() {
        let lit = annotated_literal("(1 -| ['a'])");
        assert_eq!(lit.node, Literal::Int(1));
        assert_eq!(
            lit.annotation(),
            &[Const::Lit(Literal::Atom(Atom::from("a")))]
        );
    }

    #[rstest]
    fn empty_annotation_is_distinguishable() {
        let lit = annotated_literal("(1 -| [])");
        assert!(lit.is_annotated());
        assert!(lit.annotation().is_empty());
    }

    #[rstest]
    fn nested_annotations_wrap_once_per_layer() {
        let src = "((1 -| ['a']) -| ['b'])";
        let nested = run(
            src,
            || annotated(annotated(literal(src), constant(src)), constant(src)),
        )
        .unwrap_or_else(|e| panic!("parse failed: {e}"));
        assert_eq!(nested.annotation().len(), 1);
        assert_eq!(nested.node.node, Literal::Int(1));
        assert_eq!(nested.node.annotation().len(), 1);
    }

    #[rstest]
    #[case("(1 -| ['a'])")]
    #[case("1")]
    fn skip_annotation_accepts_both_forms(#[case] src: &str) {
        let lit = run(src, || skip_annotation(literal(src), constant(src)))
            .unwrap_or_else(|e| panic!("parse failed: {e}"));
        assert_eq!(lit, Literal::Int(1));
    }

    #[rstest]
    #[case("(1 ['a'])")]
    #[case("(1 -| ['a']")]
    #[case("(1)")]
    fn rejects_malformed_annotation(#[case] src: &str) {
        assert!(run(src, || annotated(literal(src), constant(src))).is_err());
    }
}
