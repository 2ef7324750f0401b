//! Unit tests for the pattern parser.

use rstest::rstest;

use crate::ast::{Annotated, BitString, Exprs, MapKey, Pattern, Var};
use crate::parse_pattern;
use crate::test_util::{
    atom, catom, int, lit, nil, palias, parse_ok, plist, plit, ptuple, pvar, string,
};

fn pat(src: &str) -> Annotated<Pattern> {
    parse_ok(parse_pattern(src))
}

#[rstest]
#[case("X", pvar("X"))]
#[case("_cor0", pvar("_cor0"))]
#[case("'ok'", plit(atom("ok")))]
#[case("42", plit(int(42)))]
#[case("\"ab\"", plit(string("ab")))]
#[case("[]", plit(nil()))]
fn parses_simple_patterns(#[case] src: &str, #[case] expected: Annotated<Pattern>) {
    assert_eq!(pat(src), expected);
}

#[rstest]
fn parses_tuple_and_list_patterns() {
    assert_eq!(
        pat("{'ok', X}"),
        ptuple(vec![plit(atom("ok")), pvar("X")])
    );
    assert_eq!(
        pat("[H|T]"),
        plist(vec![pvar("H")], Some(pvar("T")))
    );
    assert_eq!(pat("[1, 2]"), plist(vec![plit(int(1)), plit(int(2))], None));
}

#[rstest]
fn parses_alias() {
    assert_eq!(
        pat("P = {'a', B}"),
        palias("P", ptuple(vec![plit(atom("a")), pvar("B")]))
    );
}

#[rstest]
fn annotated_alias_variable_keeps_annotation() {
    let parsed = pat("(P -| ['compiler_generated']) = X");
    let Pattern::Alias(alias) = &parsed.node else {
        panic!("expected alias, got {parsed:?}");
    };
    assert!(!parsed.is_annotated());
    assert_eq!(alias.var.node, Var::from("P"));
    assert_eq!(alias.var.annotation(), &[catom("compiler_generated")]);
    assert_eq!(*alias.pattern, pvar("X"));
}

#[rstest]
fn annotation_around_alias_wraps_whole_pattern() {
    let parsed = pat("(P = X -| ['a'])");
    assert_eq!(parsed.annotation(), &[catom("a")]);
    assert_eq!(parsed.node, palias("P", pvar("X")).node);
}

#[rstest]
fn parses_map_pattern_with_annotated_key() {
    let parsed = pat("~{('k' -| ['x']) := V, K := 1}~");
    assert_eq!(
        parsed.node,
        Pattern::Map(vec![
            (MapKey::Lit(atom("k")), pvar("V")),
            (MapKey::Var(Var::from("K")), plit(int(1))),
        ])
    );
}

#[rstest]
fn map_pattern_rejects_fat_arrow() {
    assert!(parse_pattern("~{'k' => V}~").is_err());
}

#[rstest]
fn parses_binary_pattern() {
    let parsed = pat("#{#<X>(8,1,'integer',['unsigned'|['big']])}#");
    let Pattern::Binary(segments) = parsed.node else {
        panic!("expected binary pattern");
    };
    let [BitString { value, args }] = segments.as_slice() else {
        panic!("expected one segment, got {segments:?}");
    };
    assert_eq!(value, &pvar("X"));
    assert_eq!(args.len(), 4);
    assert_eq!(args.first(), Some(&lit(int(8))));
    assert!(matches!(args.get(3), Some(Exprs::One(_))));
}

#[rstest]
fn bound_vars_walks_nested_patterns() {
    let parsed = pat("{A, [B|C], D = 'x'}");
    let names: Vec<&str> = parsed.node.bound_vars().into_iter().map(Var::as_str).collect();
    assert_eq!(names, ["A", "B", "C", "D"]);
}

#[rstest]
#[case("X + 1")]
#[case("apply F ()")]
#[case("{X,")]
fn rejects_non_patterns(#[case] src: &str) {
    assert!(parse_pattern(src).is_err());
}
