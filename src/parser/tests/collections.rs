//! Tuples, lists, binaries, maps, value lists and literal ordering.

use rstest::rstest;

use crate::ast::{Annotated, Expr, Exprs, Literal, MapExpr};
use crate::parse_expression;
use crate::test_util::{
    atom, catom, improper_list, int, lit, list, nil, parse_ok, string, tuple, values, var,
};

fn single(src: &str) -> Expr {
    match parse_ok(parse_expression(src)) {
        Exprs::One(expr) => expr.node,
        many @ Exprs::Many(_) => panic!("expected a single expression, got {many:?}"),
    }
}

#[rstest]
#[case("'foo'", atom("foo"))]
#[case("42", int(42))]
#[case("-7", int(-7))]
#[case("+7", int(7))]
#[case("-3.5", Literal::Float(-3.5))]
#[case("1.0e3", Literal::Float(1000.0))]
#[case("$a", Literal::Char('a'))]
#[case("\"ab\"", string("ab"))]
#[case("[]", nil())]
fn literals(#[case] src: &str, #[case] expected: Literal) {
    assert_eq!(parse_ok(parse_expression(src)), lit(expected));
}

#[rstest]
fn rejects_integer_overflow() {
    assert!(parse_expression("99999999999999999999").is_err());
}

#[rstest]
#[case("{}", tuple(vec![]))]
#[case("{1, X}", tuple(vec![lit(int(1)), var("X")]))]
#[case("[1,2,3]", list(vec![lit(int(1)), lit(int(2)), lit(int(3))]))]
#[case("[1,2|X]", improper_list(vec![lit(int(1)), lit(int(2))], var("X")))]
#[case("[[]]", list(vec![lit(nil())]))]
fn tuples_and_lists(#[case] src: &str, #[case] expected: Exprs) {
    assert_eq!(parse_ok(parse_expression(src)), expected);
}

#[rstest]
#[case("[1,]")]
#[case("[|X]")]
#[case("{1 2}")]
fn rejects_malformed_collections(#[case] src: &str) {
    assert!(parse_expression(src).is_err(), "{src} should not parse");
}

#[rstest]
fn value_lists() {
    assert_eq!(
        parse_ok(parse_expression("<X, 'ok'>")),
        values(vec![Expr::Var("X".into()), Expr::Lit(atom("ok"))])
    );
    assert_eq!(parse_ok(parse_expression("<>")), values(vec![]));
}

#[rstest]
fn annotated_value_list() {
    let Exprs::Many(values) = parse_ok(parse_expression("(<X> -| ['a'])")) else {
        panic!("expected value list");
    };
    assert_eq!(values.annotation(), &[catom("a")]);
    assert_eq!(values.node.len(), 1);
}

#[rstest]
fn annotation_attaches_to_the_same_node() {
    let Exprs::One(annotated) = parse_ok(parse_expression("(1 -| ['a'])")) else {
        panic!("expected single expression");
    };
    let Exprs::One(bare) = parse_ok(parse_expression("1")) else {
        panic!("expected single expression");
    };
    assert_eq!(annotated.annotation(), &[catom("a")]);
    assert_eq!(bare, Annotated::bare(Expr::Lit(int(1))));
    assert_eq!(annotated.node, bare.node);
}

#[rstest]
fn map_build() {
    assert_eq!(
        single("~{'a'=>1}~"),
        Expr::Map(MapExpr::Build(vec![(lit(atom("a")), lit(int(1)))]))
    );
    assert_eq!(single("~{}~"), Expr::Map(MapExpr::Build(vec![])));
}

#[rstest]
fn map_extend_and_update_are_distinct() {
    let Expr::Map(MapExpr::Extend { pairs, map }) = single("~{'a'=>1|M}~") else {
        panic!("expected map extend");
    };
    assert_eq!(pairs, [(lit(atom("a")), lit(int(1)))]);
    assert_eq!(*map, var("M"));

    let Expr::Map(MapExpr::Update { pairs, map }) = single("~{'a':=1,'b':=2|M}~") else {
        panic!("expected map update");
    };
    assert_eq!(pairs.len(), 2);
    assert_eq!(*map, var("M"));
}

#[rstest]
#[case("~{'a'=>1,'b':=2|M}~")]
#[case("~{'a':=1}~")]
#[case("~{'a'=>1|}~")]
fn rejects_mixed_or_incomplete_maps(#[case] src: &str) {
    assert!(parse_expression(src).is_err(), "{src} should not parse");
}

#[rstest]
fn binary_segments() {
    let src = "#{#<1>(8,1,'integer',['unsigned'|['big']]),#<X>('all',8,'binary',[])}#";
    let Expr::Binary(segments) = single(src) else {
        panic!("expected binary");
    };
    assert_eq!(segments.len(), 2);
    let first = segments.first().unwrap_or_else(|| panic!("missing segment"));
    assert_eq!(first.value, lit(int(1)));
    assert_eq!(first.args.first(), Some(&lit(int(8))));
    let last = segments.last().unwrap_or_else(|| panic!("missing segment"));
    assert_eq!(last.value, var("X"));
    assert_eq!(last.args.get(3), Some(&lit(nil())));
}

#[rstest]
fn empty_binary() {
    assert_eq!(single("#{}#"), Expr::Binary(vec![]));
}
