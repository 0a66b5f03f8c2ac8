use super::walk;
use crate::parser::{Expr, NodeKind, parse};
use bumpalo::Bump;

fn kinds(source: &str) -> Vec<NodeKind> {
    let arena = Bump::new();
    let parsed = parse(&arena, source).expect("parsing failed");
    walk(parsed.expr).map(Expr::kind).collect()
}

#[test]
fn test_single_node() {
    assert_eq!(kinds("42"), vec![NodeKind::Literal]);
    assert_eq!(kinds("x"), vec![NodeKind::Name]);
}

#[test]
fn test_pre_order_left_to_right() {
    assert_eq!(
        kinds("1 + -x"),
        vec![
            NodeKind::BinaryOp,
            NodeKind::Literal,
            NodeKind::UnaryOp,
            NodeKind::Name,
        ]
    );
}

#[test]
fn test_call_visits_callable_then_args() {
    let arena = Bump::new();
    let parsed = parse(&arena, "f(a, b.c)").unwrap();
    let nodes: Vec<_> = parsed.expr.walk().collect();

    assert_eq!(nodes.len(), 5);
    assert_eq!(nodes[0].kind(), NodeKind::Call);
    assert_eq!(*nodes[1], Expr::Ident("f"));
    assert_eq!(*nodes[2], Expr::Ident("a"));
    assert_eq!(nodes[3].kind(), NodeKind::AttributeAccess);
    assert_eq!(*nodes[4], Expr::Ident("b"));
}

#[test]
fn test_nested_calls_are_all_visited() {
    let calls = kinds("sin(cos(tan(0)))")
        .into_iter()
        .filter(|k| *k == NodeKind::Call)
        .count();
    assert_eq!(calls, 3);
}

#[test]
fn test_long_chain_does_not_recurse() {
    let arena = Bump::new();
    let source = vec!["1"; 5_000].join(" + ");
    let parsed = parse(&arena, &source).unwrap();
    assert_eq!(walk(parsed.expr).count(), 5_000 + 4_999);
}
