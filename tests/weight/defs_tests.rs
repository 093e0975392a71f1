//! Parameter environments, free-parameter extraction and cycle handling

use std::collections::BTreeSet;
use test_log::test;
use weight_algebra::weight::algebra::{add, exp_of, multiply, subtract};
use weight_algebra::weight::{ParamDefs, WeightExpr};
use weight_algebra::WeightError;

fn set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_free_params_of_constants_is_empty() {
    let defs = ParamDefs::new().with("x", 1);
    for c in [
        WeightExpr::Null,
        WeightExpr::Boolean(true),
        WeightExpr::Integer(7),
        WeightExpr::Float(0.5),
    ] {
        assert!(c.free_params(&defs).is_empty());
    }
}

#[test]
fn test_free_params_follow_definitions() {
    let defs = ParamDefs::new()
        .with("wait", exp_of(multiply("rate", "t")))
        .with("rate", multiply(2, "base"));
    let expr = subtract(1, "wait");

    assert_eq!(expr.free_params(&defs), set(&["base", "t"]));
    assert_eq!(expr.free_params(&ParamDefs::new()), set(&["wait"]));
}

#[test]
fn test_free_params_of_unary_and_binary() {
    let defs = ParamDefs::new().with("b", 3);
    let a = WeightExpr::param("a");
    let b = WeightExpr::param("b");
    let c = WeightExpr::param("c");

    assert_eq!(exp_of(a.clone()).free_params(&defs), a.free_params(&defs));

    let combined = add(multiply(a.clone(), b.clone()), c.clone());
    let mut expected = multiply(a, b).free_params(&defs);
    expected.extend(c.free_params(&defs));
    assert_eq!(combined.free_params(&defs), expected);
}

#[test]
fn test_self_reference_is_free() {
    let defs = ParamDefs::new().with("p", add("p", 1));
    assert_eq!(WeightExpr::param("p").free_params(&defs), set(&["p"]));
    assert_eq!(WeightExpr::param("p").render(&defs), "(p+1)");

    // The inner reference is unbound, so evaluation fails
    assert!(WeightExpr::param("p").try_eval(&defs).is_err());
    assert!(defs.check_acyclic().is_ok());
}

#[test]
fn test_mutual_cycle_terminates() {
    let defs = ParamDefs::new()
        .with("a", multiply("b", 2))
        .with("b", add("a", 1));

    // a -> b -> a, where the inner `a` is treated as free
    assert_eq!(WeightExpr::param("a").free_params(&defs), set(&["a"]));
    assert_eq!(WeightExpr::param("a").render(&defs), "((a+1)*2)");
    assert_eq!(
        WeightExpr::param("a").deriv(&defs, "x"),
        WeightExpr::Null
    );

    match defs.check_acyclic() {
        Err(WeightError::CyclicDefinition { name }) => assert!(name == "a" || name == "b"),
        other => panic!("Expected CyclicDefinition, got {:?}", other),
    }
}

#[test]
fn test_check_acyclic_on_chains() {
    let defs: ParamDefs = vec![
        ("c", WeightExpr::from(2.0)),
        ("b", multiply("c", "c")),
        ("a", add("b", "c")),
    ]
    .into_iter()
    .collect();
    assert!(defs.check_acyclic().is_ok());
    assert_eq!(WeightExpr::param("a").eval(&defs), 6.0);

    let mut cyclic = defs.clone();
    cyclic.insert("c", subtract("a", 1));
    assert!(cyclic.check_acyclic().is_err());
}

#[test]
fn test_merge_and_exclude() {
    let mut defs = ParamDefs::new().with("a", 1).with("b", 2);
    let other = ParamDefs::new().with("b", 3).with("c", 4);
    defs.merge(&other);

    assert_eq!(defs.names(), vec!["a", "b", "c"]);
    assert_eq!(defs.get("b"), Some(&WeightExpr::Integer(3)));

    let narrowed = defs.exclude("c");
    assert_eq!(narrowed.names(), vec!["a", "b"]);
    assert_eq!(
        multiply("a", "c").free_params(&narrowed),
        set(&["c"])
    );
}
