//! Tests for the simplifying builders

use crate::test_helpers::random_expr;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use weight_algebra::weight::algebra::{
    add, divide, exp_of, geometric_sum, log_of, multiply, power, subtract,
};
use weight_algebra::weight::{BinaryOp, ParamDefs, WeightExpr};

fn sample_exprs() -> Vec<WeightExpr> {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut exprs: Vec<WeightExpr> = (0..50)
        .map(|_| random_expr(&mut rng, 4, &["a", "b", "c"]))
        .collect();
    exprs.push(WeightExpr::param("x"));
    exprs.push(exp_of(multiply("x", "y")));
    exprs.push(WeightExpr::Float(2.5));
    // The identities below hold for anything that is not itself zero or one
    exprs.retain(|x| !x.is_zero() && !x.is_one());
    exprs
}

#[test]
fn test_identity_folding() {
    for x in sample_exprs() {
        assert_eq!(add(WeightExpr::Null, x.clone()), x);
        assert_eq!(add(x.clone(), 0), x);
        assert_eq!(multiply(true, x.clone()), x);
        assert_eq!(multiply(x.clone(), 1.0), x);
        assert_eq!(multiply(0, x.clone()), WeightExpr::Null);
        assert_eq!(multiply(x.clone(), false), WeightExpr::Null);
        assert_eq!(power(x.clone(), 1), x);
        assert_eq!(power(x.clone(), 0), WeightExpr::one());
        assert_eq!(subtract(x.clone(), 0.0), x);
        assert_eq!(divide(x.clone(), 1), x);
    }
}

#[test]
fn test_log_exp_cancel_structurally() {
    for x in sample_exprs() {
        assert_eq!(log_of(exp_of(x.clone())), x);
        assert_eq!(exp_of(log_of(x.clone())), x);
    }
}

#[test]
fn test_constant_folding() {
    let empty = ParamDefs::new();

    let sum = add(WeightExpr::Integer(2), WeightExpr::Integer(3));
    assert_eq!(sum, WeightExpr::Integer(5));
    assert_eq!(sum.eval(&empty), 5.0);
    assert_eq!(sum.to_string(), "5");

    let product = multiply(WeightExpr::Float(2.5), WeightExpr::Float(2.0));
    assert_eq!(product, WeightExpr::Float(5.0));
    assert_eq!(product.eval(&empty), 5.0);

    // Mixed integer/float folds to a float
    assert_eq!(multiply(2, 0.25), WeightExpr::Float(0.5));
}

#[test]
fn test_same_value_same_tree() {
    let expected = add(WeightExpr::Integer(6), "x");
    assert_eq!(add(multiply(2, 3), "x"), expected);
    assert_eq!(add(6, multiply(true, "x")), expected);
    assert_eq!(add(add(4, 2), multiply("x", 1)), expected);
    assert_ne!(add("x", 6), expected);
}

#[test]
fn test_subtract_and_divide_do_not_fold_constants() {
    let diff = subtract(5, 3);
    assert!(matches!(diff, WeightExpr::Binary(BinaryOp::Sub, _, _)));
    assert_eq!(diff.eval(&ParamDefs::new()), 2.0);

    let zero_minus = subtract(0, "x");
    assert!(matches!(zero_minus, WeightExpr::Binary(BinaryOp::Sub, _, _)));

    let quotient = divide(6, 3);
    assert!(matches!(quotient, WeightExpr::Binary(BinaryOp::Div, _, _)));
    assert_eq!(quotient.eval(&ParamDefs::new()), 2.0);
}

#[test]
fn test_geometric_sum() {
    let defs = ParamDefs::new().with("p", 0.75);
    assert_eq!(geometric_sum("p").eval(&defs), 4.0);
    assert!(geometric_sum(1).eval(&defs).is_infinite());
}

#[test]
fn test_trees_are_shared_across_threads() {
    let expr = exp_of(multiply("k", divide("t", add("t", 1))));
    let defs = ParamDefs::new().with("k", 0.5).with("t", 3.0);
    let expected = expr.eval(&defs);

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| (expr.eval(&defs), expr.deriv(&defs, "k"))))
            .collect();
        for handle in handles {
            let (value, d) = handle.join().unwrap();
            assert_eq!(value, expected);
            assert_eq!(d, expr.deriv(&defs, "k"));
        }
    });
}
