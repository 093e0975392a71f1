//! Symbolic derivatives checked against central finite differences

use crate::test_helpers::central_difference;
use approx::assert_relative_eq;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use weight_algebra::weight::algebra::{
    add, divide, exp_of, log_of, multiply, negate, power, subtract,
};
use weight_algebra::weight::{ParamDefs, WeightExpr};
use weight_algebra::WeightError;

/// Compare `d expr / d p` with a finite difference at several random points
fn check_against_finite_difference(expr: &WeightExpr, defs: &ParamDefs, seed: u64) {
    let d = expr.deriv(defs, "p");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    for _ in 0..10 {
        let x: f64 = rng.gen_range(0.5..2.0);
        let at = |v: f64| defs.clone().with("p", v);

        let symbolic = d.eval(&at(x));
        let numeric = central_difference(|v| expr.eval(&at(v)), x, 1e-6);
        assert_relative_eq!(symbolic, numeric, epsilon = 1e-6, max_relative = 1e-6);
    }
}

#[test]
fn test_product_rule() {
    let expr = multiply(power("p", 3), exp_of("p"));
    check_against_finite_difference(&expr, &ParamDefs::new(), 1);
}

#[test]
fn test_quotient_rule() {
    let expr = divide(add("p", 1), add(multiply("p", "p"), 2));
    check_against_finite_difference(&expr, &ParamDefs::new(), 2);

    // Numerator independent of p
    let expr = divide(3, add("p", 1));
    check_against_finite_difference(&expr, &ParamDefs::new(), 3);
}

#[test]
fn test_power_with_both_sides_dependent() {
    let expr = power(add("p", 1), "p");
    check_against_finite_difference(&expr, &ParamDefs::new(), 4);

    let expr = power("p", divide(1, "p"));
    check_against_finite_difference(&expr, &ParamDefs::new(), 5);
}

#[test]
fn test_mixed_expression() {
    let defs = ParamDefs::new().with("a", 1.5).with("b", 0.25);
    let expr = log_of(add(multiply("a", "p"), exp_of(divide("p", "b"))));
    check_against_finite_difference(&expr, &defs, 6);

    let expr = subtract(
        power(divide(1, subtract(3, "p")), 2),
        multiply("a", log_of("p")),
    );
    check_against_finite_difference(&expr, &defs, 7);
}

#[test]
fn test_chain_through_definitions() {
    // wait = exp(-(q t)) with q = p^2
    let defs = ParamDefs::new()
        .with("q", multiply("p", "p"))
        .with("t", 0.7)
        .with("wait", exp_of(negate(multiply("q", "t"))));
    let expr = subtract(1, "wait");
    check_against_finite_difference(&expr, &defs, 8);

    // d(exit)/dp = 2 p t exp(-p^2 t)
    let d = expr.deriv(&defs, "p");
    let at = defs.clone().with("p", 1.2);
    assert_relative_eq!(
        d.eval(&at),
        2.0 * 1.2 * 0.7 * (-(1.2_f64 * 1.2) * 0.7).exp(),
        epsilon = 1e-12
    );
}

#[test]
fn test_independent_parameter_derivative_is_zero() {
    let defs = ParamDefs::new().with("q", multiply("r", 2));
    let expr = exp_of(multiply("q", log_of("s")));
    assert_eq!(expr.deriv(&defs, "p"), WeightExpr::Null);
}

#[test]
fn test_gradient_in_parameter_order() {
    let expr = add(multiply("a", "a"), multiply(3, "b"));
    let defs = ParamDefs::new().with("a", 2.0).with("b", -1.0);

    let grad = expr.eval_gradient(&defs, &["a", "b", "c"]).unwrap();
    assert_eq!(grad.len(), 3);
    assert_relative_eq!(grad[0], 4.0);
    assert_relative_eq!(grad[1], 3.0);
    assert_relative_eq!(grad[2], 0.0);

    let names = vec!["b".to_string(), "a".to_string()];
    let symbolic = expr.gradient(&defs, &names);
    assert_eq!(symbolic[0], expr.deriv(&defs, "b"));
    assert_eq!(symbolic[1], expr.deriv(&defs, "a"));
}

#[test]
fn test_gradient_reports_unbound_parameters() {
    let expr = multiply("a", "b");
    let defs = ParamDefs::new().with("a", 2.0);

    match expr.eval_gradient(&defs, &["a"]) {
        Err(WeightError::UnboundParameter { name }) => assert_eq!(name, "b"),
        other => panic!("Expected UnboundParameter, got {:?}", other),
    }
}
