//! The persisted JSON tree form and the text form

use crate::test_helpers::random_expr;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;
use weight_algebra::weight::algebra::{exp_of, multiply, subtract};
use weight_algebra::weight::{ParamDefs, WeightExpr};

#[test]
fn test_json_round_trip_of_random_trees() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..200 {
        let expr = random_expr(&mut rng, 5, &["rate", "t", "p"]);
        let text = serde_json::to_string(&expr).unwrap();
        let decoded: WeightExpr = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded, expr, "round trip of {}", text);
    }
}

#[test]
fn test_decoding_does_not_fold() {
    let value = json!({"*": [1, {"+": [0, "x"]}]});
    let expr = WeightExpr::from_json_value(&value).unwrap();
    assert_eq!(expr.node_count(), 5);
    assert_eq!(expr.to_string(), "(1*(0+x))");
    assert_eq!(expr.to_json_value(), value);
}

#[test]
fn test_decoding_errors() {
    for bad in [
        json!({"sqrt": "x"}),
        json!({"+": ["x"]}),
        json!({"+": ["x", "y", "z"]}),
        json!({"+": ["x", "y"], "-": ["x", "y"]}),
        json!({}),
        json!([1, 2]),
    ] {
        assert!(
            WeightExpr::from_json_value(&bad).is_err(),
            "{} should not decode",
            bad
        );
    }
}

#[test]
fn test_large_integers_keep_their_kind() {
    let expr: WeightExpr = serde_json::from_str("9007199254740993").unwrap();
    assert_eq!(expr, WeightExpr::Integer(9_007_199_254_740_993));

    let expr: WeightExpr = serde_json::from_str("18446744073709551615").unwrap();
    assert_eq!(expr, WeightExpr::Float(u64::MAX as f64));
}

#[test]
fn test_rendered_text_parses_back() {
    // Integers only, so the rendered literals are exact
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let defs = ParamDefs::new();
    let mut checked = 0;
    while checked < 100 {
        let expr = random_expr(&mut rng, 4, &["a", "b"]);
        let json = expr.to_json_value().to_string();
        let inexact = json.contains('.') || json.contains("e-");
        if inexact || json.contains("true") || json.contains("false") {
            continue;
        }
        let text = expr.render(&defs);
        let parsed = WeightExpr::parse(&text).unwrap();
        assert_eq!(parsed.render(&defs), text);
        checked += 1;
    }
}

#[test]
fn test_sojourn_weight_text_and_tree() {
    let wait = exp_of(subtract(0, multiply("rate", "t")));
    assert_eq!(wait.to_string(), "exp((0-(rate*t)))");
    assert_eq!(WeightExpr::parse("exp((0-(rate*t)))").unwrap(), wait);
    assert_eq!(
        serde_json::to_value(&wait).unwrap(),
        json!({"exp": {"-": [0, {"*": ["rate", "t"]}]}})
    );
}
