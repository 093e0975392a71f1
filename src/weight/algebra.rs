//! Simplifying constructors
//!
//! Every operator node is built through one of these functions. Each applies a
//! fixed set of identities at construction time, so that two constructions of
//! the same simplifiable value produce equal trees:
//!
//! | builder            | folds                                                   |
//! |--------------------|---------------------------------------------------------|
//! | [`add`]            | `0+x`, `x+0`, numeric constants                         |
//! | [`subtract`]       | `x-0` only                                              |
//! | [`multiply`]       | `1*x`, `x*1`, `0*x`, `x*0`, numeric constants           |
//! | [`divide`]         | `x/1`, `0/x`                                            |
//! | [`power`]          | `x^1`, `x^0`                                            |
//! | [`log_of`]         | `log(1)`, `log(exp(x))`                                 |
//! | [`exp_of`]         | `exp(0)`, `exp(log(x))`                                 |
//!
//! Subtraction and division never fold constants.

use crate::weight::expr::{BinaryOp, UnaryOp, WeightExpr};
use std::ops;
use std::sync::Arc;

fn binary(op: BinaryOp, lhs: WeightExpr, rhs: WeightExpr) -> WeightExpr {
    WeightExpr::Binary(op, Arc::new(lhs), Arc::new(rhs))
}

fn unary(op: UnaryOp, arg: WeightExpr) -> WeightExpr {
    WeightExpr::Unary(op, Arc::new(arg))
}

/// `l + r`
pub fn add(l: impl Into<WeightExpr>, r: impl Into<WeightExpr>) -> WeightExpr {
    let (l, r) = (l.into(), r.into());
    if l.is_zero() {
        return r;
    }
    if r.is_zero() {
        return l;
    }
    match (&l, &r) {
        (WeightExpr::Integer(a), WeightExpr::Integer(b)) => match a.checked_add(*b) {
            Some(sum) => WeightExpr::Integer(sum),
            None => WeightExpr::Float(*a as f64 + *b as f64),
        },
        _ => match (l.as_number(), r.as_number()) {
            (Some(a), Some(b)) => WeightExpr::Float(a + b),
            _ => binary(BinaryOp::Add, l, r),
        },
    }
}

/// `l - r`
pub fn subtract(l: impl Into<WeightExpr>, r: impl Into<WeightExpr>) -> WeightExpr {
    let (l, r) = (l.into(), r.into());
    if r.is_zero() {
        l
    } else {
        binary(BinaryOp::Sub, l, r)
    }
}

/// `l * r`
pub fn multiply(l: impl Into<WeightExpr>, r: impl Into<WeightExpr>) -> WeightExpr {
    let (l, r) = (l.into(), r.into());
    if l.is_one() {
        return r;
    }
    if r.is_one() {
        return l;
    }
    if l.is_zero() || r.is_zero() {
        return WeightExpr::zero();
    }
    match (&l, &r) {
        (WeightExpr::Integer(a), WeightExpr::Integer(b)) => match a.checked_mul(*b) {
            Some(product) => WeightExpr::Integer(product),
            None => WeightExpr::Float(*a as f64 * *b as f64),
        },
        _ => match (l.as_number(), r.as_number()) {
            (Some(a), Some(b)) => WeightExpr::Float(a * b),
            _ => binary(BinaryOp::Mul, l, r),
        },
    }
}

/// `l / r`
pub fn divide(l: impl Into<WeightExpr>, r: impl Into<WeightExpr>) -> WeightExpr {
    let (l, r) = (l.into(), r.into());
    if r.is_one() || l.is_zero() {
        l
    } else {
        binary(BinaryOp::Div, l, r)
    }
}

/// `a ^ b`
pub fn power(a: impl Into<WeightExpr>, b: impl Into<WeightExpr>) -> WeightExpr {
    let (a, b) = (a.into(), b.into());
    if b.is_one() {
        a
    } else if b.is_zero() {
        WeightExpr::one()
    } else {
        binary(BinaryOp::Pow, a, b)
    }
}

/// Natural logarithm of `p`
pub fn log_of(p: impl Into<WeightExpr>) -> WeightExpr {
    let p = p.into();
    if p.is_one() {
        return WeightExpr::zero();
    }
    match p {
        WeightExpr::Unary(UnaryOp::Exp, arg) => arc_into_inner(arg),
        other => unary(UnaryOp::Log, other),
    }
}

/// Exponential of `p`
pub fn exp_of(p: impl Into<WeightExpr>) -> WeightExpr {
    let p = p.into();
    if p.is_zero() {
        return WeightExpr::one();
    }
    match p {
        WeightExpr::Unary(UnaryOp::Log, arg) => arc_into_inner(arg),
        other => unary(UnaryOp::Exp, other),
    }
}

/// `1 / (1 - p)`, the sum of the geometric series with ratio `p`
pub fn geometric_sum(p: impl Into<WeightExpr>) -> WeightExpr {
    divide(WeightExpr::one(), subtract(WeightExpr::one(), p))
}

/// `0 - x`
pub fn negate(x: impl Into<WeightExpr>) -> WeightExpr {
    subtract(WeightExpr::Integer(0), x)
}

fn arc_into_inner(arg: Arc<WeightExpr>) -> WeightExpr {
    Arc::try_unwrap(arg).unwrap_or_else(|shared| WeightExpr::clone(&shared))
}

macro_rules! impl_builder_op {
    ($trait:ident, $method:ident, $builder:ident) => {
        impl ops::$trait for WeightExpr {
            type Output = WeightExpr;

            fn $method(self, rhs: WeightExpr) -> WeightExpr {
                $builder(self, rhs)
            }
        }

        impl ops::$trait<&WeightExpr> for &WeightExpr {
            type Output = WeightExpr;

            fn $method(self, rhs: &WeightExpr) -> WeightExpr {
                $builder(self, rhs)
            }
        }
    };
}

impl_builder_op!(Add, add, add);
impl_builder_op!(Sub, sub, subtract);
impl_builder_op!(Mul, mul, multiply);
impl_builder_op!(Div, div, divide);
