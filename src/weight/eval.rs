//! Numeric evaluation
//!
//! Evaluation performs no domain checks: division by zero and the logarithm
//! of a non-positive value produce whatever IEEE arithmetic gives.

use crate::error::{Result, WeightError};
use crate::weight::defs::{ParamDefs, Scope};
use crate::weight::expr::{UnaryOp, WeightExpr};
use log::trace;

impl WeightExpr {
    /// Evaluate the expression, resolving parameters through `defs`
    ///
    /// # Panics
    ///
    /// Panics if a parameter cannot be resolved. Every parameter reached
    /// during evaluation must be defined; use [`try_eval`](Self::try_eval)
    /// when the environment is not known to be complete.
    ///
    /// # Examples
    ///
    /// ```
    /// use weight_algebra::weight::{algebra::multiply, ParamDefs, WeightExpr};
    ///
    /// let defs = ParamDefs::new().with("rate", 0.5).with("t", 4);
    /// let expr = multiply("rate", "t");
    /// assert_eq!(expr.eval(&defs), 2.0);
    /// ```
    pub fn eval(&self, defs: &ParamDefs) -> f64 {
        match self.try_eval(defs) {
            Ok(value) => value,
            Err(err) => panic!("cannot evaluate {}: {}", self, err),
        }
    }

    /// Evaluate the expression, reporting an unresolved parameter as an error
    pub fn try_eval(&self, defs: &ParamDefs) -> Result<f64> {
        eval_in(self, defs.scope())
    }
}

fn eval_in(expr: &WeightExpr, scope: Scope<'_>) -> Result<f64> {
    match expr {
        WeightExpr::Null | WeightExpr::Boolean(_) | WeightExpr::Integer(_) | WeightExpr::Float(_) => {
            Ok(expr.constant_value().unwrap_or_default())
        }
        WeightExpr::Param(name) => match scope.resolve(name) {
            Some(def) => {
                trace!("resolving parameter '{}'", name);
                eval_in(def, scope.without(name))
            }
            None => Err(WeightError::UnboundParameter { name: name.clone() }),
        },
        WeightExpr::Unary(op, arg) => {
            let value = eval_in(arg, scope)?;
            Ok(match op {
                UnaryOp::Log => value.ln(),
                UnaryOp::Exp => value.exp(),
            })
        }
        WeightExpr::Binary(op, lhs, rhs) => {
            let lhs = eval_in(lhs, scope)?;
            let rhs = eval_in(rhs, scope)?;
            Ok(op.apply(lhs, rhs))
        }
    }
}
