//! Symbolic partial differentiation
//!
//! Derivatives are assembled with the simplifying constructors, so the
//! derivative of anything that does not depend on the differentiation
//! variable collapses to the zero constant.

use crate::error::Result;
use crate::weight::algebra::{add, divide, log_of, multiply, subtract};
use crate::weight::defs::{ParamDefs, Scope};
use crate::weight::expr::{BinaryOp, UnaryOp, WeightExpr};
use log::trace;
use ndarray::Array1;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl WeightExpr {
    /// The partial derivative of this expression with respect to `param`
    ///
    /// Parameters defined in `defs` are differentiated through their
    /// definitions (chain rule); undefined parameters other than `param`
    /// are treated as independent of it.
    ///
    /// # Examples
    ///
    /// ```
    /// use weight_algebra::weight::{algebra::multiply, ParamDefs, WeightExpr};
    ///
    /// let expr = multiply("x", "x");
    /// let d = expr.deriv(&ParamDefs::new(), "x");
    /// let at = ParamDefs::new().with("x", 3.0);
    /// assert_eq!(d.eval(&at), 6.0);
    /// ```
    pub fn deriv(&self, defs: &ParamDefs, param: &str) -> WeightExpr {
        deriv_in(self, defs.scope(), param)
    }

    /// Symbolic derivatives with respect to each of `params`, in order
    pub fn gradient<S: AsRef<str> + Sync>(&self, defs: &ParamDefs, params: &[S]) -> Vec<WeightExpr> {
        #[cfg(feature = "parallel")]
        {
            params
                .par_iter()
                .map(|p| self.deriv(defs, p.as_ref()))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            params.iter().map(|p| self.deriv(defs, p.as_ref())).collect()
        }
    }

    /// Numeric gradient with respect to `params`, evaluated in `defs`
    ///
    /// # Returns
    ///
    /// The vector of partial derivative values, or an error if a derivative
    /// mentions a parameter that `defs` cannot resolve
    pub fn eval_gradient<S: AsRef<str> + Sync>(
        &self,
        defs: &ParamDefs,
        params: &[S],
    ) -> Result<Array1<f64>> {
        let values = self
            .gradient(defs, params)
            .iter()
            .map(|d| d.try_eval(defs))
            .collect::<Result<Vec<f64>>>()?;
        Ok(Array1::from_vec(values))
    }
}

fn deriv_in(expr: &WeightExpr, scope: Scope<'_>, param: &str) -> WeightExpr {
    match expr {
        WeightExpr::Null | WeightExpr::Boolean(_) | WeightExpr::Integer(_) | WeightExpr::Float(_) => {
            WeightExpr::zero()
        }
        WeightExpr::Param(name) => {
            if name == param {
                WeightExpr::one()
            } else if let Some(def) = scope.resolve(name) {
                trace!("differentiating '{}' through its definition", name);
                deriv_in(def, scope.without(name), param)
            } else {
                WeightExpr::zero()
            }
        }
        // (exp f)' = f' exp f
        WeightExpr::Unary(UnaryOp::Exp, f) => multiply(deriv_in(f, scope, param), expr),
        // (log f)' = f' / f
        WeightExpr::Unary(UnaryOp::Log, f) => {
            let f: &WeightExpr = f;
            divide(deriv_in(f, scope, param), f)
        }
        WeightExpr::Binary(op, f, g) => {
            let (f, g): (&WeightExpr, &WeightExpr) = (f, g);
            let df = deriv_in(f, scope, param);
            let dg = deriv_in(g, scope, param);
            match op {
                BinaryOp::Add => add(df, dg),
                BinaryOp::Sub => subtract(df, dg),
                // (fg)' = f'g + fg'
                BinaryOp::Mul => add(multiply(df, g), multiply(f, dg)),
                // (f/g)' = f'/g - g'(f/g)/g
                BinaryOp::Div => subtract(
                    divide(df, g),
                    multiply(dg, divide(expr, g)),
                ),
                // (f^g)' = f^g (g' log f + f' g/f)
                BinaryOp::Pow => multiply(
                    expr,
                    add(
                        multiply(dg, log_of(f)),
                        multiply(df, divide(g, f)),
                    ),
                ),
            }
        }
    }
}
