//! Human-readable rendering
//!
//! The rendered form is meant for diagnostics. Resolvable parameters are
//! replaced by the rendering of their definitions; free parameters appear as
//! their bare names. Binary operators other than `pow` are fully
//! parenthesized.

use crate::weight::defs::{ParamDefs, Scope};
use crate::weight::expr::{BinaryOp, WeightExpr};
use std::fmt;

impl WeightExpr {
    /// Render the expression, substituting definitions from `defs`
    ///
    /// # Examples
    ///
    /// ```
    /// use weight_algebra::weight::{algebra::{exp_of, multiply}, ParamDefs, WeightExpr};
    ///
    /// let defs = ParamDefs::new().with("rate", 2);
    /// let expr = exp_of(multiply("rate", "t"));
    /// assert_eq!(expr.render(&defs), "exp((2*t))");
    /// assert_eq!(expr.render(&ParamDefs::new()), "exp((rate*t))");
    /// ```
    pub fn render(&self, defs: &ParamDefs) -> String {
        self.display(defs).to_string()
    }

    /// A [`Display`](fmt::Display) adapter rendering with `defs`
    pub fn display<'a>(&'a self, defs: &'a ParamDefs) -> impl fmt::Display + 'a {
        Rendered { expr: self, defs }
    }
}

struct Rendered<'a> {
    expr: &'a WeightExpr,
    defs: &'a ParamDefs,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_expr(f, self.expr, self.defs.scope())
    }
}

fn write_expr(f: &mut fmt::Formatter<'_>, expr: &WeightExpr, scope: Scope<'_>) -> fmt::Result {
    match expr {
        WeightExpr::Null => f.write_str("0"),
        WeightExpr::Boolean(b) => f.write_str(if *b { "1" } else { "0" }),
        WeightExpr::Integer(i) => write!(f, "{}", i),
        WeightExpr::Float(x) => write!(f, "{:.6}", x),
        WeightExpr::Param(name) => match scope.resolve(name) {
            Some(def) => write_expr(f, def, scope.without(name)),
            None => f.write_str(name),
        },
        WeightExpr::Unary(op, arg) => {
            write!(f, "{}(", op)?;
            write_expr(f, arg, scope)?;
            f.write_str(")")
        }
        WeightExpr::Binary(BinaryOp::Pow, base, exponent) => {
            f.write_str("pow(")?;
            write_expr(f, base, scope)?;
            f.write_str(",")?;
            write_expr(f, exponent, scope)?;
            f.write_str(")")
        }
        WeightExpr::Binary(op, lhs, rhs) => {
            f.write_str("(")?;
            write_expr(f, lhs, scope)?;
            write!(f, "{}", op)?;
            write_expr(f, rhs, scope)?;
            f.write_str(")")
        }
    }
}

impl fmt::Display for WeightExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let defs = ParamDefs::new();
        write_expr(f, self, defs.scope())
    }
}
