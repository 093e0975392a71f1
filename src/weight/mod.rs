//! # Weight Algebra
//!
//! This module provides symbolic weight expressions: algebraic formulas over
//! probabilities, rates and time, as they appear on the transitions of
//! continuous-time stochastic models.
//!
//! ## Key Features
//!
//! - **Simplifying Construction**: Builders fold identities and constants as nodes are created
//! - **Evaluation**: Reduce an expression to a number, resolving named parameters
//! - **Differentiation**: Symbolic partial derivatives, including the chain rule through named parameters
//! - **Free Parameters**: Find the genuine inputs an expression depends on
//! - **Rendering and Parsing**: A readable text form that can be read back
//! - **Serialization Support**: A self-describing JSON tree form via serde
//!
//! ## Core Components
//!
//! - [`WeightExpr`]: The immutable expression tree
//! - [`algebra`]: The simplifying builders (`add`, `multiply`, `exp_of`, ...)
//! - [`ParamDefs`]: The name → expression environment used to resolve parameters
//!
//! ## Example Usage
//!
//! ```rust
//! use weight_algebra::weight::algebra::{exp_of, multiply, negate, subtract};
//! use weight_algebra::weight::{ParamDefs, WeightExpr};
//!
//! // Probability of leaving a state with rate k within time t
//! let wait = exp_of(negate(multiply("k", "t")));
//! let exit = subtract(true, wait);
//!
//! let defs = ParamDefs::new().with("k", 0.5).with("t", 2.0);
//! assert!((exit.eval(&defs) - (1.0 - (-1.0_f64).exp())).abs() < 1e-12);
//!
//! // Sensitivity of the exit probability to the rate
//! let d_exit = exit.deriv(&ParamDefs::new(), "k");
//! assert!((d_exit.eval(&defs) - 2.0 * (-1.0_f64).exp()).abs() < 1e-12);
//!
//! // Everything the expression depends on
//! let inputs: Vec<String> = exit.free_params(&ParamDefs::new()).into_iter().collect();
//! assert_eq!(inputs, vec!["k", "t"]);
//! ```

pub mod algebra;
mod codec;
pub mod defs;
mod deriv;
mod eval;
pub mod expr;
mod free;
mod parse;
mod render;

// Re-export key types
pub use defs::ParamDefs;
pub use expr::{BinaryOp, ConstKind, ExprKind, UnaryOp, WeightExpr};
