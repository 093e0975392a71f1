//! # weight-algebra
//!
//! `weight-algebra` computes and symbolically manipulates the scalar weight
//! expressions that label transitions of continuous-time stochastic models:
//! sojourn and exit probabilities of a Markov process, rate-derived terms and
//! Gaussian component parameters.
//!
//! The library provides:
//! - An immutable expression tree with simplifying constructors
//! - Numeric evaluation and symbolic partial differentiation
//! - Free-parameter extraction and a readable text form
//! - Named parameter environments for expressions that refer to one another
//! - A JSON interchange format and a Gaussian model parameter container
//!
//! ## Basic Usage
//!
//! ```
//! use weight_algebra::weight::{algebra::multiply, ParamDefs, WeightExpr};
//!
//! let expr = multiply("rate", "t");
//! let defs = ParamDefs::new().with("rate", 0.25).with("t", 8);
//! assert_eq!(expr.eval(&defs), 2.0);
//! assert_eq!(expr.deriv(&ParamDefs::new(), "t"), WeightExpr::param("rate"));
//! ```

// Public modules
pub mod error;

// Expression algebra
pub mod weight;

// Model parameter containers
pub mod model;

// Re-exports for convenience
pub use error::{Result, WeightError};
pub use model::{GaussianModelParams, GaussianParams, Params};
pub use weight::{ParamDefs, WeightExpr};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
