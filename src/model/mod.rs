//! # Model Parameters
//!
//! Containers for the parameters of a Gaussian continuous-time model: named
//! Gaussian components plus probability and rate parameter sets, with the
//! wait/exit weights of each rate derived through the weight algebra.
//!
//! ## Example Usage
//!
//! ```rust
//! use weight_algebra::model::GaussianModelParams;
//! use weight_algebra::weight::WeightExpr;
//!
//! let model = GaussianModelParams::from_json(
//!     r#"{"gauss": {"g0": {"mu": 1.5, "tau": 2.0}}, "prob": {}, "rate": {"k": 0.5}}"#,
//! )
//! .unwrap();
//!
//! let params = model.params(&WeightExpr::Float(2.0));
//! let wait = WeightExpr::param("k_wait").eval(&params.defs);
//! assert!((wait - (-1.0_f64).exp()).abs() < 1e-12);
//! ```

pub mod config;
pub mod gaussian;
pub mod params;

// Re-export key types
pub use config::SojournConfig;
pub use gaussian::{GaussianModelParams, GaussianParams};
pub use params::Params;
