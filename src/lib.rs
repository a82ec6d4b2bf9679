//! # minigrad-ops
//!
//! Scalar primitives for a small automatic differentiation engine. This crate
//! is the bottom layer: it knows nothing about graphs or tensors, only how to
//! evaluate elementary functions and how to push a gradient back through each
//! of them.
//!
//! ## Features
//!
//! - Elementary operators: arithmetic, comparisons, `relu`, a numerically
//!   stable `sigmoid`, `log` and `exp`
//! - Backward functions returning `f'(x) * d` for an upstream gradient `d`
//! - An [`Operator`](ops::Operator) trait pairing each primitive's forward and
//!   gradient computation
//! - Generic `map` / `zip_with` / `reduce` combinators and the list helpers
//!   built from them
//! - Domain errors reported through [`OpError`], never as sentinel values
//!
//! ```
//! use minigrad_ops::{log, relu_back, sigmoid, sum};
//!
//! assert_eq!(sigmoid(0.0), 0.5);
//! assert_eq!(relu_back(-1.0, 7.0), 0.0);
//! assert_eq!(sum(&[1.0, 2.0, 3.0]), 6.0);
//! assert!(log(0.0).is_err());
//! ```
pub mod backend;
pub mod config;
pub mod error;
pub mod functional;
pub mod ops;

// Re-export commonly used types for convenience
pub use backend::{Float, Numeric};
pub use config::Tolerance;
pub use error::{OpError, OpResult};

pub use functional::{
    add_lists, map, neg_list, prod, reduce, sum, try_map, zip_with, zip_with_exact,
};
pub use ops::{
    add, eq, exp, exp_back, id, inv, inv_back, is_close, is_close_with, log, log_back, lt, max,
    mul, mul_back, neg, neg_back, relu, relu_back, sigmoid, sigmoid_back,
};
