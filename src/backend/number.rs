// src/backend/number.rs

use num_traits::{One, Zero};
use std::cmp::{PartialEq, PartialOrd};
use std::default::Default;
use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Base trait for the scalar element type every operator works on.
/// Provides the arithmetic, comparisons and conversions the operators need.
/// Neutral elements come from `num_traits` (`Zero::is_zero` treats -0.0 as zero).
/// Only signed types make sense here since negation is an elementary operator.
pub trait Numeric:
    // Basic arithmetic operations
    Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Div<Output = Self> +
    // Negation
    Neg<Output = Self> +
    // Comparisons
    PartialOrd + PartialEq +
    // Essential traits
    Clone + Copy + Debug + Display + Default +
    Zero + One +
    Send + Sync + 'static
{
    /// Converts to f64, used for tolerances and error reporting
    fn to_f64(self) -> f64;
}

/// Floating-point scalars: the transcendental functions behind `exp`, `log`
/// and `sigmoid`.
pub trait Float: Numeric {
    /// Exponential function (e^x)
    fn exp(self) -> Self;

    /// Natural logarithm
    fn ln(self) -> Self;
}

// ============= NUMERIC IMPLEMENTATIONS =============

impl Numeric for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

impl Float for f64 {
    fn exp(self) -> Self {
        self.exp()
    }

    fn ln(self) -> Self {
        self.ln()
    }
}

impl Numeric for f32 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Float for f32 {
    fn exp(self) -> Self {
        self.exp()
    }

    fn ln(self) -> Self {
        self.ln()
    }
}
