// backward.rs
// Derivative propagation for the elementary operators.
// Each function takes the primitive's input `x` and the upstream gradient `d`
// and returns the local contribution f'(x) * d.

use crate::backend::{Float, Numeric};
use crate::error::{OpError, OpResult};
use crate::ops::unary::sigmoid;

/// Gradient of log: d / x.
pub fn log_back<T: Numeric>(x: T, d: T) -> OpResult<T> {
    if x.is_zero() {
        return Err(OpError::division_by_zero("log_back"));
    }
    Ok(d / x)
}

/// Gradient of inv: -d / x². Fails when x² is zero, which includes tiny
/// non-zero x whose square underflows.
pub fn inv_back<T: Numeric>(x: T, d: T) -> OpResult<T> {
    let squared = x * x;
    if squared.is_zero() {
        return Err(OpError::division_by_zero("inv_back"));
    }
    Ok(-d / squared)
}

/// Gradient of relu: d where x > 0, zero elsewhere (including at x = 0).
#[inline]
pub fn relu_back<T: Numeric>(x: T, d: T) -> T {
    if x > T::zero() { d } else { T::zero() }
}

/// Gradient of exp: e^x * d.
#[inline]
pub fn exp_back<T: Float>(x: T, d: T) -> T {
    x.exp() * d
}

/// Gradient of sigmoid: s(x) * (1 - s(x)) * d, using the stable sigmoid.
pub fn sigmoid_back<T: Float>(x: T, d: T) -> T {
    let s = sigmoid(x);
    s * (T::one() - s) * d
}

/// Gradient of neg: -d.
#[inline]
pub fn neg_back<T: Numeric>(_x: T, d: T) -> T {
    -d
}

/// Gradients of x * y with respect to x and y.
#[inline]
pub fn mul_back<T: Numeric>(x: T, y: T, d: T) -> (T, T) {
    (y * d, x * d)
}
