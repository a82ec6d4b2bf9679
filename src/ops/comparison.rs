// comparison.rs
// Comparison primitives. Results use the boolean-as-float encoding
// (1.0 for true, 0.0 for false) so they can feed straight back into
// arithmetic.

use crate::backend::Numeric;
use crate::config::Tolerance;

#[inline]
fn indicator<T: Numeric>(condition: bool) -> T {
    if condition { T::one() } else { T::zero() }
}

/// 1.0 if x < y else 0.0
#[inline]
pub fn lt<T: Numeric>(x: T, y: T) -> T {
    indicator(x < y)
}

/// 1.0 if x == y else 0.0
#[inline]
pub fn eq<T: Numeric>(x: T, y: T) -> T {
    indicator(x == y)
}

/// x if x > y else y. Ties (and any comparison involving NaN) return y.
#[inline]
pub fn max<T: Numeric>(x: T, y: T) -> T {
    if x > y { x } else { y }
}

/// 1.0 if |x - y| < 0.01 else 0.0
#[inline]
pub fn is_close<T: Numeric>(x: T, y: T) -> T {
    is_close_with(x, y, &Tolerance::default())
}

/// Same as [`is_close`] with a configured absolute tolerance.
pub fn is_close_with<T: Numeric>(x: T, y: T, tolerance: &Tolerance) -> T {
    indicator(tolerance.accepts(x.to_f64(), y.to_f64()))
}
