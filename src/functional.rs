//! Higher-order list combinators and the list helpers derived from them.
//!
//! Inputs are borrowed slices and are never mutated, every combinator builds
//! a fresh `Vec`. Elements are cloned out of the slice before being handed
//! to the caller's function, which for scalars is a plain copy.
//!
//! ```
//! use minigrad_ops::functional::{add_lists, map, reduce, sum};
//! use minigrad_ops::ops::neg;
//!
//! assert_eq!(map(neg, &[1.0, -2.0]), vec![-1.0, 2.0]);
//! assert_eq!(add_lists(&[1.0, 2.0, 3.0], &[10.0, 20.0]), vec![11.0, 22.0]);
//! assert_eq!(reduce(|acc, x| acc - x, &[1.0, 2.0, 3.0], 10.0), 4.0);
//! assert_eq!(sum::<f64>(&[]), 0.0);
//! ```

use crate::backend::Numeric;
use crate::error::{OpError, OpResult};
use crate::ops::{add, mul, neg};

/// Applies `f` to every element in order.
pub fn map<A, B, F>(f: F, seq: &[A]) -> Vec<B>
where
    A: Clone,
    F: FnMut(A) -> B,
{
    seq.iter().cloned().map(f).collect()
}

/// Like [`map`] for fallible functions. Stops at the first error and returns it.
pub fn try_map<A, B, F>(f: F, seq: &[A]) -> OpResult<Vec<B>>
where
    A: Clone,
    F: FnMut(A) -> OpResult<B>,
{
    seq.iter().cloned().map(f).collect()
}

/// Combines elements pairwise. The result has the length of the shorter
/// input; surplus elements of the longer one are ignored.
pub fn zip_with<A, B, C, F>(mut f: F, left: &[A], right: &[B]) -> Vec<C>
where
    A: Clone,
    B: Clone,
    F: FnMut(A, B) -> C,
{
    if left.len() != right.len() {
        tracing::trace!(
            left = left.len(),
            right = right.len(),
            "zip_with truncating to the shorter sequence"
        );
    }
    left.iter()
        .cloned()
        .zip(right.iter().cloned())
        .map(|(a, b)| f(a, b))
        .collect()
}

/// Strict [`zip_with`]: unequal lengths are an error instead of a truncation.
pub fn zip_with_exact<A, B, C, F>(f: F, left: &[A], right: &[B]) -> OpResult<Vec<C>>
where
    A: Clone,
    B: Clone,
    F: FnMut(A, B) -> C,
{
    if left.len() != right.len() {
        return Err(OpError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    Ok(zip_with(f, left, right))
}

/// Left fold: `f(...f(f(start, seq[0]), seq[1])..., seq[n-1])`, or `start`
/// when `seq` is empty.
pub fn reduce<A, R, F>(f: F, seq: &[A], start: R) -> R
where
    A: Clone,
    F: FnMut(R, A) -> R,
{
    seq.iter().cloned().fold(start, f)
}

/// Negates every element.
pub fn neg_list<T: Numeric>(seq: &[T]) -> Vec<T> {
    map(neg, seq)
}

/// Element-wise sum, truncated to the shorter input.
pub fn add_lists<T: Numeric>(left: &[T], right: &[T]) -> Vec<T> {
    zip_with(add, left, right)
}

/// Sum of all elements, 0 for an empty slice.
pub fn sum<T: Numeric>(seq: &[T]) -> T {
    reduce(add, seq, T::zero())
}

/// Product of all elements, 1 for an empty slice.
pub fn prod<T: Numeric>(seq: &[T]) -> T {
    reduce(mul, seq, T::one())
}
