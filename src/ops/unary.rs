// unary.rs
// Unary activation and transcendental primitives

use crate::backend::{Float, Numeric};
use crate::error::{OpError, OpResult};
use crate::ops::backward::{exp_back, log_back, relu_back, sigmoid_back};
use crate::ops::comparison::max;
use crate::ops::{Operator, check_arity};

/// Logistic sigmoid 1 / (1 + e^-x).
///
/// Evaluated in two branches so `exp` is only ever called on a non-positive
/// argument: `1 / (1 + e^-x)` for `x >= 0` and `e^x / (1 + e^x)` for `x < 0`.
/// Large inputs of either sign saturate towards 1 or 0 instead of overflowing.
pub fn sigmoid<T: Float>(x: T) -> T {
    if x >= T::zero() {
        T::one() / (T::one() + (-x).exp())
    } else {
        let ex = x.exp();
        ex / (T::one() + ex)
    }
}

/// max(0, x)
#[inline]
pub fn relu<T: Numeric>(x: T) -> T {
    max(T::zero(), x)
}

/// Natural logarithm. Non-positive and NaN inputs are domain errors; NaN is
/// rejected rather than passed through so a bad value surfaces at the first
/// `log` it reaches.
pub fn log<T: Float>(x: T) -> OpResult<T> {
    if x > T::zero() {
        Ok(x.ln())
    } else {
        Err(OpError::domain("log", x))
    }
}

/// e^x. Overflows to +inf for large x.
#[inline]
pub fn exp<T: Float>(x: T) -> T {
    x.exp()
}

/// Element-wise exponential: output = exp(input)
#[derive(Debug, Clone, Copy, Default)]
pub struct Exp;

impl<T> Operator<T> for Exp
where
    T: Float,
{
    fn compute(&self, inputs: &[T]) -> OpResult<T> {
        check_arity(self, inputs)?;
        Ok(exp(inputs[0]))
    }

    fn gradient(&self, grad_output: T, inputs: &[T]) -> OpResult<Vec<T>> {
        check_arity(self, inputs)?;
        // For exp: d/dx(exp(x)) = exp(x)
        Ok(vec![exp_back(inputs[0], grad_output)])
    }

    fn num_inputs(&self) -> usize {
        1
    }

    fn clone_op(&self) -> Box<dyn Operator<T>> {
        Box::new(*self)
    }
}

/// Natural logarithm: output = log(input)
#[derive(Debug, Clone, Copy, Default)]
pub struct Log;

impl<T> Operator<T> for Log
where
    T: Float,
{
    fn compute(&self, inputs: &[T]) -> OpResult<T> {
        check_arity(self, inputs)?;
        log(inputs[0])
    }

    fn gradient(&self, grad_output: T, inputs: &[T]) -> OpResult<Vec<T>> {
        check_arity(self, inputs)?;
        // For log: d/dx(log(x)) = 1/x
        Ok(vec![log_back(inputs[0], grad_output)?])
    }

    fn num_inputs(&self) -> usize {
        1
    }

    fn clone_op(&self) -> Box<dyn Operator<T>> {
        Box::new(*self)
    }
}

/// Logistic activation: output = sigmoid(input)
#[derive(Debug, Clone, Copy, Default)]
pub struct Sigmoid;

impl<T> Operator<T> for Sigmoid
where
    T: Float,
{
    fn compute(&self, inputs: &[T]) -> OpResult<T> {
        check_arity(self, inputs)?;
        Ok(sigmoid(inputs[0]))
    }

    fn gradient(&self, grad_output: T, inputs: &[T]) -> OpResult<Vec<T>> {
        check_arity(self, inputs)?;
        Ok(vec![sigmoid_back(inputs[0], grad_output)])
    }

    fn num_inputs(&self) -> usize {
        1
    }

    fn clone_op(&self) -> Box<dyn Operator<T>> {
        Box::new(*self)
    }
}

/// Rectified linear unit: output = max(0, input)
#[derive(Debug, Clone, Copy, Default)]
pub struct ReLU;

impl<T> Operator<T> for ReLU
where
    T: Float,
{
    fn compute(&self, inputs: &[T]) -> OpResult<T> {
        check_arity(self, inputs)?;
        Ok(relu(inputs[0]))
    }

    fn gradient(&self, grad_output: T, inputs: &[T]) -> OpResult<Vec<T>> {
        check_arity(self, inputs)?;
        Ok(vec![relu_back(inputs[0], grad_output)])
    }

    fn num_inputs(&self) -> usize {
        1
    }

    fn clone_op(&self) -> Box<dyn Operator<T>> {
        Box::new(*self)
    }
}
