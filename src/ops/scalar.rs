// scalar.rs
// Arithmetic primitives: add, mul, neg, id, inv

use crate::backend::Float;
use crate::backend::Numeric;
use crate::error::{OpError, OpResult};
use crate::ops::backward::{inv_back, mul_back, neg_back};
use crate::ops::{Operator, check_arity};

/// x * y
#[inline]
pub fn mul<T: Numeric>(x: T, y: T) -> T {
    x * y
}

/// x + y
#[inline]
pub fn add<T: Numeric>(x: T, y: T) -> T {
    x + y
}

/// -x
#[inline]
pub fn neg<T: Numeric>(x: T) -> T {
    -x
}

/// Identity
#[inline]
pub fn id<T>(x: T) -> T {
    x
}

/// Reciprocal 1 / x. Zero (of either sign) is a division error.
pub fn inv<T: Numeric>(x: T) -> OpResult<T> {
    if x.is_zero() {
        return Err(OpError::division_by_zero("inv"));
    }
    Ok(T::one() / x)
}

/// Addition: output = input1 + input2
#[derive(Debug, Clone, Copy, Default)]
pub struct Add;

impl<T> Operator<T> for Add
where
    T: Float,
{
    fn compute(&self, inputs: &[T]) -> OpResult<T> {
        check_arity(self, inputs)?;
        Ok(add(inputs[0], inputs[1]))
    }

    fn gradient(&self, grad_output: T, inputs: &[T]) -> OpResult<Vec<T>> {
        check_arity(self, inputs)?;
        // d/dx(x + y) = 1 for both inputs
        Ok(vec![grad_output, grad_output])
    }

    fn num_inputs(&self) -> usize {
        2
    }

    fn clone_op(&self) -> Box<dyn Operator<T>> {
        Box::new(*self)
    }
}

/// Multiplication: output = input1 * input2
#[derive(Debug, Clone, Copy, Default)]
pub struct Mul;

impl<T> Operator<T> for Mul
where
    T: Float,
{
    fn compute(&self, inputs: &[T]) -> OpResult<T> {
        check_arity(self, inputs)?;
        Ok(mul(inputs[0], inputs[1]))
    }

    fn gradient(&self, grad_output: T, inputs: &[T]) -> OpResult<Vec<T>> {
        check_arity(self, inputs)?;
        let (grad_x, grad_y) = mul_back(inputs[0], inputs[1], grad_output);
        Ok(vec![grad_x, grad_y])
    }

    fn num_inputs(&self) -> usize {
        2
    }

    fn clone_op(&self) -> Box<dyn Operator<T>> {
        Box::new(*self)
    }
}

/// Negation: output = -input
#[derive(Debug, Clone, Copy, Default)]
pub struct Neg;

impl<T> Operator<T> for Neg
where
    T: Float,
{
    fn compute(&self, inputs: &[T]) -> OpResult<T> {
        check_arity(self, inputs)?;
        Ok(neg(inputs[0]))
    }

    fn gradient(&self, grad_output: T, inputs: &[T]) -> OpResult<Vec<T>> {
        check_arity(self, inputs)?;
        Ok(vec![neg_back(inputs[0], grad_output)])
    }

    fn num_inputs(&self) -> usize {
        1
    }

    fn clone_op(&self) -> Box<dyn Operator<T>> {
        Box::new(*self)
    }
}

/// Identity: output = input
#[derive(Debug, Clone, Copy, Default)]
pub struct Id;

impl<T> Operator<T> for Id
where
    T: Float,
{
    fn compute(&self, inputs: &[T]) -> OpResult<T> {
        check_arity(self, inputs)?;
        Ok(id(inputs[0]))
    }

    fn gradient(&self, grad_output: T, inputs: &[T]) -> OpResult<Vec<T>> {
        check_arity(self, inputs)?;
        Ok(vec![grad_output])
    }

    fn num_inputs(&self) -> usize {
        1
    }

    fn clone_op(&self) -> Box<dyn Operator<T>> {
        Box::new(*self)
    }
}

/// Reciprocal: output = 1 / input
#[derive(Debug, Clone, Copy, Default)]
pub struct Inv;

impl<T> Operator<T> for Inv
where
    T: Float,
{
    fn compute(&self, inputs: &[T]) -> OpResult<T> {
        check_arity(self, inputs)?;
        inv(inputs[0])
    }

    fn gradient(&self, grad_output: T, inputs: &[T]) -> OpResult<Vec<T>> {
        check_arity(self, inputs)?;
        // d/dx(1/x) = -1/x²
        Ok(vec![inv_back(inputs[0], grad_output)?])
    }

    fn num_inputs(&self) -> usize {
        1
    }

    fn clone_op(&self) -> Box<dyn Operator<T>> {
        Box::new(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        assert_eq!(mul(3.0, 4.0), 12.0);
        assert_eq!(add(3.0, 4.0), 7.0);
        assert_eq!(neg(3.0), -3.0);
        assert_eq!(neg(-0.5_f32), 0.5);
        assert_eq!(id(42.0), 42.0);
        assert_eq!(id("anything"), "anything");
    }

    #[test]
    fn test_inv() {
        assert_eq!(inv(4.0).unwrap(), 0.25);
        assert_eq!(inv(-2.0).unwrap(), -0.5);
        assert_eq!(inv(0.5_f32).unwrap(), 2.0);
    }

    #[test]
    fn test_inv_zero_is_error() {
        let err = inv(0.0).unwrap_err();
        assert_eq!(err, OpError::DivisionByZero { op: "inv" });
        assert!(err.is_domain_error());
        assert!(inv(-0.0).is_err());
    }

    #[test]
    fn test_inv_operator_gradient() {
        let grads = Inv.gradient(3.0, &[2.0_f64]).unwrap();
        assert_eq!(grads, vec![-0.75]);
        assert!(Inv.gradient(1.0, &[0.0_f64]).is_err());
    }
}
