// ops/mod.rs
// Elementary scalar operators and their derivative-propagation counterparts.
// Each differentiable primitive is also exposed as a unit struct implementing
// `Operator`, which pairs the forward computation with its gradient.
use crate::backend::Float;
use crate::error::{OpError, OpResult};
use std::any::type_name;

// All differentiable primitives implement this trait.
pub trait Operator<T>: std::fmt::Debug
where
    T: Float,
{
    // Compute function evaluates the primitive on its inputs.
    fn compute(&self, inputs: &[T]) -> OpResult<T>;

    // Gradient function combines the inputs with the upstream gradient and
    // returns one local gradient per input (chain rule).
    fn gradient(&self, grad_output: T, inputs: &[T]) -> OpResult<Vec<T>>;

    // Get number of inputs this operator expects
    fn num_inputs(&self) -> usize;

    fn name(&self) -> String {
        let full_name = type_name::<Self>();
        full_name
            .rsplit("::")
            .next()
            .unwrap_or(full_name)
            .to_string()
    }

    fn clone_op(&self) -> Box<dyn Operator<T>>;
}

impl<T> Operator<T> for Box<dyn Operator<T>>
where
    T: Float,
{
    fn compute(&self, inputs: &[T]) -> OpResult<T> {
        self.as_ref().compute(inputs)
    }

    fn gradient(&self, grad_output: T, inputs: &[T]) -> OpResult<Vec<T>> {
        self.as_ref().gradient(grad_output, inputs)
    }

    fn num_inputs(&self) -> usize {
        self.as_ref().num_inputs()
    }

    fn name(&self) -> String {
        self.as_ref().name()
    }

    fn clone_op(&self) -> Box<dyn Operator<T>> {
        self.as_ref().clone_op()
    }
}

/// Rejects input slices whose length differs from the operator's arity.
pub(crate) fn check_arity<T, O>(op: &O, inputs: &[T]) -> OpResult<()>
where
    T: Float,
    O: Operator<T> + ?Sized,
{
    let expected = op.num_inputs();
    if inputs.len() != expected {
        return Err(OpError::Arity {
            op: op.name(),
            expected,
            got: inputs.len(),
        });
    }
    Ok(())
}

pub mod backward;
pub mod comparison;
pub mod scalar;
pub mod unary;


// Re-export all operations for convenient importing
pub use backward::*;
pub use comparison::*;
pub use scalar::*;
pub use unary::*;
