pub mod number;


pub use number::Float;
pub use number::Numeric;
