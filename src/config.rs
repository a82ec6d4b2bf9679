/// Absolute tolerance used by approximate comparisons.
///
/// Only an absolute bound is applied, so a fixed tolerance is unsuitable for
/// very large or very small magnitudes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    pub abs: f64,
}

impl Tolerance {
    pub fn new(abs: f64) -> Self {
        Self { abs }
    }

    /// Tight tolerance for checking floating-point identities
    pub fn strict() -> Self {
        Self { abs: 1e-9 }
    }

    /// Returns true when `|a - b|` is strictly below the tolerance
    pub fn accepts(&self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.abs
    }
}

impl Default for Tolerance {
    /// The tolerance behind `is_close`
    fn default() -> Self {
        Self { abs: 1e-2 }
    }
}
