//! Scalar kinematic functions: the curves that map generalized
//! coordinates to joint displacements, muscle parameters, and anything
//! else a model expresses as `f(q)`.
//!
//! Everything here is a [`ScalarFunction`] trait object so joints and
//! decorators can hold any curve shape behind one seam.

use crate::float_types::Real;

mod constant;
pub use constant::Constant;

mod linear;
pub use linear::Linear;

mod scaler;
pub use scaler::FunctionScaler;

mod spline;
pub use spline::NaturalCubicSpline;

/// A scalar-valued function of one or more real arguments, with partial
/// derivatives up to [`max_derivative_order`](ScalarFunction::max_derivative_order).
pub trait ScalarFunction {
    /// Evaluate the function. `x` must hold
    /// [`argument_size`](ScalarFunction::argument_size) values.
    fn value(&self, x: &[Real]) -> Real;

    /// Evaluate a partial derivative. `components` lists the argument
    /// indices differentiated against, in sequence: `[0]` is ∂f/∂x₀ and
    /// `[0, 0]` is ∂²f/∂x₀². Orders the function cannot supply evaluate
    /// to zero.
    fn derivative(&self, components: &[usize], x: &[Real]) -> Real;

    /// Number of arguments the function expects.
    fn argument_size(&self) -> usize;

    /// Highest derivative order [`derivative`](ScalarFunction::derivative)
    /// can produce.
    fn max_derivative_order(&self) -> usize;
}
