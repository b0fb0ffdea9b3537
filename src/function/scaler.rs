//! A decorator that scales another function's output.

use super::ScalarFunction;
use crate::float_types::Real;

/// Wraps an owned [`ScalarFunction`] and multiplies its value and every
/// derivative by a fixed factor. The wrapped function is owned
/// exclusively and dropped with the scaler.
pub struct FunctionScaler {
    function: Box<dyn ScalarFunction>,
    scale: Real,
}

impl FunctionScaler {
    pub fn new(function: Box<dyn ScalarFunction>, scale: Real) -> Self {
        FunctionScaler { function, scale }
    }

    pub const fn scale(&self) -> Real {
        self.scale
    }

    pub fn inner(&self) -> &dyn ScalarFunction {
        self.function.as_ref()
    }
}

impl ScalarFunction for FunctionScaler {
    fn value(&self, x: &[Real]) -> Real {
        self.scale * self.function.value(x)
    }

    fn derivative(&self, components: &[usize], x: &[Real]) -> Real {
        self.scale * self.function.derivative(components, x)
    }

    fn argument_size(&self) -> usize {
        self.function.argument_size()
    }

    fn max_derivative_order(&self) -> usize {
        self.function.max_derivative_order()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::function::Linear;

    #[test]
    fn scales_value_and_derivative() {
        let scaled = FunctionScaler::new(Box::new(Linear::with_slope_intercept(3.0, 1.0)), 2.0);
        assert_eq!(scaled.value(&[2.0]), 14.0);
        assert_eq!(scaled.derivative(&[0], &[2.0]), 6.0);
    }

    #[test]
    fn forwards_queries_unchanged() {
        let inner = Linear::new(vec![1.0, 2.0, 0.5]).unwrap();
        let scaled = FunctionScaler::new(Box::new(inner), -1.0);
        assert_eq!(scaled.argument_size(), 2);
        assert_eq!(scaled.max_derivative_order(), usize::MAX);
    }

    #[test]
    fn scalers_nest() {
        let twice = FunctionScaler::new(Box::new(Linear::default()), 2.0);
        let half = FunctionScaler::new(Box::new(twice), 0.5);
        assert_eq!(half.value(&[7.0]), 7.0);
        assert_eq!(half.scale(), 0.5);
        assert_eq!(half.inner().value(&[7.0]), 14.0);
    }
}
