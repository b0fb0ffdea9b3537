//! The constant function.

use super::ScalarFunction;
use crate::float_types::Real;

/// f(x) = value, for any x. Used for joint offsets that no coordinate
/// drives.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Constant {
    value: Real,
}

impl Constant {
    pub const fn new(value: Real) -> Self {
        Constant { value }
    }
}

impl ScalarFunction for Constant {
    fn value(&self, _x: &[Real]) -> Real {
        self.value
    }

    fn derivative(&self, _components: &[usize], _x: &[Real]) -> Real {
        0.0
    }

    fn argument_size(&self) -> usize {
        1
    }

    fn max_derivative_order(&self) -> usize {
        usize::MAX
    }
}
