//! Affine functions of one or more arguments.

use super::ScalarFunction;
use crate::errors::ModelError;
use crate::float_types::Real;

/// f(x) = c₀x₀ + … + cₙ₋₁xₙ₋₁ + cₙ, with the last coefficient the
/// intercept.
#[derive(Debug, Clone, PartialEq)]
pub struct Linear {
    coefficients: Vec<Real>,
}

impl Linear {
    /// At least one coefficient (the intercept) is required.
    pub fn new(coefficients: Vec<Real>) -> Result<Self, ModelError> {
        if coefficients.is_empty() {
            return Err(ModelError::NoCoefficients);
        }
        Ok(Linear { coefficients })
    }

    /// Single-argument form: f(x) = slope·x + intercept.
    pub fn with_slope_intercept(slope: Real, intercept: Real) -> Self {
        Linear {
            coefficients: vec![slope, intercept],
        }
    }

    pub fn coefficients(&self) -> &[Real] {
        &self.coefficients
    }
}

impl Default for Linear {
    /// The identity map f(x) = x.
    fn default() -> Self {
        Self::with_slope_intercept(1.0, 0.0)
    }
}

impl ScalarFunction for Linear {
    fn value(&self, x: &[Real]) -> Real {
        let intercept_index = self.coefficients.len() - 1;
        self.coefficients[..intercept_index]
            .iter()
            .zip(x)
            .map(|(coefficient, argument)| coefficient * argument)
            .sum::<Real>()
            + self.coefficients[intercept_index]
    }

    fn derivative(&self, components: &[usize], _x: &[Real]) -> Real {
        match components {
            [index] if *index < self.coefficients.len() - 1 => self.coefficients[*index],
            _ => 0.0,
        }
    }

    fn argument_size(&self) -> usize {
        self.coefficients.len() - 1
    }

    fn max_derivative_order(&self) -> usize {
        usize::MAX
    }
}
