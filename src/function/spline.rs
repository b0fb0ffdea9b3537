//! Natural cubic spline interpolation.

use super::ScalarFunction;
use crate::errors::ModelError;
use crate::float_types::Real;

/// An interpolating cubic spline through a set of knots.
///
/// **Mathematical Foundation: Piecewise Cubic Interpolation**
///
/// On each interval [xᵢ, xᵢ₊₁] the curve is
/// ```text
/// f(x) = yᵢ + bᵢΔ + cᵢΔ² + dᵢΔ³,   Δ = x - xᵢ
/// ```
/// with coefficients from the Forsythe–Malcolm–Moler SPLINE routine:
/// C² continuity at interior knots, end conditions matching third
/// derivatives obtained from divided differences. Outside the knot range
/// the nearest end segment's cubic extends the curve.
#[derive(Debug, Clone, PartialEq)]
pub struct NaturalCubicSpline {
    x: Vec<Real>,
    y: Vec<Real>,
    b: Vec<Real>,
    c: Vec<Real>,
    d: Vec<Real>,
}

impl NaturalCubicSpline {
    /// Build the spline through `(x, y)` knots. `x` must be strictly
    /// increasing and both arrays must hold at least two matching
    /// entries.
    pub fn new(x: Vec<Real>, y: Vec<Real>) -> Result<Self, ModelError> {
        if x.len() != y.len() {
            return Err(ModelError::KnotCountMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        if x.len() < 2 {
            return Err(ModelError::TooFewKnots(x.len()));
        }
        for (index, window) in x.windows(2).enumerate() {
            if window[1] <= window[0] {
                return Err(ModelError::NonIncreasingKnots {
                    index: index + 1,
                    value: window[1],
                });
            }
        }

        let mut spline = NaturalCubicSpline {
            b: vec![0.0; x.len()],
            c: vec![0.0; x.len()],
            d: vec![0.0; x.len()],
            x,
            y,
        };
        spline.calc_coefficients();
        Ok(spline)
    }

    /// The interpolated knots, abscissae then ordinates.
    pub fn knots(&self) -> (&[Real], &[Real]) {
        (&self.x, &self.y)
    }

    fn calc_coefficients(&mut self) {
        let n = self.x.len();
        if n == 2 {
            let slope = (self.y[1] - self.y[0]) / (self.x[1] - self.x[0]);
            self.b[0] = slope;
            self.b[1] = slope;
            // c and d stay zero: a straight segment
            return;
        }

        let nm1 = n - 1;
        let x = &self.x;
        let y = &self.y;
        let mut b = vec![0.0; n];
        let mut c = vec![0.0; n];
        let mut d = vec![0.0; n];

        // Tridiagonal system: b diagonal, d off-diagonal, c right-hand side
        d[0] = x[1] - x[0];
        c[1] = (y[1] - y[0]) / d[0];
        for i in 1..nm1 {
            d[i] = x[i + 1] - x[i];
            b[i] = 2.0 * (d[i - 1] + d[i]);
            c[i + 1] = (y[i + 1] - y[i]) / d[i];
            c[i] = c[i + 1] - c[i];
        }

        // End conditions: third derivatives at the first and last knot
        // from divided differences
        b[0] = -d[0];
        b[nm1] = -d[n - 2];
        c[0] = 0.0;
        c[nm1] = 0.0;
        if n > 3 {
            c[0] = c[2] / (x[3] - x[1]) - c[1] / (x[2] - x[0]);
            c[nm1] = c[n - 2] / (x[nm1] - x[n - 3]) - c[n - 3] / (x[n - 2] - x[n - 4]);
            c[0] = c[0] * d[0] * d[0] / (x[3] - x[0]);
            c[nm1] = -c[nm1] * d[n - 2] * d[n - 2] / (x[nm1] - x[n - 4]);
        }

        // Forward elimination
        for i in 1..n {
            let t = d[i - 1] / b[i - 1];
            b[i] -= t * d[i - 1];
            c[i] -= t * c[i - 1];
        }

        // Back substitution
        c[nm1] /= b[nm1];
        for i in (0..nm1).rev() {
            c[i] = (c[i] - d[i] * c[i + 1]) / b[i];
        }

        // Recover the per-segment polynomial coefficients
        b[nm1] = (y[nm1] - y[nm1 - 1]) / d[nm1 - 1] + d[nm1 - 1] * (c[nm1 - 1] + 2.0 * c[nm1]);
        for i in 0..nm1 {
            b[i] = (y[i + 1] - y[i]) / d[i] - d[i] * (c[i + 1] + 2.0 * c[i]);
            d[i] = (c[i + 1] - c[i]) / d[i];
            c[i] *= 3.0;
        }
        c[nm1] *= 3.0;
        d[nm1] = d[n - 2];

        self.b = b;
        self.c = c;
        self.d = d;
    }

    /// Index of the segment whose cubic evaluates `at`; queries outside
    /// the knot range fall to the nearest end segment.
    fn segment(&self, at: Real) -> usize {
        let n = self.x.len();
        if at <= self.x[0] {
            return 0;
        }
        if at >= self.x[n - 2] {
            return n - 2;
        }
        self.x.partition_point(|&knot| knot <= at) - 1
    }
}

impl ScalarFunction for NaturalCubicSpline {
    fn value(&self, x: &[Real]) -> Real {
        let at = x[0];
        let i = self.segment(at);
        let dx = at - self.x[i];
        self.y[i] + dx * (self.b[i] + dx * (self.c[i] + dx * self.d[i]))
    }

    fn derivative(&self, components: &[usize], x: &[Real]) -> Real {
        let at = x[0];
        let i = self.segment(at);
        let dx = at - self.x[i];
        match components.len() {
            1 => self.b[i] + dx * (2.0 * self.c[i] + 3.0 * self.d[i] * dx),
            2 => 2.0 * self.c[i] + 6.0 * self.d[i] * dx,
            _ => 0.0,
        }
    }

    fn argument_size(&self) -> usize {
        1
    }

    fn max_derivative_order(&self) -> usize {
        2
    }
}
