//! Joint degrees of freedom.

use super::coordinate::MotionType;
use crate::float_types::Real;
use crate::function::ScalarFunction;
use nalgebra::Vector3;

/// One degree of freedom of a joint: a unit axis, a function shaping the
/// motion along or about it, and optionally the name of the coordinate
/// driving it.
///
/// The axis owns its function exclusively. An axis with no coordinate is
/// a fixed offset: its function is evaluated at zero.
pub struct TransformAxis {
    pub motion_type: MotionType,
    pub axis: Vector3<Real>,
    function: Box<dyn ScalarFunction>,
    coordinate: Option<String>,
}

impl TransformAxis {
    /// A rotational degree of freedom about `axis`.
    pub fn rotation(
        axis: Vector3<Real>,
        function: Box<dyn ScalarFunction>,
        coordinate: Option<String>,
    ) -> Self {
        TransformAxis {
            motion_type: MotionType::Rotational,
            axis,
            function,
            coordinate,
        }
    }

    /// A translational degree of freedom along `axis`.
    pub fn translation(
        axis: Vector3<Real>,
        function: Box<dyn ScalarFunction>,
        coordinate: Option<String>,
    ) -> Self {
        TransformAxis {
            motion_type: MotionType::Translational,
            axis,
            function,
            coordinate,
        }
    }

    /// Name of the driving coordinate, if any.
    pub fn coordinate(&self) -> Option<&str> {
        self.coordinate.as_deref()
    }

    pub fn function(&self) -> &dyn ScalarFunction {
        self.function.as_ref()
    }

    /// The axis displacement for a coordinate value `q`. Uncoupled axes
    /// are evaluated at zero by the caller.
    pub fn value_at(&self, q: Real) -> Real {
        self.function.value(&[q])
    }
}

impl std::fmt::Debug for TransformAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformAxis")
            .field("motion_type", &self.motion_type)
            .field("axis", &self.axis)
            .field("coordinate", &self.coordinate)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::function::{Constant, Linear};

    #[test]
    fn coupled_axis_follows_its_function() {
        let axis = TransformAxis::rotation(
            Vector3::z(),
            Box::new(Linear::with_slope_intercept(2.0, 0.0)),
            Some("knee_angle".into()),
        );
        assert_eq!(axis.coordinate(), Some("knee_angle"));
        assert_eq!(axis.value_at(0.5), 1.0);
    }

    #[test]
    fn uncoupled_axis_is_a_fixed_offset() {
        let axis = TransformAxis::translation(Vector3::x(), Box::new(Constant::new(0.3)), None);
        assert_eq!(axis.coordinate(), None);
        assert_eq!(axis.value_at(0.0), 0.3);
    }
}
