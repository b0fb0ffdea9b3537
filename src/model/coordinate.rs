//! Generalized coordinates: the scalars a model is posed by.

use crate::errors::ModelError;
use crate::float_types::{Real, tolerance};

/// Whether a degree of freedom turns or slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionType {
    Rotational,
    Translational,
}

/// One generalized coordinate. Rotational values are radians,
/// translational values model length units.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    pub name: String,
    pub motion_type: MotionType,
    /// Value the coordinate returns to on reset.
    pub default_value: Real,
    /// Restoring stiffness used by forward-dynamic consumers.
    pub stiffness: Real,
    /// Slack allowed when moving a locked coordinate.
    pub tolerance: Real,
    /// Whether values are clamped into `range` on assignment.
    pub clamped: bool,
    /// Whether the coordinate refuses assignment altogether.
    pub locked: bool,
    value: Real,
    range: [Real; 2],
}

impl Coordinate {
    /// `range` must be ordered min ≤ max. The coordinate starts at
    /// `default_value`, clamped into range.
    pub fn new(
        name: impl Into<String>,
        motion_type: MotionType,
        default_value: Real,
        range: [Real; 2],
    ) -> Result<Self, ModelError> {
        let name = name.into();
        if range[0] > range[1] {
            return Err(ModelError::InvalidRange {
                name,
                min: range[0],
                max: range[1],
            });
        }
        Ok(Coordinate {
            name,
            motion_type,
            default_value,
            stiffness: 0.0,
            tolerance: tolerance(),
            clamped: true,
            locked: false,
            value: default_value.clamp(range[0], range[1]),
            range,
        })
    }

    #[inline]
    pub const fn value(&self) -> Real {
        self.value
    }

    #[inline]
    pub const fn range(&self) -> [Real; 2] {
        self.range
    }

    /// Assign a value. Clamped coordinates pull the value into range;
    /// locked coordinates reject any assignment that would actually move
    /// them.
    pub fn set_value(&mut self, value: Real) -> Result<(), ModelError> {
        if self.locked {
            if (value - self.value).abs() > self.tolerance {
                return Err(ModelError::LockedCoordinate(self.name.clone()));
            }
            return Ok(());
        }
        self.value = if self.clamped {
            value.clamp(self.range[0], self.range[1])
        } else {
            value
        };
        Ok(())
    }

    /// Return to the default value, bypassing the lock.
    pub fn reset(&mut self) {
        self.value = if self.clamped {
            self.default_value.clamp(self.range[0], self.range[1])
        } else {
            self.default_value
        };
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::float_types::PI;

    fn elbow() -> Coordinate {
        Coordinate::new("elbow_flex", MotionType::Rotational, 0.0, [0.0, PI]).unwrap()
    }

    #[test]
    fn clamped_values_stay_in_range() {
        let mut coordinate = elbow();
        coordinate.set_value(4.0).unwrap();
        assert_eq!(coordinate.value(), PI);
        coordinate.set_value(-1.0).unwrap();
        assert_eq!(coordinate.value(), 0.0);
    }

    #[test]
    fn unclamped_values_run_free() {
        let mut coordinate = elbow();
        coordinate.clamped = false;
        coordinate.set_value(4.0).unwrap();
        assert_eq!(coordinate.value(), 4.0);
    }

    #[test]
    fn locked_coordinates_refuse_to_move() {
        let mut coordinate = elbow();
        coordinate.set_value(1.0).unwrap();
        coordinate.locked = true;
        assert_eq!(
            coordinate.set_value(2.0),
            Err(ModelError::LockedCoordinate("elbow_flex".into()))
        );
        // re-assigning the held value is not a move
        assert!(coordinate.set_value(1.0).is_ok());
        assert_eq!(coordinate.value(), 1.0);
    }

    #[test]
    fn rejects_inverted_range() {
        let result = Coordinate::new("bad", MotionType::Translational, 0.0, [1.0, -1.0]);
        assert!(matches!(result, Err(ModelError::InvalidRange { .. })));
    }

    #[test]
    fn reset_restores_the_default() {
        let mut coordinate = elbow();
        coordinate.set_value(2.0).unwrap();
        coordinate.locked = true;
        coordinate.reset();
        assert_eq!(coordinate.value(), 0.0);
    }
}
