//! Joints: ordered stacks of degrees of freedom between two bodies.

use super::Model;
use super::axis::TransformAxis;
use super::coordinate::MotionType;
use crate::errors::ModelError;
use crate::transform::{AngleUnit, Transform};

/// A joint connecting `child_body` to `parent_body` through an ordered
/// list of [`TransformAxis`] degrees of freedom.
///
/// The joint's local transform maps child-frame coordinates into the
/// parent frame. Axes apply in declaration order, each one
/// right-multiplied onto the accumulating transform, so a point feels
/// the first-listed axis first. Listing rotations before the
/// translational offset gives the usual pivot joint.
#[derive(Debug)]
pub struct Joint {
    pub name: String,
    pub parent_body: String,
    pub child_body: String,
    axes: Vec<TransformAxis>,
}

impl Joint {
    pub fn new(
        name: impl Into<String>,
        parent_body: impl Into<String>,
        child_body: impl Into<String>,
    ) -> Self {
        Joint {
            name: name.into(),
            parent_body: parent_body.into(),
            child_body: child_body.into(),
            axes: Vec::new(),
        }
    }

    /// Append a degree of freedom; order is significant.
    pub fn add_axis(&mut self, axis: TransformAxis) -> &mut Self {
        self.axes.push(axis);
        self
    }

    pub fn axes(&self) -> &[TransformAxis] {
        &self.axes
    }

    /// The child-to-parent transform at the model's current coordinate
    /// values. Rotational axis values are radians.
    pub fn local_transform(&self, model: &Model) -> Result<Transform, ModelError> {
        let mut transform = Transform::identity();
        for axis in &self.axes {
            let q = match axis.coordinate() {
                Some(name) => model
                    .coordinate(name)
                    .ok_or_else(|| ModelError::UnknownCoordinate(name.to_string()))?
                    .value(),
                None => 0.0,
            };
            let displacement = axis.value_at(q);
            match axis.motion_type {
                MotionType::Rotational => {
                    transform.rotate_axis(displacement, AngleUnit::Radians, &axis.axis);
                },
                MotionType::Translational => {
                    transform.translate(&(axis.axis * displacement));
                },
            }
        }
        Ok(transform)
    }
}
