//! Muscles and the geometric paths they act along.

use super::{Model, Pose};
use crate::errors::ModelError;
use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

/// Activation window of a conditional path point: the point takes part
/// in the path only while `coordinate` lies inside `range`.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCondition {
    pub coordinate: String,
    pub range: [Real; 2],
}

/// One point of a muscle path, fixed in a body frame, optionally active
/// only over a coordinate range (a via point).
#[derive(Debug, Clone, PartialEq)]
pub struct PathPoint {
    /// Name of the body the point is fixed in.
    pub body: String,
    /// Location in the body frame.
    pub location: Vector3<Real>,
    condition: Option<PathCondition>,
}

impl PathPoint {
    /// A point that is always part of the path.
    pub fn new(body: impl Into<String>, location: Vector3<Real>) -> Self {
        PathPoint {
            body: body.into(),
            location,
            condition: None,
        }
    }

    /// A via point: active only while `coordinate` is inside `range`.
    pub fn conditional(
        body: impl Into<String>,
        location: Vector3<Real>,
        coordinate: impl Into<String>,
        range: [Real; 2],
    ) -> Self {
        PathPoint {
            body: body.into(),
            location,
            condition: Some(PathCondition {
                coordinate: coordinate.into(),
                range,
            }),
        }
    }

    pub fn condition(&self) -> Option<&PathCondition> {
        self.condition.as_ref()
    }

    /// Whether the point currently participates in its path.
    pub fn is_active(&self, model: &Model) -> Result<bool, ModelError> {
        match &self.condition {
            None => Ok(true),
            Some(condition) => {
                let value = model
                    .coordinate(&condition.coordinate)
                    .ok_or_else(|| ModelError::UnknownCoordinate(condition.coordinate.clone()))?
                    .value();
                Ok(value >= condition.range[0] && value <= condition.range[1])
            },
        }
    }
}

/// The ordered chain of path points a muscle acts along.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometryPath {
    pub points: Vec<PathPoint>,
}

impl GeometryPath {
    pub fn new(points: Vec<PathPoint>) -> Self {
        GeometryPath { points }
    }

    /// Path length at a pose: the sum of straight segments between
    /// consecutive *active* points, measured in ground. Paths with fewer
    /// than two active points have zero length.
    pub fn length(&self, model: &Model, pose: &Pose) -> Result<Real, ModelError> {
        let mut total = 0.0;
        let mut previous: Option<Point3<Real>> = None;
        for point in &self.points {
            if !point.is_active(model)? {
                continue;
            }
            let in_ground = pose.transform_to_ground(&point.body, &Point3::from(point.location))?;
            if let Some(last) = previous {
                total += (in_ground - last).norm();
            }
            previous = Some(in_ground);
        }
        Ok(total)
    }
}

/// A muscle: a named path plus the groups it reports under.
#[derive(Debug, Clone, PartialEq)]
pub struct Muscle {
    pub name: String,
    pub groups: Vec<String>,
    pub path: GeometryPath,
}

impl Muscle {
    pub fn new(name: impl Into<String>, path: GeometryPath) -> Self {
        Muscle {
            name: name.into(),
            groups: Vec::new(),
            path,
        }
    }

    /// Muscle-tendon length at a pose.
    pub fn length(&self, model: &Model, pose: &Pose) -> Result<Real, ModelError> {
        self.path.length(model, pose)
    }
}
