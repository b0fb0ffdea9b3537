//! Surface markers attached to bodies.

use crate::float_types::Real;
use nalgebra::Vector3;

/// A motion-capture marker: a named point fixed on a body.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub name: String,
    /// Name of the body the marker rides on.
    pub body: String,
    /// Marker location in the body frame.
    pub offset: Vector3<Real>,
    /// Fixed markers keep their offset through scaling.
    pub fixed: bool,
    /// Weight given to this marker by trackers and solvers.
    pub weight: Real,
}

impl Marker {
    pub fn new(name: impl Into<String>, body: impl Into<String>, offset: Vector3<Real>) -> Self {
        Marker {
            name: name.into(),
            body: body.into(),
            offset,
            fixed: false,
            weight: 1.0,
        }
    }
}
