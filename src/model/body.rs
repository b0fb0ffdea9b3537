//! Rigid segments of a model.

use crate::float_types::Real;
use nalgebra::{Matrix3, Vector3};

/// One rigid segment: mass properties plus display geometry.
///
/// `name` is the key other objects (joints, markers, path points) refer
/// to the body by; keep it unique within a model.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: String,
    pub mass: Real,
    /// Center of mass in the body frame.
    pub mass_center: Vector3<Real>,
    /// Inertia tensor about the mass center, in the body frame.
    pub inertia: Matrix3<Real>,
    /// Geometry file names attached for display.
    pub display_geometry: Vec<String>,
    /// Per-axis display scale factors.
    pub scale_factors: Vector3<Real>,
}

impl Body {
    pub fn new(
        name: impl Into<String>,
        mass: Real,
        mass_center: Vector3<Real>,
        inertia: Matrix3<Real>,
    ) -> Self {
        Body {
            name: name.into(),
            mass,
            mass_center,
            inertia,
            display_geometry: Vec::new(),
            scale_factors: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    /// A massless body, useful for frames and ground.
    pub fn massless(name: impl Into<String>) -> Self {
        Self::new(name, 0.0, Vector3::zeros(), Matrix3::zeros())
    }

    pub fn add_display_geometry(&mut self, file_name: impl Into<String>) {
        self.display_geometry.push(file_name.into());
    }
}
