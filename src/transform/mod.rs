//! Rigid-body transforms as row-major 4x4 homogeneous matrices.
//!
//! The layout follows the row-vector convention used throughout joint
//! kinematics: points are rows, transformed by right-multiplication,
//! and the translation lives in the bottom row.
//!
//! ```text
//!           | r00 r01 r02 0 |
//! [x y z 1] | r10 r11 r12 0 | = [x' y' z' 1]
//!           | r20 r21 r22 0 |
//!           | tx  ty  tz  1 |
//! ```
//!
//! Row i of the 3x3 block is the image of local axis i, so successive
//! rotations compose by right-multiplication: `M ← M · R`. Rotations are
//! right-handed and active (`rotate_z` by +90° sends +X to +Y).

use crate::float_types::{DEG_TO_RAD, Real};
use nalgebra::{Matrix3, Matrix4, Point3, Vector3};

mod order;
pub use order::{Axis, RotationOrder};

/// Whether an angle argument is given in radians or degrees.
///
/// Angles are stored and composed in radians; `Degrees` converts on entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl AngleUnit {
    /// Convert `angle` from this unit into radians.
    #[inline]
    pub const fn in_radians(&self, angle: Real) -> Real {
        match self {
            AngleUnit::Radians => angle,
            AngleUnit::Degrees => angle * DEG_TO_RAD,
        }
    }
}

const IDENTITY: [[Real; 4]; 4] = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

fn mat_mul(a: &[[Real; 4]; 4], b: &[[Real; 4]; 4]) -> [[Real; 4]; 4] {
    let mut out = [[0.0; 4]; 4];
    for i in 0..4 {
        for j in 0..4 {
            out[i][j] =
                a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j] + a[i][3] * b[3][j];
        }
    }
    out
}

/// **Mathematical Foundation: Rodrigues' Rotation Formula**
///
/// Rotation by θ about a unit axis (x, y, z), expanded component-wise for
/// the row-vector layout:
/// ```text
/// m[i][i] = aᵢ² + (1 - aᵢ²)cos θ
/// m[i][j] = aᵢaⱼ(1 - cos θ) ± aₖ sin θ
/// ```
/// The axis must be unit length; no normalization is performed here.
fn axis_angle_matrix(radians: Real, axis: &Vector3<Real>) -> [[Real; 4]; 4] {
    let (s, c) = radians.sin_cos();
    let omc = 1.0 - c;
    let (x, y, z) = (axis.x, axis.y, axis.z);

    let mut m = IDENTITY;
    m[0][0] = x * x + (1.0 - x * x) * c;
    m[0][1] = x * y * omc + z * s;
    m[0][2] = x * z * omc - y * s;
    m[1][0] = x * y * omc - z * s;
    m[1][1] = y * y + (1.0 - y * y) * c;
    m[1][2] = y * z * omc + x * s;
    m[2][0] = x * z * omc + y * s;
    m[2][1] = y * z * omc - x * s;
    m[2][2] = z * z + (1.0 - z * z) * c;
    m
}

/// A rigid-body transform: rotation rows 0-2, translation row 3.
///
/// `translation_only` is a conservative fast-path hint: it is true only
/// when the transform is known to carry no rotation (fresh identity plus
/// any number of translations). Every operation that can introduce a
/// rotation clears it, and nothing sets it back, so it may under-report
/// but never lies. Point and vector transforms use it to skip the 3x3
/// product.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    matrix: [[Real; 4]; 4],
    translation_only: bool,
}

impl Transform {
    /// The identity transform.
    #[inline]
    pub const fn identity() -> Self {
        Transform {
            matrix: IDENTITY,
            translation_only: true,
        }
    }

    /// Adopt a full 4x4 row-major matrix verbatim.
    ///
    /// No orthonormality check is made; callers own the validity of the
    /// rotation block.
    #[inline]
    pub const fn from_rows(rows: [[Real; 4]; 4]) -> Self {
        Transform {
            matrix: rows,
            translation_only: false,
        }
    }

    /// Rotation by `angle` about an arbitrary unit `axis` (Rodrigues'
    /// formula). A non-unit axis silently yields a non-rigid matrix.
    pub fn from_axis_angle(angle: Real, unit: AngleUnit, axis: &Vector3<Real>) -> Self {
        Transform {
            matrix: axis_angle_matrix(unit.in_radians(angle), axis),
            translation_only: false,
        }
    }

    /// Borrow the raw row-major matrix.
    #[inline]
    pub const fn rows(&self) -> &[[Real; 4]; 4] {
        &self.matrix
    }

    /// Whether the fast-path hint currently marks this transform as a
    /// pure translation.
    #[inline]
    pub const fn is_translation_only(&self) -> bool {
        self.translation_only
    }

    fn right_multiply(&mut self, rotation: &[[Real; 4]; 4]) {
        self.matrix = mat_mul(&self.matrix, rotation);
        self.translation_only = false;
    }

    /// Append a rotation about the space-fixed X axis.
    pub fn rotate_x(&mut self, angle: Real, unit: AngleUnit) {
        let (s, c) = unit.in_radians(angle).sin_cos();
        let mut rotation = IDENTITY;
        rotation[1][1] = c;
        rotation[1][2] = s;
        rotation[2][1] = -s;
        rotation[2][2] = c;
        self.right_multiply(&rotation);
    }

    /// Append a rotation about the space-fixed Y axis.
    pub fn rotate_y(&mut self, angle: Real, unit: AngleUnit) {
        let (s, c) = unit.in_radians(angle).sin_cos();
        let mut rotation = IDENTITY;
        rotation[0][0] = c;
        rotation[0][2] = -s;
        rotation[2][0] = s;
        rotation[2][2] = c;
        self.right_multiply(&rotation);
    }

    /// Append a rotation about the space-fixed Z axis.
    pub fn rotate_z(&mut self, angle: Real, unit: AngleUnit) {
        let (s, c) = unit.in_radians(angle).sin_cos();
        let mut rotation = IDENTITY;
        rotation[0][0] = c;
        rotation[0][1] = s;
        rotation[1][0] = -s;
        rotation[1][1] = c;
        self.right_multiply(&rotation);
    }

    /// Append a rotation about an arbitrary space-fixed unit `axis`.
    pub fn rotate_axis(&mut self, angle: Real, unit: AngleUnit, axis: &Vector3<Real>) {
        self.right_multiply(&axis_angle_matrix(unit.in_radians(angle), axis));
    }

    /// Append a rotation about the transform's *own* X axis (row 0),
    /// i.e. a body-fixed / intrinsic rotation.
    pub fn rotate_x_body_fixed(&mut self, angle: Real, unit: AngleUnit) {
        let axis = Vector3::new(self.matrix[0][0], self.matrix[0][1], self.matrix[0][2]);
        self.rotate_axis(angle, unit, &axis);
    }

    /// Append a rotation about the transform's own Y axis (row 1).
    pub fn rotate_y_body_fixed(&mut self, angle: Real, unit: AngleUnit) {
        let axis = Vector3::new(self.matrix[1][0], self.matrix[1][1], self.matrix[1][2]);
        self.rotate_axis(angle, unit, &axis);
    }

    /// Append a rotation about the transform's own Z axis (row 2).
    pub fn rotate_z_body_fixed(&mut self, angle: Real, unit: AngleUnit) {
        let axis = Vector3::new(self.matrix[2][0], self.matrix[2][1], self.matrix[2][2]);
        self.rotate_axis(angle, unit, &axis);
    }

    /// Append three rotations about space-fixed axes in the sequence
    /// given by `order`; `angles[i]` belongs to step i. Steps whose axis
    /// resolves to [`Axis::W`] or [`Axis::NoAxis`] are skipped.
    ///
    /// # Example
    /// ```rust
    /// # use mskrs::transform::{AngleUnit, RotationOrder, Transform};
    /// # use nalgebra::Vector3;
    /// let mut t = Transform::identity();
    /// t.rotate([90.0, 0.0, 0.0], AngleUnit::Degrees, RotationOrder::Xyz);
    /// let image = t.transform_vector(&Vector3::y());
    /// assert!((image - Vector3::z()).norm() < 1e-6, "+90 about X sends Y to Z");
    /// ```
    pub fn rotate(&mut self, angles: [Real; 3], unit: AngleUnit, order: RotationOrder) {
        for (step, angle) in angles.iter().enumerate() {
            match order.axis(step) {
                Axis::X => self.rotate_x(*angle, unit),
                Axis::Y => self.rotate_y(*angle, unit),
                Axis::Z => self.rotate_z(*angle, unit),
                Axis::W | Axis::NoAxis => {},
            }
        }
    }

    /// Add a translation. Equivalent to right-multiplying by a pure
    /// translation matrix, which in this layout reduces to a row-3 sum.
    pub fn translate(&mut self, translation: &Vector3<Real>) {
        self.matrix[3][0] += translation.x;
        self.matrix[3][1] += translation.y;
        self.matrix[3][2] += translation.z;
    }

    /// Add a translation along X.
    pub fn translate_x(&mut self, distance: Real) {
        self.matrix[3][0] += distance;
    }

    /// Add a translation along Y.
    pub fn translate_y(&mut self, distance: Real) {
        self.matrix[3][1] += distance;
    }

    /// Add a translation along Z.
    pub fn translate_z(&mut self, distance: Real) {
        self.matrix[3][2] += distance;
    }

    /// The translation row.
    #[inline]
    pub fn position(&self) -> Vector3<Real> {
        Vector3::new(self.matrix[3][0], self.matrix[3][1], self.matrix[3][2])
    }

    /// Overwrite the translation row.
    pub fn set_position(&mut self, position: &Vector3<Real>) {
        self.matrix[3][0] = position.x;
        self.matrix[3][1] = position.y;
        self.matrix[3][2] = position.z;
    }

    /// Copy of the 3x3 orientation block, rows preserved.
    pub fn orientation(&self) -> Matrix3<Real> {
        Matrix3::new(
            self.matrix[0][0],
            self.matrix[0][1],
            self.matrix[0][2],
            self.matrix[1][0],
            self.matrix[1][1],
            self.matrix[1][2],
            self.matrix[2][0],
            self.matrix[2][1],
            self.matrix[2][2],
        )
    }

    /// Overwrite the 3x3 orientation block. The new block may rotate, so
    /// the translation-only hint is dropped.
    pub fn set_orientation(&mut self, orientation: &Matrix3<Real>) {
        for i in 0..3 {
            for j in 0..3 {
                self.matrix[i][j] = orientation[(i, j)];
            }
        }
        self.translation_only = false;
    }

    /// **Mathematical Foundation: Point Transformation**
    ///
    /// Row-vector product with the full matrix:
    /// ```text
    /// p'ⱼ = Σᵢ pᵢ·m[i][j] + m[3][j]
    /// ```
    /// Pure translations skip the 3x3 product entirely.
    pub fn transform_point(&self, point: &Point3<Real>) -> Point3<Real> {
        if self.translation_only {
            return Point3::new(
                point.x + self.matrix[3][0],
                point.y + self.matrix[3][1],
                point.z + self.matrix[3][2],
            );
        }
        let m = &self.matrix;
        Point3::new(
            point.x * m[0][0] + point.y * m[1][0] + point.z * m[2][0] + m[3][0],
            point.x * m[0][1] + point.y * m[1][1] + point.z * m[2][1] + m[3][1],
            point.x * m[0][2] + point.y * m[1][2] + point.z * m[2][2] + m[3][2],
        )
    }

    /// Transform a point in place.
    pub fn transform_point_mut(&self, point: &mut Point3<Real>) {
        *point = self.transform_point(point);
    }

    /// Rotate a direction vector: the row-vector product *without* the
    /// translation row.
    pub fn transform_vector(&self, vector: &Vector3<Real>) -> Vector3<Real> {
        if self.translation_only {
            return *vector;
        }
        let m = &self.matrix;
        Vector3::new(
            vector.x * m[0][0] + vector.y * m[1][0] + vector.z * m[2][0],
            vector.x * m[0][1] + vector.y * m[1][1] + vector.z * m[2][1],
            vector.x * m[0][2] + vector.y * m[1][2] + vector.z * m[2][2],
        )
    }

    /// Rotate a direction vector in place.
    pub fn transform_vector_mut(&self, vector: &mut Vector3<Real>) {
        *vector = self.transform_vector(vector);
    }

    /// Flatten to 16 scalars, row-major: `flat[i*4 + j] = m[i][j]`.
    pub fn matrix_flat(&self) -> [Real; 16] {
        let mut flat = [0.0; 16];
        for i in 0..4 {
            for j in 0..4 {
                flat[i * 4 + j] = self.matrix[i][j];
            }
        }
        flat
    }

    /// The transform applying `self` first, then `other`:
    /// `p · (self · other)`. Two pure translations compose by adding
    /// their translation rows.
    pub fn compose(&self, other: &Transform) -> Transform {
        if self.translation_only && other.translation_only {
            let mut composed = Transform::identity();
            composed.matrix[3][0] = self.matrix[3][0] + other.matrix[3][0];
            composed.matrix[3][1] = self.matrix[3][1] + other.matrix[3][1];
            composed.matrix[3][2] = self.matrix[3][2] + other.matrix[3][2];
            return composed;
        }
        Transform {
            matrix: mat_mul(&self.matrix, &other.matrix),
            translation_only: false,
        }
    }

    /// Equivalent column-vector homogeneous matrix (the transpose), for
    /// interop with `nalgebra`'s `M · p` convention.
    pub fn to_homogeneous(&self) -> Matrix4<Real> {
        let m = &self.matrix;
        Matrix4::new(
            m[0][0], m[1][0], m[2][0], m[3][0], //
            m[0][1], m[1][1], m[2][1], m[3][1], //
            m[0][2], m[1][2], m[2][2], m[3][2], //
            m[0][3], m[1][3], m[2][3], m[3][3],
        )
    }

    /// Adopt a column-vector homogeneous matrix (the transpose of this
    /// layout).
    pub fn from_homogeneous(homogeneous: &Matrix4<Real>) -> Self {
        let mut matrix = IDENTITY;
        for i in 0..4 {
            for j in 0..4 {
                matrix[i][j] = homogeneous[(j, i)];
            }
        }
        Transform {
            matrix,
            translation_only: false,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl PartialEq for Transform {
    // the fast-path hint is a cache, not part of the value
    fn eq(&self, other: &Self) -> bool {
        self.matrix == other.matrix
    }
}

impl approx::AbsDiffEq for Transform {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.matrix
            .iter()
            .flatten()
            .zip(other.matrix.iter().flatten())
            .all(|(a, b)| Real::abs_diff_eq(a, b, epsilon))
    }
}

impl approx::RelativeEq for Transform {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.matrix
            .iter()
            .flatten()
            .zip(other.matrix.iter().flatten())
            .all(|(a, b)| Real::relative_eq(a, b, epsilon, max_relative))
    }
}

impl approx::UlpsEq for Transform {
    fn default_max_ulps() -> u32 {
        Real::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.matrix
            .iter()
            .flatten()
            .zip(other.matrix.iter().flatten())
            .all(|(a, b)| Real::ulps_eq(a, b, epsilon, max_ulps))
    }
}
