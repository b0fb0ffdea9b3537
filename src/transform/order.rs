//! Rotation axis names and Euler/Cardan rotation orders.

/// Names one axis of the 4x4 transform layout.
///
/// `X`, `Y` and `Z` are the three rotation axes. `W` names the homogeneous
/// row and is never a valid rotation axis; `NoAxis` is the sentinel for a
/// step with no axis assigned. Rotation dispatch skips both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
    W,
    NoAxis,
}

impl Axis {
    /// Whether a rotation may be performed about this axis.
    #[inline]
    pub const fn is_rotation_axis(&self) -> bool {
        matches!(self, Axis::X | Axis::Y | Axis::Z)
    }
}

/// The six orderings of the three elementary rotations.
///
/// The name spells the sequence: `Zxy` rotates about Z first, then X,
/// then Y. Successive rotations compose about the *fixed* (space) axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RotationOrder {
    #[default]
    Xyz,
    Xzy,
    Yxz,
    Yzx,
    Zxy,
    Zyx,
}

/// Axis applied at each step of each order, one row per [`RotationOrder`]
/// in declaration order.
const ORDER_AXES: [[Axis; 3]; 6] = [
    [Axis::X, Axis::Y, Axis::Z],
    [Axis::X, Axis::Z, Axis::Y],
    [Axis::Y, Axis::X, Axis::Z],
    [Axis::Y, Axis::Z, Axis::X],
    [Axis::Z, Axis::X, Axis::Y],
    [Axis::Z, Axis::Y, Axis::X],
];

impl RotationOrder {
    /// The axis rotated about at `step` (0, 1 or 2) of this order.
    /// Any later step yields [`Axis::NoAxis`].
    #[inline]
    pub const fn axis(&self, step: usize) -> Axis {
        if step < 3 {
            ORDER_AXES[*self as usize][step]
        } else {
            Axis::NoAxis
        }
    }

    /// All three steps of this order, first to last.
    #[inline]
    pub const fn axes(&self) -> [Axis; 3] {
        ORDER_AXES[*self as usize]
    }
}
