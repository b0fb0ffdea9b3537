//! Length and force units carried by a model.

use crate::float_types::{CM, FOOT, INCH, METER, MM, Real};
use std::fmt::Display;

/// Length units a model's geometry may be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthUnit {
    #[default]
    Meters,
    Centimeters,
    Millimeters,
    Feet,
    Inches,
}

impl LengthUnit {
    /// Meters in one of this unit.
    pub const fn meters_per_unit(&self) -> Real {
        match self {
            LengthUnit::Meters => METER,
            LengthUnit::Centimeters => CM,
            LengthUnit::Millimeters => MM,
            LengthUnit::Feet => FOOT,
            LengthUnit::Inches => INCH,
        }
    }

    /// Factor converting a length in this unit into `other`.
    pub const fn conversion_to(&self, other: &LengthUnit) -> Real {
        self.meters_per_unit() / other.meters_per_unit()
    }
}

impl Display for LengthUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LengthUnit::Meters => "meters",
            LengthUnit::Centimeters => "centimeters",
            LengthUnit::Millimeters => "millimeters",
            LengthUnit::Feet => "feet",
            LengthUnit::Inches => "inches",
        };
        write!(f, "{}", label)
    }
}

/// Force units a model's actuators may be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ForceUnit {
    #[default]
    Newtons,
    PoundsForce,
}

impl ForceUnit {
    /// Newtons in one of this unit.
    pub const fn newtons_per_unit(&self) -> Real {
        match self {
            ForceUnit::Newtons => 1.0,
            ForceUnit::PoundsForce => 4.448_221_6,
        }
    }

    /// Factor converting a force in this unit into `other`.
    pub const fn conversion_to(&self, other: &ForceUnit) -> Real {
        self.newtons_per_unit() / other.newtons_per_unit()
    }
}

impl Display for ForceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ForceUnit::Newtons => "newtons",
            ForceUnit::PoundsForce => "pounds",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn length_conversion_factors() {
        assert!((LengthUnit::Meters.conversion_to(&LengthUnit::Millimeters) - 1000.0).abs() < 1e-9);
        assert!((LengthUnit::Inches.conversion_to(&LengthUnit::Centimeters) - 2.54).abs() < 1e-9);
        assert_eq!(LengthUnit::Feet.conversion_to(&LengthUnit::Feet), 1.0);
    }

    #[test]
    fn force_conversion_factors() {
        let pounds_in_newtons = ForceUnit::PoundsForce.conversion_to(&ForceUnit::Newtons);
        assert!((pounds_in_newtons - 4.448_221_6).abs() < 1e-9);
        assert_eq!(ForceUnit::Newtons.conversion_to(&ForceUnit::Newtons), 1.0);
    }
}
