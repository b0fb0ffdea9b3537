//! Model and function construction errors

use crate::float_types::Real;
use std::fmt::Display;

/// All the possible issues we might encounter while building functions,
/// assembling a model, or solving its kinematics
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// (TooFewKnots) A spline needs two or more data points
    TooFewKnots(usize),
    /// (KnotCountMismatch) The knot and value arrays differ in length
    KnotCountMismatch { x: usize, y: usize },
    /// (NonIncreasingKnots) Knot abscissae must be strictly increasing
    NonIncreasingKnots { index: usize, value: Real },
    /// (NoCoefficients) A linear function needs at least one coefficient
    NoCoefficients,
    /// (InvalidRange) A coordinate range whose minimum exceeds its maximum
    InvalidRange { name: String, min: Real, max: Real },
    /// (LockedCoordinate) The coordinate is locked and cannot move
    LockedCoordinate(String),
    /// (DuplicateName) Two objects of the same kind share a name
    DuplicateName { kind: &'static str, name: String },
    /// (UnknownBody) No body with this name exists in the model
    UnknownBody(String),
    /// (UnknownCoordinate) No coordinate with this name exists in the model
    UnknownCoordinate(String),
    /// (UnknownMarker) No marker with this name exists in the model
    UnknownMarker(String),
    /// (UnknownMuscle) No muscle with this name exists in the model
    UnknownMuscle(String),
    /// (UnreachableBody) The body is not connected to ground by any joint chain
    UnreachableBody(String),
    /// (MultipleParents) The body is the child of more than one joint
    MultipleParents(String),
    /// (GroundAsChild) A joint names ground as its child body
    GroundAsChild(String),
    /// In general, anything else
    Other(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::TooFewKnots(count) => write!(f, "(TooFewKnots) A spline needs two or more data points, got: {}", count),
            ModelError::KnotCountMismatch { x, y } => write!(f, "(KnotCountMismatch) The knot ({}) and value ({}) arrays differ in length", x, y),
            ModelError::NonIncreasingKnots { index, value } => write!(f, "(NonIncreasingKnots) Knot abscissae must be strictly increasing, knot {} is: {}", index, value),
            ModelError::NoCoefficients => write!(f, "(NoCoefficients) A linear function needs at least one coefficient"),
            ModelError::InvalidRange { name, min, max } => write!(f, "(InvalidRange) Coordinate '{}' has range minimum {} above maximum {}", name, min, max),
            ModelError::LockedCoordinate(name) => write!(f, "(LockedCoordinate) Coordinate '{}' is locked and cannot move", name),
            ModelError::DuplicateName { kind, name } => write!(f, "(DuplicateName) A {} named '{}' already exists", kind, name),
            ModelError::UnknownBody(name) => write!(f, "(UnknownBody) No body named '{}' in the model", name),
            ModelError::UnknownCoordinate(name) => write!(f, "(UnknownCoordinate) No coordinate named '{}' in the model", name),
            ModelError::UnknownMarker(name) => write!(f, "(UnknownMarker) No marker named '{}' in the model", name),
            ModelError::UnknownMuscle(name) => write!(f, "(UnknownMuscle) No muscle named '{}' in the model", name),
            ModelError::UnreachableBody(name) => write!(f, "(UnreachableBody) Body '{}' is not connected to ground by any joint chain", name),
            ModelError::MultipleParents(name) => write!(f, "(MultipleParents) Body '{}' is the child of more than one joint", name),
            ModelError::GroundAsChild(name) => write!(f, "(GroundAsChild) Joint '{}' names ground as its child body", name),
            ModelError::Other(message) => write!(f, "{}", message),
        }
    }
}
