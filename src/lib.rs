//! A musculoskeletal modeling toolkit built around **rigid-transform algebra**:
//! row-major 4x4 homogeneous transforms composed in rotation-order-aware sequences,
//! scalar kinematic functions, and the model objects (bodies, joints, coordinates,
//! markers, muscles) posed by them.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod function;
pub mod model;
pub mod transform;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use function::ScalarFunction;
pub use model::Model;
pub use transform::{AngleUnit, Axis, RotationOrder, Transform};
