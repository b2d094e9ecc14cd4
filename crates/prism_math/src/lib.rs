//! Linear algebra primitives for the Prism graphics stack.

#[macro_use]
mod macros;

pub mod angle;
pub mod axis_angle;
pub mod matrix3;
pub mod matrix4;
pub mod point;
pub mod quaternion;
pub mod vector;

pub use angle::{Angle, Degrees, Radians};
pub use matrix4::{AxisDirection, DepthRange, Matrix4};
