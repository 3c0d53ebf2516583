//! 3D/4D Mathematics Library
//!
//! This crate provides the vector, matrix and rotation types for hyperview.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Vec4`] - 4D vector with x, y, z, w components, including the
//!   generalized 4D cross product [`Vec4::cross4`]
//! - [`Mat4`] - column-major 4x4 matrix, used both as a homogeneous 3D
//!   transform and as a linear 4D transform
//!
//! ## Rotations
//!
//! - [`RotationPlane`] - the six coordinate planes of 4D space
//! - [`rotation`] - one rotation generator per plane

mod vec3;
mod vec4;
pub mod mat4;
pub mod rotation;

pub use vec3::Vec3;
pub use vec4::Vec4;
pub use mat4::Mat4;
pub use rotation::RotationPlane;
