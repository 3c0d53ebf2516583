//! The six basis rotations of 4D space
//!
//! In 4D, rotations happen in planes rather than around axes. Each
//! generator rotates within one coordinate plane and leaves the orthogonal
//! plane fixed.
//!
//! The three "simple" planes are the classical 3D axis rotations with W
//! untouched: XY is a rotation about Z, YZ about X, ZX about Y. The three
//! "double" planes pair an ordinary axis with W; each rotates its axis
//! toward -W, so in storage the sine is negated in the upper triangle
//! (`m[a][3] = -sin`).

use serde::{Deserialize, Serialize};

use crate::mat4::{self, Mat4};

const W: usize = 3;

/// The 6 rotation planes in 4D space
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationPlane {
    /// XY plane - rotation about Z in 3D
    XY,
    /// YZ plane - rotation about X in 3D
    YZ,
    /// ZX plane - rotation about Y in 3D
    ZX,
    /// XW plane - X toward -W
    #[default]
    XW,
    /// YW plane - Y toward -W
    YW,
    /// ZW plane - Z toward -W
    ZW,
}

impl RotationPlane {
    /// All planes, in selector order
    pub const ALL: [RotationPlane; 6] = [
        RotationPlane::XY,
        RotationPlane::YZ,
        RotationPlane::ZX,
        RotationPlane::XW,
        RotationPlane::YW,
        RotationPlane::ZW,
    ];

    /// Rotation matrix for this plane
    pub fn matrix(self, radians: f32) -> Mat4 {
        match self {
            RotationPlane::XY => from_xy_rotation(radians),
            RotationPlane::YZ => from_yz_rotation(radians),
            RotationPlane::ZX => from_zx_rotation(radians),
            RotationPlane::XW => from_xw_rotation(radians),
            RotationPlane::YW => from_yw_rotation(radians),
            RotationPlane::ZW => from_zw_rotation(radians),
        }
    }

    /// Whether the plane involves the W axis
    pub fn is_double(self) -> bool {
        matches!(self, RotationPlane::XW | RotationPlane::YW | RotationPlane::ZW)
    }

    /// Position in [`RotationPlane::ALL`]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&p| p == self).unwrap_or(0)
    }

    /// Plane at a selector index, if any
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            RotationPlane::XY => "XY",
            RotationPlane::YZ => "YZ",
            RotationPlane::ZX => "ZX",
            RotationPlane::XW => "XW",
            RotationPlane::YW => "YW",
            RotationPlane::ZW => "ZW",
        }
    }
}

impl std::fmt::Display for RotationPlane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// XY-plane rotation, identical to a 3D rotation about Z
pub fn from_xy_rotation(radians: f32) -> Mat4 {
    mat4::from_z_rotation(radians)
}

/// YZ-plane rotation, identical to a 3D rotation about X
pub fn from_yz_rotation(radians: f32) -> Mat4 {
    mat4::from_x_rotation(radians)
}

/// ZX-plane rotation, identical to a 3D rotation about Y
pub fn from_zx_rotation(radians: f32) -> Mat4 {
    mat4::from_y_rotation(radians)
}

/// XW-plane rotation
pub fn from_xw_rotation(radians: f32) -> Mat4 {
    mat4::plane_rotation(radians, W, 0)
}

/// YW-plane rotation
pub fn from_yw_rotation(radians: f32) -> Mat4 {
    mat4::plane_rotation(radians, W, 1)
}

/// ZW-plane rotation
pub fn from_zw_rotation(radians: f32) -> Mat4 {
    mat4::plane_rotation(radians, W, 2)
}
