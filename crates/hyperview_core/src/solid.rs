//! Rotating solids
//!
//! A solid owns immutable mesh data and a small amount of rotation state.
//! Each frame the driver calls [`RotatingSolid::update`] with the elapsed
//! time, then reads the derived `model` / `model4d` matrices.

use std::f32::consts::{PI, TAU};

use hyperview_math::mat4::{self, Mat4};

use crate::backend::ProgramKind;
use crate::mesh::Mesh;

/// Which solid is being shown
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SolidKind {
    /// Face-colored 3D cube drawn as triangles
    Cube,
    /// 4D tesseract wireframe drawn as lines
    #[default]
    Hypercube,
}

impl SolidKind {
    /// The other solid
    pub fn toggled(self) -> Self {
        match self {
            SolidKind::Cube => SolidKind::Hypercube,
            SolidKind::Hypercube => SolidKind::Cube,
        }
    }

    /// Shader program this solid is drawn with
    pub fn program(self) -> ProgramKind {
        match self {
            SolidKind::Cube => ProgramKind::Solid3D,
            SolidKind::Hypercube => ProgramKind::Projected4D,
        }
    }
}

/// Common interface of the cube and the hypercube
pub trait RotatingSolid {
    fn kind(&self) -> SolidKind;

    /// Immutable geometry
    fn mesh(&self) -> &Mesh;

    /// Advance rotation state by `delta_seconds`
    ///
    /// Negative or non-finite deltas are ignored.
    fn update(&mut self, delta_seconds: f32);

    /// 3D model matrix
    fn model(&self) -> Mat4;

    /// 4D model rotation (identity for purely 3D solids)
    fn model4d(&self) -> Mat4 {
        mat4::IDENTITY
    }
}

/// Check a frame delta before it is folded into rotation state
pub(crate) fn accept_delta(delta_seconds: f32) -> bool {
    if delta_seconds.is_finite() && delta_seconds >= 0.0 {
        true
    } else {
        log::debug!("Ignoring invalid frame delta {}", delta_seconds);
        false
    }
}

/// Wrap an accumulated angle into [0, 2π)
#[inline]
pub(crate) fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Continuous 3D tumble about X then Y
///
/// The default rates are one half-turn per second about X and a quarter-turn
/// per second about Y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tumble {
    pub rotation_x: f32,
    pub rotation_y: f32,
    /// Radians per second about X
    pub rate_x: f32,
    /// Radians per second about Y
    pub rate_y: f32,
}

impl Default for Tumble {
    fn default() -> Self {
        Self::new(PI, PI * 0.5)
    }
}

impl Tumble {
    pub fn new(rate_x: f32, rate_y: f32) -> Self {
        Self {
            rotation_x: 0.0,
            rotation_y: 0.0,
            rate_x,
            rate_y,
        }
    }

    /// A tumble that never moves
    pub fn still() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn advance(&mut self, delta_seconds: f32) {
        self.rotation_x = wrap_angle(self.rotation_x + delta_seconds * self.rate_x);
        self.rotation_y = wrap_angle(self.rotation_y + delta_seconds * self.rate_y);
    }

    /// Rx(rotation_x) * Ry(rotation_y)
    pub fn matrix(&self) -> Mat4 {
        mat4::mul(
            mat4::from_x_rotation(self.rotation_x),
            mat4::from_y_rotation(self.rotation_y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_angle() {
        assert_eq!(wrap_angle(0.5), 0.5);
        assert!((wrap_angle(TAU + 0.5) - 0.5).abs() < 1e-5);
        assert!((wrap_angle(-0.5) - (TAU - 0.5)).abs() < 1e-5);
        assert!(wrap_angle(-1e-9) < TAU);
    }

    #[test]
    fn test_accept_delta() {
        assert!(accept_delta(0.0));
        assert!(accept_delta(0.016));
        assert!(!accept_delta(-0.1));
        assert!(!accept_delta(f32::NAN));
        assert!(!accept_delta(f32::INFINITY));
    }

    #[test]
    fn test_tumble_rates() {
        let mut tumble = Tumble::default();
        tumble.advance(0.5);
        assert!((tumble.rotation_x - PI * 0.5).abs() < 1e-5);
        assert!((tumble.rotation_y - PI * 0.25).abs() < 1e-5);
    }

    #[test]
    fn test_still_tumble_is_identity() {
        let mut tumble = Tumble::still();
        tumble.advance(3.0);
        assert_eq!(tumble.matrix(), mat4::IDENTITY);
    }

    #[test]
    fn test_kind_toggle_and_program() {
        assert_eq!(SolidKind::Cube.toggled(), SolidKind::Hypercube);
        assert_eq!(SolidKind::Hypercube.toggled(), SolidKind::Cube);
        assert_eq!(SolidKind::Cube.program(), ProgramKind::Solid3D);
        assert_eq!(SolidKind::Hypercube.program(), ProgramKind::Projected4D);
    }
}
