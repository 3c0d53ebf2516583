//! Tesseract (4D hypercube) wireframe
//!
//! A tesseract has 16 vertices (all combinations of ±h for x,y,z,w) and
//! 32 edges. Vertices on the w = -h cell are red, those on the w = +h cell
//! are green, so the two cubic cells can be told apart once projected.
//!
//! Vertex `i` has coordinate `k` equal to `+h` when bit `k` of `i` is set
//! and `-h` otherwise. Edges join vertices whose indices differ in exactly
//! one bit.

use std::f32::consts::FRAC_PI_2;

use hyperview_math::mat4::Mat4;
use hyperview_math::RotationPlane;

use crate::mesh::{Mesh, Vertex};
use crate::solid::{accept_delta, wrap_angle, RotatingSolid, SolidKind, Tumble};

/// Color of the w = -h cell
pub const INNER_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Color of the w = +h cell
pub const OUTER_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];

pub const VERTEX_COUNT: usize = 16;
pub const EDGE_COUNT: usize = 32;

/// Default 4D rotation speed: a quarter turn per second
pub const DEFAULT_ROTATION_SPEED: f32 = FRAC_PI_2;
/// Slowest accepted 4D rotation speed in rad/s
pub const MIN_ROTATION_SPEED: f32 = 1e-3;
/// Fastest accepted 4D rotation speed in rad/s
pub const MAX_ROTATION_SPEED: f32 = 100.0;

/// A tesseract rotating in one selectable 4D plane
pub struct Hypercube {
    mesh: Mesh,
    tumble: Tumble,
    plane: RotationPlane,
    rotation_speed: f32,
    current_angle: f32,
}

impl Hypercube {
    /// Create a hypercube with the given half-extent
    pub fn new(half_size: f32) -> Self {
        Self {
            mesh: Self::build_mesh(half_size),
            tumble: Tumble::default(),
            plane: RotationPlane::default(),
            rotation_speed: DEFAULT_ROTATION_SPEED,
            current_angle: 0.0,
        }
    }

    pub fn with_tumble(mut self, tumble: Tumble) -> Self {
        self.tumble = tumble;
        self
    }

    pub fn with_plane(mut self, plane: RotationPlane) -> Self {
        self.plane = plane;
        self
    }

    pub fn with_rotation_speed(mut self, speed: f32) -> Self {
        self.set_rotation_speed(speed);
        self
    }

    /// Active rotation plane
    pub fn plane(&self) -> RotationPlane {
        self.plane
    }

    /// Swap the active generator; the accumulated angle is kept
    pub fn set_plane(&mut self, plane: RotationPlane) {
        if plane != self.plane {
            log::debug!("Hypercube rotation plane {} -> {}", self.plane, plane);
            self.plane = plane;
        }
    }

    /// Radians per second
    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    /// Set the speed, clamped to [`MIN_ROTATION_SPEED`, `MAX_ROTATION_SPEED`].
    /// Non-finite values are ignored.
    pub fn set_rotation_speed(&mut self, speed: f32) {
        if !speed.is_finite() {
            log::warn!("Ignoring non-finite rotation speed {}", speed);
            return;
        }
        self.rotation_speed = speed.clamp(MIN_ROTATION_SPEED, MAX_ROTATION_SPEED);
    }

    /// Accumulated angle in the active plane, in [0, 2π)
    pub fn current_angle(&self) -> f32 {
        self.current_angle
    }

    pub fn reset_angle(&mut self) {
        self.current_angle = 0.0;
    }

    pub fn tumble(&self) -> &Tumble {
        &self.tumble
    }

    fn build_mesh(half_size: f32) -> Mesh {
        let vertices = (0..VERTEX_COUNT)
            .map(|i| {
                let color = if i & 0b1000 == 0 { INNER_COLOR } else { OUTER_COLOR };
                Vertex::new(corner(i, half_size), color)
            })
            .collect();

        Mesh::from_edges(vertices, &edges())
    }
}

/// Corner `index` of a tesseract with the given half-extent
fn corner(index: usize, half_size: f32) -> [f32; 4] {
    let mut position = [0.0; 4];
    for (axis, coord) in position.iter_mut().enumerate() {
        *coord = if index & (1 << axis) != 0 { half_size } else { -half_size };
    }
    position
}

/// Index pairs of the 32 edges
pub fn edges() -> Vec<[u16; 2]> {
    let mut edges = Vec::with_capacity(EDGE_COUNT);
    for i in 0..VERTEX_COUNT {
        for axis in 0..4 {
            let j = i | (1 << axis);
            if j != i {
                edges.push([i as u16, j as u16]);
            }
        }
    }
    edges
}

impl RotatingSolid for Hypercube {
    fn kind(&self) -> SolidKind {
        SolidKind::Hypercube
    }

    fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    fn update(&mut self, delta_seconds: f32) {
        if !accept_delta(delta_seconds) {
            return;
        }
        self.tumble.advance(delta_seconds);
        self.current_angle = wrap_angle(self.current_angle + self.rotation_speed * delta_seconds);
    }

    fn model(&self) -> Mat4 {
        self.tumble.matrix()
    }

    fn model4d(&self) -> Mat4 {
        self.plane.matrix(self.current_angle)
    }
}
