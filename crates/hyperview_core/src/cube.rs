//! Face-colored 3D cube
//!
//! 24 vertices (four per face so each face carries its own color) and 36
//! triangle indices.

use hyperview_math::mat4::Mat4;

use crate::mesh::{Mesh, Topology, Vertex};
use crate::solid::{accept_delta, RotatingSolid, SolidKind, Tumble};

/// Face colors in face order: front, back, top, bottom, right, left
pub const FACE_COLORS: [[f32; 4]; 6] = [
    [1.0, 1.0, 1.0, 1.0], // white
    [1.0, 0.0, 0.0, 1.0], // red
    [0.0, 1.0, 0.0, 1.0], // green
    [0.0, 0.0, 1.0, 1.0], // blue
    [1.0, 1.0, 0.0, 1.0], // yellow
    [1.0, 0.0, 1.0, 1.0], // purple
];

/// Corners of each face, counter-clockwise seen from outside
const FACES: [[[f32; 3]; 4]; 6] = [
    // Front
    [[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0]],
    // Back
    [[-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, -1.0], [1.0, -1.0, -1.0]],
    // Top
    [[-1.0, 1.0, -1.0], [-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0]],
    // Bottom
    [[-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0]],
    // Right
    [[1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0], [1.0, -1.0, 1.0]],
    // Left
    [[-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0]],
];

/// A cube tumbling in 3D
pub struct Cube {
    mesh: Mesh,
    tumble: Tumble,
}

impl Cube {
    /// Create a cube with the given half-extent
    pub fn new(half_size: f32) -> Self {
        Self::with_tumble(half_size, Tumble::default())
    }

    pub fn with_tumble(half_size: f32, tumble: Tumble) -> Self {
        Self {
            mesh: Self::build_mesh(half_size),
            tumble,
        }
    }

    pub fn tumble(&self) -> &Tumble {
        &self.tumble
    }

    fn build_mesh(half_size: f32) -> Mesh {
        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);

        for (face, (corners, color)) in FACES.iter().zip(FACE_COLORS.iter()).enumerate() {
            for c in corners {
                vertices.push(Vertex::new(
                    [c[0] * half_size, c[1] * half_size, c[2] * half_size, 1.0],
                    *color,
                ));
            }
            let base = (face * 4) as u16;
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        Mesh::new(vertices, indices, Topology::Triangles)
    }
}

impl RotatingSolid for Cube {
    fn kind(&self) -> SolidKind {
        SolidKind::Cube
    }

    fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    fn update(&mut self, delta_seconds: f32) {
        if accept_delta(delta_seconds) {
            self.tumble.advance(delta_seconds);
        }
    }

    fn model(&self) -> Mat4 {
        self.tumble.matrix()
    }
}
