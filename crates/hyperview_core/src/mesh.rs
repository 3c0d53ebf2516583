//! Immutable vertex/color/index data for a solid
//!
//! Meshes are built once when a solid is constructed and never change
//! afterwards; only the per-frame matrices move.

use bytemuck::{Pod, Zeroable};

/// A vertex with position and color
///
/// 3D meshes store `w = 1.0`; 4D meshes store a genuine W coordinate.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position (x, y, z, w)
    pub position: [f32; 4],
    /// RGBA color
    pub color: [f32; 4],
}

impl Vertex {
    pub fn new(position: [f32; 4], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// How indices are assembled into primitives
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    /// Pairs of indices form edges
    Lines,
    /// Triples of indices form triangles
    Triangles,
}

impl Topology {
    /// Indices consumed per primitive
    pub fn indices_per_primitive(self) -> usize {
        match self {
            Topology::Lines => 2,
            Topology::Triangles => 3,
        }
    }
}

/// Vertex and index buffers of a solid
#[derive(Clone, Debug)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    indices: Vec<u16>,
    topology: Topology,
}

impl Mesh {
    /// Create a mesh
    ///
    /// # Panics
    /// Panics if an index is out of range or the index count does not match
    /// the topology. Mesh data is static, so this only fires on a
    /// programming error.
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u16>, topology: Topology) -> Self {
        assert!(
            indices.len() % topology.indices_per_primitive() == 0,
            "{} indices do not form whole {:?} primitives",
            indices.len(),
            topology
        );
        assert!(
            indices.iter().all(|&i| (i as usize) < vertices.len()),
            "mesh index out of range"
        );
        Self { vertices, indices, topology }
    }

    /// Build a line mesh from an edge list
    pub fn from_edges(vertices: Vec<Vertex>, edges: &[[u16; 2]]) -> Self {
        let indices = edges.iter().flat_map(|e| e.iter().copied()).collect();
        Self::new(vertices, indices, Topology::Lines)
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of lines or triangles
    pub fn primitive_count(&self) -> usize {
        self.indices.len() / self.topology.indices_per_primitive()
    }
}
