//! Mesh buffers produced by surface extraction.
//!
//! A [`ChunkMesh`] is four parallel `Vec`s plus bounds. Buffers stay in
//! lockstep: every vertex has a position, a normal, and a color, and indices
//! address vertices in groups of six (two triangles per quad). The mesher
//! clears and refills an existing mesh, so steady-state remeshing reuses the
//! allocations.

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: [f32; 3],
    /// Maximum corner.
    pub max: [f32; 3],
}

impl Aabb {
    /// The degenerate box at the origin.
    pub const ZERO: Self = Self {
        min: [0.0; 3],
        max: [0.0; 3],
    };

    /// Smallest box containing every point, or [`Self::ZERO`] for none.
    #[must_use]
    pub fn from_points(points: &[[f32; 3]]) -> Self {
        let Some(first) = points.first() else {
            return Self::ZERO;
        };
        let mut min = *first;
        let mut max = *first;
        for point in &points[1..] {
            for i in 0..3 {
                min[i] = min[i].min(point[i]);
                max[i] = max[i].max(point[i]);
            }
        }
        Self { min, max }
    }

    /// Box center.
    #[must_use]
    pub fn center(self) -> [f32; 3] {
        [
            (self.min[0] + self.max[0]) * 0.5,
            (self.min[1] + self.max[1]) * 0.5,
            (self.min[2] + self.max[2]) * 0.5,
        ]
    }

    /// Box dimensions.
    #[must_use]
    pub fn size(self) -> [f32; 3] {
        [
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        ]
    }
}

/// Size summary of one mesh, for logs and overlays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeshStats {
    /// Vertex count.
    pub vertices: usize,
    /// Triangle count.
    pub triangles: usize,
    /// Merged quad count.
    pub quads: usize,
}

impl std::ops::AddAssign for MeshStats {
    fn add_assign(&mut self, rhs: Self) {
        self.vertices += rhs.vertices;
        self.triangles += rhs.triangles;
        self.quads += rhs.quads;
    }
}

/// Triangle mesh for one chunk, in chunk-local world units.
///
/// Positions are relative to the chunk's minimum corner; the consumer
/// translates by the chunk's world origin.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChunkMesh {
    /// Vertex positions.
    pub positions: Vec<[f32; 3]>,
    /// Per-vertex unit normals. Valid after [`Self::recompute_normals`].
    pub normals: Vec<[f32; 3]>,
    /// Per-vertex RGBA colors.
    pub colors: Vec<[f32; 4]>,
    /// Triangle indices into the vertex buffers.
    pub indices: Vec<u32>,
    /// Bounds of all positions. Valid after [`Self::recompute_bounds`].
    pub bounds: Aabb,
}

impl ChunkMesh {
    /// Creates an empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops all geometry, keeping buffer capacity.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.normals.clear();
        self.colors.clear();
        self.indices.clear();
        self.bounds = Aabb::ZERO;
    }

    /// Appends one quad: four vertices and two triangles.
    ///
    /// Corners must be given in winding order; triangles are `(0,1,2)` and
    /// `(0,2,3)`. Normals are zeroed until [`Self::recompute_normals`] runs.
    pub fn push_quad(&mut self, corners: [[f32; 3]; 4], color: [f32; 4]) {
        let base = self.positions.len() as u32;
        self.positions.extend_from_slice(&corners);
        self.normals.extend_from_slice(&[[0.0; 3]; 4]);
        self.colors.extend_from_slice(&[color; 4]);
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Rebuilds per-vertex normals from triangle geometry.
    ///
    /// Face normals accumulate into each referenced vertex and the sums are
    /// normalized, so vertices shared between coplanar triangles come out
    /// flat. Degenerate triangles contribute nothing.
    pub fn recompute_normals(&mut self) {
        self.normals.clear();
        self.normals.resize(self.positions.len(), [0.0; 3]);
        for tri in self.indices.chunks_exact(3) {
            let i0 = tri[0] as usize;
            let i1 = tri[1] as usize;
            let i2 = tri[2] as usize;
            let edge1 = sub(self.positions[i1], self.positions[i0]);
            let edge2 = sub(self.positions[i2], self.positions[i0]);
            let face = cross(edge1, edge2);
            for index in [i0, i1, i2] {
                self.normals[index] = add(self.normals[index], face);
            }
        }
        for normal in &mut self.normals {
            *normal = normalize(*normal);
        }
    }

    /// Rebuilds [`Self::bounds`] from the position buffer.
    pub fn recompute_bounds(&mut self) {
        self.bounds = Aabb::from_points(&self.positions);
    }

    /// Vertex count.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Triangle count.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Quad count. Every four vertices form one quad.
    #[must_use]
    pub fn quad_count(&self) -> usize {
        self.positions.len() / 4
    }

    /// True when the mesh has no geometry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Size summary.
    #[must_use]
    pub fn stats(&self) -> MeshStats {
        MeshStats {
            vertices: self.vertex_count(),
            triangles: self.triangle_count(),
            quads: self.quad_count(),
        }
    }

    /// Position buffer as raw bytes, ready for upload.
    #[must_use]
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Normal buffer as raw bytes.
    #[must_use]
    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Color buffer as raw bytes.
    #[must_use]
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Index buffer as raw bytes.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

fn add(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn normalize(v: [f32; 3]) -> [f32; 3] {
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if len > 1e-6 {
        [v[0] / len, v[1] / len, v[2] / len]
    } else {
        [0.0, 0.0, 0.0]
    }
}
