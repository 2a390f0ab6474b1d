//! Structural invariants of greedy meshing.
//!
//! These tests reconstruct the mesher's output geometrically: every quad is
//! decoded back into a boundary-plane rectangle and checked against the
//! faces the grid actually exposes. If the mesher drops a face, doubles one,
//! or merges across a material seam, these fail.

use sandvox_core::{material, MaterialPalette, Voxel};
use sandvox_mesh::{ChunkMesh, GreedyMesher, VoxelGrid, CHUNK_SIZE};

const VOXEL_SIZE: f32 = 0.5;

/// One emitted quad, mapped back onto the voxel lattice.
#[derive(Debug)]
struct DecodedQuad {
    /// Sweep axis the quad is perpendicular to.
    axis: usize,
    /// Boundary plane index, `0..=CHUNK_SIZE`.
    plane: usize,
    /// Covered cells along `(axis + 1) % 3`, half-open.
    u_range: (usize, usize),
    /// Covered cells along `(axis + 2) % 3`, half-open.
    v_range: (usize, usize),
    /// True when the quad faces +axis.
    positive: bool,
}

impl DecodedQuad {
    fn area(&self) -> usize {
        (self.u_range.1 - self.u_range.0) * (self.v_range.1 - self.v_range.0)
    }

    fn covers(&self, u: usize, v: usize) -> bool {
        (self.u_range.0..self.u_range.1).contains(&u) && (self.v_range.0..self.v_range.1).contains(&v)
    }
}

fn to_cells(world: f32) -> usize {
    let cells = world / VOXEL_SIZE;
    let rounded = cells.round();
    assert!(
        (cells - rounded).abs() < 1e-4,
        "coordinate {world} is not on the voxel lattice"
    );
    rounded as usize
}

fn decode_quads(mesh: &ChunkMesh) -> Vec<DecodedQuad> {
    let mut quads = Vec::new();
    for quad in 0..mesh.quad_count() {
        let verts = &mesh.positions[quad * 4..quad * 4 + 4];

        let mut axis = 3;
        for candidate in 0..3 {
            if verts
                .iter()
                .all(|p| (p[candidate] - verts[0][candidate]).abs() < 1e-5)
            {
                axis = candidate;
                break;
            }
        }
        assert!(axis < 3, "quad {quad} is not axis-aligned");
        let u_axis = (axis + 1) % 3;
        let v_axis = (axis + 2) % 3;

        let u_lo = verts.iter().map(|p| p[u_axis]).fold(f32::INFINITY, f32::min);
        let u_hi = verts
            .iter()
            .map(|p| p[u_axis])
            .fold(f32::NEG_INFINITY, f32::max);
        let v_lo = verts.iter().map(|p| p[v_axis]).fold(f32::INFINITY, f32::min);
        let v_hi = verts
            .iter()
            .map(|p| p[v_axis])
            .fold(f32::NEG_INFINITY, f32::max);

        let normal = mesh.normals[quad * 4];
        for vert in 0..4 {
            assert_eq!(
                mesh.normals[quad * 4 + vert],
                normal,
                "quad {quad} has mixed normals"
            );
        }
        assert!(
            normal[axis].abs() > 0.99,
            "quad {quad} normal is not along its plane axis"
        );

        quads.push(DecodedQuad {
            axis,
            plane: to_cells(verts[0][axis]),
            u_range: (to_cells(u_lo), to_cells(u_hi)),
            v_range: (to_cells(v_lo), to_cells(v_hi)),
            positive: normal[axis] > 0.0,
        });
    }
    quads
}

/// Every face the grid exposes, as `(axis, plane, u, v)`.
fn exposed_faces(grid: &VoxelGrid) -> Vec<(usize, usize, usize, usize)> {
    let mut faces = Vec::new();
    for axis in 0..3 {
        let u_axis = (axis + 1) % 3;
        let v_axis = (axis + 2) % 3;
        for w in 0..=CHUNK_SIZE {
            for v in 0..CHUNK_SIZE {
                for u in 0..CHUNK_SIZE {
                    let mut pos = [0usize; 3];
                    pos[u_axis] = u;
                    pos[v_axis] = v;
                    let below = w > 0 && {
                        pos[axis] = w - 1;
                        grid.get(pos[0], pos[1], pos[2]).is_solid()
                    };
                    let above = w < CHUNK_SIZE && {
                        pos[axis] = w;
                        grid.get(pos[0], pos[1], pos[2]).is_solid()
                    };
                    if below != above {
                        faces.push((axis, w, u, v));
                    }
                }
            }
        }
    }
    faces
}

fn assert_exact_coverage(grid: &VoxelGrid, mesh: &ChunkMesh) {
    let quads = decode_quads(mesh);
    let faces = exposed_faces(grid);

    for &(axis, plane, u, v) in &faces {
        for positive in [true, false] {
            let covering = quads
                .iter()
                .filter(|q| {
                    q.axis == axis && q.plane == plane && q.positive == positive && q.covers(u, v)
                })
                .count();
            assert_eq!(
                covering, 1,
                "face (axis {axis}, plane {plane}, cell {u},{v}) covered {covering} times \
                 in the {} direction",
                if positive { "positive" } else { "negative" }
            );
        }
    }

    // No quad may cover cells that expose no face.
    let per_side_area: usize = quads.iter().filter(|q| q.positive).map(DecodedQuad::area).sum();
    assert_eq!(
        per_side_area,
        faces.len(),
        "emitted area does not match exposed face count"
    );
    let negative_area: usize = quads.iter().filter(|q| !q.positive).map(DecodedQuad::area).sum();
    assert_eq!(negative_area, faces.len());
}

#[test]
fn test_two_voxel_stack_covers_its_ten_faces() {
    let mut grid = VoxelGrid::new();
    grid.set(8, 8, 8, Voxel::solid(material::STONE));
    grid.set(8, 9, 8, Voxel::solid(material::STONE));

    let palette = MaterialPalette::default();
    let mesh = GreedyMesher::new().mesh(&grid, &palette, VOXEL_SIZE);

    let faces = exposed_faces(&grid);
    println!(
        "stack: {} exposed faces, {} quads",
        faces.len(),
        mesh.quad_count()
    );
    assert_eq!(faces.len(), 10);
    // Merging collapses the ten faces to six rectangles per direction.
    assert_eq!(mesh.quad_count(), 12);

    assert_exact_coverage(&grid, &mesh);
}

#[test]
fn test_exact_coverage_for_scattered_shapes() {
    let mut grid = VoxelGrid::new();
    // An L shape, a lone voxel, and a mixed-material pillar.
    grid.set(1, 1, 1, Voxel::solid(material::SOIL));
    grid.set(2, 1, 1, Voxel::solid(material::SOIL));
    grid.set(1, 2, 1, Voxel::solid(material::GRASS));
    grid.set(30, 30, 30, Voxel::solid(material::SNOW));
    for y in 10..20 {
        let m = if y % 2 == 0 { material::WOOD } else { material::LEAVES };
        grid.set(15, y, 15, Voxel::solid(m));
    }

    let palette = MaterialPalette::default();
    let mesh = GreedyMesher::new().mesh(&grid, &palette, VOXEL_SIZE);
    assert_exact_coverage(&grid, &mesh);
}

#[test]
fn test_solid_chunk_emits_six_n_squared_per_direction() {
    let mut grid = VoxelGrid::new();
    grid.fill(Voxel::solid(material::STONE));

    let palette = MaterialPalette::default();
    let mesh = GreedyMesher::new().mesh(&grid, &palette, VOXEL_SIZE);
    let quads = decode_quads(&mesh);

    let shell = 6 * CHUNK_SIZE * CHUNK_SIZE;
    let positive_area: usize = quads.iter().filter(|q| q.positive).map(DecodedQuad::area).sum();
    let negative_area: usize = quads.iter().filter(|q| !q.positive).map(DecodedQuad::area).sum();
    println!("solid chunk: {positive_area} cells per direction (expected {shell})");
    assert_eq!(positive_area, shell);
    assert_eq!(negative_area, shell);
}

#[test]
fn test_full_mask_merges_to_single_rectangle() {
    let mut grid = VoxelGrid::new();
    grid.fill(Voxel::solid(material::STONE));

    let palette = MaterialPalette::default();
    let mesh = GreedyMesher::new().mesh(&grid, &palette, VOXEL_SIZE);
    let quads = decode_quads(&mesh);

    // Six faces, two directions: no face may be split.
    assert_eq!(quads.len(), 12);
    for quad in &quads {
        assert_eq!(
            quad.area(),
            CHUNK_SIZE * CHUNK_SIZE,
            "face on axis {} plane {} was split",
            quad.axis,
            quad.plane
        );
    }
}

#[test]
fn test_independent_meshers_agree() {
    let mut grid = VoxelGrid::new();
    for z in 0..CHUNK_SIZE {
        for x in 0..CHUNK_SIZE {
            let height = 4 + (x * 3 + z * 5) % 12;
            for y in 0..height {
                grid.set(x, y, z, Voxel::solid(material::SOIL));
            }
        }
    }

    let palette = MaterialPalette::default();
    let a = GreedyMesher::new().mesh(&grid, &palette, VOXEL_SIZE);
    let b = GreedyMesher::new().mesh(&grid, &palette, VOXEL_SIZE);
    assert_eq!(a, b);
    assert!(!a.is_empty());
}
