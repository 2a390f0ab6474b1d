//! Benchmarks for greedy meshing.
//!
//! Run with: `cargo bench --package sandvox_mesh`
//!
//! The interesting cases are the two extremes and the realistic middle:
//! a fully solid chunk (best case, 12 quads), a 3D checkerboard (worst
//! case, nothing merges), and a heightfield slice (typical terrain).

// `criterion_group!` expands to an undocumentable `pub fn benches`.
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use sandvox_core::{material, MaterialPalette, Voxel, CHUNK_VOLUME};
use sandvox_mesh::{GreedyMesher, VoxelGrid, CHUNK_SIZE};

fn solid_grid() -> VoxelGrid {
    let mut grid = VoxelGrid::new();
    grid.fill(Voxel::solid(material::STONE));
    grid
}

fn checkerboard_grid() -> VoxelGrid {
    let mut grid = VoxelGrid::new();
    for z in 0..CHUNK_SIZE {
        for y in 0..CHUNK_SIZE {
            for x in 0..CHUNK_SIZE {
                if (x + y + z) % 2 == 0 {
                    grid.set(x, y, z, Voxel::solid(material::STONE));
                }
            }
        }
    }
    grid
}

fn heightfield_grid() -> VoxelGrid {
    let mut grid = VoxelGrid::new();
    for z in 0..CHUNK_SIZE {
        for x in 0..CHUNK_SIZE {
            let height = 8 + (x * 5 + z * 11) % 16;
            for y in 0..height {
                let material = if y + 1 == height {
                    material::GRASS
                } else {
                    material::SOIL
                };
                grid.set(x, y, z, Voxel::solid(material));
            }
        }
    }
    grid
}

fn bench_mesh_shapes(c: &mut Criterion) {
    let palette = MaterialPalette::default();
    let mut mesher = GreedyMesher::new();

    let mut group = c.benchmark_group("greedy_mesh");
    group.throughput(Throughput::Elements(CHUNK_VOLUME as u64));

    let solid = solid_grid();
    group.bench_function("solid_chunk", |b| {
        b.iter(|| black_box(mesher.mesh(black_box(&solid), &palette, 0.5)));
    });

    let checkerboard = checkerboard_grid();
    group.bench_function("checkerboard_chunk", |b| {
        b.iter(|| black_box(mesher.mesh(black_box(&checkerboard), &palette, 0.5)));
    });

    let heightfield = heightfield_grid();
    group.bench_function("heightfield_chunk", |b| {
        b.iter(|| black_box(mesher.mesh(black_box(&heightfield), &palette, 0.5)));
    });

    group.finish();
}

fn bench_mesh_reuse(c: &mut Criterion) {
    let palette = MaterialPalette::default();
    let mut mesher = GreedyMesher::new();
    let grid = heightfield_grid();
    let mut mesh = mesher.mesh(&grid, &palette, 0.5);

    c.bench_function("greedy_mesh_into_reused_buffers", |b| {
        b.iter(|| {
            mesher.mesh_into(black_box(&grid), &palette, 0.5, &mut mesh);
            black_box(mesh.vertex_count())
        });
    });
}

criterion_group!(benches, bench_mesh_shapes, bench_mesh_reuse);
criterion_main!(benches);
