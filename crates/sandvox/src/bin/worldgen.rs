//! # Worldgen Pipeline Run
//!
//! Config -> Terrain -> Meshes -> Brush Edit, headless, on one thread.
//!
//! Generates a 5x1x5 chunk area with per-stage timings, checks that a chunk
//! regenerated in isolation matches the one generated as part of the area
//! (generation order must not matter), then digs and rebuilds with the
//! sphere brush.
//!
//! Pass a TOML config path as the first argument to run a custom world:
//!
//! ```text
//! cargo run --bin worldgen -- worlds/highlands.toml
//! ```

use std::path::Path;
use std::time::Instant;

use sandvox::{material, ChunkCoord, ChunkStore, MeshStats, TerrainGenerator, WorldConfig};

/// Half-width of the generated area, in chunks.
const AREA_RADIUS: i32 = 2;

fn load_config() -> WorldConfig {
    match std::env::args().nth(1) {
        Some(path) => match WorldConfig::load(Path::new(&path)) {
            Ok(config) => {
                println!("Loaded config from {path}");
                config
            }
            Err(error) => {
                eprintln!("Failed to load {path}: {error}");
                std::process::exit(1);
            }
        },
        None => WorldConfig::default(),
    }
}

/// Sums mesh stats and solid voxels over every chunk in the store.
fn world_totals(store: &ChunkStore) -> (MeshStats, usize) {
    let mut stats = MeshStats::default();
    let mut solid = 0;
    for coord in store.coords() {
        if let Some(chunk) = store.chunk(coord) {
            stats += chunk.mesh().stats();
            solid += chunk.grid().solid_count() as usize;
        }
    }
    (stats, solid)
}

fn main() {
    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║                   SANDVOX WORLDGEN PIPELINE                      ║");
    println!("║           Config → Terrain → Meshes → Brush Edit                 ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();

    let config = load_config();
    let seed = config.world_seed();
    println!("Seed: {} | voxel size: {}", seed.value(), config.voxel_size);
    println!();

    let generator = TerrainGenerator::new(seed, config.terrain);
    let mut store = ChunkStore::new(config.palette(), config.voxel_size);

    let min = ChunkCoord::new(-AREA_RADIUS, 0, -AREA_RADIUS);
    let max = ChunkCoord::new(AREA_RADIUS, 0, AREA_RADIUS);
    let box_chunks = ((2 * AREA_RADIUS + 1) * (2 * AREA_RADIUS + 1)) as u64;

    // Stage 1: terrain fill, column math only.
    let fill_start = Instant::now();
    for z in min.z..=max.z {
        for x in min.x..=max.x {
            generator.fill_chunk(&mut store, ChunkCoord::new(x, 0, z));
        }
    }
    let fill_ms = fill_start.elapsed().as_secs_f64() * 1000.0;

    // Stage 2: structures, after every fill so canopies land in terrain.
    let structure_start = Instant::now();
    for z in min.z..=max.z {
        for x in min.x..=max.x {
            generator.place_structures(&mut store, ChunkCoord::new(x, 0, z));
        }
    }
    let structure_ms = structure_start.elapsed().as_secs_f64() * 1000.0;

    // Stage 3: one remesh over everything the passes dirtied.
    let mesh_start = Instant::now();
    let rebuilt = store.rebuild_dirty();
    let mesh_ms = mesh_start.elapsed().as_secs_f64() * 1000.0;
    let remeshed = store.take_remeshed();

    let (stats, solid) = world_totals(&store);
    let spilled = store.chunk_count() as u64 - box_chunks;

    println!("┌─ GENERATION ─────────────────────────────────────────────────────┐");
    println!(
        "│ Terrain fill:    {box_chunks} chunks in {fill_ms:.2} ms ({:.2} ms/chunk)",
        fill_ms / box_chunks as f64
    );
    println!("│ Structures:      {structure_ms:.2} ms");
    println!("│ Meshing:         {rebuilt} meshes in {mesh_ms:.2} ms");
    println!("│ Remesh queue:    {} coords drained", remeshed.len());
    println!("└──────────────────────────────────────────────────────────────────┘");
    println!();
    println!("┌─ WORLD ──────────────────────────────────────────────────────────┐");
    println!(
        "│ Chunks:          {} ({spilled} beyond the box from canopy spill)",
        store.chunk_count()
    );
    println!("│ Solid voxels:    {solid}");
    println!(
        "│ Mesh totals:     {} vertices, {} triangles, {} quads",
        stats.vertices, stats.triangles, stats.quads
    );
    println!("└──────────────────────────────────────────────────────────────────┘");
    println!();

    // A chunk regenerated alone must match the one from the area run.
    let probe = ChunkCoord::new(0, 0, 0);
    let mut isolated = ChunkStore::new(config.palette(), config.voxel_size);
    generator.generate_chunk(&mut isolated, probe);
    let order_independent = isolated.chunk(probe).map(|c| c.grid().as_bytes())
        == store.chunk(probe).map(|c| c.grid().as_bytes());

    // Brush pass: dig a crater at the surface, then wall part of it back up.
    let vs = config.voxel_size;
    let surface = (generator.surface_height(0.0, 0.0).floor() as i32).clamp(4, 27);
    let center = [0.5 * vs, (surface as f32 + 0.5) * vs, 0.5 * vs];

    let carve_start = Instant::now();
    store.apply_brush(center, 4.0 * vs, -1, material::KEEP);
    let carve_us = carve_start.elapsed().as_micros();
    let carved_chunks = store.take_remeshed().len();

    let place_start = Instant::now();
    store.apply_brush(center, 2.0 * vs, 1, material::BRICK);
    let place_us = place_start.elapsed().as_micros();
    let placed_chunks = store.take_remeshed().len();

    let (after_stats, after_solid) = world_totals(&store);

    println!("┌─ BRUSH EDIT ─────────────────────────────────────────────────────┐");
    println!("│ Carve r={:.1}:      {carved_chunks} chunks remeshed in {carve_us} µs", 4.0 * vs);
    println!("│ Place r={:.1}:      {placed_chunks} chunks remeshed in {place_us} µs", 2.0 * vs);
    println!(
        "│ Solid voxels:    {solid} → {after_solid} ({} quads now)",
        after_stats.quads
    );
    println!("└──────────────────────────────────────────────────────────────────┘");
    println!();

    if order_independent {
        println!("✅ ORDER INDEPENDENCE: isolated regeneration matches the area run");
        std::process::exit(0);
    } else {
        eprintln!("❌ ORDER INDEPENDENCE FAILED: chunk {probe:?} diverged");
        std::process::exit(1);
    }
}
