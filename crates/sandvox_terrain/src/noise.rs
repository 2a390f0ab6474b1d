//! # Seeded Simplex Noise
//!
//! 2D and 3D gradient noise, the raw material for every terrain decision.
//!
//! ## Determinism Guarantee
//!
//! A sampler is a pure function of its [`WorldSeed`]: the permutation table
//! is shuffled once at construction with a self-contained xorshift, gradients
//! are fixed integer vectors, and sampling never touches global state. The
//! same seed produces bit-identical values on any platform, any run.

use sandvox_core::WorldSeed;

/// 2D gradient set: the eight axis and diagonal directions.
const GRAD2: [[i8; 2]; 8] = [
    [1, 0],
    [-1, 0],
    [0, 1],
    [0, -1],
    [1, 1],
    [-1, 1],
    [1, -1],
    [-1, -1],
];

/// 3D gradient set: the twelve cube edge midpoints.
const GRAD3: [[i8; 3]; 12] = [
    [1, 1, 0],
    [-1, 1, 0],
    [1, -1, 0],
    [-1, -1, 0],
    [1, 0, 1],
    [-1, 0, 1],
    [1, 0, -1],
    [-1, 0, -1],
    [0, 1, 1],
    [0, -1, 1],
    [0, 1, -1],
    [0, -1, -1],
];

/// Seed-shuffled permutation table shared by the 2D and 3D samplers.
///
/// 256 bytes, doubled to 512 so chained corner lookups never wrap.
struct PermutationTable {
    perm: [u8; 512],
}

impl PermutationTable {
    fn new(seed: WorldSeed) -> Self {
        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().take(256).enumerate() {
            *slot = i as u8;
        }

        // Fisher-Yates driven by xorshift64. Self-contained so the shuffle
        // cannot drift when RNG crates change algorithms.
        let mut state = seed.value();
        for i in (1..256).rev() {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let j = (state as usize) % (i + 1);
            perm.swap(i, j);
        }

        perm.copy_within(0..256, 256);
        Self { perm }
    }

    #[inline]
    fn get(&self, index: usize) -> usize {
        self.perm[index & 511] as usize
    }
}

/// Simplex noise sampler with 2D and 3D channels.
///
/// Output lies in `[-1, 1]` and is continuous in every argument. Sampling is
/// O(1) and allocation-free; the sampler is immutable after construction.
///
/// # Example
///
/// ```rust,ignore
/// let noise = SimplexNoise::new(WorldSeed::new(42));
/// let height = noise.sample(10.5, -3.25);
/// let cave = noise.sample3(10.5, 7.0, -3.25);
/// assert!((-1.0..=1.0).contains(&height));
/// assert!((-1.0..=1.0).contains(&cave));
/// ```
pub struct SimplexNoise {
    table: PermutationTable,
}

impl SimplexNoise {
    /// 2D skew factor, `(sqrt(3) - 1) / 2`.
    const SKEW_2D: f64 = 0.366_025_403_784_439;
    /// 2D unskew factor, `(3 - sqrt(3)) / 6`.
    const UNSKEW_2D: f64 = 0.211_324_865_405_187;
    /// 3D skew factor, `1 / 3`.
    const SKEW_3D: f64 = 1.0 / 3.0;
    /// 3D unskew factor, `1 / 6`.
    const UNSKEW_3D: f64 = 1.0 / 6.0;

    /// Creates a sampler for the given seed.
    #[must_use]
    pub fn new(seed: WorldSeed) -> Self {
        Self {
            table: PermutationTable::new(seed),
        }
    }

    /// Samples the 2D channel. Returns a value in `[-1, 1]`.
    #[must_use]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        // Skew onto the simplex grid and find the containing cell.
        let skew = (x + y) * Self::SKEW_2D;
        let i = fast_floor(x + skew);
        let j = fast_floor(y + skew);

        let unskew = f64::from(i + j) * Self::UNSKEW_2D;
        let x0 = x - (f64::from(i) - unskew);
        let y0 = y - (f64::from(j) - unskew);

        // Upper or lower triangle of the cell.
        let (i1, j1): (usize, usize) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f64 + Self::UNSKEW_2D;
        let y1 = y0 - j1 as f64 + Self::UNSKEW_2D;
        let x2 = x0 - 1.0 + 2.0 * Self::UNSKEW_2D;
        let y2 = y0 - 1.0 + 2.0 * Self::UNSKEW_2D;

        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;
        let g0 = self.table.get(ii + self.table.get(jj));
        let g1 = self.table.get(ii + i1 + self.table.get(jj + j1));
        let g2 = self.table.get(ii + 1 + self.table.get(jj + 1));

        let n = corner2(x0, y0, g0) + corner2(x1, y1, g1) + corner2(x2, y2, g2);

        // 70.0 stretches the raw corner sum to fill [-1, 1].
        70.0 * n
    }

    /// Samples the 3D channel. Returns a value in `[-1, 1]`.
    #[must_use]
    pub fn sample3(&self, x: f64, y: f64, z: f64) -> f64 {
        let skew = (x + y + z) * Self::SKEW_3D;
        let i = fast_floor(x + skew);
        let j = fast_floor(y + skew);
        let k = fast_floor(z + skew);

        let unskew = f64::from(i + j + k) * Self::UNSKEW_3D;
        let x0 = x - (f64::from(i) - unskew);
        let y0 = y - (f64::from(j) - unskew);
        let z0 = z - (f64::from(k) - unskew);

        // Rank the offsets to pick which of the six tetrahedra holds the
        // point; (i1,j1,k1) and (i2,j2,k2) are the second and third corners.
        let (i1, j1, k1, i2, j2, k2): (usize, usize, usize, usize, usize, usize) = if x0 >= y0 {
            if y0 >= z0 {
                (1, 0, 0, 1, 1, 0)
            } else if x0 >= z0 {
                (1, 0, 0, 1, 0, 1)
            } else {
                (0, 0, 1, 1, 0, 1)
            }
        } else if y0 < z0 {
            (0, 0, 1, 0, 1, 1)
        } else if x0 < z0 {
            (0, 1, 0, 0, 1, 1)
        } else {
            (0, 1, 0, 1, 1, 0)
        };

        let x1 = x0 - i1 as f64 + Self::UNSKEW_3D;
        let y1 = y0 - j1 as f64 + Self::UNSKEW_3D;
        let z1 = z0 - k1 as f64 + Self::UNSKEW_3D;
        let x2 = x0 - i2 as f64 + 2.0 * Self::UNSKEW_3D;
        let y2 = y0 - j2 as f64 + 2.0 * Self::UNSKEW_3D;
        let z2 = z0 - k2 as f64 + 2.0 * Self::UNSKEW_3D;
        let x3 = x0 - 1.0 + 3.0 * Self::UNSKEW_3D;
        let y3 = y0 - 1.0 + 3.0 * Self::UNSKEW_3D;
        let z3 = z0 - 1.0 + 3.0 * Self::UNSKEW_3D;

        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;
        let kk = (k & 255) as usize;

        let g0 = self.table.get(ii + self.table.get(jj + self.table.get(kk)));
        let g1 = self
            .table
            .get(ii + i1 + self.table.get(jj + j1 + self.table.get(kk + k1)));
        let g2 = self
            .table
            .get(ii + i2 + self.table.get(jj + j2 + self.table.get(kk + k2)));
        let g3 = self
            .table
            .get(ii + 1 + self.table.get(jj + 1 + self.table.get(kk + 1)));

        let n = corner3(x0, y0, z0, g0)
            + corner3(x1, y1, z1, g1)
            + corner3(x2, y2, z2, g2)
            + corner3(x3, y3, z3, g3);

        // 32.0 stretches the raw corner sum to fill [-1, 1].
        32.0 * n
    }
}

/// Falloff contribution of one 2D simplex corner.
#[inline]
fn corner2(x: f64, y: f64, gradient: usize) -> f64 {
    let t = 0.5 - x * x - y * y;
    if t < 0.0 {
        return 0.0;
    }
    let g = GRAD2[gradient & 7];
    let t2 = t * t;
    t2 * t2 * (x * f64::from(g[0]) + y * f64::from(g[1]))
}

/// Falloff contribution of one 3D simplex corner.
#[inline]
fn corner3(x: f64, y: f64, z: f64, gradient: usize) -> f64 {
    let t = 0.6 - x * x - y * y - z * z;
    if t < 0.0 {
        return 0.0;
    }
    let g = GRAD3[gradient % 12];
    let t2 = t * t;
    t2 * t2 * (x * f64::from(g[0]) + y * f64::from(g[1]) + z * f64::from(g[2]))
}

/// Floor to i32 without the `f64::floor` library call.
#[inline]
fn fast_floor(x: f64) -> i32 {
    let xi = x as i32;
    if x < f64::from(xi) {
        xi - 1
    } else {
        xi
    }
}
