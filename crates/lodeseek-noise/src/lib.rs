//! Permutation-table Perlin noise with octave composition.
//!
//! The permutation table is shuffled with a [`JavaRandom`] seeded from the
//! field's own seed, so a noise field is a pure function of that seed. Lattice
//! math goes through `libm` rather than the platform libc so samples are
//! bit-identical across platforms.

use libm::floor;
use lodeseek_rand::JavaRandom;

/// Octave composition parameters for [`NoiseField::octave3`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OctaveParams {
    /// Number of noise layers summed. Each layer doubles the frequency.
    pub octaves: u32,
    /// Amplitude falloff per octave, typically in (0, 1).
    pub persistence: f64,
    /// Base frequency applied to input coordinates at the first octave.
    pub scale: f64,
}

/// A seeded 3D Perlin noise field.
pub struct NoiseField {
    /// 256-entry permutation, duplicated to 512 to avoid wrap-around branches.
    perm: [u8; 512],
}

impl NoiseField {
    /// Builds the permutation table by Fisher-Yates shuffling `[0..255]` with
    /// a [`JavaRandom`] seeded from `seed`.
    pub fn new(seed: i64) -> Self {
        let mut random = JavaRandom::new(seed);
        let mut table = [0u8; 256];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = i as u8;
        }
        for i in (1..256usize).rev() {
            // Bound is i + 1 >= 2, so the draw cannot fail.
            let j = random
                .next_int(i as i32 + 1)
                .expect("shuffle bound is positive") as usize;
            table.swap(i, j);
        }

        let mut perm = [0u8; 512];
        perm[..256].copy_from_slice(&table);
        perm[256..].copy_from_slice(&table);
        Self { perm }
    }

    /// Samples classic Perlin noise at `(x, y, z)`. Result is in roughly
    /// `[-1, 1]` and exactly 0 at integer lattice points.
    pub fn noise3(&self, x: f64, y: f64, z: f64) -> f64 {
        let fx = floor(x);
        let fy = floor(y);
        let fz = floor(z);

        let xi = (fx as i64 & 255) as usize;
        let yi = (fy as i64 & 255) as usize;
        let zi = (fz as i64 & 255) as usize;

        let x = x - fx;
        let y = y - fy;
        let z = z - fz;

        let u = fade(x);
        let v = fade(y);
        let w = fade(z);

        let p = &self.perm;
        let a = p[xi] as usize + yi;
        let aa = p[a] as usize + zi;
        let ab = p[a + 1] as usize + zi;
        let b = p[xi + 1] as usize + yi;
        let ba = p[b] as usize + zi;
        let bb = p[b + 1] as usize + zi;

        lerp(
            w,
            lerp(
                v,
                lerp(
                    u,
                    grad(p[aa], x, y, z),
                    grad(p[ba], x - 1.0, y, z),
                ),
                lerp(
                    u,
                    grad(p[ab], x, y - 1.0, z),
                    grad(p[bb], x - 1.0, y - 1.0, z),
                ),
            ),
            lerp(
                v,
                lerp(
                    u,
                    grad(p[aa + 1], x, y, z - 1.0),
                    grad(p[ba + 1], x - 1.0, y, z - 1.0),
                ),
                lerp(
                    u,
                    grad(p[ab + 1], x, y - 1.0, z - 1.0),
                    grad(p[bb + 1], x - 1.0, y - 1.0, z - 1.0),
                ),
            ),
        )
    }

    /// Sums `noise3` over geometrically related octaves, normalized by the
    /// total amplitude so the result stays in approximately `[-1, 1]`.
    pub fn octave3(&self, x: f64, y: f64, z: f64, params: OctaveParams) -> f64 {
        let mut total = 0.0;
        let mut frequency = params.scale;
        let mut amplitude = 1.0;
        let mut amplitude_sum = 0.0;

        for _ in 0..params.octaves {
            total += self.noise3(x * frequency, y * frequency, z * frequency) * amplitude;
            amplitude_sum += amplitude;
            amplitude *= params.persistence;
            frequency *= 2.0;
        }

        total / amplitude_sum
    }
}

/// Quintic fade curve `t^3 (t (6t - 15) + 10)`.
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Gradient dot product: the low 4 bits of `hash` select one of the 12
/// canonical edge-direction gradients (4 of them repeated, per Perlin's
/// reference implementation).
fn grad(hash: u8, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    let u = if h & 1 == 0 { u } else { -u };
    let v = if h & 2 == 0 { v } else { -v };
    u + v
}
