//! Seeded 2-D gradient noise.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Gradient vectors for 2-D noise.
const GRADS: [[f64; 2]; 8] = [
    [1.0, 0.0],
    [-1.0, 0.0],
    [0.0, 1.0],
    [0.0, -1.0],
    [1.0, 1.0],
    [-1.0, 1.0],
    [1.0, -1.0],
    [-1.0, -1.0],
];

/// 2-D Perlin noise with optional fractal octave summation.
///
/// Output is deterministic for a given seed and stays roughly in `[-1, 1]`.
///
/// # Examples
///
/// ```
/// use waveterrain::terrain::Perlin;
///
/// let a = Perlin::new(42);
/// let b = Perlin::new(42);
/// assert_eq!(a.sample(0.3, 1.7), b.sample(0.3, 1.7));
/// ```
#[derive(Debug, Clone)]
pub struct Perlin {
    /// Permutation table, doubled so corner hashes never index past the end.
    perm: [u8; 512],
    octaves: u32,
}

impl Perlin {
    /// Creates a single-octave generator whose permutation table is shuffled
    /// deterministically from `seed`.
    pub fn new(seed: u64) -> Self {
        let mut source: Vec<u8> = (0..=255).collect();
        source.shuffle(&mut StdRng::seed_from_u64(seed));

        let mut perm = [0u8; 512];
        perm[..256].copy_from_slice(&source);
        perm[256..].copy_from_slice(&source);

        Self { perm, octaves: 1 }
    }

    /// Sets the number of octaves summed per sample. Each octave doubles the
    /// frequency and halves the amplitude of the previous one.
    pub fn with_octaves(mut self, octaves: u32) -> Self {
        self.octaves = octaves.max(1);
        self
    }

    /// Number of octaves summed per sample.
    pub fn octaves(&self) -> u32 {
        self.octaves
    }

    /// Samples the fractal sum at `(x, y)`, normalized back to the
    /// single-octave amplitude range.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut norm = 0.0;

        for _ in 0..self.octaves {
            total += self.gradient_noise(x * frequency, y * frequency) * amplitude;
            norm += amplitude;
            amplitude *= 0.5;
            frequency *= 2.0;
        }

        total / norm
    }

    fn gradient_noise(&self, x: f64, y: f64) -> f64 {
        let x0 = fast_floor(x);
        let y0 = fast_floor(y);
        let x1 = x0 + 1;
        let y1 = y0 + 1;

        let fx = x - x0 as f64;
        let fy = y - y0 as f64;

        let u = fade(fx);
        let v = fade(fy);

        let n00 = self.grad(self.hash(x0, y0), fx, fy);
        let n10 = self.grad(self.hash(x1, y0), fx - 1.0, fy);
        let n01 = self.grad(self.hash(x0, y1), fx, fy - 1.0);
        let n11 = self.grad(self.hash(x1, y1), fx - 1.0, fy - 1.0);

        let nx0 = lerp(n00, n10, u);
        let nx1 = lerp(n01, n11, u);
        lerp(nx0, nx1, v)
    }

    #[inline]
    fn hash(&self, x: i32, y: i32) -> usize {
        let xi = (x & 255) as usize;
        let yi = (y & 255) as usize;
        self.perm[xi + self.perm[yi] as usize] as usize
    }

    #[inline]
    fn grad(&self, hash: usize, x: f64, y: f64) -> f64 {
        let g = &GRADS[hash & 7];
        g[0] * x + g[1] * y
    }
}

/// Quintic smoothing, zero first and second derivatives at the cell edges.
#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

#[inline]
fn fast_floor(x: f64) -> i32 {
    if x >= 0.0 { x as i32 } else { x as i32 - 1 }
}
