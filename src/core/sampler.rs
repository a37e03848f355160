// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector2f};

/// The only source of randomness of the transport core. Values are drawn
/// strictly in call order, so a fixed seed reproduces a render exactly.
pub trait Sampler {
    /// Uniform value in [0, 1).
    fn next(&mut self) -> Float;

    fn next_2d(&mut self) -> Vector2f {
        let u = self.next();
        let v = self.next();
        Vector2f::new(u, v)
    }
}

#[derive(Debug, Clone)]
pub struct LcgSampler {
    state: u64,
}

impl LcgSampler {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seed for one pixel of a render, derived from the full render seed
    /// and both pixel coordinates.
    pub fn for_pixel(seed: u64, x: usize, y: usize) -> Self {
        let pixel = ((y as u64) << 32) ^ (x as u64);
        Self::new(splitmix64(splitmix64(seed) ^ pixel))
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.state >> 32) as u32
    }
}

impl Sampler for LcgSampler {
    fn next(&mut self) -> Float {
        // 24 random mantissa bits keep the result strictly below one
        ((self.next_u32() >> 8) as Float) * (1.0 / 16_777_216.0)
    }
}

fn splitmix64(value: u64) -> u64 {
    let mut z = value.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
