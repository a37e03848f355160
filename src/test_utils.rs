// Copyright @yucwang 2026

use crate::core::sampler::Sampler;
use crate::math::constants::Float;

/// Replays a fixed list of values, cycling when exhausted, and counts how
/// many were drawn.
pub struct SequenceSampler {
    values: Vec<Float>,
    cursor: usize,
}

impl SequenceSampler {
    pub fn new(values: &[Float]) -> Self {
        assert!(!values.is_empty());
        Self { values: values.to_vec(), cursor: 0 }
    }

    pub fn constant(value: Float) -> Self {
        Self::new(&[value])
    }

    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl Sampler for SequenceSampler {
    fn next(&mut self) -> Float {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

pub fn assert_close(a: Float, b: Float, tolerance: Float) {
    assert!((a - b).abs() <= tolerance, "expected {} ≈ {} (tolerance {})", a, b, tolerance);
}
