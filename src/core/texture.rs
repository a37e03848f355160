// Copyright @yucwang 2026

use crate::core::computation_node::ComputationNode;
use crate::math::color::Color;
use crate::math::constants::{Float, Vector2f};

pub trait Texture: ComputationNode + Send + Sync {
    fn evaluate(&self, uv: &Vector2f) -> Color;

    /// Scalar lookups (roughness, ior, ...) read the red channel.
    fn scalar(&self, uv: &Vector2f) -> Float {
        self.evaluate(uv).r()
    }
}
