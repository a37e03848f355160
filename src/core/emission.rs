// Copyright @yucwang 2026

use crate::core::computation_node::ComputationNode;
use crate::math::color::Color;
use crate::math::constants::{ Vector2f, Vector3f };

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EmissionEval {
    pub value: Color,
}

impl EmissionEval {
    pub fn black() -> Self {
        Self { value: Color::black() }
    }
}

/// Radiance leaving an emissive surface. `wo` is in the local shading frame.
pub trait Emission: ComputationNode + Send + Sync {
    fn evaluate(&self, uv: &Vector2f, wo: &Vector3f) -> EmissionEval;
}
