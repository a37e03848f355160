// Copyright @yucwang 2026

use crate::core::computation_node::{generate_node_id, ComputationNode};
use crate::core::texture::Texture;
use crate::math::color::Color;
use crate::math::constants::{Float, Vector2f};

pub struct ConstantTexture {
    id: String,
    value: Color,
}

impl ConstantTexture {
    pub fn new(value: Color) -> Self {
        Self { id: generate_node_id("ConstantTexture"), value }
    }

    /// Grey texture for scalar parameters such as roughness or ior.
    pub fn scalar(value: Float) -> Self {
        Self::new(Color::gray(value))
    }
}

impl ComputationNode for ConstantTexture {
    fn id(&self) -> &str {
        &self.id
    }

    fn describe(&self) -> String {
        let (r, g, b) = self.value.rgb();
        format!("ConstantTexture [ value: ({}, {}, {}, {}) ]", r, g, b, self.value.a())
    }
}

impl Texture for ConstantTexture {
    fn evaluate(&self, _uv: &Vector2f) -> Color {
        self.value
    }
}
