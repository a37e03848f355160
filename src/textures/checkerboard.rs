// Copyright @yucwang 2026

use crate::core::computation_node::{generate_node_id, ComputationNode};
use crate::core::texture::Texture;
use crate::math::color::Color;
use crate::math::constants::Vector2f;

/// Two-colour checker pattern over uv, `scale` cells per unit along u and v.
pub struct CheckerboardTexture {
    id: String,
    color0: Color,
    color1: Color,
    scale: Vector2f,
}

impl CheckerboardTexture {
    pub fn new(color0: Color, color1: Color, scale: Vector2f) -> Self {
        Self { id: generate_node_id("CheckerboardTexture"), color0, color1, scale }
    }
}

impl ComputationNode for CheckerboardTexture {
    fn id(&self) -> &str {
        &self.id
    }

    fn describe(&self) -> String {
        format!("CheckerboardTexture [ scale: ({}, {}) ]", self.scale.x, self.scale.y)
    }
}

impl Texture for CheckerboardTexture {
    fn evaluate(&self, uv: &Vector2f) -> Color {
        let u = (uv.x * self.scale.x).floor() as i64;
        let v = (uv.y * self.scale.y).floor() as i64;
        if (u + v).rem_euclid(2) == 0 {
            self.color0
        } else {
            self.color1
        }
    }
}
