// Copyright @yucwang 2026

use crate::core::computation_node::{generate_node_id, ComputationNode};
use crate::core::emission::{Emission, EmissionEval};
use crate::core::texture::Texture;
use crate::math::constants::{Vector2f, Vector3f};
use crate::math::frame::Frame;

use std::sync::Arc;

/// Constant radiance over the front hemisphere; the back side is dark.
pub struct LambertianEmission {
    id: String,
    radiance: Arc<dyn Texture>,
}

impl LambertianEmission {
    pub fn new(radiance: Arc<dyn Texture>) -> Self {
        Self { id: generate_node_id("LambertianEmission"), radiance }
    }
}

impl ComputationNode for LambertianEmission {
    fn id(&self) -> &str {
        &self.id
    }

    fn describe(&self) -> String {
        format!("LambertianEmission [ radiance: {} ]", self.radiance.describe())
    }
}

impl Emission for LambertianEmission {
    fn evaluate(&self, uv: &Vector2f, wo: &Vector3f) -> EmissionEval {
        if Frame::cos_theta(wo) <= 0.0 {
            return EmissionEval::black();
        }
        EmissionEval { value: self.radiance.evaluate(uv) }
    }
}
