// Copyright @yucwang 2026

use crate::core::computation_node::{generate_node_id, ComputationNode};
use crate::core::light::{DirectLightSample, Light};
use crate::core::sampler::Sampler;
use crate::math::color::Color;
use crate::math::constants::{INFINITY, Vector3f};

/// Light from infinitely far away, arriving from `direction` (which points
/// toward the light) with constant `intensity`.
pub struct DirectionalLight {
    id: String,
    direction: Vector3f,
    intensity: Color,
}

impl DirectionalLight {
    pub fn new(direction: Vector3f, intensity: Color) -> Self {
        Self {
            id: generate_node_id("DirectionalLight"),
            direction: direction.normalize(),
            intensity,
        }
    }
}

impl ComputationNode for DirectionalLight {
    fn id(&self) -> &str {
        &self.id
    }

    fn describe(&self) -> String {
        format!("DirectionalLight [ direction: ({}, {}, {}), intensity: {:?} ]",
                self.direction.x, self.direction.y, self.direction.z, self.intensity.rgb())
    }
}

impl Light for DirectionalLight {
    fn sample_direct(&self, _origin: &Vector3f, _sampler: &mut dyn Sampler) -> DirectLightSample {
        DirectLightSample {
            wi: self.direction,
            weight: self.intensity,
            distance: INFINITY,
        }
    }

    fn can_be_intersected(&self) -> bool {
        false
    }
}
