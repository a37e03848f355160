// Copyright @yucwang 2026

use crate::core::computation_node::{generate_node_id, ComputationNode};
use crate::core::instance::Instance;
use crate::core::light::{DirectLightSample, Light};
use crate::core::sampler::Sampler;
use crate::math::color::Color;
use crate::math::constants::Vector3f;
use crate::math::frame::Frame;

use std::sync::Arc;

/// Samples points on an emissive instance. The instance's emission profile
/// gives the radiance.
pub struct AreaLight {
    id: String,
    instance: Arc<Instance>,
}

impl AreaLight {
    pub fn new(instance: Arc<Instance>) -> Self {
        Self { id: generate_node_id("AreaLight"), instance }
    }
}

impl ComputationNode for AreaLight {
    fn id(&self) -> &str {
        &self.id
    }

    fn describe(&self) -> String {
        format!("AreaLight [ instance: {} ]", self.instance.id())
    }
}

impl Light for AreaLight {
    fn sample_direct(&self, origin: &Vector3f, sampler: &mut dyn Sampler) -> DirectLightSample {
        let sample = self.instance.sample_area(sampler);
        let to_light = sample.position - origin;
        let distance = to_light.norm();
        if distance == 0.0 || !(sample.pdf > 0.0) {
            return DirectLightSample::invalid();
        }
        let wi = to_light / distance;

        let radiance = match self.instance.emission() {
            Some(emission) => {
                let wo = sample.shading_frame().to_local(&-wi);
                emission.evaluate(&sample.uv, &wo).value * Frame::abs_cos_theta(&wo)
            }
            None => Color::black(),
        };

        // area density to solid angle
        DirectLightSample {
            wi,
            weight: radiance * (1.0 / (sample.pdf * distance * distance)),
            distance,
        }
    }

    fn can_be_intersected(&self) -> bool {
        false
    }
}
