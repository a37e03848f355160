// Copyright @yucwang 2026

use crate::core::computation_node::{generate_node_id, ComputationNode};
use crate::core::light::{DirectLightSample, Light};
use crate::core::sampler::Sampler;
use crate::math::color::Color;
use crate::math::constants::{PI, Vector3f};

/// Isotropic point source emitting `power` in total.
pub struct PointLight {
    id: String,
    position: Vector3f,
    power: Color,
}

impl PointLight {
    pub fn new(position: Vector3f, power: Color) -> Self {
        Self { id: generate_node_id("PointLight"), position, power }
    }
}

impl ComputationNode for PointLight {
    fn id(&self) -> &str {
        &self.id
    }

    fn describe(&self) -> String {
        format!("PointLight [ position: ({}, {}, {}), power: {:?} ]",
                self.position.x, self.position.y, self.position.z, self.power.rgb())
    }
}

impl Light for PointLight {
    fn sample_direct(&self, origin: &Vector3f, _sampler: &mut dyn Sampler) -> DirectLightSample {
        let to_light = self.position - origin;
        let distance_sq = to_light.norm_squared();
        if distance_sq == 0.0 {
            return DirectLightSample::invalid();
        }
        let distance = distance_sq.sqrt();

        DirectLightSample {
            wi: to_light / distance,
            weight: self.power * (1.0 / (4.0 * PI * distance_sq)),
            distance,
        }
    }

    fn can_be_intersected(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::PointLight;
    use crate::core::light::Light;
    use crate::math::color::Color;
    use crate::math::constants::{PI, Vector3f};
    use crate::test_utils::{assert_close, SequenceSampler};

    #[test]
    fn test_inverse_square_falloff() {
        let light = PointLight::new(Vector3f::new(0.0, 0.0, 6.0), Color::gray(400.0));
        let mut sampler = SequenceSampler::constant(0.5);
        let sample = light.sample_direct(&Vector3f::new(0.0, 0.0, 1.0), &mut sampler);
        assert_eq!(sample.wi, Vector3f::new(0.0, 0.0, 1.0));
        assert_eq!(sample.distance, 5.0);
        assert_close(sample.weight.r(), 400.0 / (4.0 * PI * 25.0), 1e-5);
        assert_eq!(sampler.draws(), 0);
        assert!(!light.can_be_intersected());

        let degenerate = light.sample_direct(&Vector3f::new(0.0, 0.0, 6.0), &mut sampler);
        assert_eq!(degenerate.distance, 0.0);
    }
}
