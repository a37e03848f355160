// Copyright @yucwang 2026

use crate::core::bsdf::{Bsdf, BsdfEval, BsdfSample};
use crate::core::computation_node::{generate_node_id, ComputationNode};
use crate::core::sampler::Sampler;
use crate::core::texture::Texture;
use crate::math::color::Color;
use crate::math::constants::{Vector2f, Vector3f};
use crate::math::frame::Frame;

use std::sync::Arc;

/// Perfect mirror.
pub struct Conductor {
    id: String,
    reflectance: Arc<dyn Texture>,
}

impl Conductor {
    pub fn new(reflectance: Arc<dyn Texture>) -> Self {
        Self { id: generate_node_id("Conductor"), reflectance }
    }
}

impl ComputationNode for Conductor {
    fn id(&self) -> &str {
        &self.id
    }

    fn describe(&self) -> String {
        format!("Conductor [ reflectance: {} ]", self.reflectance.describe())
    }
}

impl Bsdf for Conductor {
    fn evaluate(&self, _uv: &Vector2f, _wo: &Vector3f, _wi: &Vector3f) -> BsdfEval {
        // Dirac lobe
        BsdfEval::invalid()
    }

    fn sample(&self, uv: &Vector2f, wo: &Vector3f, _sampler: &mut dyn Sampler) -> BsdfSample {
        BsdfSample::new(Frame::reflect(wo), self.reflectance.evaluate(uv))
    }

    fn albedo(&self, uv: &Vector2f) -> Color {
        self.reflectance.evaluate(uv)
    }
}

#[cfg(test)]
mod tests {
    use super::Conductor;
    use crate::core::bsdf::Bsdf;
    use crate::math::color::Color;
    use crate::math::constants::{Vector2f, Vector3f};
    use crate::test_utils::SequenceSampler;
    use crate::textures::constant::ConstantTexture;

    use std::sync::Arc;

    #[test]
    fn test_mirror_sample_is_deterministic() {
        let bsdf = Conductor::new(Arc::new(ConstantTexture::new(Color::new(0.9, 0.6, 0.3))));
        let uv = Vector2f::new(0.5, 0.5);
        let wo = Vector3f::new(0.3, -0.4, 0.866).normalize();
        let mut sampler = SequenceSampler::constant(0.5);

        let sample = bsdf.sample(&uv, &wo, &mut sampler);
        assert_eq!(sample.wi, Vector3f::new(-wo.x, -wo.y, wo.z));
        assert_eq!(sample.weight, Color::new(0.9, 0.6, 0.3));
        assert_eq!(sampler.draws(), 0);

        // even the exact mirror direction has zero continuous density
        assert!(bsdf.evaluate(&uv, &wo, &sample.wi).is_invalid());
        assert!(bsdf.evaluate(&uv, &wo, &wo).is_invalid());
    }
}
