// Copyright @yucwang 2026

use crate::core::bsdf::{Bsdf, BsdfEval, BsdfSample};
use crate::core::computation_node::{generate_node_id, ComputationNode};
use crate::core::sampler::Sampler;
use crate::core::texture::Texture;
use crate::materials::{diffuse, roughconductor};
use crate::materials::microfacet::schlick;
use crate::materials::roughconductor::roughness_to_alpha;
use crate::math::color::Color;
use crate::math::constants::{Float, Vector2f, Vector3f};
use crate::math::frame::Frame;

use std::sync::Arc;

/// Diffuse base blended with a GGX metallic lobe.
pub struct Principled {
    id: String,
    base_color: Arc<dyn Texture>,
    roughness: Arc<dyn Texture>,
    metallic: Arc<dyn Texture>,
    specular: Arc<dyn Texture>,
}

/// Both lobes at one shading point, for one outgoing direction.
struct Lobes {
    diffuse: Color,
    metallic: Color,
    alpha: Float,
    diffuse_probability: Float,
}

impl Principled {
    pub fn new(base_color: Arc<dyn Texture>,
               roughness: Arc<dyn Texture>,
               metallic: Arc<dyn Texture>,
               specular: Arc<dyn Texture>) -> Self {
        Self {
            id: generate_node_id("Principled"),
            base_color,
            roughness,
            metallic,
            specular,
        }
    }

    fn lobes(&self, uv: &Vector2f, wo: &Vector3f) -> Lobes {
        let base = self.base_color.evaluate(uv);
        let metallic = self.metallic.scalar(uv);
        let specular = self.specular.scalar(uv);

        let f = specular * schlick((1.0 - metallic) * 0.08, Frame::abs_cos_theta(wo));
        let diffuse = base * ((1.0 - f) * (1.0 - metallic));
        let metallic = Color::gray(f) + base * ((1.0 - f) * metallic);

        let total = diffuse.mean() + metallic.mean();
        let diffuse_probability = if total > 0.0 { diffuse.mean() / total } else { 1.0 };

        Lobes {
            diffuse,
            metallic,
            alpha: roughness_to_alpha(self.roughness.scalar(uv)),
            diffuse_probability,
        }
    }
}

impl ComputationNode for Principled {
    fn id(&self) -> &str {
        &self.id
    }

    fn describe(&self) -> String {
        format!("Principled [ base_color: {}, roughness: {}, metallic: {}, specular: {} ]",
                self.base_color.describe(), self.roughness.describe(),
                self.metallic.describe(), self.specular.describe())
    }
}

impl Bsdf for Principled {
    fn evaluate(&self, uv: &Vector2f, wo: &Vector3f, wi: &Vector3f) -> BsdfEval {
        let lobes = self.lobes(uv, wo);
        let diffuse = diffuse::evaluate_lobe(lobes.diffuse, wo, wi);
        let metallic = roughconductor::evaluate_lobe(lobes.metallic, lobes.alpha, wo, wi);
        BsdfEval::new(diffuse.value + metallic.value)
    }

    fn sample(&self, uv: &Vector2f, wo: &Vector3f, sampler: &mut dyn Sampler) -> BsdfSample {
        let lobes = self.lobes(uv, wo);
        let (sample, probability) = if sampler.next() <= lobes.diffuse_probability {
            (diffuse::sample_lobe(lobes.diffuse, wo, sampler), lobes.diffuse_probability)
        } else {
            (roughconductor::sample_lobe(lobes.metallic, lobes.alpha, wo, sampler),
             1.0 - lobes.diffuse_probability)
        };

        if sample.is_invalid() || probability <= 0.0 {
            return BsdfSample::invalid();
        }
        BsdfSample::new(sample.wi, sample.weight * (1.0 / probability))
    }

    fn albedo(&self, uv: &Vector2f) -> Color {
        self.base_color.evaluate(uv)
    }
}
