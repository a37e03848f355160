// Copyright @yucwang 2026

use crate::core::bsdf::{Bsdf, BsdfEval, BsdfSample};
use crate::core::computation_node::{generate_node_id, ComputationNode};
use crate::core::sampler::Sampler;
use crate::core::texture::Texture;
use crate::materials::microfacet::{ggx_d, pdf_ggx_vndf, reflect, sample_ggx_vndf, smith_g1};
use crate::math::color::Color;
use crate::math::constants::{Float, Vector2f, Vector3f};

use std::sync::Arc;

/// Perceptual roughness to GGX alpha.
pub fn roughness_to_alpha(roughness: Float) -> Float {
    (roughness * roughness).max(1e-3)
}

/// GGX reflection lobe. The value carries |cos(wi)|, which cancels one of
/// the two cosines of the microfacet denominator.
pub fn evaluate_lobe(reflectance: Color, alpha: Float, wo: &Vector3f, wi: &Vector3f) -> BsdfEval {
    let denom = 4.0 * wo.z.abs();
    let half = wi + wo;
    if denom == 0.0 || half.norm_squared() == 0.0 {
        return BsdfEval::invalid();
    }
    let wm = half.normalize();
    let value = ggx_d(alpha, &wm) * smith_g1(alpha, &wm, wi) * smith_g1(alpha, &wm, wo) / denom;
    BsdfEval::new(reflectance * value)
}

/// Density of `sample_lobe` producing `wi`, per solid angle.
pub fn pdf_lobe(alpha: Float, wo: &Vector3f, wi: &Vector3f) -> Float {
    let half = wi + wo;
    if half.norm_squared() == 0.0 {
        return 0.0;
    }
    let wm = half.normalize();
    let dot = wo.dot(&wm);
    if dot <= 0.0 {
        return 0.0;
    }
    pdf_ggx_vndf(alpha, wo, &wm) / (4.0 * dot)
}

pub fn sample_lobe(reflectance: Color, alpha: Float, wo: &Vector3f, sampler: &mut dyn Sampler) -> BsdfSample {
    if wo.z <= 0.0 {
        return BsdfSample::invalid();
    }
    let wm = sample_ggx_vndf(alpha, wo, &sampler.next_2d());
    let wi = reflect(wo, &wm).normalize();
    if wi.z <= 0.0 {
        return BsdfSample::invalid();
    }
    // D and 1 / (4 cos(theta_o)) cancel against the VNDF density
    BsdfSample::new(wi, reflectance * smith_g1(alpha, &wm, &wi))
}

pub struct RoughConductor {
    id: String,
    reflectance: Arc<dyn Texture>,
    roughness: Arc<dyn Texture>,
}

impl RoughConductor {
    pub fn new(reflectance: Arc<dyn Texture>, roughness: Arc<dyn Texture>) -> Self {
        Self { id: generate_node_id("RoughConductor"), reflectance, roughness }
    }
}

impl ComputationNode for RoughConductor {
    fn id(&self) -> &str {
        &self.id
    }

    fn describe(&self) -> String {
        format!("RoughConductor [ reflectance: {}, roughness: {} ]",
                self.reflectance.describe(), self.roughness.describe())
    }
}

impl Bsdf for RoughConductor {
    fn evaluate(&self, uv: &Vector2f, wo: &Vector3f, wi: &Vector3f) -> BsdfEval {
        let alpha = roughness_to_alpha(self.roughness.scalar(uv));
        evaluate_lobe(self.reflectance.evaluate(uv), alpha, wo, wi)
    }

    fn sample(&self, uv: &Vector2f, wo: &Vector3f, sampler: &mut dyn Sampler) -> BsdfSample {
        let alpha = roughness_to_alpha(self.roughness.scalar(uv));
        sample_lobe(self.reflectance.evaluate(uv), alpha, wo, sampler)
    }

    fn albedo(&self, uv: &Vector2f) -> Color {
        self.reflectance.evaluate(uv)
    }
}
