// Copyright @yucwang 2023

use crate::core::bsdf::{Bsdf, BsdfEval, BsdfSample};
use crate::core::computation_node::{generate_node_id, ComputationNode};
use crate::core::sampler::Sampler;
use crate::core::texture::Texture;
use crate::math::color::Color;
use crate::math::constants::{INV_PI, Vector2f, Vector3f};
use crate::math::frame::Frame;
use crate::math::warp::{sample_cosine_hemisphere, sample_cosine_hemisphere_pdf};

use std::sync::Arc;

/// Lambertian lobe with the given albedo. Also used as the diffuse part of
/// the principled material.
pub fn evaluate_lobe(albedo: Color, wo: &Vector3f, wi: &Vector3f) -> BsdfEval {
    if !Frame::same_hemisphere(wo, wi) {
        return BsdfEval::invalid();
    }
    BsdfEval::new(albedo * (Frame::abs_cos_theta(wi) * INV_PI))
}

pub fn sample_lobe(albedo: Color, wo: &Vector3f, sampler: &mut dyn Sampler) -> BsdfSample {
    let mut wi = sample_cosine_hemisphere(&sampler.next_2d());
    if sample_cosine_hemisphere_pdf(&wi) == 0.0 || wo.z == 0.0 {
        return BsdfSample::invalid();
    }
    if wo.z < 0.0 {
        wi.z *= -1.0;
    }
    // cos / pdf cancel
    BsdfSample::new(wi, albedo)
}

pub struct Diffuse {
    id: String,
    albedo: Arc<dyn Texture>,
}

impl Diffuse {
    pub fn new(albedo: Arc<dyn Texture>) -> Self {
        Self { id: generate_node_id("Diffuse"), albedo }
    }
}

impl ComputationNode for Diffuse {
    fn id(&self) -> &str {
        &self.id
    }

    fn describe(&self) -> String {
        format!("Diffuse [ albedo: {} ]", self.albedo.describe())
    }
}

impl Bsdf for Diffuse {
    fn evaluate(&self, uv: &Vector2f, wo: &Vector3f, wi: &Vector3f) -> BsdfEval {
        evaluate_lobe(self.albedo.evaluate(uv), wo, wi)
    }

    fn sample(&self, uv: &Vector2f, wo: &Vector3f, sampler: &mut dyn Sampler) -> BsdfSample {
        sample_lobe(self.albedo.evaluate(uv), wo, sampler)
    }

    fn albedo(&self, uv: &Vector2f) -> Color {
        self.albedo.evaluate(uv)
    }
}

#[cfg(test)]
mod tests {
    use super::Diffuse;
    use crate::core::bsdf::Bsdf;
    use crate::core::sampler::{LcgSampler, Sampler};
    use crate::math::color::Color;
    use crate::math::constants::{Float, Vector2f, Vector3f};
    use crate::math::warp::sample_cosine_hemisphere_pdf;
    use crate::test_utils::{assert_close, SequenceSampler};
    use crate::textures::constant::ConstantTexture;

    use std::sync::Arc;

    fn gray_diffuse(albedo: Float) -> Diffuse {
        Diffuse::new(Arc::new(ConstantTexture::new(Color::gray(albedo))))
    }

    #[test]
    fn test_opposite_hemispheres_are_black() {
        let bsdf = gray_diffuse(0.8);
        let uv = Vector2f::new(0.5, 0.5);
        let mut sampler = LcgSampler::new(3);
        for _ in 0..256 {
            let a = sampler.next_2d();
            let b = sampler.next_2d();
            let wo = Vector3f::new(a.x - 0.5, a.y - 0.5, 0.5).normalize();
            let wi = Vector3f::new(b.x - 0.5, b.y - 0.5, -0.5).normalize();
            assert!(bsdf.evaluate(&uv, &wo, &wi).is_invalid());
            assert!(bsdf.evaluate(&uv, &-wo, &-wi).is_invalid());
        }
    }

    #[test]
    fn test_weight_is_evaluate_over_pdf() {
        let bsdf = gray_diffuse(0.8);
        let uv = Vector2f::new(0.5, 0.5);
        let mut sampler = LcgSampler::new(17);
        for wo in &[Vector3f::new(0.2, 0.3, 0.9).normalize(), Vector3f::new(0.2, 0.3, -0.9).normalize()] {
            for _ in 0..64 {
                let sample = bsdf.sample(&uv, wo, &mut sampler);
                assert!(!sample.is_invalid());
                assert!(wo.z * sample.wi.z > 0.0);
                let pdf = sample_cosine_hemisphere_pdf(&Vector3f::new(0.0, 0.0, sample.wi.z.abs()));
                let expected = bsdf.evaluate(&uv, wo, &sample.wi).value * (1.0 / pdf);
                assert_close(sample.weight.r(), expected.r(), 1e-4);
                assert_close(sample.weight.r(), 0.8, 1e-6);
            }
        }
    }

    #[test]
    fn test_hemispherical_reflectance_converges_to_albedo() {
        // uniform directions, so the estimator does not trivially reduce to the albedo
        let bsdf = gray_diffuse(0.6);
        let uv = Vector2f::new(0.5, 0.5);
        let wo = Vector3f::new(0.0, 0.6, 0.8);
        let mut sampler = LcgSampler::new(23);
        let n = 200_000;
        let mut sum = 0.0f64;
        for _ in 0..n {
            let u = sampler.next_2d();
            let z = u.x;
            let r = (1.0 - z * z).max(0.0).sqrt();
            let phi = 2.0 * std::f32::consts::PI * u.y;
            let wi = Vector3f::new(r * phi.cos(), r * phi.sin(), z);
            sum += (bsdf.evaluate(&uv, &wo, &wi).value.r() * 2.0 * std::f32::consts::PI) as f64;
        }
        assert!((sum / n as f64 - 0.6).abs() < 0.01, "got {}", sum / n as f64);
    }

    #[test]
    fn test_grazing_wo_is_invalid() {
        let bsdf = gray_diffuse(0.5);
        let mut sampler = SequenceSampler::constant(0.3);
        let sample = bsdf.sample(&Vector2f::new(0.0, 0.0), &Vector3f::new(1.0, 0.0, 0.0), &mut sampler);
        assert!(sample.is_invalid());
        assert_eq!(bsdf.albedo(&Vector2f::new(0.0, 0.0)), Color::gray(0.5));
    }

    #[test]
    fn test_zero_density_warp_is_invalid() {
        let bsdf = gray_diffuse(0.5);
        // u = (1, 0.5) lands on the rim of the concentric disk, so z = 0
        let mut sampler = SequenceSampler::new(&[1.0, 0.5]);
        let sample = bsdf.sample(&Vector2f::new(0.0, 0.0), &Vector3f::new(0.0, 0.0, 1.0), &mut sampler);
        assert!(sample.is_invalid());
        assert_eq!(sampler.draws(), 2);
    }
}
