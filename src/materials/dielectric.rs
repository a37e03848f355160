// Copyright @yucwang 2026

use crate::core::bsdf::{Bsdf, BsdfEval, BsdfSample};
use crate::core::computation_node::{generate_node_id, ComputationNode};
use crate::core::sampler::Sampler;
use crate::core::texture::Texture;
use crate::math::color::Color;
use crate::math::constants::{EPSILON, Float, Vector2f, Vector3f};
use crate::math::frame::Frame;

use std::sync::Arc;

/// Smooth glass-like interface. `ior` is inside over outside, the outside
/// being the side the normal points to.
pub struct Dielectric {
    id: String,
    ior: Arc<dyn Texture>,
    reflectance: Arc<dyn Texture>,
    transmittance: Arc<dyn Texture>,
}

impl Dielectric {
    pub fn new(ior: Arc<dyn Texture>,
               reflectance: Arc<dyn Texture>,
               transmittance: Arc<dyn Texture>) -> Self {
        Self { id: generate_node_id("Dielectric"), ior, reflectance, transmittance }
    }
}

/// Unpolarised Fresnel reflectance. `eta` is the relative index of the
/// incident over the transmitted side.
fn fresnel(eta: Float, cos_i: Float, cos_t: Float) -> Float {
    let r_p = (eta * cos_t - cos_i) / (eta * cos_t + cos_i);
    let r_s = (cos_t - eta * cos_i) / (cos_t + eta * cos_i);
    0.5 * (r_p * r_p + r_s * r_s)
}

impl ComputationNode for Dielectric {
    fn id(&self) -> &str {
        &self.id
    }

    fn describe(&self) -> String {
        format!("Dielectric [ ior: {}, reflectance: {}, transmittance: {} ]",
                self.ior.describe(), self.reflectance.describe(), self.transmittance.describe())
    }
}

impl Bsdf for Dielectric {
    fn evaluate(&self, _uv: &Vector2f, _wo: &Vector3f, _wi: &Vector3f) -> BsdfEval {
        BsdfEval::invalid()
    }

    fn sample(&self, uv: &Vector2f, wo: &Vector3f, sampler: &mut dyn Sampler) -> BsdfSample {
        let ior = self.ior.scalar(uv);
        let outside = Frame::cos_theta(wo) > 0.0;
        let (eta, side, cos_o) = if outside {
            (1.0 / ior, 1.0, wo.z)
        } else {
            (ior, -1.0, -wo.z)
        };

        let radicand = 1.0 - eta * eta * (1.0 - cos_o * cos_o);
        if radicand >= EPSILON {
            let cos_t = radicand.sqrt();
            let f = fresnel(eta, cos_o, cos_t);
            if sampler.next() > f {
                let wi = -eta * wo + Vector3f::new(0.0, 0.0, side * (eta * cos_o - cos_t));
                let weight = self.transmittance.evaluate(uv) * (eta * eta);
                return BsdfSample::new(wi.normalize(), weight);
            }
        }

        // Fresnel already decided how often we get here
        BsdfSample::new(Frame::reflect(wo), self.reflectance.evaluate(uv))
    }

    fn albedo(&self, uv: &Vector2f) -> Color {
        self.transmittance.evaluate(uv)
    }
}

#[cfg(test)]
mod tests {
    use super::{fresnel, Dielectric};
    use crate::core::bsdf::Bsdf;
    use crate::math::color::Color;
    use crate::math::constants::{Vector2f, Vector3f};
    use crate::test_utils::{assert_close, SequenceSampler};
    use crate::textures::constant::ConstantTexture;

    use std::sync::Arc;

    fn glass() -> Dielectric {
        Dielectric::new(Arc::new(ConstantTexture::scalar(1.5)),
                        Arc::new(ConstantTexture::new(Color::white())),
                        Arc::new(ConstantTexture::new(Color::new(0.9, 0.9, 0.9))))
    }

    fn assert_vec_close(a: &Vector3f, b: &Vector3f) {
        assert!((a - b).norm() < 1e-5, "expected {:?} ≈ {:?}", a, b);
    }

    #[test]
    fn test_normal_incidence() {
        let bsdf = glass();
        let uv = Vector2f::new(0.5, 0.5);
        let wo = Vector3f::new(0.0, 0.0, 1.0);
        // (0.5 / 2.5)^2
        assert_close(fresnel(1.0 / 1.5, 1.0, 1.0), 0.04, 1e-6);

        let mut refracting = SequenceSampler::constant(0.5);
        let refracted = bsdf.sample(&uv, &wo, &mut refracting);
        assert_vec_close(&refracted.wi, &Vector3f::new(0.0, 0.0, -1.0));
        assert_close(refracted.weight.r(), 0.9 / 2.25, 1e-6);
        assert_eq!(refracting.draws(), 1);

        let mut reflecting = SequenceSampler::constant(0.01);
        let reflected = bsdf.sample(&uv, &wo, &mut reflecting);
        assert_eq!(reflected.wi, wo);
        assert_eq!(reflected.weight, Color::white());
    }

    #[test]
    fn test_refraction_obeys_snell() {
        let bsdf = glass();
        let uv = Vector2f::new(0.5, 0.5);
        let wo = Vector3f::new(0.5, 0.0, 0.75f32.sqrt());
        let sample = bsdf.sample(&uv, &wo, &mut SequenceSampler::constant(0.99));

        assert!(sample.wi.z < 0.0);
        assert_close(sample.wi.norm(), 1.0, 1e-5);
        // sin(theta_o) = 1.5 sin(theta_t), on the opposite side of the normal
        assert_close(sample.wi.x, -0.5 / 1.5, 1e-5);

        // and back out again along the reversed path
        let back = bsdf.sample(&uv, &sample.wi, &mut SequenceSampler::constant(0.99));
        assert_vec_close(&back.wi, &wo);
        assert_close(back.weight.r(), 0.9 * 2.25, 1e-4);
    }

    #[test]
    fn test_total_internal_reflection() {
        let bsdf = glass();
        let uv = Vector2f::new(0.5, 0.5);
        // inside, 60 degrees from the normal is past the critical angle
        let wo = Vector3f::new(0.75f32.sqrt(), 0.0, -0.5);
        let mut sampler = SequenceSampler::constant(0.99);
        let sample = bsdf.sample(&uv, &wo, &mut sampler);
        assert_eq!(sample.wi, Vector3f::new(-wo.x, -wo.y, wo.z));
        assert_eq!(sampler.draws(), 0);
    }

    #[test]
    fn test_evaluate_is_always_invalid() {
        let bsdf = glass();
        let uv = Vector2f::new(0.5, 0.5);
        let wo = Vector3f::new(0.0, 0.0, 1.0);
        assert!(bsdf.evaluate(&uv, &wo, &wo).is_invalid());
        assert!(bsdf.evaluate(&uv, &wo, &Vector3f::new(0.0, 0.0, -1.0)).is_invalid());
    }
}
