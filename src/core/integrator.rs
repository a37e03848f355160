// Copyright @yucwang 2026

use crate::core::sampler::Sampler;
use crate::core::scene::Scene;
use crate::math::color::Color;
use crate::math::ray::Ray3f;

/// Radiance estimator for a single camera ray. Implementations hold only
/// immutable parameters; all randomness comes from `sampler`.
pub trait Integrator: Send + Sync {
    fn li(&self, scene: &Scene, ray: &Ray3f, sampler: &mut dyn Sampler) -> Color;

    fn describe(&self) -> String;
}
