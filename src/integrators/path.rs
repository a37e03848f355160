// Copyright @yucwang 2026

use crate::core::integrator::Integrator;
use crate::core::sampler::Sampler;
use crate::core::scene::Scene;
use crate::integrators::estimate_direct;
use crate::math::color::Color;
use crate::math::ray::Ray3f;

/// Unidirectional path tracer with next-event estimation. A path has at
/// most `max_depth` vertices; with depth 1 only emission at the first hit
/// is returned. There is no Russian roulette.
pub struct PathtracerIntegrator {
    max_depth: u32,
}

impl PathtracerIntegrator {
    pub fn new(max_depth: u32) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }
}

impl Default for PathtracerIntegrator {
    fn default() -> Self {
        Self::new(2)
    }
}

impl Integrator for PathtracerIntegrator {
    fn li(&self, scene: &Scene, ray: &Ray3f, sampler: &mut dyn Sampler) -> Color {
        let mut throughput = Color::white();
        let mut its = scene.intersect(ray, sampler);
        let mut radiance = its.evaluate_emission();

        for bounce in 0..self.max_depth.saturating_sub(1) {
            if !its.is_hit() {
                break;
            }

            radiance += throughput * estimate_direct(scene, &its, sampler);

            let sample = its.sample_bsdf(sampler);
            if sample.is_invalid() {
                break;
            }
            throughput *= sample.weight;

            let next_ray = its.spawn_ray(&sample.wi).with_depth(ray.depth + bounce + 1);
            its = scene.intersect(&next_ray, sampler);
            radiance += its.evaluate_emission() * throughput;
        }

        debug_assert!(radiance.is_finite(), "non-finite radiance {:?}", radiance);
        radiance
    }

    fn describe(&self) -> String {
        format!("PathtracerIntegrator [ max_depth: {} ]", self.max_depth)
    }
}
