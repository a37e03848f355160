// Copyright @yucwang 2026

use crate::core::integrator::Integrator;
use crate::core::sampler::Sampler;
use crate::core::scene::Scene;
use crate::integrators::estimate_direct;
use crate::math::color::Color;
use crate::math::ray::Ray3f;

/// Single-bounce estimator: emission at the first hit, one light sample,
/// and emitters seen along one bsdf-sampled ray.
pub struct DirectIntegrator;

impl DirectIntegrator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DirectIntegrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Integrator for DirectIntegrator {
    fn li(&self, scene: &Scene, ray: &Ray3f, sampler: &mut dyn Sampler) -> Color {
        let its = scene.intersect(ray, sampler);
        if !its.is_hit() {
            return its.evaluate_emission();
        }

        let light = estimate_direct(scene, &its, sampler);

        let mut emitted = Color::black();
        let sample = its.sample_bsdf(sampler);
        if !sample.is_invalid() {
            let next = scene.intersect(&its.spawn_ray(&sample.wi).with_depth(ray.depth + 1), sampler);
            emitted = next.evaluate_emission() * sample.weight;
            debug_assert!(emitted.is_finite());
        }

        light + emitted + its.evaluate_emission()
    }

    fn describe(&self) -> String {
        String::from("DirectIntegrator")
    }
}

#[cfg(test)]
mod tests {
    use super::DirectIntegrator;
    use crate::core::instance::Instance;
    use crate::core::integrator::Integrator;
    use crate::core::sampler::LcgSampler;
    use crate::core::scene::Scene;
    use crate::emitters::lambertian::LambertianEmission;
    use crate::emitters::point::PointLight;
    use crate::materials::diffuse::Diffuse;
    use crate::math::color::Color;
    use crate::math::constants::{PI, Vector3f};
    use crate::math::ray::Ray3f;
    use crate::math::transform::Transform;
    use crate::shapes::sphere::Sphere;
    use crate::test_utils::{assert_close, SequenceSampler};
    use crate::textures::constant::ConstantTexture;

    use std::sync::Arc;

    fn diffuse_sphere() -> Instance {
        let albedo = Arc::new(ConstantTexture::new(Color::new(0.8, 0.8, 0.8)));
        Instance::new(Arc::new(Sphere::new())).with_bsdf(Arc::new(Diffuse::new(albedo)))
    }

    fn camera_ray() -> Ray3f {
        Ray3f::new(Vector3f::new(0.0, 0.0, 10.0), Vector3f::new(0.0, 0.0, -1.0), None, None)
    }

    #[test]
    fn test_point_lit_sphere_regression() {
        let mut scene = Scene::new();
        scene.add_instance(Arc::new(diffuse_sphere()));
        scene.add_light(Box::new(PointLight::new(Vector3f::new(0.0, 0.0, 6.0), Color::gray(400.0))));

        let integrator = DirectIntegrator::new();
        let expected = 400.0 / (4.0 * PI * 25.0) * 0.8 / PI;
        let mut sampler = LcgSampler::new(42);
        for _ in 0..16 {
            let li = integrator.li(&scene, &camera_ray(), &mut sampler);
            assert_close(li.r(), expected, 1e-5);
            assert_close(li.g(), expected, 1e-5);
            assert_close(li.b(), expected, 1e-5);
        }
    }

    #[test]
    fn test_occluded_light_contributes_nothing() {
        let light = || Box::new(PointLight::new(Vector3f::new(0.0, 0.0, 6.0), Color::gray(400.0)));
        // reaches the top of the sphere, (0, 0, 1), at 45 degrees
        let ray = Ray3f::new(Vector3f::new(3.0, 0.0, 4.0), Vector3f::new(-1.0, 0.0, -1.0), None, None);

        let mut open = Scene::new();
        open.add_instance(Arc::new(diffuse_sphere()));
        open.add_light(light());
        let li = DirectIntegrator::new().li(&open, &ray, &mut LcgSampler::new(5));
        assert_close(li.r(), 400.0 / (4.0 * PI * 25.0) * 0.8 / PI, 1e-5);

        let mut blocked = Scene::new();
        blocked.add_instance(Arc::new(diffuse_sphere()));
        let blocker = Instance::new(Arc::new(Sphere::new()))
            .with_transform(Arc::new(Transform::translate(Vector3f::new(0.0, 0.0, 3.5))
                .compose(&Transform::scale(Vector3f::repeat(0.5)).unwrap())));
        blocked.add_instance(Arc::new(blocker));
        blocked.add_light(light());
        let li = DirectIntegrator::new().li(&blocked, &ray, &mut LcgSampler::new(5));
        assert!(li.is_black());
    }

    #[test]
    fn test_no_light_skips_next_event_estimation() {
        let mut scene = Scene::new();
        scene.add_instance(Arc::new(diffuse_sphere()));
        scene.set_background(Color::gray(0.25));

        let li = DirectIntegrator::new().li(&scene, &camera_ray(), &mut LcgSampler::new(9));
        assert!(li.is_finite());
        // every bsdf ray escapes the convex sphere and sees the background
        assert_close(li.r(), 0.8 * 0.25, 1e-5);
    }

    #[test]
    fn test_miss_returns_background() {
        let mut scene = Scene::new();
        scene.set_background(Color::new(0.1, 0.2, 0.3));
        let mut sampler = SequenceSampler::constant(0.5);
        let li = DirectIntegrator::new().li(&scene, &camera_ray(), &mut sampler);
        assert_eq!(li, Color::new(0.1, 0.2, 0.3));
        assert_eq!(sampler.draws(), 0);
    }

    #[test]
    fn test_visible_emitter() {
        let mut scene = Scene::new();
        let emission = Arc::new(LambertianEmission::new(Arc::new(ConstantTexture::new(Color::gray(2.0)))));
        scene.add_instance(Arc::new(Instance::new(Arc::new(Sphere::new())).with_emission(emission)));
        let li = DirectIntegrator::new().li(&scene, &camera_ray(), &mut SequenceSampler::constant(0.5));
        assert_eq!(li.rgb(), (2.0, 2.0, 2.0));
    }
}
