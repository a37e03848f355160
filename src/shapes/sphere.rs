// Copyright @yucwang 2026

use crate::core::computation_node::{generate_node_id, ComputationNode};
use crate::core::interaction::{AreaSample, Intersection, SurfaceEvent};
use crate::core::sampler::Sampler;
use crate::core::shape::Shape;
use crate::math::aabb::AABB;
use crate::math::constants::{EPSILON, INV_FOUR_PI, PI, Float, Vector2f, Vector3f};
use crate::math::frame::Frame;
use crate::math::ray::Ray3f;
use crate::math::warp::sample_uniform_sphere;

/// Unit sphere centred at the origin. Size and placement come from the
/// instance transform.
pub struct Sphere {
    id: String,
}

impl Sphere {
    pub fn new() -> Self {
        Self { id: generate_node_id("Sphere") }
    }

    fn surface_at(p: Vector3f) -> SurfaceEvent {
        let normal = p.normalize();
        let mut phi = normal.y.atan2(normal.x);
        if phi < 0.0 {
            phi += 2.0 * PI;
        }
        let theta = normal.z.max(-1.0).min(1.0).acos();

        // d(position)/d(phi), undefined at the poles
        let tangent = Vector3f::new(-normal.y, normal.x, 0.0);
        let tangent = if tangent.norm_squared() > 1e-12 {
            tangent.normalize()
        } else {
            Frame::from_normal(normal).tangent
        };

        SurfaceEvent {
            position: p,
            geo_normal: normal,
            sh_normal: normal,
            tangent,
            uv: Vector2f::new(phi * 0.5 / PI, theta / PI),
            pdf: INV_FOUR_PI,
        }
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputationNode for Sphere {
    fn id(&self) -> &str {
        &self.id
    }

    fn describe(&self) -> String {
        format!("Sphere [ id: {} ]", self.id)
    }
}

impl Shape for Sphere {
    fn intersect(&self, ray: &Ray3f, its: &mut Intersection<'_>, _sampler: &mut dyn Sampler) -> bool {
        let o = ray.origin();
        let d = ray.dir();
        let b = o.dot(&d);
        let c = o.dot(&o) - 1.0;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return false;
        }

        let root = discriminant.sqrt();
        let near: Float = -b - root;
        let t = if near >= EPSILON { near } else { -b + root };
        if t < EPSILON || t >= its.t {
            return false;
        }

        its.t = t;
        its.surface = Self::surface_at(ray.at(t));
        true
    }

    fn bounding_box(&self) -> AABB {
        AABB::new(Vector3f::repeat(-1.0), Vector3f::repeat(1.0))
    }

    fn centroid(&self) -> Vector3f {
        Vector3f::zeros()
    }

    fn sample_area(&self, sampler: &mut dyn Sampler) -> AreaSample {
        Self::surface_at(sample_uniform_sphere(&sampler.next_2d()))
    }
}

#[cfg(test)]
mod tests {
    use super::Sphere;
    use crate::core::interaction::Intersection;
    use crate::core::shape::Shape;
    use crate::math::constants::{INV_FOUR_PI, Vector3f};
    use crate::math::ray::Ray3f;
    use crate::test_utils::SequenceSampler;

    #[test]
    fn test_sphere_hit_from_outside() {
        let sphere = Sphere::new();
        let ray = Ray3f::new(Vector3f::new(0.0, 0.0, 10.0), Vector3f::new(0.0, 0.0, -1.0), None, None);
        let mut its = Intersection::new(&ray);
        let mut sampler = SequenceSampler::constant(0.5);
        assert!(sphere.intersect(&ray, &mut its, &mut sampler));
        assert_eq!(its.t, 9.0);
        assert_eq!(its.surface.position, Vector3f::new(0.0, 0.0, 1.0));
        assert_eq!(its.surface.geo_normal, Vector3f::new(0.0, 0.0, 1.0));
        assert!(its.surface.tangent.dot(&its.surface.geo_normal).abs() < 1e-6);
        assert_eq!(sampler.draws(), 0);
    }

    #[test]
    fn test_sphere_hit_from_inside_and_bound() {
        let sphere = Sphere::new();
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(1.0, 0.0, 0.0), None, None);
        let mut its = Intersection::new(&ray);
        let mut sampler = SequenceSampler::constant(0.5);
        assert!(sphere.intersect(&ray, &mut its, &mut sampler));
        assert!((its.t - 1.0).abs() < 1e-6);

        // an existing closer hit is kept
        its.t = 0.5;
        assert!(!sphere.intersect(&ray, &mut its, &mut sampler));
        assert_eq!(its.t, 0.5);
    }

    #[test]
    fn test_sphere_area_sample_on_surface() {
        let sphere = Sphere::new();
        let mut sampler = SequenceSampler::new(&[0.2, 0.7, 0.9, 0.1]);
        for _ in 0..2 {
            let sample = sphere.sample_area(&mut sampler);
            assert!((sample.position.norm() - 1.0).abs() < 1e-5);
            assert!((sample.geo_normal - sample.position).norm() < 1e-5);
            assert_eq!(sample.pdf, INV_FOUR_PI);
        }
    }
}
