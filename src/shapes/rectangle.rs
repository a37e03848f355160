// Copyright @yucwang 2026

use crate::core::computation_node::{generate_node_id, ComputationNode};
use crate::core::interaction::{AreaSample, Intersection, SurfaceEvent};
use crate::core::sampler::Sampler;
use crate::core::shape::Shape;
use crate::math::aabb::AABB;
use crate::math::constants::{EPSILON, Float, Vector2f, Vector3f};
use crate::math::ray::Ray3f;

/// The square [-1, 1]^2 in the z = 0 plane, facing +z.
pub struct Rectangle {
    id: String,
}

impl Rectangle {
    pub fn new() -> Self {
        Self { id: generate_node_id("Rectangle") }
    }

    fn surface_at(x: Float, y: Float) -> SurfaceEvent {
        SurfaceEvent {
            position: Vector3f::new(x, y, 0.0),
            geo_normal: Vector3f::new(0.0, 0.0, 1.0),
            sh_normal: Vector3f::new(0.0, 0.0, 1.0),
            tangent: Vector3f::new(1.0, 0.0, 0.0),
            uv: Vector2f::new(0.5 * (x + 1.0), 0.5 * (y + 1.0)),
            // area is 4
            pdf: 0.25,
        }
    }
}

impl Default for Rectangle {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputationNode for Rectangle {
    fn id(&self) -> &str {
        &self.id
    }

    fn describe(&self) -> String {
        format!("Rectangle [ id: {} ]", self.id)
    }
}

impl Shape for Rectangle {
    fn intersect(&self, ray: &Ray3f, its: &mut Intersection<'_>, _sampler: &mut dyn Sampler) -> bool {
        let d = ray.dir();
        if d.z == 0.0 {
            return false;
        }

        let t = -ray.origin().z / d.z;
        if t < EPSILON || t >= its.t {
            return false;
        }

        let p = ray.at(t);
        if p.x.abs() > 1.0 || p.y.abs() > 1.0 {
            return false;
        }

        its.t = t;
        its.surface = Self::surface_at(p.x, p.y);
        true
    }

    fn bounding_box(&self) -> AABB {
        AABB::new(Vector3f::new(-1.0, -1.0, 0.0), Vector3f::new(1.0, 1.0, 0.0))
    }

    fn centroid(&self) -> Vector3f {
        Vector3f::zeros()
    }

    fn sample_area(&self, sampler: &mut dyn Sampler) -> AreaSample {
        let u = sampler.next_2d();
        Self::surface_at(2.0 * u.x - 1.0, 2.0 * u.y - 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Rectangle;
    use crate::core::interaction::Intersection;
    use crate::core::shape::Shape;
    use crate::math::constants::{Vector2f, Vector3f};
    use crate::math::ray::Ray3f;
    use crate::test_utils::SequenceSampler;

    #[test]
    fn test_rectangle_hit_and_uv() {
        let rect = Rectangle::new();
        let ray = Ray3f::new(Vector3f::new(0.5, -0.5, 2.0), Vector3f::new(0.0, 0.0, -1.0), None, None);
        let mut its = Intersection::new(&ray);
        let mut sampler = SequenceSampler::constant(0.5);
        assert!(rect.intersect(&ray, &mut its, &mut sampler));
        assert_eq!(its.t, 2.0);
        assert_eq!(its.surface.uv, Vector2f::new(0.75, 0.25));
        assert_eq!(its.surface.pdf, 0.25);
    }

    #[test]
    fn test_rectangle_misses() {
        let rect = Rectangle::new();
        let mut sampler = SequenceSampler::constant(0.5);

        let outside = Ray3f::new(Vector3f::new(1.5, 0.0, 1.0), Vector3f::new(0.0, 0.0, -1.0), None, None);
        let mut its = Intersection::new(&outside);
        assert!(!rect.intersect(&outside, &mut its, &mut sampler));

        let parallel = Ray3f::new(Vector3f::new(0.0, 0.0, 1.0), Vector3f::new(1.0, 0.0, 0.0), None, None);
        let mut its = Intersection::new(&parallel);
        assert!(!rect.intersect(&parallel, &mut its, &mut sampler));
        assert!(!its.is_hit());
    }
}
