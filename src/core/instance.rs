// Copyright @yucwang 2026

use crate::core::bsdf::Bsdf;
use crate::core::computation_node::{generate_node_id, ComputationNode};
use crate::core::emission::Emission;
use crate::core::interaction::{AreaSample, Intersection, SurfaceEvent};
use crate::core::sampler::Sampler;
use crate::core::shape::Shape;
use crate::core::texture::Texture;
use crate::math::aabb::AABB;
use crate::math::constants::{EPSILON, Float, Vector3f};
use crate::math::ray::Ray3f;
use crate::math::transform::Transform;

use std::sync::Arc;

/// A shape placed in the world, together with everything needed to shade
/// it. Shapes work in their own local space; the instance maps rays into
/// that space and hit data (including sampling densities) back out.
pub struct Instance {
    id: String,
    shape: Arc<dyn Shape>,
    transform: Option<Arc<Transform>>,
    alpha: Option<Arc<dyn Texture>>,
    normal: Option<Arc<dyn Texture>>,
    bsdf: Option<Arc<dyn Bsdf>>,
    emission: Option<Arc<dyn Emission>>,
}

impl Instance {
    pub fn new(shape: Arc<dyn Shape>) -> Self {
        Self {
            id: generate_node_id("Instance"),
            shape,
            transform: None,
            alpha: None,
            normal: None,
            bsdf: None,
            emission: None,
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn with_transform(mut self, transform: Arc<Transform>) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn with_alpha(mut self, alpha: Arc<dyn Texture>) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn with_normal_map(mut self, normal: Arc<dyn Texture>) -> Self {
        self.normal = Some(normal);
        self
    }

    pub fn with_bsdf(mut self, bsdf: Arc<dyn Bsdf>) -> Self {
        self.bsdf = Some(bsdf);
        self
    }

    pub fn with_emission(mut self, emission: Arc<dyn Emission>) -> Self {
        self.emission = Some(emission);
        self
    }

    pub fn shape(&self) -> &Arc<dyn Shape> {
        &self.shape
    }

    pub fn transform(&self) -> Option<&Transform> {
        self.transform.as_deref()
    }

    pub fn bsdf(&self) -> Option<&dyn Bsdf> {
        self.bsdf.as_deref()
    }

    pub fn emission(&self) -> Option<&dyn Emission> {
        self.emission.as_deref()
    }

    /// On a hit closer than `its.t`, fills `its` with world space data and
    /// returns true. On a miss, or a hit discarded by the alpha mask, `its`
    /// is left exactly as it was.
    pub fn intersect<'a>(&'a self, ray: &Ray3f, its: &mut Intersection<'a>,
                         sampler: &mut dyn Sampler) -> bool {
        match &self.transform {
            None => {
                if !self.intersect_local(ray, its, sampler) {
                    return false;
                }
            }
            Some(transform) => {
                let local_ray = transform.inv_apply_ray(ray);
                let length = local_ray.dir().norm();
                let previous_t = its.t;
                its.t *= length;
                if !self.intersect_local(&local_ray.normalized(), its, sampler) {
                    its.t = previous_t;
                    return false;
                }
                its.t /= length;
            }
        }

        its.instance = Some(self);
        self.transform_frame(&mut its.surface);
        true
    }

    pub fn bounding_box(&self) -> AABB {
        let transform = match &self.transform {
            Some(transform) => transform,
            None => return self.shape.bounding_box(),
        };

        let local = self.shape.bounding_box();
        if local.is_unbounded() {
            return AABB::full();
        }
        let mut bounds = AABB::default();
        for i in 0..8 {
            bounds.expand_by_point(&transform.apply_point(local.corner(i)));
        }
        bounds
    }

    pub fn centroid(&self) -> Vector3f {
        match &self.transform {
            Some(transform) => transform.apply_point(self.shape.centroid()),
            None => self.shape.centroid(),
        }
    }

    /// World space surface sample; `pdf` is per unit of world area.
    pub fn sample_area(&self, sampler: &mut dyn Sampler) -> AreaSample {
        let mut sample = self.shape.sample_area(sampler);
        self.transform_frame(&mut sample);
        sample
    }

    fn intersect_local<'a>(&'a self, ray: &Ray3f, its: &mut Intersection<'a>,
                           sampler: &mut dyn Sampler) -> bool {
        let previous = self.alpha.as_ref().map(|_| its.clone());
        if !self.shape.intersect(ray, its, sampler) {
            return false;
        }
        self.validate_intersection(ray, its.t);

        if let (Some(alpha), Some(previous)) = (&self.alpha, previous) {
            // stochastic transparency
            if alpha.evaluate(&its.surface.uv).a() <= sampler.next() {
                *its = previous;
                return false;
            }
        }
        true
    }

    fn validate_intersection(&self, ray: &Ray3f, t: Float) {
        if !t.is_finite() || t < EPSILON {
            log::error!("{} returned an invalid hit distance {} for ray {:?} (instance {})",
                        self.shape.describe(), t, ray, self.id);
            panic!("invalid hit distance {} from {}", t, self.shape.describe());
        }
    }

    /// Local surface data to world space: normal map first, then the
    /// transform, then the area Jacobian on the density.
    fn transform_frame(&self, surface: &mut SurfaceEvent) {
        if let Some(normal_map) = &self.normal {
            let c = normal_map.evaluate(&surface.uv);
            let perturbed = Vector3f::new(2.0 * c.r() - 1.0, 2.0 * c.g() - 1.0, 2.0 * c.b() - 1.0);
            if perturbed.norm_squared() > 0.0 {
                surface.sh_normal = surface.shading_frame().to_world(&perturbed.normalize());
            } else {
                log::warn!("{}: degenerate normal map value at uv ({}, {}), keeping the shading normal",
                           normal_map.describe(), surface.uv.x, surface.uv.y);
            }
        }

        let transform = match &self.transform {
            Some(transform) => transform,
            None => return,
        };

        let bitangent = surface.geo_normal.cross(&surface.tangent);
        let world_tangent = transform.apply_vector(surface.tangent);
        let world_bitangent = transform.apply_vector(bitangent);
        let jacobian = world_tangent.cross(&world_bitangent).norm();

        surface.position = transform.apply_point(surface.position);
        surface.geo_normal = transform.apply_normal(surface.geo_normal).normalize();
        surface.sh_normal = transform.apply_normal(surface.sh_normal).normalize();
        surface.tangent = world_tangent.normalize();
        surface.pdf /= jacobian;
    }
}

impl ComputationNode for Instance {
    fn id(&self) -> &str {
        &self.id
    }

    fn describe(&self) -> String {
        let mut desc = String::new();
        desc.push_str("Instance [\n");
        desc.push_str(&format!("  id: {}\n", self.id));
        desc.push_str(&format!("  shape: {}\n", self.shape.describe()));
        if let Some(transform) = &self.transform {
            desc.push_str(&format!("  transform: {:?}\n", transform.matrix()));
        }
        if let Some(bsdf) = &self.bsdf {
            desc.push_str(&format!("  bsdf: {}\n", bsdf.describe()));
        }
        if let Some(emission) = &self.emission {
            desc.push_str(&format!("  emission: {}\n", emission.describe()));
        }
        desc.push_str(&format!("  alpha: {}, normal map: {}\n",
                               self.alpha.is_some(), self.normal.is_some()));
        desc.push_str("]");
        desc
    }
}
