// Copyright @yucwang 2023

use crate::core::computation_node::ComputationNode;
use crate::core::interaction::{ AreaSample, Intersection };
use crate::core::sampler::Sampler;
use crate::math::aabb::AABB;
use crate::math::constants::Vector3f;
use crate::math::ray::Ray3f;

/// Geometry in its own local space. Placement in the world is the job of
/// the owning instance.
pub trait Shape: ComputationNode + Send + Sync {
    /// Only writes `its` (surface and `t`) for hits with
    /// `EPSILON <= t < its.t`.
    fn intersect(&self, ray: &Ray3f, its: &mut Intersection<'_>, sampler: &mut dyn Sampler) -> bool;
    fn bounding_box(&self) -> AABB;
    fn centroid(&self) -> Vector3f;
    fn sample_area(&self, sampler: &mut dyn Sampler) -> AreaSample;
}
