// Copyright @yucwang 2023

use crate::core::bsdf::{ BsdfEval, BsdfSample };
use crate::core::instance::Instance;
use crate::core::sampler::Sampler;
use crate::math::color::Color;
use crate::math::constants::{ Float, Vector2f, Vector3f };
use crate::math::frame::Frame;
use crate::math::ray::Ray3f;

/// A point on a surface, produced either by ray intersection or by area
/// sampling. `pdf` is the area density of sampling this point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfaceEvent {
    pub position: Vector3f,
    pub geo_normal: Vector3f,
    pub sh_normal: Vector3f,
    pub tangent: Vector3f,
    pub uv: Vector2f,
    pub pdf: Float,
}

pub type AreaSample = SurfaceEvent;

impl Default for SurfaceEvent {
    fn default() -> Self {
        Self {
            position: Vector3f::zeros(),
            geo_normal: Vector3f::new(0.0, 0.0, 1.0),
            sh_normal: Vector3f::new(0.0, 0.0, 1.0),
            tangent: Vector3f::new(1.0, 0.0, 0.0),
            uv: Vector2f::new(0.0, 0.0),
            pdf: 0.0,
        }
    }
}

impl SurfaceEvent {
    pub fn shading_frame(&self) -> Frame {
        Frame::from_normal_tangent(self.sh_normal, self.tangent)
    }
}

/// Closest hit found so far along a ray. `t` doubles as the search bound:
/// shapes only accept hits closer than it. No instance means a miss, in
/// which case `background` is the radiance arriving from infinity.
#[derive(Clone)]
pub struct Intersection<'a> {
    pub surface: SurfaceEvent,
    pub t: Float,
    pub wo: Vector3f,
    pub instance: Option<&'a Instance>,
    pub background: Color,
}

impl<'a> Intersection<'a> {
    pub fn new(ray: &Ray3f) -> Self {
        Self {
            surface: SurfaceEvent::default(),
            t: ray.max_t,
            wo: -ray.dir(),
            instance: None,
            background: Color::black(),
        }
    }

    pub fn is_hit(&self) -> bool {
        self.instance.is_some()
    }

    pub fn position(&self) -> Vector3f {
        self.surface.position
    }

    pub fn uv(&self) -> Vector2f {
        self.surface.uv
    }

    pub fn spawn_ray(&self, wi: &Vector3f) -> Ray3f {
        Ray3f::new(self.surface.position, *wi, None, None)
    }

    pub fn evaluate_emission(&self) -> Color {
        let instance = match self.instance {
            Some(instance) => instance,
            None => return self.background,
        };
        match instance.emission() {
            Some(emission) => {
                let wo = self.surface.shading_frame().to_local(&self.wo);
                emission.evaluate(&self.surface.uv, &wo).value
            }
            None => Color::black(),
        }
    }

    /// `wi` is a world space direction.
    pub fn evaluate_bsdf(&self, wi: &Vector3f) -> BsdfEval {
        debug_assert!((wi.norm() - 1.0).abs() < 1e-3, "wi is not normalized: {:?}", wi);
        let bsdf = match self.instance.and_then(|instance| instance.bsdf()) {
            Some(bsdf) => bsdf,
            None => return BsdfEval::invalid(),
        };
        let frame = self.surface.shading_frame();
        bsdf.evaluate(&self.surface.uv, &frame.to_local(&self.wo), &frame.to_local(wi))
    }

    /// The returned `wi` is in world space.
    pub fn sample_bsdf(&self, sampler: &mut dyn Sampler) -> BsdfSample {
        let bsdf = match self.instance.and_then(|instance| instance.bsdf()) {
            Some(bsdf) => bsdf,
            None => return BsdfSample::invalid(),
        };
        let frame = self.surface.shading_frame();
        let sample = bsdf.sample(&self.surface.uv, &frame.to_local(&self.wo), sampler);
        if sample.is_invalid() {
            return sample;
        }
        debug_assert!(sample.weight.is_finite(), "non-finite bsdf weight from {}", bsdf.describe());
        BsdfSample::new(frame.to_world(&sample.wi), sample.weight)
    }
}
