// Copyright @yucwang 2026

use crate::core::bvh::BVH;
use crate::core::error::{RenderError, Result};
use crate::core::instance::Instance;
use crate::core::interaction::Intersection;
use crate::core::light::{Light, LightSample};
use crate::core::sampler::Sampler;
use crate::core::sensor::Sensor;
use crate::math::color::Color;
use crate::math::constants::Float;
use crate::math::ray::Ray3f;

use std::sync::Arc;

/// Everything a render reads: instances, lights, the camera and the
/// background radiance. Built once, then shared read-only by all workers.
pub struct Scene {
    instances: Vec<Arc<Instance>>,
    lights: Vec<Box<dyn Light>>,
    camera: Option<Box<dyn Sensor>>,
    background: Color,
    bvh: Option<BVH>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            instances: Vec::new(),
            lights: Vec::new(),
            camera: None,
            background: Color::black(),
            bvh: None,
        }
    }

    pub fn add_instance(&mut self, instance: Arc<Instance>) {
        self.instances.push(instance);
        self.bvh = None;
    }

    pub fn add_light(&mut self, light: Box<dyn Light>) {
        self.lights.push(light);
    }

    pub fn set_camera(&mut self, camera: Box<dyn Sensor>) {
        self.camera = Some(camera);
    }

    pub fn set_background(&mut self, background: Color) {
        self.background = background;
    }

    pub fn instances(&self) -> &[Arc<Instance>] {
        &self.instances
    }

    pub fn lights(&self) -> &[Box<dyn Light>] {
        &self.lights
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn camera(&self) -> Result<&dyn Sensor> {
        self.camera.as_deref().ok_or(RenderError::MissingCamera)
    }

    /// Without a BVH, `intersect` falls back to testing every instance.
    pub fn build_bvh(&mut self) {
        let bounds: Vec<_> = self.instances.iter().map(|instance| instance.bounding_box()).collect();
        let centroids: Vec<_> = self.instances.iter().map(|instance| instance.centroid()).collect();
        self.bvh = Some(BVH::new(&bounds, &centroids));
        log::debug!("Built BVH over {} instances.", self.instances.len());
    }

    /// Closest hit along `ray`. A miss carries the scene background.
    pub fn intersect<'a>(&'a self, ray: &Ray3f, sampler: &mut dyn Sampler) -> Intersection<'a> {
        let mut its = Intersection::new(ray);
        match &self.bvh {
            Some(bvh) => {
                let instances = &self.instances;
                bvh.traverse(ray, |index| {
                    if instances[index].intersect(ray, &mut its, &mut *sampler) {
                        Some(its.t)
                    } else {
                        None
                    }
                });
            }
            None => {
                for instance in &self.instances {
                    instance.intersect(ray, &mut its, sampler);
                }
            }
        }

        if !its.is_hit() {
            its.background = self.background;
        }
        its
    }

    /// Uniform pick among the lights. Draws nothing when there is no light.
    pub fn sample_light(&self, sampler: &mut dyn Sampler) -> LightSample<'_> {
        let count = self.lights.len();
        if count == 0 {
            return LightSample::none();
        }

        let index = ((sampler.next() * count as Float) as usize).min(count - 1);
        LightSample {
            light: Some(self.lights[index].as_ref()),
            probability: 1.0 / count as Float,
        }
    }
}
