// Copyright @yucwang 2026

use crate::core::computation_node::ComputationNode;
use crate::core::sampler::Sampler;
use crate::math::color::Color;
use crate::math::constants::{Float, Vector3f};

/// Incident light from one light sample. `weight` is already divided by the
/// sampling density; `distance` is infinite for lights at infinity.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DirectLightSample {
    pub wi: Vector3f,
    pub weight: Color,
    pub distance: Float,
}

impl DirectLightSample {
    /// Zero distance; callers reject it like any self-occluding sample.
    pub fn invalid() -> Self {
        Self { wi: Vector3f::zeros(), weight: Color::black(), distance: 0.0 }
    }
}

/// One discrete light pick. `light == None` means the scene has no light.
pub struct LightSample<'a> {
    pub light: Option<&'a dyn Light>,
    pub probability: Float,
}

impl<'a> LightSample<'a> {
    pub fn none() -> Self {
        Self { light: None, probability: 0.0 }
    }

    pub fn is_none(&self) -> bool {
        self.light.is_none()
    }
}

pub trait Light: ComputationNode + Send + Sync {
    fn sample_direct(&self, origin: &Vector3f, sampler: &mut dyn Sampler) -> DirectLightSample;

    /// Whether ordinary rays can hit this light directly.
    fn can_be_intersected(&self) -> bool;
}
