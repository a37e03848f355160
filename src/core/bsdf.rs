// Copyright @yucwang 2023

use crate::core::computation_node::ComputationNode;
use crate::core::sampler::Sampler;
use crate::math::color::Color;
use crate::math::constants::{ Vector2f, Vector3f };

// Definitions of types used in BSDF sampling and eval
// processes. All directions live in the local shading frame.

/// Reflectance times |cos(wi)|, without any division by a density.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BsdfEval {
    pub value: Color,
}

/// A sampled incident direction whose weight has already been divided by
/// the density it was drawn with.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BsdfSample {
    pub wi: Vector3f,
    pub weight: Color,
}

impl BsdfEval {
    pub fn new(value: Color) -> Self {
        Self { value }
    }

    /// Queries with zero probability, e.g. the continuous density of a
    /// Dirac lobe.
    pub fn invalid() -> Self {
        Self { value: Color::black() }
    }

    pub fn is_invalid(&self) -> bool {
        self.value.is_black()
    }
}

impl BsdfSample {
    pub fn new(wi: Vector3f, weight: Color) -> Self {
        Self { wi, weight }
    }

    pub fn invalid() -> Self {
        Self { wi: Vector3f::zeros(), weight: Color::black() }
    }

    pub fn is_invalid(&self) -> bool {
        self.wi == Vector3f::zeros()
    }
}

pub trait Bsdf: ComputationNode + Send + Sync {
    fn evaluate(&self, uv: &Vector2f, wo: &Vector3f, wi: &Vector3f) -> BsdfEval;

    fn sample(&self, uv: &Vector2f, wo: &Vector3f, sampler: &mut dyn Sampler) -> BsdfSample;

    fn albedo(&self, _uv: &Vector2f) -> Color {
        Color::black()
    }
}
