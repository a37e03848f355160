// Copyright 2020 @TwoCookingMice

use super::constants::{EPSILON, Float, Vector3f};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray3f {
    origin: Vector3f,
    dir: Vector3f,
    pub min_t: Float,
    pub max_t: Float,
    pub depth: u32,
}

impl Ray3f {
    pub fn new(o: Vector3f, d: Vector3f,
               min_t: Option<Float>, max_t: Option<Float>) -> Self {
        Self::unnormalized(o, d.normalize(), min_t, max_t)
    }

    /// Keeps the direction as given. Used for rays mapped through a
    /// transform, whose direction length is needed to rescale `t`.
    pub fn unnormalized(o: Vector3f, d: Vector3f,
                        min_t: Option<Float>, max_t: Option<Float>) -> Self {
        Self { origin: o, dir: d,
               min_t: min_t.unwrap_or(EPSILON),
               max_t: max_t.unwrap_or(std::f32::MAX),
               depth: 0 }
    }

    pub fn normalized(&self) -> Self {
        Self { dir: self.dir.normalize(), ..*self }
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn origin(&self) -> Vector3f {
        self.origin
    }

    pub fn dir(&self) -> Vector3f {
        self.dir
    }

    pub fn at(&self, t: Float) -> Vector3f {
        self.origin + self.dir * t
    }
}

/* Tests for Ray */
