// Copyright 2020 @TwoCookingMice

use super::constants::{ Int, Float, Vector3f,
                       FLOAT_MIN, FLOAT_MAX, INFINITY };
use super::ray::{ Ray3f };

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AABB {
    pub p_min: Vector3f,
    pub p_max: Vector3f
}

impl Default for AABB {
    fn default() -> Self {
        Self { p_min: Vector3f::new(FLOAT_MAX, FLOAT_MAX, FLOAT_MAX),
               p_max: Vector3f::new(FLOAT_MIN, FLOAT_MIN, FLOAT_MIN) }
    }
}

impl AABB {
    pub fn new(p_min: Vector3f, p_max: Vector3f) -> Self {
        Self { p_min: p_min.inf(&p_max), p_max: p_max.sup(&p_min) }
    }

    /// Sentinel for shapes without finite extent.
    pub fn full() -> Self {
        Self { p_min: Vector3f::repeat(-INFINITY),
               p_max: Vector3f::repeat(INFINITY) }
    }

    pub fn is_unbounded(&self) -> bool {
        self.p_min.iter().chain(self.p_max.iter()).any(|v| v.is_infinite())
    }

    /// Corner `index` in 0..8; bit `d` selects max along dimension `d`.
    pub fn corner(&self, index: usize) -> Vector3f {
        let mut p = self.p_min;
        for dim in 0..3 {
            if (index >> dim) & 1 == 1 {
                p[dim] = self.p_max[dim];
            }
        }
        p
    }

    pub fn center(&self) -> Vector3f {
        0.5f32 * self.p_min + 0.5f32 * self.p_max
    }

    pub fn expand_by_point(&mut self, p: &Vector3f) {
        self.p_min = self.p_min.inf(p);
        self.p_max = self.p_max.sup(p);
    }

    pub fn expand_by_aabb(&mut self, other: &AABB) {
        self.p_min = self.p_min.inf(&other.p_min);
        self.p_max = self.p_max.sup(&other.p_max);
    }

    pub fn ray_intersect(&self, ray: &Ray3f) -> bool {
        self.ray_entry(ray, ray.max_t).is_some()
    }

    /// Distance at which the ray enters the box, if it does so within
    /// [ray.min_t, t_max].
    pub fn ray_entry(&self, ray: &Ray3f, t_max: Float) -> Option<Float> {
        if !self.is_valid() {
            return None;
        }

        let o = ray.origin();
        let d = ray.dir();
        let mut t_min = ray.min_t;
        let mut t_max = t_max;

        for idx in 0..3 {
            let dir = d[idx];
            if dir.abs() < 1e-8 {
                if o[idx] < self.p_min[idx] || o[idx] > self.p_max[idx] {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / dir;
            let mut t0 = (self.p_min[idx] - o[idx]) * inv;
            let mut t1 = (self.p_max[idx] - o[idx]) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }

            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_max < t_min {
                return None;
            }
        }

        Some(t_min)
    }

    pub fn diagonal(&self) -> Vector3f {
        self.p_max - self.p_min
    }

    pub fn max_extent(&self) -> Int {
        let diagonal = self.diagonal();
        if diagonal[0] > diagonal[1] && diagonal[0] > diagonal[2] {
            0
        } else if diagonal[1] > diagonal[2] {
            1
        } else {
            2
        }
    }

    pub fn is_valid(&self) -> bool {
        (0..3).all(|idx| self.p_min[idx] <= self.p_max[idx])
    }
}

/* Test for AABB */
