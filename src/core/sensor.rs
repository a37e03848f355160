// Copyright @yucwang 2026

use crate::math::constants::Vector2f;
use crate::math::ray::Ray3f;

pub trait Sensor: Send + Sync {
    /// `u` is a position on the film in [0, 1]^2, y pointing down.
    fn sample_ray(&self, u: &Vector2f) -> Ray3f;

    /// (width, height) in pixels.
    fn resolution(&self) -> (usize, usize);

    fn describe(&self) -> String {
        String::from("Sensor")
    }
}
