// Copyright @yucwang 2026

pub mod direct;
pub mod path;

use crate::core::interaction::Intersection;
use crate::core::sampler::Sampler;
use crate::core::scene::Scene;
use crate::math::color::Color;
use crate::math::constants::EPSILON;

/// Next-event estimation at a surface hit: one light pick, one light
/// sample, one shadow ray. Returns black for light-less scenes and for
/// occluded or degenerate samples.
pub fn estimate_direct(scene: &Scene, its: &Intersection<'_>, sampler: &mut dyn Sampler) -> Color {
    let pick = scene.sample_light(sampler);
    let light = match pick.light {
        Some(light) if pick.probability > 0.0 => light,
        _ => return Color::black(),
    };

    let sample = light.sample_direct(&its.position(), sampler);
    if sample.distance < EPSILON {
        return Color::black();
    }

    let shadow = scene.intersect(&its.spawn_ray(&sample.wi), sampler);
    if shadow.is_hit() && shadow.t - EPSILON < sample.distance {
        return Color::black();
    }

    // the bsdf value already carries the cosine
    sample.weight * its.evaluate_bsdf(&sample.wi).value * (1.0 / pick.probability)
}
