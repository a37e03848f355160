// Copyright @yucwang 2026

use crate::core::bsdf::Bsdf;
use crate::core::error::Result;
use crate::core::instance::Instance;
use crate::core::scene::Scene;
use crate::core::shape::Shape;
use crate::core::texture::Texture;
use crate::emitters::area::AreaLight;
use crate::emitters::lambertian::LambertianEmission;
use crate::emitters::point::PointLight;
use crate::materials::dielectric::Dielectric;
use crate::materials::diffuse::Diffuse;
use crate::materials::principled::Principled;
use crate::materials::roughconductor::RoughConductor;
use crate::math::color::Color;
use crate::math::constants::{ Float, PI, Vector2f, Vector3f };
use crate::math::transform::Transform;
use crate::sensors::perspective::PerspectiveCamera;
use crate::shapes::rectangle::Rectangle;
use crate::shapes::sphere::Sphere;
use crate::textures::checkerboard::CheckerboardTexture;
use crate::textures::constant::ConstantTexture;

use std::sync::Arc;

fn constant(color: Color) -> Arc<dyn Texture> {
    Arc::new(ConstantTexture::new(color))
}

fn scalar(value: Float) -> Arc<dyn Texture> {
    Arc::new(ConstantTexture::scalar(value))
}

fn diffuse(color: Color) -> Arc<dyn Bsdf> {
    Arc::new(Diffuse::new(constant(color)))
}

fn sphere_at(center: Vector3f, radius: Float) -> Result<Transform> {
    Ok(Transform::translate(center).compose(&Transform::scale(Vector3f::repeat(radius))?))
}

/// A unit rectangle turned so its +z normal becomes `rotation` applied to +z,
/// then moved to `offset`.
fn wall(offset: Vector3f, rotation: Transform) -> Transform {
    Transform::translate(offset).compose(&rotation)
}

/// The built-in scene: a Cornell box spanning [-1, 1] x [0, 2] x [-1, 1]
/// with y up, a glass, a principled and a rough metal sphere.
///
/// The ceiling panel is only seen by camera rays. Next event estimation
/// goes through a small spherical bulb that is never added to the scene,
/// so no radiance is counted twice and the bulb cannot shadow itself.
pub fn cornell_box(width: usize, height: usize) -> Result<Scene> {
    let mut scene = Scene::new();
    let rectangle: Arc<dyn Shape> = Arc::new(Rectangle::new());
    let sphere: Arc<dyn Shape> = Arc::new(Sphere::new());

    let x_axis = Vector3f::new(1.0, 0.0, 0.0);
    let y_axis = Vector3f::new(0.0, 1.0, 0.0);
    let white = Color::new(0.73, 0.73, 0.73);

    let floor_texture: Arc<dyn Texture> = Arc::new(CheckerboardTexture::new(
        white, Color::new(0.3, 0.3, 0.3), Vector2f::new(8.0, 8.0)));
    let walls = [
        ("floor", wall(Vector3f::zeros(), Transform::rotate(x_axis, -0.5 * PI)),
         Arc::new(Diffuse::new(floor_texture)) as Arc<dyn Bsdf>),
        ("ceiling", wall(Vector3f::new(0.0, 2.0, 0.0), Transform::rotate(x_axis, 0.5 * PI)),
         diffuse(white)),
        ("back", wall(Vector3f::new(0.0, 1.0, -1.0), Transform::identity()),
         diffuse(white)),
        ("left", wall(Vector3f::new(-1.0, 1.0, 0.0), Transform::rotate(y_axis, 0.5 * PI)),
         diffuse(Color::new(0.63, 0.065, 0.05))),
        ("right", wall(Vector3f::new(1.0, 1.0, 0.0), Transform::rotate(y_axis, -0.5 * PI)),
         diffuse(Color::new(0.14, 0.45, 0.091))),
    ];
    for (name, transform, bsdf) in walls.iter() {
        scene.add_instance(Arc::new(Instance::new(rectangle.clone())
                                    .with_id(name)
                                    .with_transform(Arc::new(*transform))
                                    .with_bsdf(bsdf.clone())));
    }

    let panel_transform = wall(Vector3f::new(0.0, 1.99, 0.0), Transform::rotate(x_axis, 0.5 * PI))
        .compose(&Transform::scale(Vector3f::new(0.25, 0.25, 1.0))?);
    scene.add_instance(Arc::new(Instance::new(rectangle.clone())
                                .with_id("ceiling_panel")
                                .with_transform(Arc::new(panel_transform))
                                .with_emission(Arc::new(LambertianEmission::new(constant(Color::gray(12.0)))))));

    let glass: Arc<dyn Bsdf> = Arc::new(Dielectric::new(scalar(1.5), constant(Color::white()), constant(Color::white())));
    let plastic: Arc<dyn Bsdf> = Arc::new(Principled::new(constant(Color::new(0.2, 0.35, 0.8)),
                                                          scalar(0.4), scalar(0.0), scalar(0.5)));
    let metal: Arc<dyn Bsdf> = Arc::new(RoughConductor::new(constant(Color::new(0.95, 0.64, 0.54)), scalar(0.3)));
    let spheres = [
        ("glass_sphere", Vector3f::new(-0.45, 0.35, 0.2), 0.35, glass),
        ("principled_sphere", Vector3f::new(0.5, 0.3, -0.4), 0.3, plastic),
        ("metal_sphere", Vector3f::new(0.45, 0.2, 0.5), 0.2, metal),
    ];
    for (name, center, radius, bsdf) in spheres.iter() {
        scene.add_instance(Arc::new(Instance::new(sphere.clone())
                                    .with_id(name)
                                    .with_transform(Arc::new(sphere_at(*center, *radius)?))
                                    .with_bsdf(bsdf.clone())));
    }

    let bulb = Instance::new(sphere)
        .with_id("bulb")
        .with_transform(Arc::new(sphere_at(Vector3f::new(0.0, 1.85, 0.0), 0.05)?))
        .with_emission(Arc::new(LambertianEmission::new(constant(Color::gray(60.0)))));
    scene.add_light(Box::new(AreaLight::new(Arc::new(bulb))));
    scene.add_light(Box::new(PointLight::new(Vector3f::new(-0.6, 1.6, 0.6), Color::gray(1.5))));

    scene.set_camera(Box::new(PerspectiveCamera::new(Vector3f::new(0.0, 1.0, 3.9),
                                                     Vector3f::new(0.0, 1.0, 0.0),
                                                     y_axis,
                                                     40.0_f32.to_radians(),
                                                     width,
                                                     height)));
    scene.build_bvh();

    log::debug!("Built cornell box with {} instances and {} lights.",
                scene.instances().len(), scene.lights().len());
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::cornell_box;
    use crate::core::computation_node::ComputationNode;
    use crate::math::constants::{ Float, Vector2f, Vector3f };
    use crate::test_utils::{ assert_close, SequenceSampler };

    #[test]
    fn test_cornell_box_builds() {
        let scene = cornell_box(64, 48).unwrap();
        assert_eq!(scene.instances().len(), 9);
        assert_eq!(scene.lights().len(), 2);
        assert_eq!(scene.camera().unwrap().resolution(), (64, 48));
    }

    #[test]
    fn test_center_ray_hits_back_wall() {
        let scene = cornell_box(32, 32).unwrap();
        let ray = scene.camera().unwrap().sample_ray(&Vector2f::new(0.5, 0.5));
        let its = scene.intersect(&ray, &mut SequenceSampler::constant(0.5));
        assert!(its.is_hit());
        assert_eq!(its.instance.map(|instance| instance.id()), Some("back"));
        assert_close(its.position().z, -1.0, 1e-4);
        assert_close(its.surface.geo_normal.dot(&Vector3f::new(0.0, 0.0, 1.0)), 1.0, 1e-4);
        assert!(its.t > 3.0 as Float);
    }
}
