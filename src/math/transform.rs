// Copyright 2020 @TwoCookingMice

use super::constants::{ Float, Matrix4f, Point3f, Vector3f };
use super::ray::Ray3f;
use crate::core::error::{ RenderError, Result };

use nalgebra::{ Rotation3, Unit };

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    matrix: Matrix4f,
    inv_matrix: Matrix4f
}

impl Default for Transform {
    fn default() -> Self {
        Self { matrix: Matrix4f::identity(),
               inv_matrix: Matrix4f::identity() }
    }
}

impl Transform {
    pub fn new(matrix: Matrix4f) -> Result<Self> {
        let inv_matrix = matrix.try_inverse().ok_or(RenderError::SingularTransform)?;
        Ok(Self { matrix, inv_matrix })
    }

    pub fn identity() -> Self {
        Self::default()
    }

    pub fn translate(offset: Vector3f) -> Self {
        Self { matrix: Matrix4f::new_translation(&offset),
               inv_matrix: Matrix4f::new_translation(&-offset) }
    }

    pub fn scale(factors: Vector3f) -> Result<Self> {
        Self::new(Matrix4f::new_nonuniform_scaling(&factors))
    }

    pub fn rotate(axis: Vector3f, angle_radians: Float) -> Self {
        let rotation = Rotation3::from_axis_angle(&Unit::new_normalize(axis), angle_radians);
        Self { matrix: rotation.to_homogeneous(),
               inv_matrix: rotation.inverse().to_homogeneous() }
    }

    /// `self` applied after `first`.
    pub fn compose(&self, first: &Transform) -> Self {
        Self { matrix: self.matrix * first.matrix,
               inv_matrix: first.inv_matrix * self.inv_matrix }
    }

    pub fn matrix(&self) -> &Matrix4f {
        &self.matrix
    }

    pub fn apply_point(&self, p: Vector3f) -> Vector3f {
        self.matrix.transform_point(&Point3f::from(p)).coords
    }

    pub fn apply_vector(&self, v: Vector3f) -> Vector3f {
        self.matrix.transform_vector(&v)
    }

    // Normal transformation is different from point transformation.
    // Before transformation, we have n^Tx = 0
    // After transformation, we have (Sn)^T(Mx) = 0
    // Then, we will get: S = (M^{-1})^T
    pub fn apply_normal(&self, n: Vector3f) -> Vector3f {
        self.inv_matrix.transpose().transform_vector(&n)
    }

    pub fn inv_apply_point(&self, p: Vector3f) -> Vector3f {
        self.inv_matrix.transform_point(&Point3f::from(p)).coords
    }

    pub fn inv_apply_vector(&self, v: Vector3f) -> Vector3f {
        self.inv_matrix.transform_vector(&v)
    }

    /// The result keeps the transformed (unnormalized) direction.
    pub fn inv_apply_ray(&self, ray: &Ray3f) -> Ray3f {
        Ray3f::unnormalized(self.inv_apply_point(ray.origin()), self.inv_apply_vector(ray.dir()),
                            Some(ray.min_t), Some(ray.max_t)).with_depth(ray.depth)
    }
}
