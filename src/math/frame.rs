// Copyright @yucwang 2023

use crate::math::constants::{ Float, Vector3f };

/// Orthonormal shading frame. In local coordinates the normal is +z.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    pub tangent: Vector3f,
    pub bitangent: Vector3f,
    pub normal: Vector3f,
}

impl Default for Frame {
    fn default() -> Self {
        Frame {
            tangent: Vector3f::new(1.0, 0.0, 0.0),
            bitangent: Vector3f::new(0.0, 1.0, 0.0),
            normal: Vector3f::new(0.0, 0.0, 1.0)
        }
    }
}

impl Frame {
    pub fn from_normal(normal: Vector3f) -> Frame {
        let up = if normal.z.abs() < 0.999 {
            Vector3f::new(0.0, 0.0, 1.0)
        } else {
            Vector3f::new(1.0, 0.0, 0.0)
        };
        let tangent = up.cross(&normal).normalize();
        let bitangent = normal.cross(&tangent);
        Frame { tangent, bitangent, normal }
    }

    /// Gram-Schmidt the tangent against the normal; falls back to an
    /// arbitrary tangent when the two are (nearly) parallel.
    pub fn from_normal_tangent(normal: Vector3f, tangent: Vector3f) -> Frame {
        let projected = tangent - normal * normal.dot(&tangent);
        let len_sq = projected.norm_squared();
        if !(len_sq > 1e-12) {
            return Frame::from_normal(normal);
        }
        let tangent = projected / len_sq.sqrt();
        Frame {
            tangent,
            bitangent: normal.cross(&tangent),
            normal,
        }
    }

    pub fn to_local(&self, v: &Vector3f) -> Vector3f {
        Vector3f::new(v.dot(&self.tangent), v.dot(&self.bitangent), v.dot(&self.normal))
    }

    pub fn to_world(&self, v: &Vector3f) -> Vector3f {
        v.x * self.tangent + v.y * self.bitangent + v.z * self.normal
    }

    pub fn cos_theta(v: &Vector3f) -> Float {
        v.z
    }

    pub fn abs_cos_theta(v: &Vector3f) -> Float {
        v.z.abs()
    }

    pub fn same_hemisphere(a: &Vector3f, b: &Vector3f) -> bool {
        a.z * b.z > 0.0
    }

    /// Mirror about the local normal.
    pub fn reflect(v: &Vector3f) -> Vector3f {
        Vector3f::new(-v.x, -v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::Frame;
    use crate::math::constants::Vector3f;

    fn assert_vec_close(a: &Vector3f, b: &Vector3f) {
        assert!((a - b).norm() < 1e-5, "expected {:?} ≈ {:?}", a, b);
    }

    #[test]
    fn test_frame_round_trip() {
        let n = Vector3f::new(0.3, -0.5, 0.8).normalize();
        let frame = Frame::from_normal(n);
        assert!(frame.tangent.dot(&n).abs() < 1e-6);
        assert!(frame.bitangent.dot(&n).abs() < 1e-6);

        let v = Vector3f::new(-0.2, 0.9, 0.1).normalize();
        assert_vec_close(&frame.to_world(&frame.to_local(&v)), &v);
        assert_vec_close(&frame.to_local(&n), &Vector3f::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_frame_tangent_is_orthogonalised() {
        let n = Vector3f::new(0.0, 0.0, 1.0);
        let frame = Frame::from_normal_tangent(n, Vector3f::new(1.0, 0.0, 0.5));
        assert_vec_close(&frame.tangent, &Vector3f::new(1.0, 0.0, 0.0));
        assert_vec_close(&frame.bitangent, &Vector3f::new(0.0, 1.0, 0.0));

        let degenerate = Frame::from_normal_tangent(n, n);
        assert!(degenerate.tangent.dot(&n).abs() < 1e-6);
    }

    #[test]
    fn test_reflect_twice_is_identity() {
        let wo = Vector3f::new(0.4, -0.3, 0.7).normalize();
        assert_vec_close(&Frame::reflect(&Frame::reflect(&wo)), &wo);
    }
}
