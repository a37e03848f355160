// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector2f, Vector3f, PI};

// GGX (Trowbridge-Reitz) helpers. All vectors are in the local shading
// frame, `wm` is a microfacet normal.

fn clamp01(v: Float) -> Float {
    if v < 0.0 {
        0.0
    } else if v > 1.0 {
        1.0
    } else {
        v
    }
}

pub fn ggx_d(alpha: Float, wm: &Vector3f) -> Float {
    let cos_theta = wm.z;
    if cos_theta <= 0.0 {
        return 0.0;
    }
    let a2 = alpha * alpha;
    let cos2 = cos_theta * cos_theta;
    let denom = cos2 * (a2 - 1.0) + 1.0;
    a2 / (PI * denom * denom)
}

/// Smith masking for direction `w` seen through microfacet `wm`. Zero when
/// `w` lies on the other side of the facet than of the macro surface.
pub fn smith_g1(alpha: Float, wm: &Vector3f, w: &Vector3f) -> Float {
    if w.dot(wm) * w.z <= 0.0 {
        return 0.0;
    }
    let cos2 = w.z * w.z;
    let sin2 = (1.0 - cos2).max(0.0);
    if sin2 <= 0.0 {
        return 1.0;
    }
    let tan2 = sin2 / cos2;
    let root = (1.0 + alpha * alpha * tan2).sqrt();
    2.0 / (1.0 + root)
}

/// Density of `sample_ggx_vndf` returning `wm`, per solid angle of `wm`.
pub fn pdf_ggx_vndf(alpha: Float, wo: &Vector3f, wm: &Vector3f) -> Float {
    if wo.z <= 0.0 || wm.z <= 0.0 {
        return 0.0;
    }
    let dot = wo.dot(wm);
    if dot <= 0.0 {
        return 0.0;
    }
    ggx_d(alpha, wm) * smith_g1(alpha, wm, wo) * dot / wo.z
}

/// Visible normal sampling (Heitz 2018). Requires `wo.z > 0`.
pub fn sample_ggx_vndf(alpha: Float, wo: &Vector3f, u: &Vector2f) -> Vector3f {
    let wh = Vector3f::new(alpha * wo.x, alpha * wo.y, wo.z).normalize();

    let mut t1 = Vector3f::new(1.0, 0.0, 0.0);
    if wh.z < 0.9999 {
        t1 = Vector3f::new(0.0, 0.0, 1.0).cross(&wh).normalize();
    }
    let t2 = wh.cross(&t1);

    let r = clamp01(u.x).sqrt();
    let phi = 2.0 * PI * clamp01(u.y);
    let t1p = r * phi.cos();
    let mut t2p = r * phi.sin();
    let s = 0.5 * (1.0 + wh.z);
    t2p = (1.0 - s) * (1.0 - t1p * t1p).max(0.0).sqrt() + s * t2p;

    let nh = t1 * t1p + t2 * t2p + wh * (1.0 - t1p * t1p - t2p * t2p).max(0.0).sqrt();
    Vector3f::new(alpha * nh.x, alpha * nh.y, nh.z.max(0.0)).normalize()
}

/// Mirror `w` about `n`.
pub fn reflect(w: &Vector3f, n: &Vector3f) -> Vector3f {
    2.0 * w.dot(n) * n - w
}

pub fn schlick(f0: Float, cos_theta: Float) -> Float {
    let cos_theta = clamp01(cos_theta);
    f0 + (1.0 - f0) * (1.0 - cos_theta).powi(5)
}
