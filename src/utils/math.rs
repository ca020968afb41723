use nalgebra::Vector3;

use crate::utils::constants::NORM_EPSILON;

/// Clamp a vector's magnitude to `max_len`, preserving its direction.
#[inline]
pub fn clamp_magnitude(v: Vector3<f64>, max_len: f64) -> Vector3<f64> {
    let len2 = v.norm_squared();
    if len2 <= max_len * max_len {
        return v;
    }
    v * (max_len / len2.sqrt())
}

/// Normalize a vector, falling back to `fallback` when its length is
/// below the degeneracy threshold.
#[inline]
pub fn normalize_or(v: Vector3<f64>, fallback: Vector3<f64>) -> Vector3<f64> {
    let len = v.norm();
    if len < NORM_EPSILON {
        fallback
    } else {
        v / len
    }
}

/// Build an orthonormal basis for the plane perpendicular to `radial_dir`.
///
/// The cross-product seed is whichever of the Z or Y axis is least parallel
/// to `radial_dir`, so the construction never degenerates.
pub fn tangent_basis(radial_dir: &Vector3<f64>) -> (Vector3<f64>, Vector3<f64>) {
    let seed = if radial_dir.z.abs() < 0.9 {
        Vector3::z()
    } else {
        Vector3::y()
    };
    let t1 = normalize_or(radial_dir.cross(&seed), Vector3::x());
    let t2 = normalize_or(radial_dir.cross(&t1), Vector3::y());
    (t1, t2)
}
