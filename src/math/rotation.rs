use glam::{Mat3, Vec3};

/// Rotation about the vertical (z) axis by an angle given in degrees.
pub fn rotation_z_deg(degrees: f32) -> Mat3 {
    Mat3::from_rotation_z(degrees.to_radians())
}

/// Applies `rotation` to every point in `src`, writing into `dst`.
///
/// `dst` must have the same length as `src`. The caller keeps the source
/// coordinates untouched, so repeated calls never accumulate error.
pub fn rotate_about_z(rotation: &Mat3, src: &[Vec3], dst: &mut [Vec3]) {
    debug_assert_eq!(src.len(), dst.len());
    for (out, p) in dst.iter_mut().zip(src) {
        *out = *rotation * *p;
    }
}
