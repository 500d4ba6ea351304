use glam::{DMat4, DVec3, DVec4};

/// World-to-view transform for a look-at camera
pub fn look_at(eye: DVec3, center: DVec3, up: DVec3) -> DMat4 {
    DMat4::look_at_rh(eye, center, up)
}

/// View-to-world transform for a look-at camera
///
/// Built directly from the orthonormal basis rather than by inverting
/// `look_at`, so the result stays exact for the rotation part.
pub fn look_at_inverse(eye: DVec3, center: DVec3, up: DVec3) -> DMat4 {
    let forward = (center - eye).normalize();
    let up_normal = up.normalize();
    let side = forward.cross(up_normal).normalize();
    let u = side.cross(forward).normalize();

    DMat4::from_translation(eye)
        * DMat4::from_cols(
            side.extend(0.0),
            u.extend(0.0),
            (-forward).extend(0.0),
            DVec4::W,
        )
}
