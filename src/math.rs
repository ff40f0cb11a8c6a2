//! Float helpers shared by the renderer and the wobble sampler

/// Clamp a value to `0.0..=1.0`
#[inline]
pub fn clamp01(v: f32) -> f32 {
    if v < 0.0 {
        0.0
    } else if v > 1.0 {
        1.0
    } else {
        v
    }
}

/// Hermite interpolation between two edges
///
/// Returns 0 below `edge0`, 1 above `edge1`.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = clamp01((x - edge0) / (edge1 - edge0));
    t * t * (3.0 - 2.0 * t)
}

/// Sine of an angle given in degrees
#[inline]
pub fn sin_deg(degrees: f32) -> f32 {
    libm::sinf(degrees.to_radians())
}
