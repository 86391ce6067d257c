use glam::Vec3;

/// Linear interpolation from `from` toward `to` by `rate`.
///
/// Applied once per frame this is exponential smoothing: the value covers a
/// fixed fraction of the remaining distance and never reaches the target.
#[inline]
pub fn lerp(from: f32, to: f32, rate: f32) -> f32 {
    from + (to - from) * rate
}

#[inline]
pub fn lerp_vec3(from: Vec3, to: Vec3, rate: f32) -> Vec3 {
    from + (to - from) * rate
}

/// Hermite smoothstep as in WGSL. A degenerate range (`edge0 >= edge1`)
/// is treated as a step at `edge0`.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge1 <= edge0 {
        return if x <= edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
