//! CPU form of the layer shader (`shaders/layer.wgsl`).

use super::constants::{ALPHA_DISCARD_THRESHOLD, LAYER_OUTPUT_ALPHA};
use super::layers::LayerUniforms;
use glam::{Vec2, Vec3};

/// Sway angle around Y for a vertex at height `y`.
#[inline]
pub fn wiggle_angle(time: f32, y: f32, wiggle: f32) -> f32 {
    (time + y).sin() / 2.0 * wiggle
}

/// Vertex stage: rotate around Y by the sway angle when wiggle is enabled.
pub fn wiggle_vertex(position: Vec3, time: f32, wiggle: f32) -> Vec3 {
    if wiggle <= 0.0 {
        return position;
    }
    let theta = wiggle_angle(time, position.y, wiggle);
    let (s, c) = theta.sin_cos();
    // row vector times [c 0 s; 0 1 0; -s 0 c] (column-major)
    Vec3::new(
        c * position.x + s * position.z,
        position.y,
        -s * position.x + c * position.z,
    )
}

/// Fragment stage texture coordinate.
#[inline]
pub fn layer_uv(uv: Vec2, u: &LayerUniforms) -> Vec2 {
    uv / u.scale + u.movement.truncate() * u.factor
}

/// Fragment stage output for a sampled texel, `None` when discarded.
#[inline]
pub fn shade_texel(texel: [f32; 4]) -> Option<[f32; 4]> {
    if texel[3] < ALPHA_DISCARD_THRESHOLD {
        return None;
    }
    Some([texel[0], texel[1], texel[2], LAYER_OUTPUT_ALPHA])
}
