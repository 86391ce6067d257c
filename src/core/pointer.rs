use super::camera::OrthoCamera;
use glam::{Vec2, Vec3};

/// Latest pointer sample in normalized device coordinates plus its picking ray.
///
/// The ray is not consumed by any current layer; it is kept up to date so
/// interactive layers can hit-test without re-deriving it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub ndc: Vec2,
    pub ray_origin: Vec3,
    pub ray_dir: Vec3,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            ndc: Vec2::ZERO,
            ray_origin: Vec3::ZERO,
            ray_dir: Vec3::NEG_Z,
        }
    }
}

impl PointerState {
    /// Recompute from raw client coordinates against the surface size.
    pub fn compute(&mut self, client_x: f32, client_y: f32, camera: &OrthoCamera) {
        self.ndc = client_to_ndc(client_x, client_y, camera.size.x, camera.size.y);
        let (origin, dir) = camera.ray_from_ndc(self.ndc);
        self.ray_origin = origin;
        self.ray_dir = dir;
    }
}

/// Map a pixel position inside `width x height` to [-1, 1]² with y up.
#[inline]
pub fn client_to_ndc(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    let w = width.max(1.0);
    let h = height.max(1.0);
    Vec2::new((client_x / w) * 2.0 - 1.0, -(client_y / h) * 2.0 + 1.0)
}
