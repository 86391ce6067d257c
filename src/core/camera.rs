//! Fixed orthographic camera used by the parallax scene.
//!
//! The frustum is expressed in CSS pixels and divided by `zoom`, so one world
//! unit covers `zoom` pixels regardless of the device pixel ratio.

use super::constants::{CAMERA_FAR, CAMERA_NEAR, CAMERA_POSITION, CAMERA_ZOOM};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Visible area in world units at any depth (orthographic).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(f32::EPSILON)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct OrthoCamera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub zoom: f32,
    pub znear: f32,
    pub zfar: f32,
    /// Surface size in CSS pixels.
    pub size: Vec2,
}

impl OrthoCamera {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            eye: CAMERA_POSITION,
            target: Vec3::ZERO,
            up: Vec3::Y,
            zoom: CAMERA_ZOOM,
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
            size: Vec2::new(width, height),
        }
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
    }

    pub fn viewport(&self) -> Viewport {
        Viewport {
            width: self.size.x / self.zoom,
            height: self.size.y / self.zoom,
        }
    }

    /// Clip-space projection with wgpu's [0, 1] depth range.
    pub fn projection_matrix(&self) -> Mat4 {
        let half_w = self.size.x * 0.5 / self.zoom;
        let half_h = self.size.y * 0.5 / self.zoom;
        Mat4::orthographic_rh(-half_w, half_w, -half_h, half_h, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Distance from the eye to a world point along the viewing axis.
    pub fn view_distance(&self, world: Vec3) -> f32 {
        let forward = (self.target - self.eye).normalize();
        (world - self.eye).dot(forward)
    }

    /// Picking ray through a normalized device coordinate.
    ///
    /// For an orthographic camera the origin slides across the near plane and
    /// every ray shares the viewing direction.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let inv = self.view_proj().inverse();
        let p = inv * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        let origin = p.truncate() / p.w;
        let dir = (self.target - self.eye).normalize();
        (origin, dir)
    }
}
