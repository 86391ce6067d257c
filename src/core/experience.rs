//! Per-scene animation state and the per-frame update.

use super::camera::Viewport;
use super::constants::*;
use super::easing::{lerp, lerp_vec3};
use super::error::SceneError;
use super::fireflies::Fireflies;
use super::layers::{Layer, LayerUniforms, UniformRegistry, LAYERS};
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

/// Position and XYZ Euler rotation of the root scene node.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GroupTransform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl GroupTransform {
    pub fn matrix(&self) -> Mat4 {
        let r = self.rotation;
        Mat4::from_rotation_translation(
            Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z),
            self.position,
        )
    }
}

pub struct Experience {
    pub layers: [Layer; LAYER_COUNT],
    pub movement: Vec3,
    pub group: GroupTransform,
    /// Shared clock of the wiggling layers.
    pub wiggle_time: f32,
    pub firefly_time: f32,
    pub fireflies: Fireflies,
}

impl Experience {
    pub fn new(viewport: Viewport) -> Result<Self, SceneError> {
        let mut registry = UniformRegistry::new();
        for (i, spec) in LAYERS.iter().enumerate() {
            registry.register(i, LayerUniforms::from_spec(spec))?;
        }
        let uniforms = registry.finish()?;
        let layers = std::array::from_fn(|i| {
            let mut layer = Layer {
                spec: LAYERS[i],
                scale: Vec3::ONE,
                uniforms: uniforms[i],
            };
            layer.fit(viewport);
            layer
        });
        Ok(Self {
            layers,
            movement: Vec3::ZERO,
            group: GroupTransform::default(),
            wiggle_time: 0.0,
            firefly_time: 0.0,
            fireflies: Fireflies::new(
                FIREFLY_COUNT,
                FIREFLY_RADIUS,
                &[FIREFLY_COLOR],
                FIREFLY_SEED,
            ),
        })
    }

    /// Refit every layer to a new viewport.
    pub fn resize(&mut self, viewport: Viewport) {
        for layer in &mut self.layers {
            layer.fit(viewport);
        }
    }

    /// Advance one frame toward the pointer-derived targets.
    pub fn update(&mut self, pointer: Vec2, delta: f32) {
        let target = Vec3::new(pointer.x, pointer.y * MOVEMENT_Y_SCALE, 0.0);
        self.movement = lerp_vec3(self.movement, target, MOVEMENT_EASE_RATE);

        let g = &mut self.group;
        g.position.x = lerp(
            g.position.x,
            pointer.x * GROUP_POSITION_X_PER_POINTER,
            GROUP_EASE_RATE,
        );
        g.rotation.x = lerp(
            g.rotation.x,
            pointer.y / GROUP_ROTATION_X_DIVISOR,
            GROUP_EASE_RATE,
        );
        g.rotation.y = lerp(
            g.rotation.y,
            -pointer.x / GROUP_ROTATION_Y_DIVISOR,
            GROUP_EASE_RATE,
        );

        let delta = delta.max(0.0);
        self.wiggle_time += delta;
        self.firefly_time += delta;

        for layer in &mut self.layers {
            layer.uniforms.movement = self.movement;
        }
        for i in WIGGLE_LAYERS {
            self.layers[i].uniforms.time = self.wiggle_time;
        }
    }

    /// Model matrix of layer `i` (group transform, then plane placement and scale).
    pub fn layer_model(&self, i: usize) -> Mat4 {
        let layer = &self.layers[i];
        self.group.matrix()
            * Mat4::from_translation(layer.spec.position)
            * Mat4::from_scale(layer.scale)
    }
}
