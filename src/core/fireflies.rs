//! Drifting, flickering point lights scattered through the layer stack.

use super::constants::FIREFLY_DRIFT;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Firefly {
    pub base: Vec3,
    pub speed: f32,
    pub phase: f32,
    pub size: f32,
    pub color: [f32; 3],
}

impl Firefly {
    pub fn position_at(&self, t: f32) -> Vec3 {
        let a = t * self.speed + self.phase;
        self.base
            + Vec3::new(
                a.sin(),
                (a * 0.8 + self.phase * 1.3).cos(),
                (a * 0.6).sin() * 0.5,
            ) * FIREFLY_DRIFT
    }

    /// Brightness in [0.1, 1.0].
    pub fn glow_at(&self, t: f32) -> f32 {
        0.55 + 0.45 * (t * self.speed * 3.0 + self.phase).sin()
    }
}

/// Per-instance data uploaded to the firefly pipeline.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FireflyInstance {
    pub position_size: [f32; 4],
    pub color_glow: [f32; 4],
}

#[derive(Clone, Debug)]
pub struct Fireflies {
    pub flies: Vec<Firefly>,
    pub radius: f32,
}

impl Fireflies {
    /// Scatter `count` fireflies uniformly inside a sphere of `radius`.
    pub fn new(count: usize, radius: f32, colors: &[[f32; 3]], seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut flies = Vec::with_capacity(count);
        for i in 0..count {
            let base = loop {
                let p = Vec3::new(
                    rng.gen_range(-1.0..=1.0),
                    rng.gen_range(-1.0..=1.0),
                    rng.gen_range(-1.0..=1.0),
                );
                if p.length_squared() <= 1.0 {
                    break p * radius;
                }
            };
            let color = if colors.is_empty() {
                [1.0, 1.0, 1.0]
            } else {
                colors[i % colors.len()]
            };
            flies.push(Firefly {
                base,
                speed: rng.gen_range(0.2..0.8),
                phase: rng.gen_range(0.0..std::f32::consts::TAU),
                size: rng.gen_range(0.6..1.6),
                color,
            });
        }
        Self { flies, radius }
    }

    pub fn len(&self) -> usize {
        self.flies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flies.is_empty()
    }

    pub fn write_instances(&self, t: f32, out: &mut Vec<FireflyInstance>) {
        out.clear();
        out.extend(self.flies.iter().map(|f| {
            let p = f.position_at(t);
            let [r, g, b] = f.color;
            FireflyInstance {
                position_size: [p.x, p.y, p.z, f.size],
                color_glow: [r, g, b, f.glow_at(t)],
            }
        }));
    }
}
