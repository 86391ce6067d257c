// Host-side tests for the layer table, cover scaling, geometry and the layer shader rules.
// The main crate is wasm-only, so we mount the pure-Rust core directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod scene;

use glam::{Vec2, Vec3};
use scene::layers::{aspect_cover_scale, UniformRegistry};
use scene::shading::{layer_uv, shade_texel, wiggle_angle, wiggle_vertex};
use scene::*;

#[test]
fn layer_table_is_ordered_back_to_front() {
    let textures: Vec<&str> = LAYERS.iter().map(|l| l.texture).collect();
    assert_eq!(
        textures,
        [
            "bgrd.png",
            "effect.png",
            "bgrd_top.png",
            "object.png",
            "leaves1.png",
            "leaves2.png"
        ]
    );
    for pair in LAYERS.windows(2) {
        assert!(pair[0].position.z < pair[1].position.z);
    }
    assert_eq!(LAYERS[5].position, Vec3::new(-20.0, -20.0, 49.0));
    assert_eq!(LAYERS[3].factor, 0.0);
    assert_eq!(LAYERS[3].scale_factor, 0.87);
}

#[test]
fn only_leaf_layers_wiggle() {
    for (i, spec) in LAYERS.iter().enumerate() {
        let wiggles = spec.wiggle > 0.0;
        assert_eq!(wiggles, WIGGLE_LAYERS.contains(&i), "layer {i}");
        assert_eq!(spec.segments(), if wiggles { WIGGLE_SEGMENTS } else { 1 });
    }
}

#[test]
fn cover_scale_fits_height_when_viewport_is_narrower() {
    let vp = Viewport {
        width: 160.0,
        height: 100.0,
    };
    let s = aspect_cover_scale(2600.0, 1000.0, COVER_FACTOR, vp);
    assert!((s.x - 2600.0 * 0.1 * COVER_FACTOR).abs() < 1e-3);
    assert!((s.y - 100.0 * COVER_FACTOR).abs() < 1e-3);
    assert_eq!(s.z, 1.0);
}

#[test]
fn cover_scale_fits_width_when_viewport_is_wider() {
    let vp = Viewport {
        width: 400.0,
        height: 100.0,
    };
    let s = aspect_cover_scale(1600.0, 1000.0, 1.0, vp);
    assert!((s.x - 400.0).abs() < 1e-3);
    assert!((s.y - 250.0).abs() < 1e-3);
}

#[test]
fn cover_scale_always_covers_viewport() {
    for &(w, h) in &[(320.0, 568.0), (1440.0, 900.0), (3840.0, 1080.0), (100.0, 100.0)] {
        let vp = Viewport {
            width: w / CAMERA_ZOOM,
            height: h / CAMERA_ZOOM,
        };
        for spec in LAYERS.iter() {
            let s = aspect_cover_scale(spec.aspect.0, spec.aspect.1, COVER_FACTOR, vp);
            assert!(s.x >= vp.width - 1e-3 && s.y >= vp.height - 1e-3);
            // aspect of the image is preserved
            let ratio = s.x / s.y;
            assert!((ratio - spec.aspect.0 / spec.aspect.1).abs() < 1e-3);
        }
    }
}

#[test]
fn plane_geometry_sizes() {
    let (v, i) = plane_geometry(1);
    assert_eq!(v.len(), 4);
    assert_eq!(i.len(), 6);

    let (v, i) = plane_geometry(WIGGLE_SEGMENTS);
    assert_eq!(v.len(), 121);
    assert_eq!(i.len(), 600);
    assert!(i.iter().all(|&ix| (ix as usize) < v.len()));
}

#[test]
fn plane_geometry_has_v_up_at_top_edge() {
    let (v, _) = plane_geometry(2);
    let top_left = v[0];
    assert_eq!(top_left.position, [-0.5, 0.5, 0.0]);
    assert_eq!(top_left.uv, [0.0, 1.0]);
    let bottom_right = v[v.len() - 1];
    assert_eq!(bottom_right.position, [0.5, -0.5, 0.0]);
    assert_eq!(bottom_right.uv, [1.0, 0.0]);
}

#[test]
fn registry_requires_each_slot_exactly_once() {
    let mut reg = UniformRegistry::new();
    let u = LayerUniforms::from_spec(&LAYERS[0]);
    assert_eq!(
        reg.register(LAYER_COUNT, u),
        Err(SceneError::LayerOutOfRange {
            index: LAYER_COUNT,
            count: LAYER_COUNT
        })
    );
    reg.register(2, u).unwrap();
    assert_eq!(reg.register(2, u), Err(SceneError::DuplicateLayer(2)));
    assert_eq!(reg.finish(), Err(SceneError::MissingLayer(0)));
}

#[test]
fn registry_order_does_not_matter() {
    let mut reg = UniformRegistry::new();
    for i in (0..LAYER_COUNT).rev() {
        reg.register(i, LayerUniforms::from_spec(&LAYERS[i])).unwrap();
    }
    let out = reg.finish().unwrap();
    for i in 0..LAYER_COUNT {
        assert_eq!(out[i].factor, LAYERS[i].factor);
    }
}

#[test]
fn fragment_discards_low_alpha_and_outputs_fixed_alpha() {
    assert_eq!(shade_texel([1.0, 0.0, 0.0, 0.0]), None);
    assert_eq!(shade_texel([1.0, 0.0, 0.0, 0.099]), None);
    assert_eq!(
        shade_texel([0.2, 0.3, 0.4, 0.1]),
        Some([0.2, 0.3, 0.4, LAYER_OUTPUT_ALPHA])
    );
    assert_eq!(
        shade_texel([0.5, 0.5, 0.5, 1.0]),
        Some([0.5, 0.5, 0.5, LAYER_OUTPUT_ALPHA])
    );
}

#[test]
fn fragment_uv_applies_scale_and_parallax() {
    let mut u = LayerUniforms::from_spec(&LAYERS[4]);
    u.movement = Vec3::new(0.2, 0.1, 0.0);
    let uv = layer_uv(Vec2::new(0.5, 0.5), &u);
    assert!((uv.x - (0.5 + 0.2 * 0.5)).abs() < 1e-6);
    assert!((uv.y - (0.5 + 0.1 * 0.5)).abs() < 1e-6);

    let still = LayerUniforms::from_spec(&LAYERS[3]);
    let uv = layer_uv(Vec2::new(0.87, 0.0), &still);
    assert!((uv.x - 1.0).abs() < 1e-6);
}

#[test]
fn wiggle_rotates_around_y() {
    let p = Vec3::new(0.5, 0.25, 0.0);
    assert_eq!(wiggle_vertex(p, 3.0, 0.0), p);

    let out = wiggle_vertex(p, 1.0, 1.0);
    let theta = wiggle_angle(1.0, 0.25, 1.0);
    assert_eq!(out.y, p.y);
    assert!((out.x - theta.cos() * 0.5).abs() < 1e-6);
    assert!((out.z + theta.sin() * 0.5).abs() < 1e-6);
    assert!((Vec2::new(out.x, out.z).length() - 0.5).abs() < 1e-6);
}

#[test]
fn wiggle_angle_is_bounded_by_half_amount() {
    for step in 0..100 {
        let t = step as f32 * 0.37;
        assert!(wiggle_angle(t, -0.5, 0.6).abs() <= 0.3 + 1e-6);
    }
}
