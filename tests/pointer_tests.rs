// Host-side tests for pointer normalization and the picking ray.
// The main crate is wasm-only, so we mount the pure-Rust core directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod scene;

use glam::{Vec2, Vec3};
use scene::pointer::client_to_ndc;
use scene::*;

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-5
}

#[test]
fn center_maps_to_origin() {
    assert!(approx(client_to_ndc(400.0, 300.0, 800.0, 600.0), Vec2::ZERO));
}

#[test]
fn corners_map_to_unit_square_with_y_up() {
    let (w, h) = (800.0, 600.0);
    assert!(approx(client_to_ndc(0.0, 0.0, w, h), Vec2::new(-1.0, 1.0)));
    assert!(approx(client_to_ndc(w, 0.0, w, h), Vec2::new(1.0, 1.0)));
    assert!(approx(client_to_ndc(0.0, h, w, h), Vec2::new(-1.0, -1.0)));
    assert!(approx(client_to_ndc(w, h, w, h), Vec2::new(1.0, -1.0)));
}

#[test]
fn zero_sized_surface_does_not_produce_nan() {
    let p = client_to_ndc(10.0, 10.0, 0.0, 0.0);
    assert!(p.x.is_finite() && p.y.is_finite());
}

#[test]
fn compute_updates_ndc_and_ray() {
    let camera = OrthoCamera::new(800.0, 600.0);
    let mut pointer = PointerState::default();

    pointer.compute(400.0, 300.0, &camera);
    assert!(approx(pointer.ndc, Vec2::ZERO));
    assert!((pointer.ray_dir - Vec3::NEG_Z).length() < 1e-5);
    // origin sits on the near plane straight ahead of the eye
    assert!(pointer.ray_origin.x.abs() < 1e-3);
    assert!(pointer.ray_origin.y.abs() < 1e-3);
    assert!((pointer.ray_origin.z - (CAMERA_POSITION.z - CAMERA_NEAR)).abs() < 1e-2);

    pointer.compute(800.0, 0.0, &camera);
    assert!(approx(pointer.ndc, Vec2::new(1.0, 1.0)));
    // top-right corner of the orthographic frustum
    assert!((pointer.ray_origin.x - 400.0 / CAMERA_ZOOM).abs() < 1e-2);
    assert!((pointer.ray_origin.y - 300.0 / CAMERA_ZOOM).abs() < 1e-2);
    assert!((pointer.ray_dir - Vec3::NEG_Z).length() < 1e-5);
}

#[test]
fn camera_viewport_is_size_over_zoom() {
    let mut camera = OrthoCamera::new(1000.0, 500.0);
    let vp = camera.viewport();
    assert_eq!(vp.width, 1000.0 / CAMERA_ZOOM);
    assert_eq!(vp.height, 500.0 / CAMERA_ZOOM);
    camera.set_size(500.0, 500.0);
    assert_eq!(camera.viewport().aspect(), 1.0);
}

#[test]
fn view_distance_measures_along_viewing_axis() {
    let camera = OrthoCamera::new(800.0, 600.0);
    assert!((camera.view_distance(DOF_TARGET) - 170.0).abs() < 1e-4);
    assert!((camera.view_distance(Vec3::new(50.0, -20.0, 30.0)) - 170.0).abs() < 1e-4);
}
