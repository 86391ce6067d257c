// Host-side tests for scene constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core_constants {
    include!("../src/core/constants.rs");
}

use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn easing_rates_are_fractions() {
    assert!(MOVEMENT_EASE_RATE > 0.0 && MOVEMENT_EASE_RATE < 1.0);
    assert!(GROUP_EASE_RATE > 0.0 && GROUP_EASE_RATE < 1.0);
    // the group trails the parallax offset
    assert!(GROUP_EASE_RATE < MOVEMENT_EASE_RATE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_clips_around_the_layer_stack() {
    assert!(CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_ZOOM > 0.0);
    // all layers (z in [0, 49]) and the focus point sit between the planes
    let nearest = CAMERA_POSITION.z - 49.0;
    let farthest = CAMERA_POSITION.z;
    assert!(nearest > CAMERA_NEAR && farthest < CAMERA_FAR);
    let focus = CAMERA_POSITION.z - DOF_TARGET.z;
    assert!(focus > CAMERA_NEAR && focus < CAMERA_FAR);
}

#[test]
fn wiggle_layers_are_in_range_and_distinct() {
    assert!(WIGGLE_LAYERS.iter().all(|&i| i < LAYER_COUNT));
    assert_ne!(WIGGLE_LAYERS[0], WIGGLE_LAYERS[1]);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn effect_parameters_are_sane() {
    assert!(VIGNETTE_SOFTNESS > 0.0 && VIGNETTE_SOFTNESS < 1.0);
    assert!((0.0..=1.0).contains(&VIGNETTE_DARKNESS));
    assert!(DOF_MIN_FOCUS_RANGE > 0.0);
    assert!(DOF_WIDTH > 0);
    assert!(COVER_FACTOR >= 1.0);
}
