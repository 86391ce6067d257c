// Host-side tests for the firefly field.
// The main crate is wasm-only, so we mount the pure-Rust core directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod scene;

use scene::*;

fn field(seed: u64) -> Fireflies {
    Fireflies::new(FIREFLY_COUNT, FIREFLY_RADIUS, &[FIREFLY_COLOR], seed)
}

#[test]
fn same_seed_gives_same_layout() {
    assert_eq!(field(FIREFLY_SEED).flies, field(FIREFLY_SEED).flies);
    assert_ne!(field(1).flies, field(2).flies);
}

#[test]
fn fireflies_stay_within_radius_plus_drift() {
    let f = field(FIREFLY_SEED);
    assert_eq!(f.len(), FIREFLY_COUNT);
    let bound = FIREFLY_RADIUS + FIREFLY_DRIFT * 1.5;
    for fly in &f.flies {
        assert!(fly.base.length() <= FIREFLY_RADIUS + 1e-3);
        assert_eq!(fly.color, FIREFLY_COLOR);
        for step in 0..200 {
            let t = step as f32 * 0.25;
            assert!(fly.position_at(t).length() <= bound);
            let glow = fly.glow_at(t);
            assert!((0.1 - 1e-6..=1.0 + 1e-6).contains(&glow));
        }
    }
}

#[test]
fn instances_follow_the_clock() {
    let f = field(FIREFLY_SEED);
    let mut out = Vec::new();
    f.write_instances(0.0, &mut out);
    assert_eq!(out.len(), FIREFLY_COUNT);
    let first = out[0].position_size;

    f.write_instances(2.0, &mut out);
    assert_eq!(out.len(), FIREFLY_COUNT);
    assert_ne!(out[0].position_size, first);
    assert_eq!(out[0].position_size[3], f.flies[0].size);
}

#[test]
fn empty_palette_falls_back_to_white() {
    let f = Fireflies::new(3, 10.0, &[], 7);
    assert!(f.flies.iter().all(|fly| fly.color == [1.0, 1.0, 1.0]));
    let none = Fireflies::new(0, 10.0, &[FIREFLY_COLOR], 7);
    assert!(none.is_empty());
}
