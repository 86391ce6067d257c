// Host-side tests for the post-processing chain rules.
// The main crate is wasm-only, so we mount the pure-Rust core directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod scene;

use glam::{Vec2, Vec3};
use scene::*;

#[test]
fn scene_chain_is_dof_then_vignette() {
    let chain = EffectChain::scene_default();
    let effects = chain.effects();
    assert_eq!(effects.len(), 2);
    assert!(matches!(effects[0], Effect::DepthOfField(_)));
    assert!(matches!(effects[1], Effect::Vignette(_)));

    let dof = chain.depth_of_field().unwrap();
    assert_eq!(dof.target, Vec3::new(0.0, 0.0, 30.0));
    assert_eq!(dof.bokeh_scale, 2.0);
    assert_eq!(dof.focal_length, 0.0);
    assert_eq!(dof.width, 1440);
    assert_eq!(dof.mask, MaskFunction::MultiplyRgbSetAlpha);
    assert_eq!(chain.vignette().unwrap().softness, 0.3);
}

#[test]
fn empty_chain_has_no_effects() {
    let chain = EffectChain::new();
    assert!(chain.effects().is_empty());
    assert!(chain.depth_of_field().is_none());
    assert!(chain.vignette().is_none());
}

#[test]
fn mask_defaults_to_multiply() {
    let dof = DepthOfField::new(Vec3::ZERO, 1.0, 0.0, 1440);
    assert_eq!(dof.mask, MaskFunction::Multiply);
}

#[test]
fn mask_functions() {
    let texel = [0.8, 0.6, 0.4, 0.2];
    assert_eq!(
        MaskFunction::Multiply.apply(texel, 0.5),
        [0.4, 0.3, 0.2, 0.1]
    );
    assert_eq!(
        MaskFunction::MultiplyRgbSetAlpha.apply(texel, 0.5),
        [0.4, 0.3, 0.2, 0.5]
    );
    assert_eq!(MaskFunction::Discard.apply(texel, 0.0), [0.0; 4]);
    assert_eq!(MaskFunction::Discard.apply(texel, 0.3), texel);

    let codes: Vec<u32> = [
        MaskFunction::Discard,
        MaskFunction::Multiply,
        MaskFunction::MultiplyRgbSetAlpha,
    ]
    .iter()
    .map(|m| m.shader_code())
    .collect();
    assert_eq!(codes, [0, 1, 2]);
}

#[test]
fn circle_of_confusion_is_zero_at_focus_and_full_away() {
    let chain = EffectChain::scene_default();
    let dof = chain.depth_of_field().unwrap();
    let camera = OrthoCamera::new(1440.0, 900.0);
    let focus = camera.view_distance(dof.target);

    assert_eq!(dof.circle_of_confusion(focus, focus), 0.0);
    // background and leaf layers sit 10+ units away from the object layer
    for spec in LAYERS.iter().filter(|s| s.position.z != dof.target.z) {
        let depth = camera.view_distance(spec.position);
        assert_eq!(dof.circle_of_confusion(depth, focus), 1.0, "{}", spec.texture);
    }
    let near = dof.circle_of_confusion(focus + 0.5, focus);
    assert!(near > 0.0 && near < 1.0);
}

#[test]
fn circle_of_confusion_widens_with_focal_length() {
    let dof = DepthOfField::new(Vec3::ZERO, 1.0, 20.0, 1440);
    assert_eq!(dof.focus_range(), 20.0);
    assert!((dof.circle_of_confusion(110.0, 100.0) - 0.5).abs() < 1e-6);
}

#[test]
fn blur_radius_scales_with_bokeh_and_surface_width() {
    let dof = DepthOfField::new(Vec3::ZERO, 2.0, 0.0, 1440);
    assert_eq!(dof.blur_radius_px(0.0, 1440), 0.0);
    let full = dof.blur_radius_px(1.0, 1440);
    assert!((full - DOF_BASE_BLUR_PX * 2.0).abs() < 1e-6);
    assert!((dof.blur_radius_px(1.0, 720) - full / 2.0).abs() < 1e-6);
}

#[test]
fn composite_keeps_sharp_in_focus_and_masks_blur_out_of_focus() {
    let dof = DepthOfField::new(Vec3::ZERO, 2.0, 0.0, 1440)
        .with_mask(MaskFunction::MultiplyRgbSetAlpha);
    let sharp = [0.9, 0.8, 0.7, 0.1];
    let blurred = [0.3, 0.2, 0.1, 0.05];
    assert_eq!(dof.composite(sharp, blurred, 0.0), [0.9, 0.8, 0.7, 0.1]);
    // fully out of focus: blurred rgb, alpha forced to the mask
    assert_eq!(dof.composite(sharp, blurred, 1.0), [0.3, 0.2, 0.1, 1.0]);
}

#[test]
fn vignette_is_neutral_at_center_and_darkest_in_corners() {
    let v = Vignette::default().with_softness(0.3);
    assert_eq!(v.factor(Vec2::splat(0.5)), 1.0);
    let corner = v.factor(Vec2::ZERO);
    assert!((corner - (1.0 - v.darkness)).abs() < 1e-5);

    let mut prev = 1.0;
    for step in 0..=10 {
        let t = 0.5 - step as f32 * 0.05;
        let f = v.factor(Vec2::splat(t));
        assert!(f <= prev + 1e-6, "vignette brightened toward the corner");
        prev = f;
    }
}
