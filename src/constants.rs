//! DOM, asset and GPU settings for the web front-end.
//!
//! Scene tuning (easing rates, layer table, effect parameters) lives in
//! `core::constants`; this module only covers how the scene meets the page.

// Host page
pub const ROOT_ELEMENT_ID: &str = "root"; // pointer events are connected here
pub const CANVAS_ELEMENT_ID: &str = "scene-canvas";
pub const CANVAS_STYLE: &str =
    "position: relative; width: 100%; height: 100%; overflow: hidden; display: block";

// Static assets
pub const ASSET_BASE: &str = "assets/scene/";

// Offscreen formats
pub const SCENE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

// Antialiasing is disabled
pub const SAMPLE_COUNT: u32 = 1;

// Scene pass clears to transparent so the page shows through
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color::TRANSPARENT;

// World size of a firefly with size 1.0
pub const FIREFLY_WORLD_SIZE: f32 = 1.2;

// Clamp for frame deltas after tab switches (seconds)
pub const MAX_FRAME_DELTA_SEC: f32 = 0.1;
