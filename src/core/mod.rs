pub mod camera;
pub mod constants;
pub mod easing;
pub mod effects;
pub mod error;
pub mod experience;
pub mod fireflies;
pub mod layers;
pub mod pointer;
pub mod section;
pub mod shading;
pub mod surface;

pub use camera::{OrthoCamera, Viewport};
pub use constants::*;
pub use effects::{DepthOfField, Effect, EffectChain, MaskFunction, Vignette};
pub use error::SceneError;
pub use experience::{Experience, GroupTransform};
pub use fireflies::{Fireflies, FireflyInstance};
pub use layers::{plane_geometry, Layer, LayerSpec, LayerUniforms, PlaneVertex, LAYERS};
pub use pointer::PointerState;
pub use surface::{RootState, SurfaceLifecycle, SurfaceSize};

// Shaders bundled as string constants
pub static LAYER_WGSL: &str = include_str!("../../shaders/layer.wgsl");
pub static FIREFLIES_WGSL: &str = include_str!("../../shaders/fireflies.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
