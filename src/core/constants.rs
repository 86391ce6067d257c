use glam::Vec3;

// Scene tuning constants shared by the animation controller and the renderer.

// Easing rates (fraction of the remaining distance covered per frame)
pub const MOVEMENT_EASE_RATE: f32 = 0.2; // pointer -> layer parallax offset
pub const GROUP_EASE_RATE: f32 = 0.05; // pointer -> group position/rotation

// Pointer -> target mapping
pub const MOVEMENT_Y_SCALE: f32 = 0.2; // vertical parallax is damped
pub const GROUP_POSITION_X_PER_POINTER: f32 = 20.0;
pub const GROUP_ROTATION_X_DIVISOR: f32 = 20.0;
pub const GROUP_ROTATION_Y_DIVISOR: f32 = 2.0;

// Orthographic camera
pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, 200.0);
pub const CAMERA_ZOOM: f32 = 5.0;
pub const CAMERA_NEAR: f32 = 50.0;
pub const CAMERA_FAR: f32 = 300.0;

// Layers
pub const LAYER_COUNT: usize = 6;
pub const WIGGLE_LAYERS: [usize; 2] = [4, 5]; // share one time accumulator
pub const COVER_FACTOR: f32 = 1.05; // slight overscan so edges never show
pub const WIGGLE_SEGMENTS: u32 = 10;
pub const ALPHA_DISCARD_THRESHOLD: f32 = 0.1;
pub const LAYER_OUTPUT_ALPHA: f32 = 0.1;

// Fireflies
pub const FIREFLY_COUNT: usize = 20;
pub const FIREFLY_RADIUS: f32 = 80.0;
pub const FIREFLY_COLOR: [f32; 3] = [1.0, 0.65, 0.0]; // orange
pub const FIREFLY_DRIFT: f32 = 6.0; // max sinusoidal excursion in world units
pub const FIREFLY_SEED: u64 = 42;

// Depth of field
pub const DOF_TARGET: Vec3 = Vec3::new(0.0, 0.0, 30.0);
pub const DOF_BOKEH_SCALE: f32 = 2.0;
pub const DOF_FOCAL_LENGTH: f32 = 0.0;
pub const DOF_WIDTH: u32 = 1440;
pub const DOF_BASE_BLUR_PX: f32 = 6.0; // blur radius at full CoC and bokeh scale 1
pub const DOF_MIN_FOCUS_RANGE: f32 = 2.0; // world units, floor for the focus range

// Vignette
pub const VIGNETTE_OFFSET: f32 = 0.5;
pub const VIGNETTE_DARKNESS: f32 = 0.5;
pub const VIGNETTE_SOFTNESS: f32 = 0.3;
