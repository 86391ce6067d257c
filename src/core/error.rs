use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("layer index {index} out of range (scene has {count} layers)")]
    LayerOutOfRange { index: usize, count: usize },
    #[error("layer {0} registered twice")]
    DuplicateLayer(usize),
    #[error("layer {0} was never registered")]
    MissingLayer(usize),
    #[error("surface size must be non-zero (got {width}x{height})")]
    EmptySurface { width: u32, height: u32 },
}
