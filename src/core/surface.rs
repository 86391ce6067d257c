//! Lifecycle of the rendering root bound to the canvas.

use super::error::SceneError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RootState {
    Uninitialized,
    Running { size: SurfaceSize },
}

/// Root state plus whether the owning canvas is currently mounted.
///
/// The root is created on the first mount and kept for the page lifetime;
/// unmounting only stops resize updates from reaching it.
#[derive(Debug)]
pub struct SurfaceLifecycle {
    state: RootState,
    mounted: bool,
    renders: u32,
}

impl Default for SurfaceLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceLifecycle {
    pub fn new() -> Self {
        Self {
            state: RootState::Uninitialized,
            mounted: false,
            renders: 0,
        }
    }

    pub fn state(&self) -> RootState {
        self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn renders(&self) -> u32 {
        self.renders
    }

    /// Mount the canvas. Returns `true` when this call created the root.
    pub fn mount(&mut self, width: u32, height: u32) -> Result<bool, SceneError> {
        let size = checked_size(width, height)?;
        self.mounted = true;
        self.renders += 1;
        match self.state {
            RootState::Uninitialized => {
                self.state = RootState::Running { size };
                Ok(true)
            }
            RootState::Running { .. } => Ok(false),
        }
    }

    /// Apply a window resize. Ignored unless mounted and running.
    pub fn resize(&mut self, width: u32, height: u32) -> Option<SurfaceSize> {
        if !self.mounted {
            return None;
        }
        let size = checked_size(width, height).ok()?;
        match &mut self.state {
            RootState::Running { size: current } => {
                *current = size;
                Some(size)
            }
            RootState::Uninitialized => None,
        }
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }
}

fn checked_size(width: u32, height: u32) -> Result<SurfaceSize, SceneError> {
    if width == 0 || height == 0 {
        return Err(SceneError::EmptySurface { width, height });
    }
    Ok(SurfaceSize { width, height })
}
