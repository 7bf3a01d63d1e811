use serde::{Deserialize, Serialize};

/// Drawable area dimensions in physical pixels.
///
/// Created from the window's inner size at startup and replaced wholesale
/// by the resize handler. Both dimensions are clamped to at least 1 so the
/// surface configuration and the aspect ratio stay valid even if the host
/// reports a degenerate size mid-resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Width / height ratio used for the camera projection.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}
