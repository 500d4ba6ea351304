/// Window dimensions in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowExtent {
    pub width: u32,
    pub height: u32,
}

impl WindowExtent {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for WindowExtent {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

/// Window abstraction for hosts that drive the viewer from a live window
pub trait WindowContext {
    /// Current window dimensions in physical pixels
    fn extent(&self) -> WindowExtent;

    /// Update the window title
    fn set_title(&self, title: &str);

    /// Request the window to redraw
    fn request_redraw(&self);
}
