use std::sync::Arc;
use winit::window::Window as WinitWindow;

use crate::traits::{WindowContext, WindowExtent};

/// Wrapper around a winit window exposing the viewer's window abstraction
pub struct Window {
    inner: Arc<WinitWindow>,
}

impl Window {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self { inner: window }
    }
}

impl WindowContext for Window {
    fn extent(&self) -> WindowExtent {
        let size = self.inner.inner_size();
        WindowExtent::new(size.width, size.height)
    }

    fn set_title(&self, title: &str) {
        self.inner.set_title(title);
    }

    fn request_redraw(&self) {
        self.inner.request_redraw();
    }
}
