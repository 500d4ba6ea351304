use crate::camera::Camera;
use crate::core::event::{Event, Key};
use crate::traits::EventHandler;

/// Marks the viewer done on Escape or a window close request
#[derive(Debug, Clone, Default)]
pub struct CloseOnEscape {
    done: bool,
}

impl CloseOnEscape {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for CloseOnEscape {
    fn handle(&mut self, event: &Event, _camera: &mut Camera) {
        match event {
            Event::KeyPress { key: Key::Escape } | Event::Close => self.done = true,
            _ => {}
        }
    }

    fn done(&self) -> bool {
        self.done
    }
}
