use glam::Mat4;

use crate::camera::Camera;
use crate::core::close::CloseOnEscape;
use crate::core::event::{Event, Key};
use crate::core::trackball::Trackball;
use crate::frame::{FrameInfo, FrameIterator};
use crate::traits::{EventHandler, WindowExtent};
use crate::types::FrameMatrices;

/// Host loop state: owns the camera and the ordered handler list
///
/// Each frame the queued events are offered to every handler in order,
/// the projection follows the window extent and the matrices for the
/// frame are produced from the updated camera.
pub struct Viewer {
    camera: Camera,
    handlers: Vec<Box<dyn EventHandler>>,
    extent: WindowExtent,
    frames: FrameIterator,
    model: Mat4,
    print_frame_rate: bool,
}

impl Viewer {
    pub fn new(camera: Camera, extent: WindowExtent) -> Self {
        Self {
            camera,
            handlers: Vec::new(),
            extent,
            frames: FrameIterator::new(),
            model: Mat4::IDENTITY,
            print_frame_rate: false,
        }
    }

    /// Stop producing frames after `limit` frames
    pub fn with_frame_limit(mut self, limit: u64) -> Self {
        self.frames = FrameIterator::with_limit(limit);
        self
    }

    pub fn with_frame_rate_logging(mut self, enabled: bool) -> Self {
        self.print_frame_rate = enabled;
        self
    }

    pub fn add_handler<H: EventHandler + 'static>(&mut self, handler: H) {
        self.handlers.push(Box::new(handler));
    }

    /// Attach a trackball bound to this viewer's camera, plus escape-to-quit
    pub fn add_trackball(&mut self, home_key: Key) {
        let mut trackball = Trackball::new(&mut self.camera).with_home_key(home_key);
        // The trackball starts from the default extent; tell it the real one
        let expose = Event::Expose {
            width: self.extent.width,
            height: self.extent.height,
        };
        trackball.handle(&expose, &mut self.camera);

        self.add_handler(trackball);
        self.add_handler(CloseOnEscape::new());
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn extent(&self) -> WindowExtent {
        self.extent
    }

    pub fn set_model(&mut self, model: Mat4) {
        self.model = model;
    }

    pub fn frame_number(&self) -> u64 {
        self.frames.frame_number()
    }

    /// True once a handler asked to quit or the frame limit was reached
    pub fn done(&self) -> bool {
        self.frames.finished() || self.handlers.iter().any(|h| h.done())
    }

    /// Offer each event to every handler in order
    pub fn dispatch(&mut self, events: &[Event]) {
        for event in events {
            for handler in self.handlers.iter_mut() {
                handler.handle(event, &mut self.camera);
            }
            if let Some((width, height)) = event.extent() {
                self.resize(width, height);
            }
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        let extent = WindowExtent::new(width, height);
        if extent == self.extent || width == 0 || height == 0 {
            return;
        }
        self.extent = extent;
        self.camera.projection.resize(width, height);
        log::info!("window aspect ratio = {}", self.camera.projection.aspect_ratio);
    }

    /// Current matrices for the camera and model
    pub fn matrices(&self) -> FrameMatrices {
        FrameMatrices::new(
            self.camera.projection_matrix(),
            self.camera.view_matrix(),
            self.model,
        )
    }

    /// Run one frame: dispatch `events`, then return timing and matrices
    ///
    /// Returns `None` without touching the camera once the viewer is done.
    pub fn frame(&mut self, events: &[Event]) -> Option<(FrameInfo, FrameMatrices)> {
        if self.done() {
            return None;
        }

        self.dispatch(events);

        let info = self.frames.next()?;
        if self.print_frame_rate {
            log::info!("time = {} fps={}", info.time, info.fps());
        }

        Some((info, self.matrices()))
    }
}
