use crate::camera::Camera;
use crate::core::event::Event;

/// Event sink attached to a viewer's dispatch list
///
/// Each queued event is offered to every handler in order; handlers that
/// don't care about an event kind simply ignore it.
pub trait EventHandler {
    /// Process one event, mutating the host camera if needed
    fn handle(&mut self, event: &Event, camera: &mut Camera);

    /// Whether this handler has asked the host loop to stop
    fn done(&self) -> bool {
        false
    }
}
