pub mod camera;
pub mod cli;
pub mod core;
pub mod frame;
pub mod math;
pub mod sprites;
pub mod traits;
pub mod types;
pub mod window;

pub use crate::camera::{Camera, Perspective, ViewMatrix, ViewState};
pub use crate::core::event::{Button, ButtonMask, Event, Key};
pub use crate::core::trackball::Trackball;
pub use crate::core::viewer::Viewer;
