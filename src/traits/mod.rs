pub mod handler;
pub mod window;

pub use handler::*;
pub use window::*;
