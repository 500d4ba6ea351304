mod view;

pub use view::{look_at, look_at_inverse};
