mod image;
mod point_sprites;

pub use image::{particle_image, Rgba8Image};
pub use point_sprites::{PointSprites, ATTRIBUTE_STRIDES, DEFAULT_COLOR, DEFAULT_NORMAL};
