use anyhow::{bail, Result};
use glam::Vec2;

/// Distance from the center where the sprite starts to fade
const DISTANCE_AT_ONE: f32 = 0.5;
/// Distance from the center where the sprite is fully transparent
const DISTANCE_AT_ZERO: f32 = 1.0;

/// Square RGBA8 image, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rgba8Image {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 4]>,
}

impl Rgba8Image {
    pub fn get(&self, column: u32, row: u32) -> Option<[u8; 4]> {
        if column >= self.width || row >= self.height {
            return None;
        }
        self.pixels
            .get(row as usize * self.width as usize + column as usize)
            .copied()
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

/// White disc with a soft alpha falloff, used as the point sprite texture
///
/// Alpha is opaque within half the radius and fades linearly to zero at
/// the edge of the inscribed circle.
pub fn particle_image(dim: u32) -> Result<Rgba8Image> {
    if dim < 2 {
        bail!("particle image needs at least 2x2 pixels, got {dim}");
    }

    let div = 2.0 / (dim - 1) as f32;
    let mut pixels = Vec::with_capacity((dim as usize).pow(2));

    for r in 0..dim {
        let y = r as f32 * div - 1.0;
        for c in 0..dim {
            let x = c as f32 * div - 1.0;
            let distance_from_center = Vec2::new(x, y).length();
            let intensity = (1.0
                - (distance_from_center - DISTANCE_AT_ONE) / (DISTANCE_AT_ZERO - DISTANCE_AT_ONE))
                .clamp(0.0, 1.0);
            let alpha = (intensity * 255.0) as u8;
            pixels.push([255, 255, 255, alpha]);
        }
    }

    Ok(Rgba8Image {
        width: dim,
        height: dim,
        pixels,
    })
}
