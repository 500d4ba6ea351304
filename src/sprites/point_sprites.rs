use anyhow::{bail, ensure, Result};
use glam::{Vec3, Vec4};

/// Default particle normal, facing +Z
pub const DEFAULT_NORMAL: Vec3 = Vec3::Z;
/// Default particle color, opaque white
pub const DEFAULT_COLOR: [u8; 4] = [255, 255, 255, 255];

/// Per-vertex attribute streams: vertex, normal, color
pub const ATTRIBUTE_STRIDES: [u32; 3] = [12, 12, 4];

/// CPU-side particle arrays backing a point sprite draw
///
/// Holds one vertex, normal and RGBA8 color per particle. Only the first
/// `draw_count` particles are drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSprites {
    vertices: Vec<Vec3>,
    normals: Vec<Vec3>,
    colors: Vec<[u8; 4]>,
    draw_count: usize,
}

impl PointSprites {
    /// Allocate `max_particles` zeroed particles; nothing is drawn until
    /// the draw count is raised
    pub fn new(max_particles: usize) -> Self {
        Self {
            vertices: vec![Vec3::ZERO; max_particles],
            normals: vec![Vec3::ZERO; max_particles],
            colors: vec![[0; 4]; max_particles],
            draw_count: 0,
        }
    }

    /// Wrap existing arrays; every particle is drawn
    pub fn from_arrays(vertices: Vec<Vec3>, normals: Vec<Vec3>, colors: Vec<[u8; 4]>) -> Result<Self> {
        ensure!(
            normals.len() == vertices.len() && colors.len() == vertices.len(),
            "particle arrays differ in length: {} vertices, {} normals, {} colors",
            vertices.len(),
            normals.len(),
            colors.len()
        );

        let draw_count = vertices.len();
        Ok(Self {
            vertices,
            normals,
            colors,
            draw_count,
        })
    }

    pub fn capacity(&self) -> usize {
        self.vertices.len()
    }

    pub fn draw_count(&self) -> usize {
        self.draw_count
    }

    pub fn set_draw_count(&mut self, count: usize) -> Result<()> {
        ensure!(
            count <= self.capacity(),
            "draw count {count} exceeds capacity {}",
            self.capacity()
        );
        self.draw_count = count;
        Ok(())
    }

    /// Set a particle with a floating point color in [0, 1]
    pub fn set(&mut self, i: usize, vertex: Vec3, normal: Vec3, color: Vec4) -> Result<()> {
        self.set_rgba8(i, vertex, normal, to_rgba8(color))
    }

    /// Set a particle with an 8-bit color
    pub fn set_rgba8(&mut self, i: usize, vertex: Vec3, normal: Vec3, color: [u8; 4]) -> Result<()> {
        if i >= self.capacity() {
            bail!("particle index {i} out of range for {} particles", self.capacity());
        }
        self.vertices[i] = vertex;
        self.normals[i] = normal;
        self.colors[i] = color;
        Ok(())
    }

    /// Set a particle position with the default normal and color
    pub fn set_vertex(&mut self, i: usize, vertex: Vec3) -> Result<()> {
        self.set_rgba8(i, vertex, DEFAULT_NORMAL, DEFAULT_COLOR)
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn colors(&self) -> &[[u8; 4]] {
        &self.colors
    }

    /// Raw bytes of each attribute stream, in binding order
    pub fn attribute_bytes(&self) -> [&[u8]; 3] {
        [
            bytemuck::cast_slice(&self.vertices),
            bytemuck::cast_slice(&self.normals),
            bytemuck::cast_slice(&self.colors),
        ]
    }
}

fn to_rgba8(color: Vec4) -> [u8; 4] {
    // Truncates; out-of-range channels saturate
    let c = color * 255.0;
    [c.x as u8, c.y as u8, c.z as u8, c.w as u8]
}
