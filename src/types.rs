use glam::{DMat4, Mat4};

/// Byte offset of each matrix within the vertex-stage push constant block
pub const PROJECTION_OFFSET: u32 = 0;
pub const VIEW_OFFSET: u32 = 64;
pub const MODEL_OFFSET: u32 = 128;

/// Projection, view and model matrices as pushed to the vertex stage
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameMatrices {
    pub projection: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
}

impl FrameMatrices {
    pub fn new(projection: DMat4, view: DMat4, model: Mat4) -> Self {
        Self {
            projection: projection.as_mat4().to_cols_array_2d(),
            view: view.as_mat4().to_cols_array_2d(),
            model: model.to_cols_array_2d(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Default for FrameMatrices {
    fn default() -> Self {
        Self::new(DMat4::IDENTITY, DMat4::IDENTITY, Mat4::IDENTITY)
    }
}
