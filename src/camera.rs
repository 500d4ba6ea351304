use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

use crate::math::look_at;

pub const DEFAULT_FOV_Y_DEGREES: f64 = 60.0;
pub const DEFAULT_NEAR: f64 = 0.1;
pub const DEFAULT_FAR: f64 = 10.0;

/// Look-at view description: eye position, pivot and up direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub eye: DVec3,
    pub center: DVec3,
    pub up: DVec3,
}

impl ViewState {
    pub fn new(eye: DVec3, center: DVec3, up: DVec3) -> Self {
        Self { eye, center, up }
    }

    /// Vector from eye to center
    pub fn look_vector(&self) -> DVec3 {
        self.center - self.eye
    }

    /// Distance from eye to the pivot
    pub fn distance(&self) -> f64 {
        self.look_vector().length()
    }

    /// True when the view can be turned into a finite look-at matrix
    pub fn is_valid(&self) -> bool {
        let look = self.look_vector();
        self.eye.is_finite()
            && self.center.is_finite()
            && self.up.is_finite()
            && look.length_squared() > 0.0
            && look.cross(self.up).length_squared() > 0.0
    }

    pub fn view_matrix(&self) -> DMat4 {
        look_at(self.eye, self.center, self.up)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            eye: DVec3::ZERO,
            center: DVec3::Y,
            up: DVec3::Z,
        }
    }
}

/// Perspective projection parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perspective {
    pub fov_y_degrees: f64,
    pub aspect_ratio: f64,
    pub near: f64,
    pub far: f64,
}

impl Perspective {
    pub fn new(fov_y_degrees: f64, aspect_ratio: f64, near: f64, far: f64) -> Self {
        Self {
            fov_y_degrees,
            aspect_ratio,
            near,
            far,
        }
    }

    /// Default demo projection for a window of the given size
    pub fn for_extent(width: u32, height: u32) -> Self {
        Self::new(
            DEFAULT_FOV_Y_DEGREES,
            aspect(width, height),
            DEFAULT_NEAR,
            DEFAULT_FAR,
        )
    }

    /// Update the aspect ratio; zero-sized extents (minimised window) are ignored
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect_ratio = aspect(width, height);
        }
    }

    pub fn matrix(&self) -> DMat4 {
        DMat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect_ratio,
            self.near,
            self.far,
        )
    }
}

fn aspect(width: u32, height: u32) -> f64 {
    f64::from(width) / f64::from(height.max(1))
}

/// View transform held by a camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewMatrix {
    LookAt(ViewState),
    Matrix(DMat4),
}

impl ViewMatrix {
    pub fn matrix(&self) -> DMat4 {
        match self {
            ViewMatrix::LookAt(view) => view.view_matrix(),
            ViewMatrix::Matrix(m) => *m,
        }
    }
}

/// Camera owned by the host: projection plus view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub projection: Perspective,
    pub view: ViewMatrix,
}

impl Camera {
    pub fn new(projection: Perspective, view: ViewMatrix) -> Self {
        Self { projection, view }
    }

    pub fn look_at(projection: Perspective, view: ViewState) -> Self {
        Self::new(projection, ViewMatrix::LookAt(view))
    }

    pub fn look_at_state(&self) -> Option<&ViewState> {
        match &self.view {
            ViewMatrix::LookAt(view) => Some(view),
            ViewMatrix::Matrix(_) => None,
        }
    }

    pub fn look_at_state_mut(&mut self) -> Option<&mut ViewState> {
        match &mut self.view {
            ViewMatrix::LookAt(view) => Some(view),
            ViewMatrix::Matrix(_) => None,
        }
    }

    pub fn projection_matrix(&self) -> DMat4 {
        self.projection.matrix()
    }

    pub fn view_matrix(&self) -> DMat4 {
        self.view.matrix()
    }
}
