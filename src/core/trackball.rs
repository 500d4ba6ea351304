//! Arcball camera manipulator
//!
//! Maps pointer drags onto a virtual dome in front of the viewer and turns
//! them into orbit, pan and dolly motions of a look-at camera around its
//! center. Wheel clicks arrive as button 4/5 presses.

use std::f64::consts::PI;

use glam::{DMat4, DVec2, DVec3};

use crate::camera::{Camera, ViewMatrix, ViewState};
use crate::core::event::{Button, ButtonMask, Event, Key};
use crate::math::{look_at, look_at_inverse};
use crate::traits::{EventHandler, WindowExtent};

/// Dolly ratio applied per wheel click
pub const WHEEL_ZOOM_RATIO: f64 = 0.1;

/// Non-dimensional window coordinate: (0,0) maps to (-1,-1), (w,h) to (1,1)
pub fn ndc(x: f64, y: f64, width: f64, height: f64) -> DVec2 {
    DVec2::new(x / width * 2.0 - 1.0, y / height * 2.0 - 1.0)
}

/// Trackball coordinate for a non-dimensional window coordinate
///
/// Inside the unit disk the point is lifted onto a cosine dome of height 1
/// at the center; outside it lies flat on z = 0. Window y grows downwards,
/// so it is flipped into view-up.
pub fn trackball_coordinate(ndc: DVec2) -> DVec3 {
    let l = ndc.length();
    if l < 1.0 {
        let height = 0.5 + (l * PI).cos() * 0.5;
        DVec3::new(ndc.x, -ndc.y, height)
    } else {
        DVec3::new(ndc.x, -ndc.y, 0.0)
    }
}

/// Orbit the view about its center by `angle` radians around a view-space `axis`
///
/// Degenerate views and non-finite results leave the view untouched.
pub fn rotate(view: &mut ViewState, angle: f64, axis: DVec3) {
    let Some(axis) = axis.try_normalize() else {
        return;
    };
    if !view.is_valid() {
        return;
    }

    let lv = look_at(view.eye, view.center, view.up);
    let lv_inverse = look_at_inverse(view.eye, view.center, view.up);
    let center_eye_space = lv.transform_point3(view.center);

    let matrix = lv_inverse
        * DMat4::from_translation(center_eye_space)
        * DMat4::from_axis_angle(axis, angle)
        * DMat4::from_translation(-center_eye_space)
        * lv;

    let eye = matrix.transform_point3(view.eye);
    let center = matrix.transform_point3(view.center);
    let Some(up) = (matrix.transform_point3(view.eye + view.up) - eye).try_normalize() else {
        return;
    };

    if eye.is_finite() && center.is_finite() {
        view.eye = eye;
        view.center = center;
        view.up = up;
    }
}

/// Dolly the eye along the look vector; positive ratios move towards the center
pub fn zoom(view: &mut ViewState, ratio: f64) {
    let look_vector = view.look_vector();
    view.eye += look_vector * ratio;
}

/// Shift eye and center sideways/upwards, scaled by the distance to the center
pub fn pan(view: &mut ViewState, delta: DVec2) {
    let look_vector = view.look_vector();
    let Some(look_normal) = look_vector.try_normalize() else {
        return;
    };
    let distance = look_vector.length();
    let side_normal = view.up.cross(look_normal);
    let translation = side_normal * (delta.x * distance) + view.up * (delta.y * distance);

    view.eye += translation;
    view.center += translation;
}

/// Trackball event handler driving a host camera's look-at view
#[derive(Debug, Clone)]
pub struct Trackball {
    home: ViewState,
    home_key: Key,
    width: f64,
    height: f64,
    prev_ndc: DVec2,
    prev_tbc: DVec3,
}

impl Trackball {
    /// Attach to a camera, remembering its current view as home
    ///
    /// A camera without a look-at view gets a default one installed so the
    /// trackball always has something to drive.
    pub fn new(camera: &mut Camera) -> Self {
        let home = match camera.look_at_state() {
            Some(view) => *view,
            None => {
                log::warn!("camera view is not a look-at view, replacing it with a default one");
                let view = ViewState::default();
                camera.view = ViewMatrix::LookAt(view);
                view
            }
        };

        let extent = WindowExtent::default();
        Self {
            home,
            home_key: Key::Space,
            width: f64::from(extent.width),
            height: f64::from(extent.height),
            prev_ndc: DVec2::ZERO,
            prev_tbc: DVec3::Z,
        }
    }

    pub fn with_home_key(mut self, key: Key) -> Self {
        self.home_key = key;
        self
    }

    pub fn home(&self) -> &ViewState {
        &self.home
    }

    pub fn home_key(&self) -> Key {
        self.home_key
    }

    /// Window extent used to normalise pointer coordinates
    pub fn extent(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn prev_ndc(&self) -> DVec2 {
        self.prev_ndc
    }

    pub fn prev_tbc(&self) -> DVec3 {
        self.prev_tbc
    }

    pub fn ndc(&self, x: f64, y: f64) -> DVec2 {
        ndc(x, y, self.width, self.height)
    }

    pub fn tbc(&self, x: f64, y: f64) -> DVec3 {
        trackball_coordinate(self.ndc(x, y))
    }

    fn set_extent(&mut self, width: u32, height: u32) {
        // A minimised window reports 0x0; keep the last usable extent
        if width == 0 || height == 0 {
            return;
        }
        self.width = f64::from(width);
        self.height = f64::from(height);
    }

    fn reset_baseline(&mut self, x: f64, y: f64) {
        self.prev_ndc = self.ndc(x, y);
        self.prev_tbc = self.tbc(x, y);
    }

    fn on_button_press(&mut self, x: f64, y: f64, button: Button, camera: &mut Camera) {
        self.reset_baseline(x, y);

        let ratio = match button {
            Button::WheelUp => -WHEEL_ZOOM_RATIO,
            Button::WheelDown => WHEEL_ZOOM_RATIO,
            _ => return,
        };
        if let Some(view) = camera.look_at_state_mut() {
            zoom(view, ratio);
        }
    }

    fn on_move(&mut self, x: f64, y: f64, mask: ButtonMask, camera: &mut Camera) {
        let new_ndc = self.ndc(x, y);
        let new_tbc = self.tbc(x, y);

        if let Some(view) = camera.look_at_state_mut() {
            if mask.contains(ButtonMask::BUTTON_1) {
                let xp = new_tbc.normalize_or_zero().cross(self.prev_tbc.normalize_or_zero());
                let xp_len = xp.length();
                if xp_len > 0.0 {
                    // Float noise can push |xp| a hair above 1
                    rotate(view, xp_len.min(1.0).asin(), xp / xp_len);
                }
            } else if mask.contains(ButtonMask::BUTTON_2) {
                pan(view, new_ndc - self.prev_ndc);
            } else if mask.contains(ButtonMask::BUTTON_3) {
                zoom(view, (new_ndc - self.prev_ndc).y);
            }
        }

        self.prev_ndc = new_ndc;
        self.prev_tbc = new_tbc;
    }

    fn go_home(&self, camera: &mut Camera) {
        match camera.look_at_state_mut() {
            Some(view) => *view = self.home,
            None => camera.view = ViewMatrix::LookAt(self.home),
        }
        log::debug!("trackball reset to home view {:?}", self.home);
    }
}

impl EventHandler for Trackball {
    fn handle(&mut self, event: &Event, camera: &mut Camera) {
        match *event {
            Event::Expose { width, height } | Event::Resize { width, height } => {
                self.set_extent(width, height);
            }
            Event::KeyPress { key } if key == self.home_key => self.go_home(camera),
            Event::ButtonPress { x, y, button } => self.on_button_press(x, y, button, camera),
            Event::ButtonRelease { x, y, .. } => self.reset_baseline(x, y),
            Event::Move { x, y, mask } => self.on_move(x, y, mask, camera),
            _ => {}
        }
    }
}
