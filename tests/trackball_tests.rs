use glam::{DVec2, DVec3};
use trackball_camera::core::trackball::{ndc, rotate, trackball_coordinate, zoom};
use trackball_camera::traits::EventHandler;
use trackball_camera::{Button, ButtonMask, Camera, Event, Key, Perspective, Trackball, ViewState};

const EPS: f64 = 1e-9;

fn demo_camera() -> Camera {
    Camera::look_at(
        Perspective::for_extent(800, 600),
        ViewState::new(DVec3::ONE, DVec3::ZERO, DVec3::Z),
    )
}

fn view(camera: &Camera) -> ViewState {
    *camera.look_at_state().expect("look-at view")
}

fn press(x: f64, y: f64, button: Button) -> Event {
    Event::ButtonPress { x, y, button }
}

fn drag(x: f64, y: f64, mask: ButtonMask) -> Event {
    Event::Move { x, y, mask }
}

#[cfg(test)]
mod coordinate_tests {
    use super::*;

    #[test]
    fn test_ndc_maps_window_corners() {
        let (w, h) = (800.0, 600.0);
        assert_eq!(ndc(0.0, 0.0, w, h), DVec2::new(-1.0, -1.0));
        assert_eq!(ndc(w, h, w, h), DVec2::new(1.0, 1.0));
        assert_eq!(ndc(w, 0.0, w, h), DVec2::new(1.0, -1.0));
        assert_eq!(ndc(0.0, h, w, h), DVec2::new(-1.0, 1.0));
    }

    #[test]
    fn test_tbc_flat_at_and_beyond_unit_circle() {
        for i in 0..32 {
            let angle = i as f64 / 32.0 * std::f64::consts::TAU;
            for radius in [1.0, 1.25, 3.0] {
                let v = DVec2::new(angle.cos(), angle.sin()) * radius;
                if v.length() >= 1.0 {
                    assert_eq!(trackball_coordinate(v).z, 0.0, "ndc {v:?}");
                }
            }
        }
    }

    #[test]
    fn test_tbc_dome_is_monotonic_inside_disk() {
        let mut last = f64::INFINITY;
        for i in 0..10 {
            let t = trackball_coordinate(DVec2::new(i as f64 / 10.0, 0.0));
            assert!(t.z <= last);
            assert!(t.z > 0.0);
            last = t.z;
        }
        assert_eq!(trackball_coordinate(DVec2::ZERO), DVec3::new(0.0, 0.0, 1.0));
    }
}

#[cfg(test)]
mod interaction_tests {
    use super::*;

    #[test]
    fn test_drag_from_center_to_right_edge() {
        let mut camera = demo_camera();
        let mut trackball = Trackball::new(&mut camera);
        let before = view(&camera);

        trackball.handle(&Event::Expose { width: 800, height: 600 }, &mut camera);
        trackball.handle(&press(400.0, 300.0, Button::Left), &mut camera);
        assert_eq!(trackball.prev_tbc(), DVec3::new(0.0, 0.0, 1.0));

        trackball.handle(&drag(800.0, 300.0, ButtonMask::BUTTON_1), &mut camera);
        let after = view(&camera);

        // tbc goes from (0,0,1) to (1,0,0): a quarter turn about view-space up
        let tbc1 = DVec3::new(0.0, 0.0, 1.0);
        let tbc2 = trackball.prev_tbc();
        assert!(tbc2.abs_diff_eq(DVec3::X, EPS));
        let angle = tbc2.cross(tbc1).length().asin();
        assert!((angle - std::f64::consts::FRAC_PI_2).abs() < EPS);

        // pivot and distance are preserved
        assert!(after.center.abs_diff_eq(before.center, EPS));
        assert!((after.distance() - before.distance()).abs() < EPS);

        // rotating about the view up axis swings the eye to the side
        let expected_eye = DVec3::new(1.5f64.sqrt(), -(1.5f64.sqrt()), 0.0);
        assert!(after.eye.abs_diff_eq(expected_eye, 1e-9), "eye {:?}", after.eye);

        // the angle between up and the look direction is unchanged
        let dot_before = before.up.normalize().dot(before.look_vector().normalize());
        let dot_after = after.up.dot(after.look_vector().normalize());
        assert!((dot_before - dot_after).abs() < 1e-9);
    }

    #[test]
    fn test_wheel_down_dollies_towards_center() {
        let mut camera = demo_camera();
        let mut trackball = Trackball::new(&mut camera);

        trackball.handle(&press(400.0, 300.0, Button::from(5)), &mut camera);
        let after = view(&camera);

        assert!(after.eye.abs_diff_eq(DVec3::splat(0.9), EPS));
        assert_eq!(after.center, DVec3::ZERO);
    }

    #[test]
    fn test_wheel_up_dollies_away() {
        let mut camera = demo_camera();
        let mut trackball = Trackball::new(&mut camera);

        trackball.handle(&press(10.0, 10.0, Button::WheelUp), &mut camera);
        assert!(view(&camera).eye.abs_diff_eq(DVec3::splat(1.1), EPS));
    }

    #[test]
    fn test_latest_resize_is_used_for_ndc() {
        let mut camera = demo_camera();
        let mut trackball = Trackball::new(&mut camera);

        trackball.handle(&Event::Resize { width: 800, height: 600 }, &mut camera);
        trackball.handle(&Event::Resize { width: 1024, height: 768 }, &mut camera);
        trackball.handle(&drag(512.0, 768.0, ButtonMask::NONE), &mut camera);

        assert_eq!(trackball.prev_ndc(), DVec2::new(0.0, 1.0));
    }

    #[test]
    fn test_middle_drag_pans() {
        let mut camera = demo_camera();
        let mut trackball = Trackball::new(&mut camera);
        let before = view(&camera);

        trackball.handle(&press(400.0, 300.0, Button::Middle), &mut camera);
        trackball.handle(&drag(480.0, 300.0, ButtonMask::BUTTON_2), &mut camera);
        let after = view(&camera);

        let eye_shift = after.eye - before.eye;
        let center_shift = after.center - before.center;
        assert!(eye_shift.abs_diff_eq(center_shift, EPS));
        assert!(eye_shift.length() > 0.0);
        // horizontal pan is perpendicular to the look direction
        assert!(eye_shift.dot(before.look_vector()).abs() < EPS);
    }

    #[test]
    fn test_right_drag_zooms_by_vertical_delta() {
        let mut camera = demo_camera();
        let mut trackball = Trackball::new(&mut camera);

        trackball.handle(&press(400.0, 300.0, Button::Right), &mut camera);
        // 60 px down on a 600 px window is an ndc delta of 0.2
        trackball.handle(&drag(400.0, 360.0, ButtonMask::BUTTON_3), &mut camera);

        assert!(view(&camera).eye.abs_diff_eq(DVec3::splat(0.8), EPS));
        assert_eq!(view(&camera).center, DVec3::ZERO);
    }

    #[test]
    fn test_rotate_wins_over_pan_and_zoom() {
        let mut rotated = demo_camera();
        let mut trackball = Trackball::new(&mut rotated);
        trackball.handle(&press(400.0, 300.0, Button::Left), &mut rotated);
        trackball.handle(&drag(600.0, 200.0, ButtonMask::BUTTON_1), &mut rotated);

        let mut chord = demo_camera();
        let mut trackball = Trackball::new(&mut chord);
        trackball.handle(&press(400.0, 300.0, Button::Left), &mut chord);
        let all = ButtonMask::BUTTON_1 | ButtonMask::BUTTON_2 | ButtonMask::BUTTON_3;
        trackball.handle(&drag(600.0, 200.0, all), &mut chord);

        assert_eq!(view(&rotated), view(&chord));
    }

    #[test]
    fn test_pan_wins_over_zoom() {
        let mut camera = demo_camera();
        let mut trackball = Trackball::new(&mut camera);
        trackball.handle(&press(400.0, 300.0, Button::Middle), &mut camera);
        trackball.handle(
            &drag(400.0, 400.0, ButtonMask::BUTTON_2 | ButtonMask::BUTTON_3),
            &mut camera,
        );

        // a zoom would keep the center fixed; a pan moves it
        assert_ne!(view(&camera).center, DVec3::ZERO);
        assert!((view(&camera).distance() - 3f64.sqrt()).abs() < EPS);
    }

    #[test]
    fn test_drag_without_movement_is_noop() {
        let mut camera = demo_camera();
        let mut trackball = Trackball::new(&mut camera);
        let before = view(&camera);

        trackball.handle(&press(250.0, 120.0, Button::Left), &mut camera);
        trackball.handle(&drag(250.0, 120.0, ButtonMask::BUTTON_1), &mut camera);

        assert_eq!(view(&camera), before);
    }

    #[test]
    fn test_home_restores_exact_view() {
        let mut camera = demo_camera();
        let mut trackball = Trackball::new(&mut camera);
        let home = view(&camera);

        let events = [
            press(400.0, 300.0, Button::Left),
            drag(520.0, 250.0, ButtonMask::BUTTON_1),
            drag(700.0, 100.0, ButtonMask::BUTTON_1),
            press(700.0, 100.0, Button::Middle),
            drag(650.0, 150.0, ButtonMask::BUTTON_2),
            press(650.0, 150.0, Button::WheelDown),
            press(650.0, 150.0, Button::WheelDown),
            press(650.0, 150.0, Button::Right),
            drag(650.0, 90.0, ButtonMask::BUTTON_3),
            Event::ButtonRelease { x: 650.0, y: 90.0, button: Button::Right },
        ];
        for event in &events {
            trackball.handle(event, &mut camera);
        }
        assert_ne!(view(&camera), home);

        trackball.handle(&Event::KeyPress { key: Key::Space }, &mut camera);
        assert_eq!(view(&camera), home);
    }

    #[test]
    fn test_other_keys_and_buttons_are_ignored() {
        let mut camera = demo_camera();
        let mut trackball = Trackball::new(&mut camera);
        let before = view(&camera);

        trackball.handle(&Event::KeyPress { key: Key::Char('x') }, &mut camera);
        trackball.handle(&Event::KeyRelease { key: Key::Space }, &mut camera);
        trackball.handle(&press(100.0, 100.0, Button::Other(9)), &mut camera);
        trackball.handle(&Event::Close, &mut camera);

        assert_eq!(view(&camera), before);
    }
}

#[cfg(test)]
mod operation_tests {
    use super::*;

    #[test]
    fn test_rotate_preserves_pivot_distance_for_many_axes() {
        for i in 0..24 {
            let t = i as f64 * 0.37;
            let mut view = ViewState::new(DVec3::new(3.0, -2.0, 1.5), DVec3::new(0.2, 0.1, -0.4), DVec3::Z);
            let distance = view.distance();
            let axis = DVec3::new(t.cos(), t.sin(), (2.0 * t).cos());

            rotate(&mut view, t, axis);

            assert!((view.distance() - distance).abs() < 1e-9, "step {i}");
            assert!(view.center.abs_diff_eq(DVec3::new(0.2, 0.1, -0.4), 1e-9));
        }
    }

    #[test]
    fn test_full_turn_returns_to_start() {
        let start = ViewState::new(DVec3::new(0.0, -4.0, 1.0), DVec3::ZERO, DVec3::Z);
        let mut view = start;
        for _ in 0..8 {
            rotate(&mut view, std::f64::consts::FRAC_PI_4, DVec3::Y);
        }
        assert!(view.eye.abs_diff_eq(start.eye, 1e-9));
        assert!(view.up.abs_diff_eq(start.up, 1e-9));
    }

    #[test]
    fn test_zoom_only_moves_eye() {
        let mut view = ViewState::new(DVec3::new(0.0, 0.0, 10.0), DVec3::ZERO, DVec3::Y);
        zoom(&mut view, 0.25);
        assert_eq!(view.eye, DVec3::new(0.0, 0.0, 7.5));
        assert_eq!(view.center, DVec3::ZERO);
        assert_eq!(view.up, DVec3::Y);
    }
}
