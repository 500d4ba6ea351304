use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::event::{Button, ButtonMask, Event, Key};

/// Pixels of touchpad scroll treated as one wheel click
pub const PIXELS_PER_WHEEL_CLICK: f64 = 40.0;

/// Keys reported as `Key::Char`, in the order `Key::from_str` accepts them
const CHAR_KEYS: [(KeyCode, char); 36] = [
    (KeyCode::KeyA, 'a'),
    (KeyCode::KeyB, 'b'),
    (KeyCode::KeyC, 'c'),
    (KeyCode::KeyD, 'd'),
    (KeyCode::KeyE, 'e'),
    (KeyCode::KeyF, 'f'),
    (KeyCode::KeyG, 'g'),
    (KeyCode::KeyH, 'h'),
    (KeyCode::KeyI, 'i'),
    (KeyCode::KeyJ, 'j'),
    (KeyCode::KeyK, 'k'),
    (KeyCode::KeyL, 'l'),
    (KeyCode::KeyM, 'm'),
    (KeyCode::KeyN, 'n'),
    (KeyCode::KeyO, 'o'),
    (KeyCode::KeyP, 'p'),
    (KeyCode::KeyQ, 'q'),
    (KeyCode::KeyR, 'r'),
    (KeyCode::KeyS, 's'),
    (KeyCode::KeyT, 't'),
    (KeyCode::KeyU, 'u'),
    (KeyCode::KeyV, 'v'),
    (KeyCode::KeyW, 'w'),
    (KeyCode::KeyX, 'x'),
    (KeyCode::KeyY, 'y'),
    (KeyCode::KeyZ, 'z'),
    (KeyCode::Digit0, '0'),
    (KeyCode::Digit1, '1'),
    (KeyCode::Digit2, '2'),
    (KeyCode::Digit3, '3'),
    (KeyCode::Digit4, '4'),
    (KeyCode::Digit5, '5'),
    (KeyCode::Digit6, '6'),
    (KeyCode::Digit7, '7'),
    (KeyCode::Digit8, '8'),
    (KeyCode::Digit9, '9'),
];

/// Adapter that turns winit window events into viewer events
///
/// winit reports cursor position and button state separately, so the
/// adapter tracks both to stamp button events with a position and move
/// events with the held-button mask. Scrolling accumulates until it
/// amounts to a whole wheel click.
#[derive(Debug, Clone, Default)]
pub struct WinitInput {
    cursor: (f64, f64),
    mask: ButtonMask,
    /// Scroll not yet emitted as a click, in pixels
    scroll_accum: f64,
}

impl WinitInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> (f64, f64) {
        self.cursor
    }

    pub fn mask(&self) -> ButtonMask {
        self.mask
    }

    /// Translate one winit event; unsupported events yield nothing
    pub fn process_event(&mut self, event: &WindowEvent) -> Vec<Event> {
        match event {
            WindowEvent::Resized(size) => vec![Event::Resize {
                width: size.width,
                height: size.height,
            }],
            WindowEvent::CloseRequested => vec![Event::Close],
            WindowEvent::CursorMoved { position, .. } => {
                vec![self.cursor_moved(position.x, position.y)]
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let pressed = *state == ElementState::Pressed;
                Self::mouse_button_to_button(*button)
                    .map(|b| self.button(b, pressed))
                    .into_iter()
                    .collect()
            }
            WindowEvent::MouseWheel { delta, .. } => match delta {
                MouseScrollDelta::LineDelta(_, y) => self.wheel(f64::from(*y)),
                MouseScrollDelta::PixelDelta(pos) => self.wheel_pixels(pos.y),
            },
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return Vec::new();
                };
                let Some(key) = Self::keycode_to_key(code) else {
                    return Vec::new();
                };
                match event.state {
                    ElementState::Pressed if !event.repeat => vec![Event::KeyPress { key }],
                    ElementState::Pressed => Vec::new(),
                    ElementState::Released => vec![Event::KeyRelease { key }],
                }
            }
            _ => Vec::new(),
        }
    }

    /// Cursor moved to a new position in physical pixels
    pub fn cursor_moved(&mut self, x: f64, y: f64) -> Event {
        self.cursor = (x, y);
        Event::Move { x, y, mask: self.mask }
    }

    /// Button pressed or released at the current cursor position
    pub fn button(&mut self, button: Button, pressed: bool) -> Event {
        let (x, y) = self.cursor;
        if pressed {
            self.mask.insert(ButtonMask::for_button(button));
            Event::ButtonPress { x, y, button }
        } else {
            self.mask.remove(ButtonMask::for_button(button));
            Event::ButtonRelease { x, y, button }
        }
    }

    pub fn scroll_accum(&self) -> f64 {
        self.scroll_accum
    }

    /// Wheel scroll in lines as button 4/5 presses; positive is away from the user
    pub fn wheel(&mut self, lines: f64) -> Vec<Event> {
        self.wheel_pixels(lines * PIXELS_PER_WHEEL_CLICK)
    }

    /// Touchpad scroll in pixels, one press per whole click crossed
    pub fn wheel_pixels(&mut self, pixels: f64) -> Vec<Event> {
        if pixels == 0.0 || !pixels.is_finite() {
            return Vec::new();
        }
        // a change of direction drops the leftover from the other way
        if self.scroll_accum * pixels < 0.0 {
            self.scroll_accum = 0.0;
        }
        self.scroll_accum += pixels;

        let clicks = (self.scroll_accum / PIXELS_PER_WHEEL_CLICK).trunc();
        if clicks == 0.0 {
            return Vec::new();
        }
        self.scroll_accum -= clicks * PIXELS_PER_WHEEL_CLICK;

        let button = if clicks > 0.0 {
            Button::WheelUp
        } else {
            Button::WheelDown
        };
        let (x, y) = self.cursor;
        vec![Event::ButtonPress { x, y, button }; clicks.abs() as usize]
    }

    fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
        match button {
            MouseButton::Left => Some(Button::Left),
            MouseButton::Middle => Some(Button::Middle),
            MouseButton::Right => Some(Button::Right),
            MouseButton::Other(code) => Some(Button::Other(u32::from(code))),
            _ => None,
        }
    }

    fn keycode_to_key(code: KeyCode) -> Option<Key> {
        match code {
            KeyCode::Space => Some(Key::Space),
            KeyCode::Escape => Some(Key::Escape),
            KeyCode::Home => Some(Key::Home),
            _ => CHAR_KEYS
                .iter()
                .find(|(k, _)| *k == code)
                .map(|&(_, c)| Key::Char(c)),
        }
    }
}
