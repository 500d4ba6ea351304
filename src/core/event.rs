use serde::{Deserialize, Serialize};

/// Pointer button identifier
///
/// Codes follow the X11 convention: 1 left, 2 middle, 3 right and
/// 4/5 for the scroll wheel, which arrives as press events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum Button {
    Left,
    Middle,
    Right,
    WheelUp,
    WheelDown,
    Other(u32),
}

impl Button {
    pub fn code(self) -> u32 {
        match self {
            Button::Left => 1,
            Button::Middle => 2,
            Button::Right => 3,
            Button::WheelUp => 4,
            Button::WheelDown => 5,
            Button::Other(code) => code,
        }
    }
}

impl From<u32> for Button {
    fn from(code: u32) -> Self {
        match code {
            1 => Button::Left,
            2 => Button::Middle,
            3 => Button::Right,
            4 => Button::WheelUp,
            5 => Button::WheelDown,
            other => Button::Other(other),
        }
    }
}

impl From<Button> for u32 {
    fn from(button: Button) -> Self {
        button.code()
    }
}

/// Set of pointer buttons held during a move
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ButtonMask(u32);

impl ButtonMask {
    pub const NONE: ButtonMask = ButtonMask(0);
    pub const BUTTON_1: ButtonMask = ButtonMask(1 << 8);
    pub const BUTTON_2: ButtonMask = ButtonMask(1 << 9);
    pub const BUTTON_3: ButtonMask = ButtonMask(1 << 10);

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Mask bit for a held button; wheel and unknown buttons have none
    pub fn for_button(button: Button) -> Self {
        match button {
            Button::Left => Self::BUTTON_1,
            Button::Middle => Self::BUTTON_2,
            Button::Right => Self::BUTTON_3,
            _ => Self::NONE,
        }
    }

    pub const fn contains(self, other: ButtonMask) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn insert(&mut self, other: ButtonMask) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: ButtonMask) {
        self.0 &= !other.0;
    }
}

impl std::ops::BitOr for ButtonMask {
    type Output = ButtonMask;

    fn bitor(self, rhs: ButtonMask) -> ButtonMask {
        ButtonMask(self.0 | rhs.0)
    }
}

/// Keyboard key identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Space,
    Escape,
    Home,
    Char(char),
    Other(u32),
}

impl std::str::FromStr for Key {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "space" => Ok(Key::Space),
            "escape" | "esc" => Ok(Key::Escape),
            "home" => Ok(Key::Home),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphanumeric() => Ok(Key::Char(c)),
                    _ => Err(format!("unknown key name: {s}")),
                }
            }
        }
    }
}

/// Input and window events consumed by event handlers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    Expose { width: u32, height: u32 },
    Resize { width: u32, height: u32 },
    KeyPress { key: Key },
    KeyRelease { key: Key },
    ButtonPress { x: f64, y: f64, button: Button },
    ButtonRelease { x: f64, y: f64, button: Button },
    Move { x: f64, y: f64, mask: ButtonMask },
    Close,
}

impl Event {
    /// New window extent carried by expose/resize events
    pub fn extent(&self) -> Option<(u32, u32)> {
        match *self {
            Event::Expose { width, height } | Event::Resize { width, height } => {
                Some((width, height))
            }
            _ => None,
        }
    }
}
