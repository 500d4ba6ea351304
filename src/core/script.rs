use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::camera::ViewState;
use crate::core::event::Event;

/// Recorded input to replay without a window
///
/// ```json
/// {
///   "view": { "eye": [1, 1, 1], "center": [0, 0, 0], "up": [0, 0, 1] },
///   "frames": [
///     [{ "type": "button_press", "x": 400, "y": 300, "button": 1 }],
///     [{ "type": "move", "x": 800, "y": 300, "mask": 256 }]
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventScript {
    /// Starting view; the caller's default is used when absent
    pub view: Option<ViewState>,
    /// Events queued for each frame, in order
    pub frames: Vec<Vec<Event>>,
}

impl EventScript {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse event script")
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read event script: {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid event script: {}", path.display()))
    }

    pub fn event_count(&self) -> usize {
        self.frames.iter().map(Vec::len).sum()
    }
}
