// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::core::event::Key;

#[derive(Parser, Debug, Clone)]
#[command(name = "trackball-camera")]
#[command(about = "Trackball camera viewer", long_about = None)]
pub struct Cli {
    /// Stop after this many frames
    #[arg(short = 'f', long = "frames")]
    pub frames: Option<u64>,

    /// Log time and frame rate every frame
    #[arg(long = "fr", default_value = "false")]
    pub print_frame_rate: bool,

    /// Initial window size in pixels
    #[arg(short = 'w', long = "window", num_args = 2, value_names = ["WIDTH", "HEIGHT"], default_values_t = [800, 600])]
    pub window: Vec<u32>,

    /// Replay a JSON event script instead of opening a window
    #[arg(long = "script")]
    pub script: Option<PathBuf>,

    /// Key that restores the starting view: space, escape, home, or a letter or digit
    #[arg(long = "home-key", default_value = "space")]
    pub home_key: Key,
}

impl Cli {
    pub fn window_size(&self) -> (u32, u32) {
        match self.window.as_slice() {
            [width, height] => (*width, *height),
            _ => (800, 600),
        }
    }
}
