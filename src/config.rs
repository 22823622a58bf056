use std::time::Duration;

use log::Level;

/// Lead distance in px: blocks start revealing this far before they scroll on screen.
pub const REVEAL_MARGIN_PX: f64 = 100.0;

pub const REVEAL_DURATION: Duration = Duration::from_millis(800);

/// Interval between animation frames while a block is fading in.
pub const FRAME_INTERVAL_MS: u32 = 16;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
