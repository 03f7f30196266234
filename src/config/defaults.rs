use super::Config;

pub const TILE_HEIGHT: u16 = 8;
pub const MIN_TILE_HEIGHT: u16 = 4;
pub const SCROLL_THRESHOLD_ROWS: u16 = 4;
pub const TOAST_SECS: u64 = 3;
pub const LOG_LEVEL: &str = "info";

/// Config written on first run.
pub fn defaults() -> Config {
    Config::default()
}
