// Number of hex digits in a color token
pub const TOKEN_LEN: usize = 6;

pub const SWATCH: &str = "████████";

pub const LOG_FILE: &str = "latest.log";

pub const EVENT_POLL_INTERVAL: std::time::Duration = std::time::Duration::from_millis(50);
