//! Application-wide constants

/// Minimum terminal width required to run the application
pub const MIN_TERMINAL_WIDTH: u16 = 40;

/// Minimum terminal height required to run the application
pub const MIN_TERMINAL_HEIGHT: u16 = 12;

/// Minimum allowed value for max_width CLI parameter
pub const MIN_MAX_WIDTH: usize = 40;

/// Maximum allowed value for max_width CLI parameter
pub const MAX_MAX_WIDTH: usize = 200;

/// Reserved columns for slide margins
pub const UI_MARGIN_WIDTH: usize = 4;

/// Horizontal displacement a drag must exceed to count as a swipe
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

/// Lower and upper bounds for the configured swipe threshold
pub const MIN_SWIPE_THRESHOLD: f64 = 10.0;
pub const MAX_SWIPE_THRESHOLD: f64 = 500.0;

/// Pixel-equivalent units covered by one terminal column
pub const DEFAULT_UNITS_PER_COLUMN: f64 = 8.0;

/// Lower and upper bounds for the configured column width
pub const MIN_UNITS_PER_COLUMN: f64 = 1.0;
pub const MAX_UNITS_PER_COLUMN: f64 = 32.0;

/// Time between hint dismissal and the hint disappearing
pub const DEFAULT_HINT_FADE_MS: u64 = 500;

/// Longest accepted hint fade
pub const MAX_HINT_FADE_MS: u64 = 5_000;

/// Frame duration in milliseconds for the UI render loop (targeting 60 FPS)
pub const FRAME_DURATION_MS: u64 = 16;
