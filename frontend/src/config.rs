use log::Level;

pub const BRAND_NAME: &str = "SkyVoyager";

/// Scroll offset (px) past which the header switches to its opaque style.
pub const HEADER_SCROLL_THRESHOLD: f64 = 10.0;

/// Widths at or above this force the mobile drawer closed.
pub const DESKTOP_BREAKPOINT: f64 = 1024.0;

pub const TABLET_BREAKPOINT: f64 = 768.0;
pub const LARGE_DESKTOP_BREAKPOINT: f64 = 1440.0;

/// Tick interval for counter animations, roughly one frame.
pub const COUNTER_FRAME_MS: u32 = 16;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose when running locally through trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
