/// Height of the fixed navigation bar; anchor targets scroll to rest this
/// far below the viewport top.
pub const HEADER_OFFSET_PX: i32 = 80;

/// Scroll depth at which the navbar gains its elevated shadow.
pub const NAV_ELEVATE_AT_PX: f64 = 50.0;

/// Scroll depth at which the back-to-top button appears.
pub const SCROLL_TOP_SHOW_AT_PX: f64 = 300.0;

/// Hero slider auto-advance period.
pub const AUTOPLAY_INTERVAL_MS: u32 = 5_000;

/// Stat counters animate from zero to their target over this duration.
pub const COUNTER_DURATION_MS: u32 = 2_000;

/// Tick period of the counter animation.
pub const COUNTER_TICK_MS: u32 = 16;
