use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Content embedded in the generated markup
pub const GET_STARTED_URL: &str = "/get-started.html";
pub const PHONE_HREF: &str = "tel:0482010549";
pub const PHONE_DISPLAY: &str = "0482 010 549";

// Navigation
pub const NAV_BREAKPOINT_QUERY: &str = "(min-width: 860px)";
pub const ANCHOR_SCROLL_OFFSET: f64 = 80.0;

// Header and parallax
pub const HEADER_SCROLLED_AFTER: f64 = 50.0;
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const PARALLAX_RANGE: f64 = 6.0;

// Stats counter
pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_TICK_MS: u32 = 16;
pub const STATS_THRESHOLD: f64 = 0.5;

// Section reveal
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// Exit intent
pub const EXIT_INTENT_STORAGE_KEY: &str = "exitIntentShown";
pub const EXIT_INTENT_TOP_EDGE: f64 = 10.0;
pub const EXIT_INTENT_DWELL_MS: f64 = 5000.0;
pub const DWELL_TIMER_DELAY_MS: u32 = 100;
pub const EXIT_INTENT_EXCLUDED_PATH: &str = "contact";

// Sticky contact bar
pub const STICKY_BAR_MAX_WIDTH: f64 = 768.0;
pub const STICKY_BAR_SHOW_AFTER: f64 = 600.0;
