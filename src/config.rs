use log::Level;

/// Offset at or below which the header is always shown.
pub const HEADER_PINNED_MAX: f64 = 50.0;
/// Offset above which scrolling down hides the header and the header gets its background.
pub const HEADER_SCROLLED_MIN: f64 = 100.0;
/// Probe distance below the viewport top used to pick the active section.
pub const ACTIVE_SECTION_PROBE: f64 = 200.0;

pub const SCROLL_DEBOUNCE_MS: u32 = 10;
pub const HEADER_HOVER_LINGER_MS: u32 = 300;
pub const PRESS_FEEDBACK_MS: u32 = 150;
pub const CARD_BOUNCE_MS: u32 = 200;
pub const GALLERY_BOUNCE_MS: u32 = 300;
pub const SUBSCRIBE_DELAY_MS: u32 = 1_000;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

pub const LANGUAGES: [&str; 4] = ["EN", "GR", "DE", "FR"];

pub const CONTACT_EMAIL: &str = "info@ultima-collection.com";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
