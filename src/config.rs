use log::Level;

pub const BRAND_NAME: &str = "ARCS Scientific";
pub const CONTACT_EMAIL: &str = "info@arcsscientific.com";

// Delay before cards enter and metric placeholders are replaced.
pub const REVEAL_DELAY_MS: u32 = 500;
pub const STAGGER_STEP_MS: u32 = 100;

// Scroll offset at which the navbar switches to its "scrolled" style.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Inline style staggering the entrance transition of the `index`-th card.
pub fn stagger_style(index: usize) -> String {
    format!("transition-delay: {}ms;", index as u32 * STAGGER_STEP_MS)
}
