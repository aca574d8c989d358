use log::Level;

use crate::scroll::progress::ProgressFormula;

/// Host notifications that make the timeline re-measure itself.
pub const TRACKED_EVENTS: &[&str] = &["scroll", "resize"];

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Scroll curve for the timeline. Overridden at build time with
/// `TIMELINE_PROGRESS_FORMULA=overflow|half-viewport|viewport-span`.
pub fn progress_formula() -> ProgressFormula {
    option_env!("TIMELINE_PROGRESS_FORMULA")
        .and_then(ProgressFormula::from_name)
        .unwrap_or_default()
}
