//! Theme and preference subsystem for nook.
//!
//! Split into submodules for maintainability. Public re-exports keep the
//! `crate::theme::*` API stable.

/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Preference loading and per-key persistence.
mod prefs;
/// Palette and preference type definitions.
mod types;

pub use parsing::{format_color, pack_argb, parse_color_value, unpack_argb};
pub use paths::{conf_path, config_dir, logs_dir};
pub use prefs::{load_prefs, save_clock_color, save_clock_opacity, save_hint_shown};
pub use types::{CLOCK_COLOR_PRESETS, Prefs, Theme, theme};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize filesystem-mutating tests in this module.
///
/// Inputs:
/// - None
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
///
/// Details:
/// - Uses `OnceLock` to ensure the mutex is constructed exactly once per process.
/// - Callers should lock the mutex to guard environment-variable or disk state changes.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
