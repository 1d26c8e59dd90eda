//! Application state initialization before the event loop starts.

use std::path::PathBuf;

use crate::state::{AppState, Modal};
use crate::theme::{load_prefs, save_hint_shown};
use crate::wallpaper::resolve_wallpaper_path;

/// What: Load preferences and prime the state for the first frame.
///
/// Inputs:
/// - `app`: Freshly constructed application state.
///
/// Output:
/// - The resolved wallpaper path, for the wallpaper worker.
///
/// Details:
/// - Loads `nook.conf`, detects a terminal emulator for
///   `Terminal=true` entries, and fills the clock strings so the first
///   frame is not blank.
/// - The first run raises the greeting modal and records `hint_shown`
///   immediately, so the greeting appears exactly once.
pub fn initialize_app_state(app: &mut AppState) -> Option<PathBuf> {
    app.prefs = load_prefs();
    app.terminal_cmd = crate::launch::detect_terminal();

    let now = chrono::Local::now();
    app.clock_time = crate::clock::time_string(&now);
    app.clock_date = crate::clock::date_string(&now);

    if !app.prefs.hint_shown {
        app.modal = Modal::Hint;
        app.prefs.hint_shown = true;
        save_hint_shown(true);
    }

    resolve_wallpaper_path(&app.prefs)
}
