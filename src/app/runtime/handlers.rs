//! Handlers for background results and clock ticks.

use std::time::Instant;

use crate::clock;
use crate::logic::refresh_results;
use crate::registry::RegistryError;
use crate::state::{AppState, LoadPhase, Modal};
use crate::wallpaper::{Tint, WallpaperError};

/// What: Apply the one-shot registry scan result.
///
/// Inputs:
/// - `app`: Application state.
/// - `result`: Full listing, or the enumeration failure.
///
/// Details:
/// - Success replaces the listing wholesale and moves the screen to
///   `Ready`; failure pins the message into the list area. Neither
///   path retries.
pub fn handle_registry_result(
    app: &mut AppState,
    result: Result<Vec<crate::state::AppEntry>, RegistryError>,
) {
    match result {
        Ok(listing) => {
            app.apps = listing;
            app.phase = LoadPhase::Ready;
            refresh_results(app);
        }
        Err(e) => {
            tracing::error!(error = %e, "registry enumeration failed");
            app.phase = LoadPhase::Failed(e.to_string());
        }
    }
}

/// What: Apply the one-shot wallpaper tint result.
///
/// Inputs:
/// - `app`: Application state.
/// - `result`: Sampled tint, or why there is none.
///
/// Details:
/// - Any failure leaves the palette background in place. The
///   unreadable case additionally raises a one-shot dismissible
///   notice, since it usually means a permission problem the user can
///   fix; missing or undecodable files stay silent.
pub fn handle_wallpaper_result(app: &mut AppState, result: Result<Tint, WallpaperError>) {
    match result {
        Ok(tint) => {
            app.wallpaper_tint = Some((tint.r, tint.g, tint.b));
        }
        Err(WallpaperError::Unreadable(e)) => {
            tracing::warn!(error = %e, "wallpaper file unreadable");
            if app.modal == Modal::None {
                app.modal = Modal::Notice {
                    message: "The wallpaper file could not be read (permission denied?). \
                              The background tint stays off until it is readable."
                        .to_string(),
                };
            }
        }
        Err(e) => {
            tracing::debug!(error = %e, "no wallpaper tint");
        }
    }
}

/// What: Handle one clock tick.
///
/// Inputs:
/// - `app`: Application state.
///
/// Details:
/// - Recomputes the time and date strings from the wall clock, counts
///   the tick for the spinner, and expires the toast when due.
pub fn handle_clock_tick(app: &mut AppState) {
    let now = chrono::Local::now();
    app.clock_time = clock::time_string(&now);
    app.clock_date = clock::date_string(&now);
    app.tick_count = app.tick_count.wrapping_add(1);

    if let Some(deadline) = app.toast_expires_at
        && Instant::now() >= deadline
    {
        app.toast_message = None;
        app.toast_expires_at = None;
    }
}
