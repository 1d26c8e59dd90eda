//! Background workers: registry scan, wallpaper decode, clock tick,
//! and the blocking input-reader thread.
//!
//! The two load workers are independent one-shots; each owns its sender
//! and delivers exactly one result. If the runtime exits first, the
//! sends fail silently and the results are discarded — there is no
//! cancellation token, by design.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::{
    sync::mpsc,
    time::{Duration, sleep},
};

use crate::registry::{self, RegistryError};
use crate::state::AppEntry;
use crate::wallpaper::{self, Tint, WallpaperError};

/// What: Spawn the one-shot registry enumeration worker.
///
/// Inputs:
/// - `res_tx`: Channel sender for the scan result.
///
/// Details:
/// - Runs [`registry::scan_applications`] on the blocking pool; the
///   full listing is delivered atomically in a single message.
/// - A panicked scan is reported as [`RegistryError::Aborted`] so the
///   UI leaves the loading state either way.
pub fn spawn_registry_worker(res_tx: mpsc::UnboundedSender<Result<Vec<AppEntry>, RegistryError>>) {
    tokio::spawn(async move {
        let joined = tokio::task::spawn_blocking(registry::scan_applications).await;
        let result = match joined {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(error = %e, "registry scan worker failed");
                Err(RegistryError::Aborted)
            }
        };
        let _ = res_tx.send(result);
    });
}

/// What: Spawn the one-shot wallpaper tint worker.
///
/// Inputs:
/// - `path`: Resolved wallpaper file to decode.
/// - `res_tx`: Channel sender for the tint result.
///
/// Details:
/// - Decode runs on the blocking pool; errors are delivered rather than
///   swallowed here so the UI can distinguish the unreadable case.
pub fn spawn_wallpaper_worker(
    path: PathBuf,
    res_tx: mpsc::UnboundedSender<Result<Tint, WallpaperError>>,
) {
    tokio::spawn(async move {
        let joined = tokio::task::spawn_blocking(move || wallpaper::load_tint(&path)).await;
        if let Ok(result) = joined {
            let _ = res_tx.send(result);
        }
    });
}

/// What: Spawn the repeating clock tick worker.
///
/// Inputs:
/// - `tick_tx`: Channel sender receiving one `()` per tick.
///
/// Details:
/// - Sends, then sleeps a fixed 1000 ms, so a tick fully completes
///   before the next is scheduled and ticks never overlap.
/// - Exits deterministically when the receiver is dropped at teardown;
///   no timer outlives the screen.
pub fn spawn_clock_worker(tick_tx: mpsc::UnboundedSender<()>) {
    tokio::spawn(async move {
        loop {
            if tick_tx.send(()).is_err() {
                break;
            }
            sleep(Duration::from_millis(1000)).await;
        }
    });
}

/// What: Spawn the blocking thread that reads terminal input.
///
/// Inputs:
/// - `headless`: When `true`, skip spawning the thread.
/// - `event_tx`: Channel sender for terminal events.
/// - `cancelled`: Atomic flag to signal thread shutdown.
///
/// Details:
/// - Polls with a 50 ms timeout so the cancellation flag is observed
///   promptly; a closed channel also ends the thread.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if cancelled.load(std::sync::atomic::Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(std::sync::atomic::Ordering::Relaxed) {
                            break;
                        }
                        if event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        // ignore transient read errors and continue
                    }
                },
                Ok(false) | Err(_) => {
                    if cancelled.load(std::sync::atomic::Ordering::Relaxed) {
                        break;
                    }
                }
            }
        }
    });
}
