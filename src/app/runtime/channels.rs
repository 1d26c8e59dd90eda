//! Channel definitions for runtime communication.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::registry::RegistryError;
use crate::state::AppEntry;
use crate::wallpaper::{Tint, WallpaperError};

use super::background::{spawn_clock_worker, spawn_registry_worker, spawn_wallpaper_worker};

/// What: Channel endpoints connecting the event loop to its workers.
///
/// Details:
/// - The registry and wallpaper channels each carry exactly one result;
///   the tick channel carries one `()` per clock second for the
///   lifetime of the screen.
pub struct Channels {
    /// Sender handed to the input-reader thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Terminal events consumed by the event loop.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Cooperative shutdown flag for the input-reader thread.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// One-shot registry scan result.
    pub apps_rx: mpsc::UnboundedReceiver<Result<Vec<AppEntry>, RegistryError>>,
    /// One-shot wallpaper tint result.
    pub wallpaper_rx: mpsc::UnboundedReceiver<Result<Tint, WallpaperError>>,
    /// Clock ticks, one per second.
    pub tick_rx: mpsc::UnboundedReceiver<()>,
}

impl Channels {
    /// What: Create all channels and spawn the background workers.
    ///
    /// Inputs:
    /// - `wallpaper_path`: Resolved wallpaper file, when any source
    ///   named one. `None` leaves the wallpaper channel silent.
    ///
    /// Output:
    /// - A `Channels` struct with every receiver ready for `select!`.
    pub fn new(wallpaper_path: Option<PathBuf>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let event_thread_cancelled = Arc::new(AtomicBool::new(false));
        let (apps_tx, apps_rx) = mpsc::unbounded_channel();
        let (wallpaper_tx, wallpaper_rx) = mpsc::unbounded_channel();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel::<()>();

        spawn_registry_worker(apps_tx);
        if let Some(path) = wallpaper_path {
            spawn_wallpaper_worker(path, wallpaper_tx);
        }
        spawn_clock_worker(tick_tx);

        Channels {
            event_tx,
            event_rx,
            event_thread_cancelled,
            apps_rx,
            wallpaper_rx,
            tick_rx,
        }
    }
}
