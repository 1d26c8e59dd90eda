//! Runtime event loop for the home screen.

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::events::handle_event;
use crate::state::AppState;
use crate::ui::ui;

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod channels;
mod handlers;
mod init;

use background::spawn_event_thread;
use channels::Channels;
use handlers::{handle_clock_tick, handle_registry_result, handle_wallpaper_result};
use init::initialize_app_state;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the nook TUI end-to-end: initialize terminal and state,
/// spawn background workers (registry, wallpaper, clock), drive the
/// event loop, and restore the terminal on exit.
///
/// Inputs: none.
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable
///   terminal errors.
///
/// Details:
/// - State: loads `nook.conf` (clock color/opacity, wallpaper pin,
///   first-run flag) and detects a terminal emulator.
/// - Background: the registry scan and wallpaper decode run
///   concurrently and land independently; the clock ticks once a
///   second. If the loop exits mid-load the results are discarded.
/// - Events: keyboard input mutates state synchronously; a frame is
///   drawn before every wait.
/// - Teardown: signals the input thread, drops the tick receiver (which
///   stops the clock worker), and restores the terminal.
pub async fn run() -> Result<()> {
    let headless = std::env::var("NOOK_TEST_HEADLESS").ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState::default();
    let wallpaper_path = initialize_app_state(&mut app);

    let mut channels = Channels::new(wallpaper_path);
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, &mut app));
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if handle_event(ev, &mut app) {
                    break;
                }
            }
            Some(result) = channels.apps_rx.recv() => {
                handle_registry_result(&mut app, result);
            }
            Some(result) = channels.wallpaper_rx.recv() => {
                handle_wallpaper_result(&mut app, result);
            }
            Some(()) = channels.tick_rx.recv() => {
                handle_clock_tick(&mut app);
            }
            else => {}
        }
    }

    // Signal the input thread; the clock worker stops when the tick
    // receiver drops with `channels`.
    channels
        .event_thread_cancelled
        .store(true, std::sync::atomic::Ordering::Relaxed);

    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
