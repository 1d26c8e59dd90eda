//! nook binary entrypoint kept minimal. The full runtime lives in `app`.

mod app;
mod args;
mod clock;
mod events;
mod launch;
mod logic;
mod registry;
mod state;
mod theme;
mod ui;
mod wallpaper;

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

struct NookTimer;

impl tracing_subscriber::fmt::time::FormatTime for NookTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T%H:%M:%S");
        write!(w, "{ts}")
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

#[tokio::main]
async fn main() {
    let cli_args = args::Args::parse();

    // Initialize tracing logger writing to ~/.config/nook/logs/nook.log
    {
        let mut log_path = crate::theme::logs_dir();
        log_path.push("nook.log");
        let default_level = args::determine_log_level(&cli_args);
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
        {
            Ok(file) => {
                let (non_blocking, guard) = tracing_appender::non_blocking(file);
                let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&default_level));
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking)
                    .with_timer(NookTimer)
                    .init();
                let _ = LOG_GUARD.set(guard);
                tracing::info!(path = %log_path.display(), "logging initialized");
            }
            Err(e) => {
                // Fallback: init stderr logger to avoid blocking startup
                let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&default_level));
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_target(false)
                    .with_ansi(true)
                    .with_timer(NookTimer)
                    .init();
                tracing::warn!(error = %e, "failed to open log file; using stderr");
            }
        }
    }

    if args::process_args(&cli_args) {
        return;
    }

    tracing::info!("nook starting");
    if let Err(err) = app::run().await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("nook exited");
}
