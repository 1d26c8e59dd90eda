//! nook application module: runtime event loop and terminal plumbing.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoint so callers keep using `app::run()`.
pub use runtime::run;
