//! Application state types for nook's TUI.
//!
//! Split into the central [`AppState`] container and the value types it
//! is built from. Re-exports keep the `crate::state::*` API flat.

/// Central `AppState` container.
mod app_state;
/// Core value types.
mod types;

pub use app_state::AppState;
pub use types::{AppEntry, Focus, LoadPhase, Modal, SettingsRow};
