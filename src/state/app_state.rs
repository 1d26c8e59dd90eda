//! Central [`AppState`] container mutated by the event loop and UI.

use ratatui::widgets::ListState;
use std::time::Instant;

use crate::state::types::{AppEntry, Focus, LoadPhase, Modal, SettingsRow};
use crate::theme::Prefs;

/// Home-screen state shared by the event, background, and UI layers.
///
/// Mutated on the event loop only: background workers deliver their
/// results over channels, never by touching this structure directly.
/// The clock preferences subset is persisted to `nook.conf`; everything
/// else is transient view state rebuilt on every start.
#[derive(Debug)]
pub struct AppState {
    /// Current search input text.
    pub input: String,
    /// Caret position (in characters) within the search input.
    /// Always clamped to the range 0..=input.chars().count().
    pub search_caret: usize,
    /// Whether the search field currently has focus.
    pub focus: Focus,

    /// Registry load lifecycle.
    pub phase: LoadPhase,
    /// Full application list, sorted by lowercase display name.
    pub apps: Vec<AppEntry>,
    /// Currently displayed list (full in Browsing, filtered in Searching).
    pub results: Vec<AppEntry>,
    /// Index into `results` that is currently highlighted.
    pub selected: usize,
    /// List selection state for the results list.
    pub list_state: ListState,

    /// Clock time string, e.g. "14:05". Recomputed every tick.
    pub clock_time: String,
    /// Clock date string, e.g. "Friday, August 7". Recomputed every tick.
    pub clock_date: String,
    /// Ticks received so far; drives the loading spinner frames.
    pub tick_count: u64,

    /// User preferences loaded at startup, written back on every change.
    pub prefs: Prefs,
    /// Background tint sampled from the current wallpaper, when available.
    pub wallpaper_tint: Option<(u8, u8, u8)>,

    /// Active modal dialog, if any.
    pub modal: Modal,
    /// Cursor row inside the settings modal.
    pub settings_row: SettingsRow,

    /// Resolved terminal emulator command for `Terminal=true` entries.
    pub terminal_cmd: Option<String>,

    /// Optional short-lived info message rendered at the bottom-right corner.
    pub toast_message: Option<String>,
    /// Deadline after which the toast is automatically hidden.
    pub toast_expires_at: Option<Instant>,
}

impl Default for AppState {
    /// Construct a default, empty [`AppState`] in the Loading phase.
    fn default() -> Self {
        Self {
            input: String::new(),
            search_caret: 0,
            focus: Focus::Browsing,

            phase: LoadPhase::Loading,
            apps: Vec::new(),
            results: Vec::new(),
            selected: 0,
            list_state: ListState::default(),

            clock_time: String::new(),
            clock_date: String::new(),
            tick_count: 0,

            prefs: Prefs::default(),
            wallpaper_tint: None,

            modal: Modal::None,
            settings_row: SettingsRow::Color,

            terminal_cmd: None,

            toast_message: None,
            toast_expires_at: None,
        }
    }
}
