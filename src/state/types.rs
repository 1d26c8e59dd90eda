//! Core value types used by nook state.

/// A launchable application discovered in the freedesktop registry.
///
/// Entries are immutable once constructed by the registry scan and are
/// replaced wholesale whenever the registry is re-enumerated. The `id` is
/// the desktop-file ID (relative path under an `applications/` directory
/// with `/` replaced by `-`, minus the `.desktop` suffix) and is unique
/// within a listing.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AppEntry {
    /// Desktop-file ID, unique within a listing.
    pub id: String,
    /// Human-readable display name shown in lists.
    pub name: String,
    /// Raw `Exec` line from the desktop entry, field codes included.
    pub exec: String,
    /// Icon name or path, when the desktop entry declares one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Whether the program wants to run inside a terminal emulator.
    #[serde(default)]
    pub needs_terminal: bool,
}

/// Lifecycle of the one-shot registry load that populates the home screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    /// Scan still running; the list area shows a spinner.
    Loading,
    /// Scan delivered its list; the home screen is interactive.
    Ready,
    /// Scan failed; the message is shown in place of the list. No retry.
    Failed(String),
}

/// Which display sub-mode the home screen is in.
///
/// Toggled by focus-in/focus-out of the search field, not by query
/// content: `Browsing` always shows the full application list, while
/// `Searching` shows the filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Full app list shown; keys navigate and launch.
    Browsing,
    /// Search field focused; keys edit the query and navigate matches.
    Searching,
}

/// Active modal dialog, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Modal {
    /// No modal; the home screen receives input.
    None,
    /// First-run greeting with key hints, shown once.
    Hint,
    /// Clock appearance settings (color and opacity).
    Settings,
    /// Dismissible notice, e.g. an unreadable wallpaper file.
    Notice {
        /// Message body shown in the dialog.
        message: String,
    },
}

/// Rows of the settings modal that can hold the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    /// Clock color preset selector.
    Color,
    /// Clock opacity slider.
    Opacity,
}
