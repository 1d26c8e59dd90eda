//! Event handling layer for nook's TUI.
//!
//! Converts raw `crossterm` events into mutations on [`AppState`]:
//!
//! - Browsing mode: list navigation and launching
//! - Searching mode: query editing, navigation within matches, launching
//! - Modals: first-run hint, notices, and the clock settings dialog
//!
//! Preference edits made in the settings dialog are persisted on every
//! change, before the function returns. All functions here are
//! synchronous; launching delegates to [`crate::launch`], which never
//! blocks on the child.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::logic::{move_sel, refresh_results, scroll_to_top};
use crate::state::{AppState, Focus, Modal, SettingsRow};
use crate::theme::{CLOCK_COLOR_PRESETS, save_clock_color, save_clock_opacity};

/// Dispatch a single input event, mutating [`AppState`].
///
/// Returns `true` to signal the application should exit.
pub fn handle_event(ev: CEvent, app: &mut AppState) -> bool {
    match ev {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(key, app),
        _ => false,
    }
}

/// Route one key press to the modal, browsing, or searching handler.
fn handle_key(key: KeyEvent, app: &mut AppState) -> bool {
    // Global exit chords work everywhere
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
    {
        return true;
    }
    if app.modal != Modal::None {
        handle_modal_key(key, app);
        return false;
    }
    if key.code == KeyCode::F(2) {
        app.modal = Modal::Settings;
        return false;
    }
    match app.focus {
        Focus::Browsing => handle_browsing_key(key, app),
        Focus::Searching => {
            handle_searching_key(key, app);
            false
        }
    }
}

/// Keys while a modal dialog is open.
fn handle_modal_key(key: KeyEvent, app: &mut AppState) {
    match app.modal {
        Modal::Hint | Modal::Notice { .. } => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char(' ')
            ) {
                app.modal = Modal::None;
            }
        }
        Modal::Settings => handle_settings_key(key, app),
        Modal::None => {}
    }
}

/// Keys inside the clock settings dialog.
///
/// Every adjustment is written to `nook.conf` immediately; there is no
/// apply/cancel step and no batching.
fn handle_settings_key(key: KeyEvent, app: &mut AppState) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::F(2) => {
            app.modal = Modal::None;
        }
        KeyCode::Up | KeyCode::Down | KeyCode::Tab => {
            app.settings_row = match app.settings_row {
                SettingsRow::Color => SettingsRow::Opacity,
                SettingsRow::Opacity => SettingsRow::Color,
            };
        }
        KeyCode::Left | KeyCode::Right => {
            let forward = key.code == KeyCode::Right;
            match app.settings_row {
                SettingsRow::Color => {
                    app.prefs.clock_color = cycle_preset(app.prefs.clock_color, forward);
                    save_clock_color(app.prefs.clock_color);
                }
                SettingsRow::Opacity => {
                    let step = if forward { 0.05 } else { -0.05 };
                    app.prefs.clock_opacity = (app.prefs.clock_opacity + step).clamp(0.0, 1.0);
                    save_clock_opacity(app.prefs.clock_opacity);
                }
            }
        }
        _ => {}
    }
}

/// Next or previous clock color preset relative to `current`.
///
/// A color not in the preset ring (hand-edited conf) starts from the
/// first preset when cycling forward and the last when cycling back.
fn cycle_preset(current: u32, forward: bool) -> u32 {
    let n = CLOCK_COLOR_PRESETS.len();
    match CLOCK_COLOR_PRESETS.iter().position(|c| *c == current) {
        Some(i) => {
            let next = if forward { (i + 1) % n } else { (i + n - 1) % n };
            CLOCK_COLOR_PRESETS[next]
        }
        None => {
            if forward {
                CLOCK_COLOR_PRESETS[0]
            } else {
                CLOCK_COLOR_PRESETS[n - 1]
            }
        }
    }
}

/// Keys in Browsing mode (search field unfocused).
fn handle_browsing_key(key: KeyEvent, app: &mut AppState) -> bool {
    match key.code {
        KeyCode::Esc => return true,
        KeyCode::Up | KeyCode::Char('k') => move_sel(app, -1),
        KeyCode::Down | KeyCode::Char('j') => move_sel(app, 1),
        KeyCode::PageUp => move_sel(app, -10),
        KeyCode::PageDown => move_sel(app, 10),
        KeyCode::Home => scroll_to_top(app),
        KeyCode::End => move_sel(app, isize::MAX / 2),
        KeyCode::Enter => launch_selected(app),
        KeyCode::Char('/') | KeyCode::Char('i') | KeyCode::Tab => focus_search(app),
        _ => {}
    }
    false
}

/// Keys in Searching mode (search field focused).
fn handle_searching_key(key: KeyEvent, app: &mut AppState) {
    match key.code {
        KeyCode::Esc | KeyCode::Tab => unfocus_search(app),
        KeyCode::Up => move_sel(app, -1),
        KeyCode::Down => move_sel(app, 1),
        KeyCode::PageUp => move_sel(app, -10),
        KeyCode::PageDown => move_sel(app, 10),
        KeyCode::Enter => {
            launch_selected(app);
            // The original clears the query and drops focus after a
            // launch so the home screen is back at rest.
            app.input.clear();
            app.search_caret = 0;
            unfocus_search(app);
        }
        KeyCode::Left => app.search_caret = app.search_caret.saturating_sub(1),
        KeyCode::Right => {
            app.search_caret = (app.search_caret + 1).min(app.input.chars().count());
        }
        KeyCode::Home => app.search_caret = 0,
        KeyCode::End => app.search_caret = app.input.chars().count(),
        KeyCode::Backspace => {
            if app.search_caret > 0 {
                let was_empty = app.input.is_empty();
                let idx = byte_index_at(&app.input, app.search_caret - 1);
                app.input.remove(idx);
                app.search_caret -= 1;
                on_query_edited(app, was_empty);
            }
        }
        KeyCode::Delete => {
            if app.search_caret < app.input.chars().count() {
                let was_empty = app.input.is_empty();
                let idx = byte_index_at(&app.input, app.search_caret);
                app.input.remove(idx);
                on_query_edited(app, was_empty);
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let was_empty = app.input.is_empty();
            let idx = byte_index_at(&app.input, app.search_caret);
            app.input.insert(idx, c);
            app.search_caret += 1;
            on_query_edited(app, was_empty);
        }
        _ => {}
    }
}

/// Focus the search field, switching the list to the filtered view.
fn focus_search(app: &mut AppState) {
    app.focus = Focus::Searching;
    app.search_caret = app.input.chars().count();
    refresh_results(app);
    scroll_to_top(app);
}

/// Drop search focus, switching back to the full listing.
fn unfocus_search(app: &mut AppState) {
    app.focus = Focus::Browsing;
    refresh_results(app);
}

/// Recompute results after a query edit; jump to the top when the query
/// just transitioned from empty to non-empty.
fn on_query_edited(app: &mut AppState, was_empty: bool) {
    refresh_results(app);
    if was_empty && !app.input.is_empty() {
        scroll_to_top(app);
    }
}

/// Launch the highlighted entry, if any. Best effort by contract: the
/// toast announces the attempt, never the outcome.
fn launch_selected(app: &mut AppState) {
    if let Some(entry) = app.results.get(app.selected) {
        crate::launch::launch(entry, app.terminal_cmd.as_deref());
        app.toast_message = Some(format!("Launching {}", entry.name));
        app.toast_expires_at =
            Some(std::time::Instant::now() + std::time::Duration::from_secs(3));
    }
}

/// Byte index of the `caret`-th character of `input` (length when past the end).
fn byte_index_at(input: &str, caret: usize) -> usize {
    input
        .char_indices()
        .nth(caret)
        .map(|(i, _)| i)
        .unwrap_or(input.len())
}
