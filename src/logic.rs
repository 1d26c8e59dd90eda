//! Interaction logic: filtering, selection movement, and view refresh.
//!
//! The filter itself is a pure function so it can be property-tested;
//! the helpers around it mutate [`AppState`] the way the event layer
//! expects (preserve the selection by ID where possible, clamp
//! otherwise, jump to the top when a search begins).

use crate::state::{AppEntry, AppState, Focus};

/// What: Filter a listing by a case-insensitive substring query.
///
/// Inputs:
/// - `entries`: Application entries in any order.
/// - `query`: Raw query text; empty matches every entry.
///
/// Output:
/// - Matching entries re-sorted by ascending lowercase display name.
///   The input order never influences the output order.
///
/// Details:
/// - Pure: same inputs always produce the same output. No fuzzy or
///   token matching, by design.
pub fn filter_entries(entries: &[AppEntry], query: &str) -> Vec<AppEntry> {
    let needle = query.to_lowercase();
    let mut out: Vec<AppEntry> = entries
        .iter()
        .filter(|e| e.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    out.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    out
}

/// Recompute `app.results` for the current focus mode.
///
/// Browsing always shows the full listing; Searching shows the filtered
/// listing. The selection is preserved by entry ID when the entry is
/// still visible, otherwise clamped to the new bounds.
pub fn refresh_results(app: &mut AppState) {
    let prev_id = app.results.get(app.selected).map(|e| e.id.clone());
    app.results = match app.focus {
        Focus::Browsing => filter_entries(&app.apps, ""),
        Focus::Searching => filter_entries(&app.apps, &app.input),
    };
    if let Some(id) = prev_id
        && let Some(pos) = app.results.iter().position(|e| e.id == id)
    {
        app.selected = pos;
        app.list_state.select(Some(pos));
        return;
    }
    if app.results.is_empty() {
        app.selected = 0;
        app.list_state.select(None);
    } else {
        app.selected = app.selected.min(app.results.len() - 1);
        app.list_state.select(Some(app.selected));
    }
}

/// Move the highlighted row to the top of the visible list.
pub fn scroll_to_top(app: &mut AppState) {
    app.selected = 0;
    let mut st = ratatui::widgets::ListState::default();
    st.select(if app.results.is_empty() { None } else { Some(0) });
    app.list_state = st;
}

/// Move the selection by `delta`, clamped to the list bounds.
pub fn move_sel(app: &mut AppState, delta: isize) {
    if app.results.is_empty() {
        return;
    }
    let len = app.results.len() as isize;
    let mut idx = app.selected as isize + delta;
    if idx < 0 {
        idx = 0;
    }
    if idx >= len {
        idx = len - 1;
    }
    app.selected = idx as usize;
    app.list_state.select(Some(app.selected));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, name: &str) -> AppEntry {
        AppEntry {
            id: id.to_string(),
            name: name.to_string(),
            exec: "true".to_string(),
            icon: None,
            needs_terminal: false,
        }
    }

    /// What: Empty query returns everything in sorted order
    ///
    /// - Input: Unsorted entries, query ""
    /// - Output: All entries, ascending lowercase name
    #[test]
    fn logic_filter_empty_query_sorts_everything() {
        let entries = vec![entry("a.b", "Zeta"), entry("c.d", "alpha"), entry("e.f", "Mid")];
        let names: Vec<String> = filter_entries(&entries, "")
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["alpha", "Mid", "Zeta"]);
    }

    /// What: Substring matching is case-insensitive and exhaustive
    ///
    /// - Input: `[Zeta, alpha]`, query "al"
    /// - Output: `[alpha]` only
    #[test]
    fn logic_filter_substring_case_insensitive() {
        let entries = vec![entry("a.b", "Zeta"), entry("c.d", "alpha")];
        let hits = filter_entries(&entries, "al");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "alpha");

        let upper = filter_entries(&entries, "ZE");
        assert_eq!(upper.len(), 1);
        assert_eq!(upper[0].name, "Zeta");
    }

    /// What: Filtering re-sorts regardless of input order
    ///
    /// - Input: Reversed and shuffled copies of the same list
    /// - Output: Identical filter results
    #[test]
    fn logic_filter_is_input_order_independent() {
        let mut entries = vec![
            entry("1", "cherry"),
            entry("2", "Apricot"),
            entry("3", "banana"),
        ];
        let sorted = filter_entries(&entries, "an");
        entries.reverse();
        assert_eq!(filter_entries(&entries, "an"), sorted);
    }

    /// What: Refresh preserves selection by ID across mode switches
    ///
    /// - Input: Selection on "banana" while a filter removes neighbors
    /// - Output: "banana" stays selected at its new index
    #[test]
    fn logic_refresh_preserves_selection_by_id() {
        let mut app = AppState::default();
        app.apps = vec![
            entry("1", "Apricot"),
            entry("2", "banana"),
            entry("3", "cherry"),
        ];
        app.focus = Focus::Browsing;
        refresh_results(&mut app);
        app.selected = 1; // banana
        app.list_state.select(Some(1));

        app.focus = Focus::Searching;
        app.input = "an".to_string();
        refresh_results(&mut app);
        assert_eq!(app.results[app.selected].name, "banana");
    }

    /// What: Refresh clamps when the selection disappears
    ///
    /// - Input: Selection past the end of a shrinking result set
    /// - Output: Clamped index; None selection when empty
    #[test]
    fn logic_refresh_clamps_or_clears_selection() {
        let mut app = AppState::default();
        app.apps = vec![entry("1", "Apricot"), entry("2", "banana")];
        app.focus = Focus::Searching;
        app.input = "apricot".to_string();
        app.selected = 1;
        refresh_results(&mut app);
        assert_eq!(app.selected, 0);
        assert_eq!(app.list_state.selected(), Some(0));

        app.input = "zzz".to_string();
        refresh_results(&mut app);
        assert!(app.results.is_empty());
        assert_eq!(app.list_state.selected(), None);
    }

    /// What: Selection movement clamps at both ends
    ///
    /// - Input: Moves past the first and last row
    /// - Output: Index pinned to bounds; empty list is a no-op
    #[test]
    fn logic_move_sel_clamps() {
        let mut app = AppState::default();
        app.apps = vec![entry("1", "a"), entry("2", "b"), entry("3", "c")];
        app.focus = Focus::Browsing;
        refresh_results(&mut app);

        move_sel(&mut app, -5);
        assert_eq!(app.selected, 0);
        move_sel(&mut app, 10);
        assert_eq!(app.selected, 2);

        let mut empty = AppState::default();
        move_sel(&mut empty, 1);
        assert_eq!(empty.selected, 0);
    }
}
