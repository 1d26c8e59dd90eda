//! Search box and application list rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    prelude::Position,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, Focus, LoadPhase};
use crate::theme::theme;
use crate::ui::helpers::spinner_frame;

/// Render the search input line under the clock.
///
/// The border picks up the accent color while the field has focus; the
/// terminal cursor is placed at the caret so typing feels native.
pub fn render_search(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Searching;
    let border = if focused { th.accent } else { th.surface1 };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(Span::styled("Search", Style::default().fg(th.overlay1)));
    let inner = block.inner(area);

    let content: Line = if app.input.is_empty() && !focused {
        Line::from(Span::styled(
            "Search apps… ( / )",
            Style::default().fg(th.overlay1),
        ))
    } else {
        Line::from(Span::styled(
            app.input.clone(),
            Style::default().fg(th.text),
        ))
    };
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(content), inner);

    if focused {
        let prefix: String = app.input.chars().take(app.search_caret).collect();
        let x = inner.x + prefix.width() as u16;
        f.set_cursor_position(Position::new(x.min(inner.right().saturating_sub(1)), inner.y));
    }
}

/// Keep the selection centered within the visible list when possible.
fn center_selection(app: &mut AppState, viewport_rows: usize) {
    let len = app.results.len();
    let selected_idx = if len == 0 {
        None
    } else {
        Some(app.selected.min(len - 1))
    };
    let desired = if viewport_rows > 0 && len > viewport_rows {
        let selected = selected_idx.unwrap_or(0);
        let max_offset = len.saturating_sub(viewport_rows);
        selected.saturating_sub(viewport_rows / 2).min(max_offset)
    } else {
        0
    };
    if app.list_state.offset() != desired {
        let mut st = ratatui::widgets::ListState::default().with_offset(desired);
        st.select(selected_idx);
        app.list_state = st;
    } else {
        app.list_state.select(selected_idx);
    }
}

/// Render the application list, or the loading/failure/empty states.
pub fn render_results(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let title = match app.focus {
        Focus::Browsing => format!("Apps ({})", app.results.len()),
        Focus::Searching => format!("Matches ({})", app.results.len()),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface1))
        .title(Span::styled(title, Style::default().fg(th.overlay1)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    match &app.phase {
        LoadPhase::Loading => {
            let spinner = format!("{} Loading applications…", spinner_frame(app.tick_count));
            let msg = Paragraph::new(Span::styled(spinner, Style::default().fg(th.subtext0)))
                .alignment(Alignment::Center);
            f.render_widget(msg, centered_line(inner));
            return;
        }
        LoadPhase::Failed(err) => {
            let msg = Paragraph::new(vec![
                Line::from(Span::styled(
                    "Could not list applications",
                    Style::default().fg(th.red).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(err.clone(), Style::default().fg(th.subtext0))),
            ])
            .alignment(Alignment::Center);
            f.render_widget(msg, centered_line(inner));
            return;
        }
        LoadPhase::Ready => {}
    }

    if app.results.is_empty() {
        let msg = Paragraph::new(Span::styled(
            "No apps found",
            Style::default().fg(th.subtext0),
        ))
        .alignment(Alignment::Center);
        f.render_widget(msg, centered_line(inner));
        return;
    }

    center_selection(app, inner.height as usize);

    let items: Vec<ListItem> = app
        .results
        .iter()
        .map(|e| {
            let mut segs: Vec<Span> = vec![Span::styled(
                e.name.clone(),
                Style::default().fg(th.text),
            )];
            if e.needs_terminal {
                segs.push(Span::styled("  [term]", Style::default().fg(th.yellow)));
            }
            segs.push(Span::styled(
                format!("  {}", e.id),
                Style::default().fg(th.overlay1),
            ));
            ListItem::new(Line::from(segs))
        })
        .collect();

    let list = List::new(items).highlight_style(
        Style::default()
            .fg(th.accent)
            .bg(th.surface1)
            .add_modifier(Modifier::BOLD),
    );
    f.render_stateful_widget(list, inner, &mut app.list_state);
}

/// One-row rect vertically centered inside `area`, full width.
fn centered_line(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: 1.min(area.height),
    }
}
