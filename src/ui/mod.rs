//! Rendering for nook's home screen.
//!
//! The frame is one vertical stack: clock, search box, application list,
//! and a one-line footer; modals draw on top. The canvas background is
//! the wallpaper tint when one was sampled, the palette base otherwise.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

/// Clock widget rendering.
mod clock;
/// Shared rendering helpers.
pub mod helpers;
/// Modal dialog rendering.
mod modals;
/// Search box and list rendering.
mod results;

use crate::state::{AppState, Focus};
use crate::theme::theme;
use crate::ui::helpers::dim_tint;

/// Render one frame of the home screen.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let canvas = match app.wallpaper_tint {
        Some(tint) => dim_tint(tint),
        None => match th.base {
            ratatui::style::Color::Rgb(r, g, b) => (r, g, b),
            _ => (0, 0, 0),
        },
    };
    let bg = ratatui::style::Color::Rgb(canvas.0, canvas.1, canvas.2);
    f.render_widget(Block::default().style(Style::default().bg(bg)), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    clock::render_clock(f, app, chunks[0], canvas);
    results::render_search(f, app, chunks[1]);
    results::render_results(f, app, chunks[2]);
    render_footer(f, app, chunks[3]);

    modals::render_modal(f, app);
}

/// One-line footer: key hints on the left, transient toast on the right.
fn render_footer(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let th = theme();
    let hints = match app.focus {
        Focus::Browsing => " /: search   Enter: launch   F2: settings   Esc: quit",
        Focus::Searching => " Esc: done   ↑/↓: select   Enter: launch",
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(th.overlay1),
        ))),
        area,
    );
    if let Some(toast) = &app.toast_message {
        let text = format!("{toast} ");
        let w = text.chars().count() as u16;
        if w < area.width {
            let rect = ratatui::layout::Rect {
                x: area.right() - w,
                y: area.y,
                width: w,
                height: 1,
            };
            f.render_widget(
                Paragraph::new(Span::styled(text, Style::default().fg(th.yellow))),
                rect,
            );
        }
    }
}
