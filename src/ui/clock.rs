//! Clock widget rendering: large time line and date line, centered.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::AppState;
use crate::theme::theme;
use crate::ui::helpers::clock_color;

/// Render the clock block at the top of the home screen.
///
/// Color and brightness come from the persisted preferences; the date
/// line runs at 90% of the clock opacity, like the original widget.
pub fn render_clock(f: &mut Frame, app: &AppState, area: Rect, canvas: (u8, u8, u8)) {
    let th = theme();
    let time_color = clock_color(&app.prefs, canvas);
    let date_prefs = crate::theme::Prefs {
        clock_opacity: app.prefs.clock_opacity * 0.9,
        ..app.prefs.clone()
    };
    let date_color = clock_color(&date_prefs, canvas);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            app.clock_time.clone(),
            Style::default().fg(time_color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.clock_date.clone(),
            Style::default().fg(date_color),
        )),
        Line::from(Span::styled(
            "F2 settings",
            Style::default().fg(th.overlay1),
        )),
    ];
    let clock = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(clock, area);
}
