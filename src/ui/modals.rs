//! Modal dialogs: first-run hint, notices, and clock settings.

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{AppState, Modal, SettingsRow};
use crate::theme::{CLOCK_COLOR_PRESETS, format_color, theme};
use crate::ui::helpers::{centered_rect, color_from_packed};

/// Render the active modal, if any, over the home screen.
pub fn render_modal(f: &mut Frame, app: &AppState) {
    match &app.modal {
        Modal::None => {}
        Modal::Hint => render_hint(f),
        Modal::Notice { message } => render_notice(f, message),
        Modal::Settings => render_settings(f, app),
    }
}

fn render_hint(f: &mut Frame) {
    let th = theme();
    let area = centered_rect(46, 9, f.area());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.accent))
        .title(Span::styled(
            " Welcome to nook ",
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block.style(Style::default().bg(th.mantle)), area);
    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from("  /        search your apps"),
        Line::from("  Enter    launch the highlighted app"),
        Line::from("  F2       clock color and opacity"),
        Line::from("  Esc      leave search, or quit"),
        Line::from(""),
        Line::from(Span::styled(
            "  press any key to begin",
            Style::default().fg(th.overlay1),
        )),
    ])
    .style(Style::default().fg(th.subtext0));
    f.render_widget(body, inner);
}

fn render_notice(f: &mut Frame, message: &str) {
    let th = theme();
    let area = centered_rect(50, 7, f.area());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.yellow))
        .title(Span::styled(" Notice ", Style::default().fg(th.yellow)));
    let inner = block.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block.style(Style::default().bg(th.mantle)), area);
    let body = Paragraph::new(message.to_string())
        .style(Style::default().fg(th.text))
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);
    f.render_widget(body, inner);
}

/// Opacity shown as a 20-cell bar plus a percentage label.
fn opacity_bar(opacity: f32) -> String {
    let filled = (opacity.clamp(0.0, 1.0) * 20.0).round() as usize;
    let mut bar = String::with_capacity(24);
    for i in 0..20 {
        bar.push(if i < filled { '█' } else { '░' });
    }
    format!("{bar} {:3}%", (opacity.clamp(0.0, 1.0) * 100.0).round() as u32)
}

fn render_settings(f: &mut Frame, app: &AppState) {
    let th = theme();
    let area = centered_rect(54, 11, f.area());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.accent))
        .title(Span::styled(
            " Clock Settings ",
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block.style(Style::default().bg(th.mantle)), area);

    let row_style = |row: SettingsRow| {
        if app.settings_row == row {
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.subtext0)
        }
    };
    let preset_pos = CLOCK_COLOR_PRESETS
        .iter()
        .position(|c| *c == app.prefs.clock_color);
    let swatch = Span::styled(
        "██████",
        Style::default().fg(color_from_packed(app.prefs.clock_color)),
    );
    let color_label = match preset_pos {
        Some(i) => format!(
            "  {}  ({}/{})",
            format_color(app.prefs.clock_color),
            i + 1,
            CLOCK_COLOR_PRESETS.len()
        ),
        None => format!("  {}  (custom)", format_color(app.prefs.clock_color)),
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Color    ◄ ", row_style(SettingsRow::Color)),
            swatch,
            Span::styled(color_label, row_style(SettingsRow::Color)),
            Span::styled(" ►", row_style(SettingsRow::Color)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Opacity  ◄ ", row_style(SettingsRow::Opacity)),
            Span::styled(
                opacity_bar(app.prefs.clock_opacity),
                row_style(SettingsRow::Opacity),
            ),
            Span::styled(" ►", row_style(SettingsRow::Opacity)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  ↑/↓ choose row   ◄/► adjust   Esc close",
            Style::default().fg(th.overlay1),
        )),
        Line::from(Span::styled(
            "  changes are saved immediately",
            Style::default().fg(th.overlay1),
        )),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::opacity_bar;

    /// What: Opacity bar fills proportionally
    ///
    /// - Input: 0.0, 0.5, 1.0
    /// - Output: 0, 10, and 20 filled cells with matching percent
    #[test]
    fn ui_opacity_bar_proportions() {
        assert!(opacity_bar(0.0).starts_with("░░"));
        assert!(opacity_bar(0.0).ends_with("0%"));
        let half = opacity_bar(0.5);
        assert_eq!(half.matches('█').count(), 10);
        assert!(half.ends_with("50%"));
        let full = opacity_bar(1.0);
        assert_eq!(full.matches('█').count(), 20);
        assert!(full.ends_with("100%"));
    }
}
