//! The spin display box: current draw, prompt label, or empty-list hint.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::tui::theme::*;

pub fn render_spin_box(frame: &mut Frame, area: Rect, app: &App) {
    let spinning = app.spin.is_spinning();

    let border_style = if spinning {
        Style::new().fg(PRIMARY_PURPLE)
    } else {
        Style::new().fg(TEXT_DIM)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    let mut lines: Vec<Line> = vec![Line::raw("")];

    if spinning {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", app.spinner()), Style::new().fg(ACCENT_BLUE)),
            Span::styled(
                app.current_display.clone(),
                Style::new().fg(PRIMARY_PURPLE).bold(),
            ),
            Span::styled(format!(" {}", app.spinner()), Style::new().fg(ACCENT_BLUE)),
        ]));
    } else if app.active_choices().is_empty() {
        lines.push(Line::styled(
            "Add a choice before spinning",
            Style::new().fg(TEXT_DIM),
        ));
    } else {
        lines.push(Line::styled(
            app.current_display.clone(),
            Style::new().fg(PRIMARY_PURPLE).bold(),
        ));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
