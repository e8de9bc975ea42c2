//! Settled result view.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::tui::theme::*;

/// Render the committed choice after a spin settles.
pub fn render_result_panel(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(PRIMARY_PURPLE));

    // Vertically center the result inside the panel
    let inner_height = area.height.saturating_sub(2) as usize;
    let padding = inner_height.saturating_sub(4) / 2;

    let mut lines: Vec<Line> = vec![];
    for _ in 0..padding {
        lines.push(Line::raw(""));
    }
    lines.push(Line::styled("Your Choice", Style::new().fg(TEXT_DIM)));
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        app.current_display.clone(),
        Style::new().fg(PRIMARY_PURPLE).bold(),
    ));
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "Press [r] to choose again",
        Style::new().fg(TEXT_DIM),
    ));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
