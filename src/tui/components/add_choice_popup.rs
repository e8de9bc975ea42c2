//! Add-choice input overlay.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::tui::theme::*;

/// Render the add-choice text input as a centered popup.
pub fn render_add_choice_popup(frame: &mut Frame, area: Rect, app: &App) {
    let popup_width = 44u16.min(area.width);
    let popup_height = 6u16.min(area.height);
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let category = app
        .category
        .as_ref()
        .map(|v| v.name.as_str())
        .unwrap_or("?");

    let lines = vec![
        Line::from(vec![
            Span::styled("Add a choice to ", Style::new().fg(TEXT_DIM)),
            Span::styled(category, Style::new().fg(category_accent(category)).bold()),
        ]),
        Line::raw(""),
        Line::from(vec![
            Span::styled("> ", Style::new().fg(PRIMARY_PURPLE)),
            Span::styled(app.input_buffer.clone(), Style::new().fg(TEXT_WHITE)),
        ]),
        Line::from(vec![
            Span::styled("Enter", Style::new().fg(TEXT_WHITE)),
            Span::styled(" add  ", Style::new().fg(TEXT_DIM)),
            Span::styled("Esc", Style::new().fg(TEXT_WHITE)),
            Span::styled(" cancel", Style::new().fg(TEXT_DIM)),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(PRIMARY_PURPLE));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup_area);

    // Place the terminal cursor inside the input line
    let cursor_cols: u16 = app.input_buffer[..app.cursor_position].chars().count() as u16;
    frame.set_cursor_position(Position::new(
        popup_area.x + 3 + cursor_cols,
        popup_area.y + 3,
    ));
}
