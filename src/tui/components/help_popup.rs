//! Help popup component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::tui::theme::*;

/// Render the help popup with keyboard shortcuts.
pub fn render_help_popup(frame: &mut Frame, area: Rect) {
    // Calculate centered popup area
    let popup_width = 46u16;
    let popup_height = 21u16;
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(
        x,
        y,
        popup_width.min(area.width),
        popup_height.min(area.height),
    );

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let key = |k: &str, action: &str| {
        Line::from(vec![
            Span::styled(format!("  {:<8}", k), Style::new().fg(TEXT_WHITE)),
            Span::styled(action.to_string(), Style::new().fg(TEXT_DIM)),
        ])
    };

    let mut lines: Vec<Line> = vec![];

    lines.push(Line::from(vec![Span::styled(
        "Keyboard Shortcuts",
        Style::new().fg(TEXT_WHITE).bold(),
    )]));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Home", Style::new().fg(ACCENT_BLUE).bold()));
    lines.push(key("h/j/k/l", "Navigate the category grid"));
    lines.push(key("1-9", "Jump to category by number"));
    lines.push(key("Enter", "Open category"));
    lines.push(key("q", "Quit"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Category", Style::new().fg(CAT_GREEN).bold()));
    lines.push(key("s/Enter", "Spin"));
    lines.push(key("a", "Add a choice"));
    lines.push(key("d", "Delete choice (all equal entries)"));
    lines.push(key("j/k", "Navigate choices"));
    lines.push(key("g/G", "First / last choice"));
    lines.push(key("r", "Choose again after a result"));
    lines.push(key("Esc", "Back to home"));
    lines.push(Line::raw(""));

    lines.push(Line::from(vec![
        Span::styled("Press ", Style::new().fg(TEXT_DIM)),
        Span::styled("?", Style::new().fg(TEXT_WHITE)),
        Span::styled(" or ", Style::new().fg(TEXT_DIM)),
        Span::styled("Esc", Style::new().fg(TEXT_WHITE)),
        Span::styled(" to close", Style::new().fg(TEXT_DIM)),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(ACCENT_BLUE))
        .style(Style::new().bg(Color::Black));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup_area);
}
