//! Scrollable choice list for the open category.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::tui::theme::*;

/// Render the choice list with selection cursor and scroll window.
pub fn render_choice_list(frame: &mut Frame, area: Rect, app: &App) {
    let Some(view) = &app.category else { return };
    let choices = app.active_choices();

    let inner_height = area.height.saturating_sub(2) as usize;
    let offset = view.viewport.offset();

    // Title shows the visible window when the list overflows
    let title = if choices.len() > inner_height {
        let last = (offset + inner_height).min(choices.len());
        format!(" Choices {}-{} of {} ", offset + 1, last, choices.len())
    } else {
        format!(" Choices ({}) ", choices.len())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(TEXT_DIM))
        .title(Span::styled(title, Style::new().fg(TEXT_WHITE)));

    let mut lines: Vec<Line> = vec![];
    if choices.is_empty() {
        lines.push(Line::styled("No choices left.", Style::new().fg(TEXT_DIM)));
        lines.push(Line::styled(
            "Press [a] to add one.",
            Style::new().fg(TEXT_DIM),
        ));
    } else {
        for (i, choice) in choices
            .iter()
            .enumerate()
            .skip(offset)
            .take(inner_height.max(1))
        {
            let is_selected = i == view.selected;
            let cursor = if is_selected { "> " } else { "  " };

            let mut spans = vec![
                Span::raw(cursor),
                Span::styled(
                    choice.clone(),
                    if is_selected {
                        Style::new().fg(TEXT_WHITE).bold()
                    } else {
                        Style::new().fg(TEXT_WHITE)
                    },
                ),
            ];
            if is_selected {
                spans.push(Span::styled("  [d] delete", Style::new().fg(DANGER_RED)));
            }
            lines.push(Line::from(spans));
        }
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
