//! Home screen category grid.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, GRID_COLUMNS};
use crate::tui::theme::*;

const CARD_HEIGHT: u16 = 4;

/// Render the two-column grid of category cards.
pub fn render_category_grid(frame: &mut Frame, area: Rect, app: &App) {
    let names = &app.home.names;
    if names.is_empty() {
        let empty = Paragraph::new(Line::styled(
            "No categories configured",
            Style::new().fg(TEXT_DIM),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let rows = names.len().div_ceil(GRID_COLUMNS);
    let visible_rows = (area.height / CARD_HEIGHT) as usize;

    // Keep the selected card on screen when the terminal is short
    let selected_row = app.home.selected / GRID_COLUMNS;
    let first_row = selected_row.saturating_sub(visible_rows.saturating_sub(1));

    for row in first_row..rows.min(first_row + visible_rows.max(1)) {
        let row_area = Rect {
            x: area.x,
            y: area.y + ((row - first_row) as u16) * CARD_HEIGHT,
            width: area.width,
            height: CARD_HEIGHT.min(area.height.saturating_sub(((row - first_row) as u16) * CARD_HEIGHT)),
        };
        if row_area.height == 0 {
            break;
        }

        let columns = Layout::horizontal([
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(row_area);

        for col in 0..GRID_COLUMNS {
            let index = row * GRID_COLUMNS + col;
            let Some(name) = names.get(index) else { continue };
            render_card(frame, columns[col], app, index, name);
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, app: &App, index: usize, name: &str) {
    let accent = category_accent(name);
    let is_selected = index == app.home.selected;

    let border_style = if is_selected {
        Style::new().fg(accent).bold()
    } else {
        Style::new().fg(TEXT_DIM)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    let name_style = if is_selected {
        Style::new().fg(TEXT_WHITE).bold()
    } else {
        Style::new().fg(TEXT_WHITE)
    };

    let count = app.catalog.choices(name).len();
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{}. ", index + 1), Style::new().fg(TEXT_DIM)),
            Span::styled(name.to_string(), name_style),
        ]),
        Line::styled(
            format!("{} choices", count),
            Style::new().fg(if is_selected { accent } else { TEXT_DIM }),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
