use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, InputMode};
use crate::tui::components::{
    render_add_choice_popup, render_category_grid, render_choice_list, render_help_popup,
    render_result_panel, render_spin_box,
};
use super::theme::*;

/// Rows taken by chrome around the choice list: header, category title,
/// spin box, hotkey bar, and the list's own border.
const CHOICE_LIST_CHROME: usize = 12;

/// Height of the choice list viewport for a terminal of `total` rows.
pub fn choice_list_height(total: u16) -> usize {
    (total as usize).saturating_sub(CHOICE_LIST_CHROME)
}

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Main vertical layout: header, content, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Length(3), // Logo + greeting
        Constraint::Min(0),    // Content
        Constraint::Length(1), // Hotkeys
    ])
    .split(area);

    render_header(frame, main_layout[0], app);

    match app.input_mode {
        InputMode::Home => render_category_grid(frame, main_layout[1], app),
        InputMode::Category | InputMode::AddChoice => {
            render_category_screen(frame, main_layout[1], app);
            if app.input_mode == InputMode::AddChoice {
                render_add_choice_popup(frame, area, app);
            }
        }
        InputMode::Help => {
            // Help floats over whichever screen was open
            if app.category.is_some() {
                render_category_screen(frame, main_layout[1], app);
            } else {
                render_category_grid(frame, main_layout[1], app);
            }
            render_help_popup(frame, area);
        }
    }

    render_hotkeys(frame, main_layout[2], app);
}

/// The category screen: title, then either the result panel (settled) or the
/// choice list plus the spin display box.
fn render_category_screen(frame: &mut Frame, area: Rect, app: &App) {
    let Some(view) = &app.category else { return };
    let accent = category_accent(&view.name);

    let layout = Layout::vertical([
        Constraint::Length(1), // Category title
        Constraint::Min(0),    // Choice list / result
        Constraint::Length(5), // Spin box
    ])
    .split(area);

    let title = Line::from(vec![Span::styled(
        view.name.clone(),
        Style::new().fg(accent).bold(),
    )])
    .centered();
    frame.render_widget(Paragraph::new(title), layout[0]);

    if app.spin.is_settled() {
        render_result_panel(frame, layout[1].union(layout[2]), app);
    } else {
        render_choice_list(frame, layout[1], app);
        render_spin_box(frame, layout[2], app);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    // Two-tone app name, centered, with the greeting underneath
    let name = Line::from(vec![
        Span::styled("Choice", Style::new().fg(PRIMARY_PURPLE).bold()),
        Span::styled("Mate", Style::new().fg(ACCENT_BLUE).bold()),
    ])
    .centered();

    let greeting = Line::styled(app.greeting.clone(), Style::new().fg(TEXT_DIM)).centered();

    let paragraph = Paragraph::new(vec![name, greeting]);
    frame.render_widget(paragraph, area);
}

fn render_hotkeys(frame: &mut Frame, area: Rect, app: &App) {
    let keys: &[(&str, &str)] = match app.input_mode {
        InputMode::Home => &[
            ("hjkl", "navigate"),
            ("Enter", "open"),
            ("1-9", "jump"),
            ("?", "help"),
            ("q", "quit"),
        ],
        InputMode::Category => {
            if app.spin.is_settled() {
                &[("r/Enter", "choose again"), ("Esc", "back"), ("q", "quit")]
            } else {
                &[
                    ("s/Enter", "spin"),
                    ("a", "add"),
                    ("d", "delete"),
                    ("j/k", "navigate"),
                    ("Esc", "back"),
                ]
            }
        }
        InputMode::AddChoice => &[("Enter", "add"), ("Esc", "cancel")],
        InputMode::Help => &[("Esc", "close")],
    };

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, (key, action)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ·  ", Style::new().fg(TEXT_DIM)));
        }
        spans.push(Span::styled(*key, Style::new().fg(TEXT_WHITE).bold()));
        spans.push(Span::styled(format!(" {}", action), Style::new().fg(TEXT_DIM)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
