mod app;
mod catalog;
mod config;
mod error;
mod log;
mod picker;
mod scroll;
mod spin;
mod tui;

use anyhow::Result;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEventKind,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;

use app::{App, GRID_COLUMNS, InputMode};
use catalog::Catalog;
use config::Config;
use error::Error;
use picker::Picker;
use spin::SpinEvent;

/// Parsed command line arguments
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    /// Config file override (`--config` / `-c`)
    config_path: Option<PathBuf>,
    /// Category to open directly on startup
    category: Option<String>,
}

fn parse_args(args: &[String]) -> error::Result<CliArgs> {
    let mut parsed = CliArgs::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    parsed.config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                    continue;
                } else {
                    return Err(Error::Other("--config requires a path argument".into()));
                }
            }
            arg if !arg.starts_with('-') => {
                parsed.category = Some(arg.to_string());
            }
            _ => {
                // Unknown flag, ignore
            }
        }
        i += 1;
    }

    Ok(parsed)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    let args: Vec<String> = std::env::args().collect();
    let cli = parse_args(&args)?;

    // Load config with precedence: CLI > config file > defaults
    let config = match &cli.config_path {
        Some(path) => Config::load_or_default(path),
        None => Config::load(),
    };

    let mut catalog = Catalog::seeded();
    config.apply_categories(&mut catalog);

    let greeting = config.greeting.clone().unwrap_or_else(|| "Hello !".to_string());
    let mut app = App::new(catalog, config.spin_timing(), greeting);

    // Jump straight into a category given on the command line
    if let Some(name) = &cli.category {
        if app.catalog.get(name).is_some() {
            app.open_category(name);
        } else {
            eprintln!("Warning: unknown category '{}', starting at home", name);
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Channel for spin events; the task side holds a clone per spin
    let (spin_tx, mut spin_rx) = mpsc::channel::<SpinEvent>(64);

    // Event stream for keyboard and mouse
    let mut event_stream = EventStream::new();

    loop {
        // Keep the list viewport in sync with the terminal size
        let size = terminal.size()?;
        app.set_list_height(tui::ui::choice_list_height(size.height));

        // Render
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        tokio::select! {
            // Terminal events
            maybe_event = event_stream.next() => {
                if let Some(Ok(event)) = maybe_event {
                    // Mouse wheel scrolls the choice list
                    if let Event::Mouse(mouse) = &event {
                        if app.input_mode == InputMode::Category {
                            match mouse.kind {
                                MouseEventKind::ScrollUp => app.choice_scroll(-3),
                                MouseEventKind::ScrollDown => app.choice_scroll(3),
                                _ => {}
                            }
                        }
                        continue;
                    }

                    let Event::Key(key) = event else { continue };
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }

                    match app.input_mode {
                        InputMode::Home => match key.code {
                            KeyCode::Char('q') => return Ok(()),
                            KeyCode::Char('?') => app.open_help(),
                            KeyCode::Char('j') | KeyCode::Down => {
                                app.home.select_row_down(GRID_COLUMNS);
                            }
                            KeyCode::Char('k') | KeyCode::Up => {
                                app.home.select_row_up(GRID_COLUMNS);
                            }
                            KeyCode::Char('l') | KeyCode::Right => app.home.select_next(),
                            KeyCode::Char('h') | KeyCode::Left => app.home.select_prev(),
                            // Number keys jump to a category directly
                            KeyCode::Char(c @ '1'..='9') => {
                                let idx = (c as usize) - ('1' as usize);
                                app.home.select_index(idx);
                            }
                            KeyCode::Enter => app.open_selected_category(),
                            _ => {}
                        },
                        InputMode::Category => {
                            if app.spin.is_settled() {
                                match key.code {
                                    KeyCode::Char('q') => return Ok(()),
                                    KeyCode::Char('r') | KeyCode::Enter => app.reset_to_prompt(),
                                    KeyCode::Esc | KeyCode::Char('h') => app.close_category(),
                                    KeyCode::Char('?') => app.open_help(),
                                    _ => {}
                                }
                            } else {
                                match key.code {
                                    KeyCode::Char('q') => {
                                        app.cancel_spin();
                                        return Ok(());
                                    }
                                    KeyCode::Char('?') => app.open_help(),
                                    KeyCode::Esc | KeyCode::Char('h') => app.close_category(),
                                    KeyCode::Char('s') | KeyCode::Enter => app.begin_spin(&spin_tx),
                                    KeyCode::Char('a') => app.open_add_choice(),
                                    KeyCode::Char('d') => app.delete_selected_choice(),
                                    KeyCode::Char('j') | KeyCode::Down => app.choice_next(),
                                    KeyCode::Char('k') | KeyCode::Up => app.choice_prev(),
                                    KeyCode::Char('g') => app.choice_top(),
                                    KeyCode::Char('G') => app.choice_bottom(),
                                    _ => {}
                                }
                            }
                        }
                        InputMode::AddChoice => match key.code {
                            KeyCode::Esc => app.close_add_choice(),
                            KeyCode::Enter => app.commit_add_choice(),
                            KeyCode::Char(c) => app.input_char(c),
                            KeyCode::Backspace => app.input_backspace(),
                            KeyCode::Delete => app.input_delete(),
                            KeyCode::Left => app.input_left(),
                            KeyCode::Right => app.input_right(),
                            KeyCode::Home => app.input_home(),
                            KeyCode::End => app.input_end(),
                            _ => {}
                        },
                        InputMode::Help => match key.code {
                            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                                app.close_help();
                            }
                            _ => {}
                        },
                    }
                }
            }

            // Spin events drive the flicker and the final reveal
            Some(event) = spin_rx.recv() => {
                app.handle_spin_event(event);
            }

            // Timeout to keep UI responsive and tick the activity spinner
            _ = tokio::time::sleep(Duration::from_millis(80)) => {
                app.tick_spinner();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("choicemate")
            .chain(list.iter().copied())
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_parse_no_args() {
        let parsed = parse_args(&args(&[])).unwrap();
        assert_eq!(parsed, CliArgs::default());
    }

    #[test]
    fn test_parse_config_and_category() {
        let parsed = parse_args(&args(&["-c", "/tmp/cm.toml", "Food"])).unwrap();
        assert_eq!(parsed.config_path, Some(PathBuf::from("/tmp/cm.toml")));
        assert_eq!(parsed.category.as_deref(), Some("Food"));
    }

    #[test]
    fn test_parse_config_without_path_fails() {
        assert!(parse_args(&args(&["--config"])).is_err());
    }

    #[test]
    fn test_unknown_flags_are_ignored() {
        let parsed = parse_args(&args(&["--frobnicate", "Sport"])).unwrap();
        assert_eq!(parsed.category.as_deref(), Some("Sport"));
    }
}
