use tokio::sync::mpsc;

use crate::catalog::{Catalog, PROMPT_LABEL};
use crate::log;
use crate::picker::Picker;
use crate::scroll::Viewport;
use crate::spin::{self, SpinEvent, SpinHandle, SpinTiming};

/// Columns in the home category grid
pub const GRID_COLUMNS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Home,      // Category grid
    Category,  // Choice list + spin display for one category
    AddChoice, // Text input for a new choice
    Help,      // Help popup showing all hotkeys
}

/// Phase of the active spin session.
///
/// `Settled` is terminal until [`App::reset_to_prompt`] returns to `Idle`.
pub enum SpinPhase {
    Idle,
    Spinning(SpinHandle),
    Settled,
}

impl SpinPhase {
    pub fn is_spinning(&self) -> bool {
        matches!(self, SpinPhase::Spinning(_))
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, SpinPhase::Settled)
    }
}

/// Selection state for the home category grid
pub struct HomeState {
    pub names: Vec<String>,
    pub selected: usize,
}

impl HomeState {
    pub fn new(names: Vec<String>) -> Self {
        Self { names, selected: 0 }
    }
}

impl Picker for HomeState {
    type Item = String;

    fn items(&self) -> &[String] {
        &self.names
    }

    fn selected_index(&self) -> usize {
        self.selected
    }

    fn set_selected_index(&mut self, index: usize) {
        self.selected = index;
    }
}

/// State for the open category screen
pub struct CategoryView {
    pub name: String,
    pub selected: usize,
    pub viewport: Viewport,
}

impl CategoryView {
    pub fn new(name: String) -> Self {
        Self {
            name,
            selected: 0,
            viewport: Viewport::new(),
        }
    }
}

/// Spinner frames for the activity animation while a spin is running
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct App {
    pub catalog: Catalog,
    pub input_mode: InputMode,
    pub home: HomeState,
    pub category: Option<CategoryView>,
    pub input_buffer: String,
    pub cursor_position: usize,
    pub current_display: String,
    pub spin: SpinPhase,
    pub timing: SpinTiming,
    pub greeting: String,
    pub spinner_frame: usize,
    next_spin_id: u64,
}

impl App {
    pub fn new(catalog: Catalog, timing: SpinTiming, greeting: String) -> Self {
        let names = catalog.names().iter().map(|n| n.to_string()).collect();
        Self {
            catalog,
            input_mode: InputMode::Home,
            home: HomeState::new(names),
            category: None,
            input_buffer: String::new(),
            cursor_position: 0,
            current_display: PROMPT_LABEL.to_string(),
            spin: SpinPhase::Idle,
            timing,
            greeting,
            spinner_frame: 0,
            next_spin_id: 0,
        }
    }

    /// Advance spinner animation
    pub fn tick_spinner(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }

    /// Get current spinner character
    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame]
    }

    /// Open a category screen, ready for a spin
    pub fn open_category(&mut self, name: &str) {
        self.category = Some(CategoryView::new(name.to_string()));
        self.current_display = PROMPT_LABEL.to_string();
        self.spin = SpinPhase::Idle;
        self.input_mode = InputMode::Category;
    }

    /// Open the home grid's selected category
    pub fn open_selected_category(&mut self) {
        if let Some(name) = self.home.selected_item().cloned() {
            self.open_category(&name);
        }
    }

    /// Leave the category screen, discarding any in-flight spin
    pub fn close_category(&mut self) {
        self.cancel_spin();
        self.category = None;
        self.current_display = PROMPT_LABEL.to_string();
        self.input_mode = InputMode::Home;
    }

    /// Choices of the open category
    pub fn active_choices(&self) -> &[String] {
        match &self.category {
            Some(view) => self.catalog.choices(&view.name),
            None => &[],
        }
    }

    /// Whether the spin action is currently available
    pub fn can_spin(&self) -> bool {
        matches!(self.spin, SpinPhase::Idle) && !self.active_choices().is_empty()
    }

    /// Start the reveal sequence for the open category.
    ///
    /// Ignored while a spin is running or settled, and when the choice list
    /// is empty. The task gets a snapshot of the list; events carry the new
    /// spin id so stale emissions can be discarded.
    pub fn begin_spin(&mut self, tx: &mpsc::Sender<SpinEvent>) {
        if !self.can_spin() {
            return;
        }
        let choices = self.active_choices().to_vec();

        self.next_spin_id += 1;
        let id = self.next_spin_id;
        let handle = spin::start(id, choices, self.timing, tx.clone());
        self.spin = SpinPhase::Spinning(handle);

        if let Some(view) = &self.category {
            log::log_event(&format!("spin {} started in {}", id, view.name));
        }
    }

    /// Apply a spin event to the display state.
    ///
    /// Events whose id doesn't match the active session (cancelled or
    /// superseded spins) are dropped.
    pub fn handle_spin_event(&mut self, event: SpinEvent) {
        let active = match &self.spin {
            SpinPhase::Spinning(handle) => handle.id,
            _ => return,
        };
        if event.id() != active {
            return;
        }

        match event {
            SpinEvent::Flicker { word, .. } => {
                self.current_display = word;
            }
            SpinEvent::Settled { id, word } => {
                log::log_event(&format!("spin {} settled on {:?}", id, word));
                self.current_display = word;
                self.spin = SpinPhase::Settled;
            }
        }
    }

    /// Cancel an in-flight spin, returning to the idle phase
    pub fn cancel_spin(&mut self) {
        if let SpinPhase::Spinning(handle) = &self.spin {
            handle.cancel();
            log::log_event(&format!("spin {} cancelled", handle.id));
            self.spin = SpinPhase::Idle;
        }
    }

    /// Clear the settled result and return to the pre-spin prompt
    pub fn reset_to_prompt(&mut self) {
        self.spin = SpinPhase::Idle;
        self.current_display = PROMPT_LABEL.to_string();
    }

    /// Move choice selection down
    pub fn choice_next(&mut self) {
        let len = self.active_choices().len();
        if let Some(view) = &mut self.category {
            if len > 0 {
                view.selected = (view.selected + 1) % len;
                view.viewport.ensure_visible(view.selected, len);
            }
        }
    }

    /// Move choice selection up
    pub fn choice_prev(&mut self) {
        let len = self.active_choices().len();
        if let Some(view) = &mut self.category {
            if len > 0 {
                view.selected = view.selected.checked_sub(1).unwrap_or(len - 1);
                view.viewport.ensure_visible(view.selected, len);
            }
        }
    }

    /// Jump choice selection to the first entry
    pub fn choice_top(&mut self) {
        if let Some(view) = &mut self.category {
            view.selected = 0;
            view.viewport.scroll_to_top();
        }
    }

    /// Jump choice selection to the last entry
    pub fn choice_bottom(&mut self) {
        let len = self.active_choices().len();
        if let Some(view) = &mut self.category {
            if len > 0 {
                view.selected = len - 1;
                view.viewport.scroll_to_bottom(len);
            }
        }
    }

    /// Scroll the choice list without moving the selection
    pub fn choice_scroll(&mut self, delta: i32) {
        let len = self.active_choices().len();
        if let Some(view) = &mut self.category {
            if delta < 0 {
                view.viewport.scroll_up(delta.unsigned_abs() as usize);
            } else {
                view.viewport.scroll_down(delta as usize, len);
            }
        }
    }

    /// Record the rendered height of the choice list
    pub fn set_list_height(&mut self, height: usize) {
        if let Some(view) = &mut self.category {
            view.viewport.set_height(height);
        }
    }

    /// Delete the selected choice: every entry equal to it is removed
    pub fn delete_selected_choice(&mut self) {
        let Some(view) = &self.category else { return };
        let name = view.name.clone();
        let Some(text) = self.catalog.choices(&name).get(view.selected).cloned() else {
            return;
        };

        self.catalog.remove_choice(&name, &text);
        log::log_event(&format!("removed {:?} from {}", text, name));

        let len = self.catalog.choices(&name).len();
        if let Some(view) = &mut self.category {
            if view.selected >= len {
                view.selected = len.saturating_sub(1);
            }
            view.viewport.ensure_visible(view.selected, len);
        }
    }

    /// Open the add-choice input
    pub fn open_add_choice(&mut self) {
        self.input_buffer.clear();
        self.cursor_position = 0;
        self.input_mode = InputMode::AddChoice;
    }

    /// Cancel the add-choice input
    pub fn close_add_choice(&mut self) {
        self.input_buffer.clear();
        self.cursor_position = 0;
        self.input_mode = InputMode::Category;
    }

    /// Commit the add-choice input.
    ///
    /// Empty input is silently dropped, same as submitting nothing.
    pub fn commit_add_choice(&mut self) {
        let text = self.take_input();
        if let Some(view) = &self.category {
            if !text.is_empty() {
                log::log_event(&format!("added {:?} to {}", text, view.name));
            }
            let name = view.name.clone();
            self.catalog.add_choice(&name, &text);
        }
        self.input_mode = InputMode::Category;
    }

    /// Open the help popup
    pub fn open_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    /// Close the help popup
    pub fn close_help(&mut self) {
        self.input_mode = if self.category.is_some() {
            InputMode::Category
        } else {
            InputMode::Home
        };
    }

    /// Add a character to input buffer
    pub fn input_char(&mut self, c: char) {
        self.input_buffer.insert(self.cursor_position, c);
        self.cursor_position += c.len_utf8();
    }

    /// Delete character before cursor
    pub fn input_backspace(&mut self) {
        if self.cursor_position > 0 {
            let prev = prev_char_boundary(&self.input_buffer, self.cursor_position);
            self.input_buffer.remove(prev);
            self.cursor_position = prev;
        }
    }

    /// Delete character at cursor
    pub fn input_delete(&mut self) {
        if self.cursor_position < self.input_buffer.len() {
            self.input_buffer.remove(self.cursor_position);
        }
    }

    /// Move cursor left
    pub fn input_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position = prev_char_boundary(&self.input_buffer, self.cursor_position);
        }
    }

    /// Move cursor right
    pub fn input_right(&mut self) {
        if self.cursor_position < self.input_buffer.len() {
            self.cursor_position = next_char_boundary(&self.input_buffer, self.cursor_position);
        }
    }

    /// Move cursor to start of input
    pub fn input_home(&mut self) {
        self.cursor_position = 0;
    }

    /// Move cursor to end of input
    pub fn input_end(&mut self) {
        self.cursor_position = self.input_buffer.len();
    }

    /// Take the input buffer (clears it)
    pub fn take_input(&mut self) -> String {
        self.cursor_position = 0;
        std::mem::take(&mut self.input_buffer)
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    let mut p = pos - 1;
    while p > 0 && !s.is_char_boundary(p) {
        p -= 1;
    }
    p
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    let mut p = pos + 1;
    while p < s.len() && !s.is_char_boundary(p) {
        p += 1;
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn app() -> App {
        let mut catalog = Catalog::new();
        catalog.insert_category(
            "Color",
            vec!["Red".to_string(), "Blue".to_string(), "Green".to_string()],
        );
        catalog.insert_category("Empty", vec![]);
        App::new(catalog, SpinTiming::from_millis(300, 100), "Hello !".to_string())
    }

    /// Drive the app until the active spin settles.
    async fn run_to_settled(app: &mut App, rx: &mut mpsc::Receiver<SpinEvent>) {
        while app.spin.is_spinning() {
            let event = rx.recv().await.expect("spin task died");
            app.handle_spin_event(event);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_spin_settles_on_member_of_list() {
        let mut app = app();
        app.open_category("Color");
        let (tx, mut rx) = mpsc::channel(32);

        app.begin_spin(&tx);
        assert!(app.spin.is_spinning());

        run_to_settled(&mut app, &mut rx).await;

        assert!(app.spin.is_settled());
        assert!(["Red", "Blue", "Green"].contains(&app.current_display.as_str()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_begin_spin_is_guarded_while_spinning() {
        let mut app = app();
        app.open_category("Color");
        let (tx, mut rx) = mpsc::channel(64);

        app.begin_spin(&tx);
        let first_id = match &app.spin {
            SpinPhase::Spinning(handle) => handle.id,
            _ => panic!("expected a running spin"),
        };

        // Re-entrant start while spinning is a no-op
        app.begin_spin(&tx);
        match &app.spin {
            SpinPhase::Spinning(handle) => assert_eq!(handle.id, first_id),
            _ => panic!("guard replaced the running spin"),
        }

        run_to_settled(&mut app, &mut rx).await;

        // Settled is terminal until reset
        app.begin_spin(&tx);
        assert!(app.spin.is_settled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_category_cannot_spin() {
        let mut app = app();
        app.open_category("Empty");
        let (tx, _rx) = mpsc::channel(8);

        assert!(!app.can_spin());
        app.begin_spin(&tx);
        assert!(matches!(app.spin, SpinPhase::Idle));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_returns_to_prompt_and_accepts_new_spin() {
        let mut app = app();
        app.open_category("Color");
        let (tx, mut rx) = mpsc::channel(64);

        app.begin_spin(&tx);
        run_to_settled(&mut app, &mut rx).await;

        app.reset_to_prompt();
        assert!(matches!(app.spin, SpinPhase::Idle));
        assert_eq!(app.current_display, PROMPT_LABEL);

        app.begin_spin(&tx);
        assert!(app.spin.is_spinning());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_events_are_discarded() {
        let mut app = app();
        app.open_category("Color");
        let (tx, _rx) = mpsc::channel(8);

        app.begin_spin(&tx);
        app.current_display = "mid-spin".to_string();

        // An event from a previous, cancelled session must not touch state
        app.handle_spin_event(SpinEvent::Settled {
            id: 0,
            word: "stale".to_string(),
        });
        assert_eq!(app.current_display, "mid-spin");
        assert!(app.spin.is_spinning());
    }

    #[tokio::test(start_paused = true)]
    async fn test_leaving_category_cancels_spin() {
        let mut app = app();
        app.open_category("Color");
        let (tx, mut rx) = mpsc::channel(64);

        app.begin_spin(&tx);
        app.close_category();
        assert!(matches!(app.spin, SpinPhase::Idle));
        assert_eq!(app.input_mode, InputMode::Home);

        // Whatever the old task already emitted is dropped by the id guard
        drop(tx);
        while let Some(event) = rx.recv().await {
            app.handle_spin_event(event);
        }
        assert_eq!(app.current_display, PROMPT_LABEL);
    }

    #[test]
    fn test_add_choice_flow() {
        let mut app = app();
        app.open_category("Color");
        app.open_add_choice();
        for c in "Teal".chars() {
            app.input_char(c);
        }
        app.commit_add_choice();

        assert_eq!(app.input_mode, InputMode::Category);
        assert_eq!(app.active_choices().last().unwrap(), "Teal");
    }

    #[test]
    fn test_add_empty_choice_is_ignored() {
        let mut app = app();
        app.open_category("Color");
        let before = app.active_choices().len();
        app.open_add_choice();
        app.commit_add_choice();
        assert_eq!(app.active_choices().len(), before);
    }

    #[test]
    fn test_delete_selected_removes_all_matches() {
        let mut app = app();
        app.catalog.insert_category(
            "Dup",
            vec!["X".to_string(), "Y".to_string(), "X".to_string()],
        );
        app.open_category("Dup");
        app.delete_selected_choice();
        assert_eq!(app.active_choices(), ["Y"]);
        assert_eq!(app.category.as_ref().unwrap().selected, 0);
    }

    #[test]
    fn test_delete_last_choice_clamps_selection() {
        let mut app = app();
        app.open_category("Color");
        app.choice_bottom();
        app.delete_selected_choice();
        assert_eq!(app.category.as_ref().unwrap().selected, 1);
        assert_eq!(app.active_choices(), ["Red", "Blue"]);
    }

    #[test]
    fn test_input_editing() {
        let mut app = app();
        app.open_category("Color");
        app.open_add_choice();

        for c in "abc".chars() {
            app.input_char(c);
        }
        app.input_left();
        app.input_backspace();
        assert_eq!(app.input_buffer, "ac");
        app.input_char('x');
        assert_eq!(app.input_buffer, "axc");
        app.input_home();
        app.input_delete();
        assert_eq!(app.input_buffer, "xc");
        app.input_end();
        assert_eq!(app.cursor_position, 2);
    }

    #[test]
    fn test_help_returns_to_previous_screen() {
        let mut app = app();
        app.open_help();
        app.close_help();
        assert_eq!(app.input_mode, InputMode::Home);

        app.open_category("Color");
        app.open_help();
        app.close_help();
        assert_eq!(app.input_mode, InputMode::Category);
    }
}
