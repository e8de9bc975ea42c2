//! UI components for the TUI.
//!
//! This module organizes UI rendering into logical components.
//!
//! # Component Organization
//!
//! - `category_grid` - Home screen grid of category cards
//! - `choice_list` - Scrollable choice list for the open category
//! - `spin_box` - The spin display box showing the current draw
//! - `result_panel` - Settled result view with the committed choice
//! - `add_choice_popup` - Text input overlay for adding a choice
//! - `help_popup` - Help overlay with keybindings

mod add_choice_popup;
mod category_grid;
mod choice_list;
mod help_popup;
mod result_panel;
mod spin_box;

// Re-export all render functions for use in ui.rs
pub use add_choice_popup::render_add_choice_popup;
pub use category_grid::render_category_grid;
pub use choice_list::render_choice_list;
pub use help_popup::render_help_popup;
pub use result_panel::render_result_panel;
pub use spin_box::render_spin_box;
