//! Input handler modules for different TUI contexts.
//!
//! Every handler takes the current time so timers (debounce, toast, copied
//! highlight) can be driven deterministically from tests.

pub mod actions;
pub mod main;
pub mod mouse;
pub mod popups;
pub mod search;

use std::time::Instant;

use anyhow::Result;
use crossterm::event::KeyEvent;

use crate::tui::{AppState, Focus};

// Re-export handler functions
pub use actions::dispatch_action;
pub use main::handle_main_input;
pub use mouse::handle_mouse_event;
pub use popups::handle_popup_input;
pub use search::handle_search_input;

/// Routes a key press to the popup, the search box or the grid.
///
/// Returns true when the application should quit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent, now: Instant) -> Result<bool> {
    if state.active_component.is_some() {
        return handle_popup_input(state, key, now);
    }

    match state.focus {
        Focus::Search => handle_search_input(state, key, now),
        Focus::Grid => handle_main_input(state, key, now),
    }
}
