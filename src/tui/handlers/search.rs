//! Search box input handler.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::shortcuts::{ShortcutRegistry, SEARCH_CONTEXT};
use crate::tui::AppState;

/// Handle input while the search box has focus.
///
/// Text edits restart the debounce timer; the filter runs once typing
/// pauses. Keys with no meaning in a text field (arrows included) are
/// swallowed so they never change the category.
pub fn handle_search_input(state: &mut AppState, key: KeyEvent, now: Instant) -> Result<bool> {
    let registry = ShortcutRegistry::new();
    if let Some(action) = registry.lookup(SEARCH_CONTEXT, key) {
        return super::dispatch_action(state, action, now);
    }

    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            state.search.push(c);
            state.debouncer.schedule(now);
        }
        KeyCode::Backspace => {
            if state.search.pop().is_some() {
                state.debouncer.schedule(now);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if !state.search.is_empty() {
                state.search.clear();
                state.debouncer.schedule(now);
            }
        }
        _ => {}
    }

    Ok(false)
}
