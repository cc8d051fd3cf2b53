//! Action dispatch shared by the grid and search contexts.

use std::time::Instant;

use anyhow::Result;
use tracing::debug;

use crate::shortcuts::Action;
use crate::tui::{AppState, Focus, Step};

/// Execute an action.
///
/// Returns true when the application should quit.
pub fn dispatch_action(state: &mut AppState, action: Action, now: Instant) -> Result<bool> {
    debug!("Dispatching {}", action.id());

    match action {
        Action::PreviousCategory => {
            state.step_category(Step::Previous, false, now);
        }
        Action::NextCategory => {
            state.step_category(Step::Next, false, now);
        }
        Action::OpenCategoryPicker => state.open_category_picker(),
        Action::SelectPreviousCard => state.grid.move_selection(-1),
        Action::SelectNextCard => state.grid.move_selection(1),
        Action::JumpToFirstCard => state.grid.move_selection(isize::MIN),
        Action::JumpToLastCard => state.grid.move_selection(isize::MAX),
        Action::CopyCard => {
            state.copy_selected(now);
        }
        Action::FocusSearch => state.focus = Focus::Search,
        Action::LeaveSearch => {
            state.focus = Focus::Grid;
            // Leaving the box commits the query without waiting
            if state.debouncer.is_pending() {
                state.apply_search();
            }
        }
        Action::ClearSearch => {
            if !state.search.is_empty() {
                state.search.clear();
                state.apply_search();
            }
        }
        Action::Quit => {
            state.should_quit = true;
            return Ok(true);
        }
    }

    Ok(false)
}
