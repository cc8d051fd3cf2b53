//! Mouse input: swipes change category, clicks copy a card.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tracing::debug;

use crate::tui::cards::card_at;
use crate::tui::{AppState, Focus, Gesture};

/// Handle a mouse event on the main view.
///
/// Popups take no mouse input; the manual copy dialog releases capture
/// entirely so the terminal can select its text.
pub fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent, now: Instant) -> Result<bool> {
    if state.active_component.is_some() {
        return Ok(false);
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            state.swipe.press(mouse.column, mouse.row);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            match state.swipe.release(mouse.column, mouse.row) {
                Some(Gesture::Swipe(step)) => {
                    debug!("Swipe {step:?}");
                    state.step_category(step, true, now);
                }
                Some(Gesture::Tap { column, row }) => handle_tap(state, column, row, now),
                None => {}
            }
        }
        MouseEventKind::ScrollDown => state.grid.move_selection(1),
        MouseEventKind::ScrollUp => state.grid.move_selection(-1),
        _ => {}
    }

    Ok(false)
}

fn handle_tap(state: &mut AppState, column: u16, row: u16, now: Instant) {
    let Some(index) = card_at(&state.grid, state.grid_area, column, row) else {
        return;
    };
    state.focus = Focus::Grid;
    if state.grid.select(index) {
        state.copy_card(index, now);
    }
}
