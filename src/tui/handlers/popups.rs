//! Popup input handlers.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::tui::{ActiveComponent, AppState, CategoryPickerEvent, Component, ManualCopyEvent};

/// Routes a key to the open popup and applies the event it emits.
pub fn handle_popup_input(state: &mut AppState, key: KeyEvent, _now: Instant) -> Result<bool> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.should_quit = true;
        return Ok(true);
    }

    match state.active_component.as_mut() {
        Some(ActiveComponent::CategoryPicker(picker)) => {
            if let Some(event) = picker.handle_input(key) {
                handle_category_picker_event(state, event);
            }
        }
        Some(ActiveComponent::ManualCopy(dialog)) => {
            if let Some(ManualCopyEvent::Closed) = dialog.handle_input(key) {
                state.close_component();
            }
        }
        None => {}
    }

    Ok(false)
}

fn handle_category_picker_event(state: &mut AppState, event: CategoryPickerEvent) {
    state.close_component();
    match event {
        CategoryPickerEvent::Selected(name) => {
            debug!("Picked category {name}");
            state.render_category(&name);
        }
        CategoryPickerEvent::Cancelled => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::data::DataStore;
    use crate::preferences::MemoryPreferenceStore;
    use crate::tui::clipboard::MemoryClipboard;
    use crate::tui::ClipboardExporter;

    const DATA: &str = r#"{
        "Aries": { "houses": [] },
        "Taurus": { "houses": [] },
        "Gemini": { "houses": [] }
    }"#;

    fn setup() -> AppState {
        let exporter = ClipboardExporter::new(
            Box::new(MemoryClipboard::new()),
            Box::new(MemoryClipboard::new()),
        );
        let mut state = AppState::new(
            DataStore::from_json_str(DATA).unwrap(),
            Box::new(MemoryPreferenceStore::new()),
            exporter,
            Config::default(),
        );
        state.bootstrap();
        state.flush_pending_render();
        state
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_picker_selection_renders_category() {
        let mut state = setup();
        let now = Instant::now();
        state.open_category_picker();

        handle_popup_input(&mut state, key(KeyCode::Down), now).unwrap();
        handle_popup_input(&mut state, key(KeyCode::Down), now).unwrap();
        handle_popup_input(&mut state, key(KeyCode::Enter), now).unwrap();

        assert!(state.active_component.is_none());
        assert_eq!(state.current_category(), Some("Gemini"));
        assert_eq!(state.saved_preference().as_deref(), Some("Gemini"));
    }

    #[test]
    fn test_picker_cancel_keeps_category() {
        let mut state = setup();
        let now = Instant::now();
        state.open_category_picker();

        handle_popup_input(&mut state, key(KeyCode::Down), now).unwrap();
        handle_popup_input(&mut state, key(KeyCode::Esc), now).unwrap();

        assert!(state.active_component.is_none());
        assert_eq!(state.current_category(), Some("Aries"));
    }

    #[test]
    fn test_popup_swallows_navigation_keys() {
        let mut state = setup();
        let now = Instant::now();
        state.open_category_picker();

        handle_popup_input(&mut state, key(KeyCode::Right), now).unwrap();
        assert_eq!(state.current_category(), Some("Aries"));
        assert!(state.active_component.is_some());
    }
}
