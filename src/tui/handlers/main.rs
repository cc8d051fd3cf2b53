//! Main UI input handler.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::KeyEvent;

use crate::shortcuts::{ShortcutRegistry, MAIN_CONTEXT};
use crate::tui::AppState;

/// Handle input for the card grid
pub fn handle_main_input(state: &mut AppState, key: KeyEvent, now: Instant) -> Result<bool> {
    let registry = ShortcutRegistry::new();

    if let Some(action) = registry.lookup(MAIN_CONTEXT, key) {
        super::dispatch_action(state, action, now)
    } else {
        // No action mapped - ignore key
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::data::DataStore;
    use crate::preferences::MemoryPreferenceStore;
    use crate::tui::clipboard::MemoryClipboard;
    use crate::tui::{ClipboardExporter, Focus};
    use crossterm::event::{KeyCode, KeyModifiers};

    const DATA: &str = r#"{
        "Aries": { "houses": [
            { "house": 1, "sign_en": "Aries", "sign_sa": "Meṣa", "ruler": "Mars",
              "karakas": "Sun", "mks": "—", "digbala": "Sun",
              "aditya": "Dhātā", "meanings": "Self" },
            { "house": 2, "sign_en": "Taurus", "sign_sa": "Vṛṣabha", "ruler": "Venus",
              "karakas": "Jupiter", "mks": "—", "digbala": "—",
              "aditya": "Aryamā", "meanings": "Wealth" }
        ] },
        "Taurus": { "houses": [] }
    }"#;

    fn setup() -> (AppState, MemoryClipboard) {
        let clip = MemoryClipboard::new();
        let exporter =
            ClipboardExporter::new(Box::new(clip.clone()), Box::new(MemoryClipboard::new()));
        let mut state = AppState::new(
            DataStore::from_json_str(DATA).unwrap(),
            Box::new(MemoryPreferenceStore::new()),
            exporter,
            Config::default(),
        );
        state.bootstrap();
        state.flush_pending_render();
        (state, clip)
    }

    fn press(state: &mut AppState, code: KeyCode, now: Instant) -> bool {
        handle_main_input(state, KeyEvent::new(code, KeyModifiers::NONE), now).unwrap()
    }

    #[test]
    fn test_right_arrow_steps_without_toast() {
        let (mut state, _) = setup();
        let now = Instant::now();

        press(&mut state, KeyCode::Right, now);
        assert_eq!(state.current_category(), Some("Taurus"));
        assert!(!state.toast.is_visible(now));

        press(&mut state, KeyCode::Right, now);
        assert_eq!(state.current_category(), Some("Aries"));
    }

    #[test]
    fn test_copy_selected_card() {
        let (mut state, clip) = setup();
        let now = Instant::now();

        press(&mut state, KeyCode::Down, now);
        press(&mut state, KeyCode::Char('y'), now);

        let history = clip.history();
        assert_eq!(history.len(), 1);
        assert!(history[0].starts_with("2. Taurus – Vṛṣabha"));
        assert!(state.grid.cards()[1].is_copied(now));
        assert_eq!(state.toast.message(now), Some("✓ Copied to clipboard!"));
    }

    #[test]
    fn test_slash_focuses_search() {
        let (mut state, _) = setup();
        press(&mut state, KeyCode::Char('/'), Instant::now());
        assert_eq!(state.focus, Focus::Search);
    }

    #[test]
    fn test_quit() {
        let (mut state, _) = setup();
        assert!(press(&mut state, KeyCode::Char('q'), Instant::now()));
        assert!(state.should_quit);
    }

    #[test]
    fn test_tab_opens_picker() {
        let (mut state, _) = setup();
        press(&mut state, KeyCode::Tab, Instant::now());
        assert!(state.active_component.is_some());
    }
}
