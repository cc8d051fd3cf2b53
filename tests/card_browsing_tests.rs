//! End-to-end browsing: rendering, searching, navigating and copying.

use std::time::{Duration, Instant};

use ascendant_cards::tui::filter::NO_RESULTS_MESSAGE;
use ascendant_cards::tui::handlers::{handle_key_event, handle_mouse_event};
use ascendant_cards::tui::{Focus, MainLayout, Step};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

mod fixtures;
use fixtures::*;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_render_builds_one_card_per_record_in_order() {
    let (mut state, _) = app_state(SAMPLE_DATASET, None);
    assert_eq!(visible_houses(&state), vec![1, 2, 3]);

    show(&mut state, "Taurus");
    assert_eq!(state.grid.title(), "♉ Taurus Ascendant");
    assert_eq!(visible_houses(&state), vec![1, 2]);
}

#[test]
fn test_empty_category_renders_empty_grid() {
    let (mut state, _) = app_state(SAMPLE_DATASET, None);
    show(&mut state, "Pisces");

    assert!(state.grid.cards().is_empty());
    assert_eq!(state.grid.placeholder(), None);
    assert_eq!(state.grid.title(), "♓ Pisces Ascendant");
}

#[test]
fn test_badges_omit_absent_values() {
    let (state, _) = app_state(SAMPLE_DATASET, None);
    let cards = state.grid.cards();

    let first = cards[0].badges();
    assert!(first.iter().all(|b| !b.starts_with("MKS")));
    assert!(first.contains(&"Digbala: Jupiter, Mercury".to_string()));

    let second = cards[1].badges();
    assert!(second.contains(&"MKS: Jupiter".to_string()));
    assert!(second.iter().all(|b| !b.starts_with("Digbala")));
    assert!(second.contains(&"Āditya: Aryamā".to_string()));

    assert_eq!(cards[2].badges().len(), 3);
    assert_eq!(cards[1].bullets(), vec!["Wealth", "Speech", "Family"]);
}

#[test]
fn test_search_is_case_insensitive_and_idempotent() {
    let (mut state, _) = app_state(SAMPLE_DATASET, None);

    assert_eq!(state.grid.apply_filter("  SPEECH "), 1);
    assert_eq!(visible_houses(&state), vec![2]);
    assert_eq!(state.grid.apply_filter("  SPEECH "), 1);
    assert_eq!(visible_houses(&state), vec![2]);
    assert_eq!(state.grid.cards().len(), 3);

    // Karakas and Āditya are searchable too
    assert_eq!(state.grid.apply_filter("mitra"), 1);
    assert_eq!(state.grid.apply_filter("jupiter"), 1);

    assert_eq!(state.grid.apply_filter(""), 3);
}

#[test]
fn test_no_results_placeholder_is_single() {
    let (mut state, _) = app_state(SAMPLE_DATASET, None);

    state.grid.apply_filter("xyz");
    state.grid.apply_filter("xyzw");
    assert_eq!(state.grid.visible_count(), 0);
    assert_eq!(state.grid.placeholder(), Some(NO_RESULTS_MESSAGE));

    state.grid.apply_filter("self");
    assert_eq!(state.grid.placeholder(), None);
}

#[test]
fn test_search_survives_category_change() {
    let (mut state, _) = app_state(SAMPLE_DATASET, None);
    let now = Instant::now();

    handle_key_event(&mut state, key(KeyCode::Char('/')), now).unwrap();
    for c in "wealth".chars() {
        handle_key_event(&mut state, key(KeyCode::Char(c)), now).unwrap();
    }
    handle_key_event(&mut state, key(KeyCode::Esc), now).unwrap();
    assert_eq!(state.focus, Focus::Grid);
    assert_eq!(visible_houses(&state), vec![2]);

    handle_key_event(&mut state, key(KeyCode::Right), now).unwrap();
    // Cards mount on the next frame, then the query is reapplied
    assert!(state.grid.is_loading());
    assert_eq!(state.grid.apply_filter(&state.search.clone()), 0);
    state.flush_pending_render();
    assert_eq!(state.current_category(), Some("Taurus"));
    assert_eq!(visible_houses(&state), vec![2]);
}

#[test]
fn test_debounced_search_fires_once_typing_stops() {
    let (mut state, _) = app_state(SAMPLE_DATASET, None);
    let start = Instant::now();

    state.focus = Focus::Search;
    for (i, c) in "courage".chars().enumerate() {
        let at = start + Duration::from_millis(100 * i as u64);
        handle_key_event(&mut state, key(KeyCode::Char(c)), at).unwrap();
        state.tick(at);
        assert_eq!(state.grid.visible_count(), 3);
    }

    state.tick(start + Duration::from_millis(600 + 300));
    assert_eq!(visible_houses(&state), vec![3]);
}

#[test]
fn test_navigation_wraps_both_ways() {
    let (mut state, _) = app_state(SAMPLE_DATASET, None);
    let now = Instant::now();

    state.step_category(Step::Previous, false, now);
    assert_eq!(state.current_category(), Some("Pisces"));
    state.step_category(Step::Next, false, now);
    assert_eq!(state.current_category(), Some("Aries"));

    for _ in 0..4 {
        state.step_category(Step::Next, false, now);
    }
    assert_eq!(state.current_category(), Some("Aries"));
}

#[test]
fn test_arrow_keys_ignored_while_searching() {
    let (mut state, _) = app_state(SAMPLE_DATASET, None);
    let now = Instant::now();

    handle_key_event(&mut state, key(KeyCode::Char('/')), now).unwrap();
    handle_key_event(&mut state, key(KeyCode::Right), now).unwrap();
    assert_eq!(state.current_category(), Some("Aries"));

    handle_key_event(&mut state, key(KeyCode::Enter), now).unwrap();
    handle_key_event(&mut state, key(KeyCode::Right), now).unwrap();
    assert_eq!(state.current_category(), Some("Taurus"));
}

#[test]
fn test_swipe_announces_new_category() {
    let (mut state, _) = app_state(SAMPLE_DATASET, None);
    state.grid_area = MainLayout::new(Rect::new(0, 0, 100, 40)).grid;
    let now = Instant::now();

    let at = |kind, column| MouseEvent {
        kind,
        column,
        row: 20,
        modifiers: KeyModifiers::NONE,
    };
    handle_mouse_event(&mut state, at(MouseEventKind::Down(MouseButton::Left), 60), now).unwrap();
    handle_mouse_event(&mut state, at(MouseEventKind::Up(MouseButton::Left), 30), now).unwrap();

    assert_eq!(state.current_category(), Some("Taurus"));
    assert_eq!(state.toast.message(now), Some("→ Taurus"));
    assert!(!state.toast.is_visible(now + Duration::from_millis(2000)));
}

#[test]
fn test_copy_round_trip() {
    let (mut state, clipboard) = app_state(SAMPLE_DATASET, None);
    let now = Instant::now();

    handle_key_event(&mut state, key(KeyCode::Down), now).unwrap();
    handle_key_event(&mut state, key(KeyCode::Enter), now).unwrap();

    let copied = clipboard.history();
    assert_eq!(
        copied,
        vec![
            "2. Taurus – Vṛṣabha\n\
             Ruler: Venus\n\
             Karakas: Jupiter\n\
             MKS: Jupiter\n\
             Digbala: —\n\
             Aditya: Aryamā\n\
             \n\
             • Wealth\n\
             • Speech\n\
             • Family"
                .to_string()
        ]
    );
    assert_eq!(state.toast.message(now), Some("✓ Copied to clipboard!"));
    assert!(state.grid.cards()[1].is_copied(now));
    assert!(!state.grid.cards()[1].is_copied(now + Duration::from_millis(500)));
}
