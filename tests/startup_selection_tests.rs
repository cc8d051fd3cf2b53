//! Which ascendant is shown first, and how the choice survives restarts.

use ascendant_cards::preferences::{FilePreferenceStore, PreferenceStore};

mod fixtures;
use fixtures::*;

#[test]
fn test_aries_wins_over_saved_preference() {
    let (state, _) = app_state(SAMPLE_DATASET, Some("Leo"));

    assert_eq!(state.current_category(), Some("Aries"));
    assert_eq!(state.grid.title(), "♈ Aries Ascendant");
    // Rendering Aries overwrote the stale preference
    assert_eq!(state.saved_preference().as_deref(), Some("Aries"));
}

#[test]
fn test_saved_preference_used_without_aries() {
    let (state, _) = app_state(DATASET_WITHOUT_ARIES, Some("Leo"));
    assert_eq!(state.current_category(), Some("Leo"));
    assert_eq!(state.grid.title(), "♌ Leo Ascendant");
}

#[test]
fn test_stale_preference_falls_back_to_first() {
    let (state, _) = app_state(DATASET_WITHOUT_ARIES, Some("Capricorn"));
    assert_eq!(state.current_category(), Some("Taurus"));
}

#[test]
fn test_empty_dataset_renders_nothing() {
    let (state, _) = app_state("{}", Some("Leo"));

    assert_eq!(state.current_category(), None);
    assert!(state.grid.cards().is_empty());
    assert_eq!(state.grid.title(), "");
}

#[test]
fn test_file_preference_survives_restart() {
    let (_, dir) = write_dataset(DATASET_WITHOUT_ARIES);
    let prefs_path = dir.path().join("prefs").join("preferences.toml");

    {
        let (mut state, _) =
            app_state_with_prefs(DATASET_WITHOUT_ARIES, Box::new(FilePreferenceStore::new(&prefs_path)));
        assert_eq!(state.current_category(), Some("Taurus"));
        show(&mut state, "Leo");
    }

    let reopened = FilePreferenceStore::new(&prefs_path);
    assert_eq!(reopened.get().as_deref(), Some("Leo"));

    let (state, _) = app_state_with_prefs(DATASET_WITHOUT_ARIES, Box::new(reopened));
    assert_eq!(state.current_category(), Some("Leo"));
}

#[test]
fn test_unknown_render_does_not_touch_preference() {
    let (mut state, _) = app_state(SAMPLE_DATASET, None);
    assert!(!state.render_category("Ophiuchus"));
    assert_eq!(state.saved_preference().as_deref(), Some("Aries"));
}
