//! Shared test fixtures for integration and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use ascendant_cards::config::Config;
use ascendant_cards::data::DataStore;
use ascendant_cards::preferences::{MemoryPreferenceStore, PreferenceStore};
use ascendant_cards::tui::clipboard::MemoryClipboard;
use ascendant_cards::tui::{AppState, ClipboardExporter};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Small dataset in document order Aries, Taurus, Leo, Pisces.
///
/// Aries house 2 has an MKS value, house 3 has neither MKS nor Digbala.
/// Pisces has no records.
pub const SAMPLE_DATASET: &str = r#"{
  "Aries": {
    "houses": [
      { "house": 1, "sign_en": "Aries", "sign_sa": "Meṣa", "ruler": "Mars",
        "karakas": "Sun", "mks": "—", "digbala": "Jupiter, Mercury",
        "aditya": "Dhātā", "meanings": "Self / Body / Vitality" },
      { "house": 2, "sign_en": "Taurus", "sign_sa": "Vṛṣabha", "ruler": "Venus",
        "karakas": "Jupiter", "mks": "Jupiter", "digbala": "—",
        "aditya": "Aryamā", "meanings": "Wealth / Speech / Family" },
      { "house": 3, "sign_en": "Gemini", "sign_sa": "Mithuna", "ruler": "Mercury",
        "karakas": "Mars", "mks": "—", "digbala": "—",
        "aditya": "Mitra", "meanings": "Courage / Siblings" }
    ]
  },
  "Taurus": {
    "houses": [
      { "house": 1, "sign_en": "Taurus", "sign_sa": "Vṛṣabha", "ruler": "Venus",
        "karakas": "Sun", "mks": "—", "digbala": "—",
        "aditya": "Aryamā", "meanings": "Stability" },
      { "house": 2, "sign_en": "Gemini", "sign_sa": "Mithuna", "ruler": "Mercury",
        "karakas": "Jupiter", "mks": "—", "digbala": "—",
        "aditya": "Mitra", "meanings": "Wealth" }
    ]
  },
  "Leo": {
    "houses": [
      { "house": 1, "sign_en": "Leo", "sign_sa": "Siṃha", "ruler": "Sun",
        "karakas": "Sun", "mks": "—", "digbala": "—",
        "aditya": "Bhaga", "meanings": "Authority" }
    ]
  },
  "Pisces": { "houses": [] }
}"#;

/// Dataset with no "Aries" entry, in order Taurus, Leo.
pub const DATASET_WITHOUT_ARIES: &str = r#"{
  "Taurus": {
    "houses": [
      { "house": 1, "sign_en": "Taurus", "sign_sa": "Vṛṣabha", "ruler": "Venus",
        "karakas": "Sun", "mks": "—", "digbala": "—",
        "aditya": "Aryamā", "meanings": "Stability" }
    ]
  },
  "Leo": {
    "houses": [
      { "house": 1, "sign_en": "Leo", "sign_sa": "Siṃha", "ruler": "Sun",
        "karakas": "Sun", "mks": "—", "digbala": "—",
        "aditya": "Bhaga", "meanings": "Authority" }
    ]
  }
}"#;

/// Writes `content` to `ascendants.json` in a fresh temp directory.
///
/// The TempDir must be kept alive for the file to exist.
pub fn write_dataset(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("ascendants.json");
    fs::write(&path, content).expect("Failed to write dataset");
    (path, temp_dir)
}

/// Parses a dataset from a string.
pub fn store(content: &str) -> DataStore {
    DataStore::from_json_str(content).expect("Fixture dataset should parse")
}

/// Exporter whose primary backend records every copy in the returned handle.
pub fn recording_exporter() -> (ClipboardExporter, MemoryClipboard) {
    let clipboard = MemoryClipboard::new();
    let exporter = ClipboardExporter::new(
        Box::new(clipboard.clone()),
        Box::new(MemoryClipboard::new()),
    );
    (exporter, clipboard)
}

/// Bootstrapped state over `content` with an in-memory preference store.
///
/// Cards are already mounted.
pub fn app_state(content: &str, saved: Option<&str>) -> (AppState, MemoryClipboard) {
    let prefs = saved.map_or_else(MemoryPreferenceStore::new, MemoryPreferenceStore::with_value);
    app_state_with_prefs(content, Box::new(prefs))
}

/// Bootstrapped state over `content` with the given preference store.
pub fn app_state_with_prefs(
    content: &str,
    prefs: Box<dyn PreferenceStore>,
) -> (AppState, MemoryClipboard) {
    let (exporter, clipboard) = recording_exporter();
    let mut state = AppState::new(store(content), prefs, exporter, Config::default());
    state.bootstrap();
    state.flush_pending_render();
    (state, clipboard)
}

/// Renders `name` and builds its cards in one go.
pub fn show(state: &mut AppState, name: &str) {
    state.render_category(name);
    state.flush_pending_render();
}

/// House numbers of the visible cards, in grid order.
pub fn visible_houses(state: &AppState) -> Vec<i64> {
    state
        .grid
        .visible_indices()
        .map(|i| state.grid.cards()[i].record().house)
        .collect()
}
