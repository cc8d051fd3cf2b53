//! Search filtering over mounted cards.

use super::cards::CardGrid;

/// Message shown when a non-empty search hides every card.
pub const NO_RESULTS_MESSAGE: &str = "No matching cards found. Try different keywords.";

/// Normalizes raw search input: trimmed and lowercased.
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

impl CardGrid {
    /// Shows cards whose search text contains `query`, hides the rest.
    ///
    /// Matching is a case-insensitive substring test on the trimmed query;
    /// an empty query shows everything. Cards are never removed, so running
    /// the same query again changes nothing. When a non-empty query matches
    /// nothing the grid carries the single "no results" placeholder.
    ///
    /// A grid that is still loading is left untouched. Returns the number of
    /// visible cards.
    pub fn apply_filter(&mut self, query: &str) -> usize {
        if self.is_loading() {
            return 0;
        }

        let query = normalize_query(query);
        let mut visible = 0;
        for card in self.cards_mut() {
            let show = query.is_empty() || card.search_text().contains(&query);
            card.set_hidden(!show);
            if show {
                visible += 1;
            }
        }

        if !query.is_empty() && visible == 0 {
            self.set_placeholder(Some(NO_RESULTS_MESSAGE));
        } else {
            self.set_placeholder(None);
        }
        self.clamp_selection();
        visible
    }
}
