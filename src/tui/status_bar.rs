//! Status bar widget for contextual key hints

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{ActiveComponent, AppState, Focus, Theme};

type Hints = &'static [(&'static str, &'static str)];

const PICKER_HINTS: Hints = &[("↑↓", "Move"), ("Enter", "Select"), ("Esc", "Cancel")];
const MANUAL_COPY_HINTS: Hints = &[("Mouse", "Select text"), ("Esc", "Close")];
const SEARCH_HINTS: Hints = &[
    ("Type", "Filter"),
    ("Enter", "Apply"),
    ("Esc", "Done"),
    ("Ctrl+U", "Clear"),
];
const GRID_HINTS: Hints = &[
    ("←→", "Ascendant"),
    ("↑↓", "Card"),
    ("Enter", "Copy"),
    ("Tab", "Pick"),
    ("/", "Search"),
    ("q", "Quit"),
];

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with hints for the current context
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut spans = Self::hint_spans(Self::hints(state), theme);

        // Match counter while a search is active
        if !state.search.trim().is_empty() && !state.grid.is_loading() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!(
                    "{}/{} shown",
                    state.grid.visible_count(),
                    state.grid.cards().len()
                ),
                Style::default().fg(theme.accent),
            ));
        }

        let status = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Key/description pairs for the active context.
    #[must_use]
    pub fn hints(state: &AppState) -> Hints {
        match (&state.active_component, state.focus) {
            (Some(ActiveComponent::CategoryPicker(_)), _) => PICKER_HINTS,
            (Some(ActiveComponent::ManualCopy(_)), _) => MANUAL_COPY_HINTS,
            (None, Focus::Search) => SEARCH_HINTS,
            (None, Focus::Grid) => GRID_HINTS,
        }
    }

    fn hint_spans(hints: Hints, theme: &Theme) -> Vec<Span<'static>> {
        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                *key,
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*action, Style::default().fg(theme.text_muted)));
        }
        spans
    }
}
