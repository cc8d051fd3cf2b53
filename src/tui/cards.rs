//! Card grid: one card per house record of the selected category.
//!
//! Cards are built once per category change. Searching only toggles their
//! `hidden` flag (see the filter module), so card identity and the
//! precomputed search text survive any number of filter passes.

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::Theme;
use crate::models::{category_label, glyph_for, Record};

/// Narrowest column a card is laid out in.
pub const CARD_MIN_WIDTH: u16 = 38;

/// A rendered record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    record: Record,
    search_text: String,
    hidden: bool,
    copied_until: Option<Instant>,
}

impl Card {
    /// Builds a card, computing its search text once.
    #[must_use]
    pub fn new(record: Record) -> Self {
        let search_text = record.searchable_text();
        Self {
            record,
            search_text,
            hidden: false,
            copied_until: None,
        }
    }

    /// The record this card displays.
    #[must_use]
    pub const fn record(&self) -> &Record {
        &self.record
    }

    /// Lowercased text the filter matches against.
    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Whether the current filter hides this card.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub(crate) fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Highlights the card as copied until `until`.
    pub fn mark_copied(&mut self, until: Instant) {
        self.copied_until = Some(until);
    }

    /// Whether the copied highlight is active at `now`.
    #[must_use]
    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied_until.is_some_and(|t| now < t)
    }

    /// Header text: ordinal with English and localized names.
    #[must_use]
    pub fn heading(&self) -> String {
        format!(
            "{}. {} – {}",
            self.record.house, self.record.sign_en, self.record.sign_sa
        )
    }

    /// Glyph shown before the heading.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        glyph_for(&self.record.sign_en)
    }

    /// Labeled badges in display order; MKS and Digbala are omitted when absent.
    #[must_use]
    pub fn badges(&self) -> Vec<String> {
        let rec = &self.record;
        let mut badges = vec![
            format!("Ruler: {}", rec.ruler),
            format!("Karakas: {}", rec.karakas),
        ];
        if let Some(mks) = rec.mks_value() {
            badges.push(format!("MKS: {mks}"));
        }
        if let Some(digbala) = rec.digbala_value() {
            badges.push(format!("Digbala: {digbala}"));
        }
        badges.push(format!("Āditya: {}", rec.aditya));
        badges
    }

    /// One bullet per meaning segment.
    #[must_use]
    pub fn bullets(&self) -> Vec<&str> {
        self.record.meaning_segments().collect()
    }

    fn lines(&self, theme: &Theme) -> Vec<Line<'_>> {
        let mut lines = vec![Line::from(vec![
            Span::styled(self.glyph(), Style::default().fg(theme.accent)),
            Span::raw(" "),
            Span::styled(
                self.heading(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
        ])];

        let mut badge_spans = Vec::new();
        for (i, badge) in self.badges().into_iter().enumerate() {
            if i > 0 {
                badge_spans.push(Span::raw(" "));
            }
            badge_spans.push(Span::styled(
                format!("[{badge}]"),
                Style::default().fg(theme.text_secondary),
            ));
        }
        lines.push(Line::from(badge_spans));

        for bullet in self.bullets() {
            lines.push(Line::from(vec![
                Span::styled("• ", Style::default().fg(theme.primary)),
                Span::styled(bullet, Style::default().fg(theme.text)),
            ]));
        }
        lines
    }

    /// Word-wrapped body without the border block.
    fn paragraph(&self, theme: &Theme) -> Paragraph<'_> {
        Paragraph::new(self.lines(theme)).wrap(Wrap { trim: true })
    }

    /// Height in rows when drawn `inner_width` columns wide (borders included).
    ///
    /// Counted by the same word wrapper that draws the card, so no bullet is
    /// cut off.
    #[must_use]
    pub fn height(&self, inner_width: u16) -> u16 {
        let rows = self
            .paragraph(&Theme::default())
            .line_count(inner_width.max(1));
        u16::try_from(rows.saturating_add(2)).unwrap_or(u16::MAX)
    }
}

/// The mounted cards of one category plus grid-level display state.
#[derive(Debug, Clone, Default)]
pub struct CardGrid {
    title: String,
    cards: Vec<Card>,
    loading: bool,
    placeholder: Option<&'static str>,
    selected: usize,
}

impl CardGrid {
    /// Creates an empty grid with no title.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the grid and enters the loading state for `category`.
    pub fn begin(&mut self, category: &str) {
        self.title = category_label(category);
        self.cards.clear();
        self.placeholder = None;
        self.selected = 0;
        self.loading = true;
    }

    /// Builds one card per record, in order, and leaves the loading state.
    pub fn mount(&mut self, records: &[Record]) {
        self.cards = records.iter().cloned().map(Card::new).collect();
        self.selected = 0;
        self.loading = false;
    }

    /// Title shown above the grid.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// All mounted cards, hidden ones included.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub(crate) fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    /// Whether cards are still waiting to be built.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// The "no results" message, present only when a search matched nothing.
    #[must_use]
    pub const fn placeholder(&self) -> Option<&'static str> {
        self.placeholder
    }

    pub(crate) fn set_placeholder(&mut self, placeholder: Option<&'static str>) {
        self.placeholder = placeholder;
    }

    /// Indices of cards not hidden by the filter.
    pub fn visible_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| !card.is_hidden())
            .map(|(i, _)| i)
    }

    /// Number of visible cards.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible_indices().count()
    }

    /// Index of the highlighted card, if it is visible.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.cards
            .get(self.selected)
            .filter(|card| !card.is_hidden())
            .map(|_| self.selected)
    }

    /// Highlights card `index` if it exists and is visible.
    pub fn select(&mut self, index: usize) -> bool {
        if self.cards.get(index).is_some_and(|card| !card.is_hidden()) {
            self.selected = index;
            true
        } else {
            false
        }
    }

    /// Moves the highlight by `delta` visible cards, clamping at the ends.
    pub fn move_selection(&mut self, delta: isize) {
        let visible: Vec<usize> = self.visible_indices().collect();
        if visible.is_empty() {
            return;
        }
        let current = visible
            .iter()
            .position(|&i| i == self.selected)
            .unwrap_or(0);
        let target = current
            .saturating_add_signed(delta)
            .min(visible.len() - 1);
        self.selected = visible[target];
    }

    /// Moves the highlight to the first visible card if it is hidden.
    pub(crate) fn clamp_selection(&mut self) {
        if self.selected_index().is_none() {
            let first = self.visible_indices().next();
            if let Some(first) = first {
                self.selected = first;
            }
        }
    }
}

/// Computes where each visible card is drawn inside `area`.
///
/// Cards flow left-to-right in as many columns as fit. Rows are scrolled so
/// that the selected card is on screen. Shared by drawing and mouse
/// hit-testing so both agree on positions.
#[must_use]
pub fn layout_cards(grid: &CardGrid, area: Rect) -> Vec<(usize, Rect)> {
    if area.width == 0 || area.height == 0 {
        return Vec::new();
    }

    let columns = (area.width / CARD_MIN_WIDTH).max(1);
    let col_width = area.width / columns;
    let visible: Vec<usize> = grid.visible_indices().collect();
    let rows: Vec<&[usize]> = visible.chunks(usize::from(columns)).collect();
    let heights: Vec<u16> = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|&i| grid.cards[i].height(col_width.saturating_sub(2)))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let selected_row = grid
        .selected_index()
        .and_then(|sel| visible.iter().position(|&i| i == sel))
        .map_or(0, |pos| pos / usize::from(columns));

    // Earliest first row that still keeps the selected row fully visible
    let mut start = selected_row.min(rows.len().saturating_sub(1));
    let mut used = heights.get(start).copied().unwrap_or(0);
    while start > 0 && used.saturating_add(heights[start - 1]) <= area.height {
        start -= 1;
        used += heights[start];
    }

    let mut placed = Vec::new();
    let mut y = area.y;
    let bottom = area.y + area.height;
    for (row, height) in rows.iter().zip(&heights).skip(start) {
        if y >= bottom {
            break;
        }
        let h = (*height).min(bottom - y);
        for (col, &index) in row.iter().enumerate() {
            let x = area.x + col_width * col as u16;
            placed.push((index, Rect::new(x, y, col_width, h)));
        }
        y += h;
    }
    placed
}

/// Returns the card under a terminal cell, if any.
///
/// `area` is the whole grid region, outer border included, as passed to
/// [`render_grid`].
#[must_use]
pub fn card_at(grid: &CardGrid, area: Rect, column: u16, row: u16) -> Option<usize> {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    layout_cards(grid, inner)
        .into_iter()
        .find(|(_, rect)| {
            column >= rect.x
                && column < rect.x + rect.width
                && row >= rect.y
                && row < rect.y + rect.height
        })
        .map(|(index, _)| index)
}

/// Draws the grid: loading text, placeholder, or the visible cards.
pub fn render_grid(f: &mut Frame, area: Rect, grid: &CardGrid, theme: &Theme, now: Instant) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", grid.title()))
        .border_style(Style::default().fg(theme.primary))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if grid.is_loading() {
        let loading = Paragraph::new("Loading…")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.text_muted));
        f.render_widget(loading, inner);
        return;
    }

    if let Some(message) = grid.placeholder() {
        let text = vec![Line::from(""), Line::from(message)];
        let placeholder = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.text_muted));
        f.render_widget(placeholder, inner);
        return;
    }

    let selected = grid.selected_index();
    for (index, rect) in layout_cards(grid, inner) {
        let card = &grid.cards()[index];
        let border = if card.is_copied(now) {
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD)
        } else if Some(index) == selected {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.inactive)
        };

        let widget = card.paragraph(theme).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .style(Style::default().bg(theme.background)),
            );
        f.render_widget(widget, rect);
    }
}
