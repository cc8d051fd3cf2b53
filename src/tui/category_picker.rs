//! Category picker popup: the keyboard counterpart of a dropdown.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::component::Component;
use super::{centered_rect, Theme};
use crate::models::category_label;

/// Events emitted by the category picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryPickerEvent {
    /// User confirmed a category
    Selected(String),
    /// User closed the picker without choosing
    Cancelled,
}

/// List of categories with a movable highlight.
#[derive(Debug, Clone)]
pub struct CategoryPicker {
    names: Vec<String>,
    selected: usize,
}

impl CategoryPicker {
    /// Opens the picker with `current` highlighted (first item if absent).
    #[must_use]
    pub fn new(names: Vec<String>, current: Option<&str>) -> Self {
        let selected = current
            .and_then(|c| names.iter().position(|n| n == c))
            .unwrap_or(0);
        Self { names, selected }
    }

    /// Name under the highlight.
    #[must_use]
    pub fn highlighted(&self) -> Option<&str> {
        self.names.get(self.selected).map(String::as_str)
    }

    /// Move selection up, wrapping to the last item.
    pub fn previous(&mut self) {
        if self.names.is_empty() {
            return;
        }
        self.selected = (self.selected + self.names.len() - 1) % self.names.len();
    }

    /// Move selection down, wrapping to the first item.
    pub fn next(&mut self) {
        if self.names.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.names.len();
    }
}

impl Component for CategoryPicker {
    type Event = CategoryPickerEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(CategoryPickerEvent::Cancelled),
            KeyCode::Enter => Some(
                self.highlighted()
                    .map_or(CategoryPickerEvent::Cancelled, |name| {
                        CategoryPickerEvent::Selected(name.to_string())
                    }),
            ),
            KeyCode::Up | KeyCode::Char('k') => {
                self.previous();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.next();
                None
            }
            KeyCode::Home => {
                self.selected = 0;
                None
            }
            KeyCode::End => {
                self.selected = self.names.len().saturating_sub(1);
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let area = centered_rect(50, 70, area);
        f.render_widget(Clear, area);

        let items: Vec<ListItem> = self
            .names
            .iter()
            .map(|name| ListItem::new(Line::from(category_label(name))))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(" Select Ascendant ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            )
            .style(Style::default().fg(theme.text))
            .highlight_style(
                Style::default()
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("► ");

        let mut list_state = ListState::default();
        list_state.select(Some(self.selected));
        f.render_stateful_widget(list, area, &mut list_state);

        if area.height > 2 && area.width > 4 {
            let instructions_area = Rect {
                x: area.x + 2,
                y: area.y + area.height - 2,
                width: area.width - 4,
                height: 1,
            };
            let instructions = Paragraph::new(Line::from(vec![
                Span::styled("↑↓", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" Navigate  "),
                Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" Select  "),
                Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" Cancel"),
            ]))
            .style(Style::default().fg(theme.text_muted));
            f.render_widget(instructions, instructions_area);
        }
    }
}
