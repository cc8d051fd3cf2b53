//! Popup that shows card text when no clipboard could take it.
//!
//! Mouse capture is released while this popup is open so the terminal's own
//! selection can be used.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::component::Component;
use super::{centered_rect, Theme};

/// Events emitted by the manual copy dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManualCopyEvent {
    /// Dialog dismissed
    Closed,
}

/// Read-only view of text the user should copy by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualCopyDialog {
    text: String,
    scroll: u16,
}

impl ManualCopyDialog {
    /// Wraps the undelivered text.
    #[must_use]
    pub fn new(text: String) -> Self {
        Self { text, scroll: 0 }
    }
}

impl Component for ManualCopyDialog {
    type Event = ManualCopyEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(ManualCopyEvent::Closed),
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let max = u16::try_from(self.text.lines().count()).unwrap_or(u16::MAX);
                self.scroll = (self.scroll + 1).min(max.saturating_sub(1));
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let area = centered_rect(70, 70, area);
        f.render_widget(Clear, area);

        let body = Paragraph::new(self.text.as_str())
            .style(Style::default().fg(theme.text))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .block(
                Block::default()
                    .title(" Copy manually (select with the mouse, Esc to close) ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.error))
                    .style(Style::default().bg(theme.background)),
            );
        f.render_widget(body, area);
    }
}
