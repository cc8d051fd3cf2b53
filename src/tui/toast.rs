//! Transient notification shown over the card grid.

use std::time::{Duration, Instant};

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::Theme;

/// A single replaceable message with an expiry.
///
/// Showing a new message replaces the current one and restarts the timer;
/// messages never queue or stack.
#[derive(Debug, Clone, Default)]
pub struct Toast {
    message: String,
    expires_at: Option<Instant>,
}

impl Toast {
    /// Creates a hidden toast.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            message: String::new(),
            expires_at: None,
        }
    }

    /// Shows `message` for `duration` starting at `now`.
    pub fn show(&mut self, message: impl Into<String>, duration: Duration, now: Instant) {
        self.message = message.into();
        self.expires_at = Some(now + duration);
    }

    /// Whether the toast is on screen at `now`.
    #[must_use]
    pub fn is_visible(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|t| now < t)
    }

    /// The visible message at `now`.
    #[must_use]
    pub fn message(&self, now: Instant) -> Option<&str> {
        self.is_visible(now).then_some(self.message.as_str())
    }

    /// Drops an expired message. Returns true if something was hidden.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.expires_at.is_some() && !self.is_visible(now) {
            self.expires_at = None;
            self.message.clear();
            return true;
        }
        false
    }

    /// Draws the toast centered near the bottom of `area`.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, now: Instant) {
        let Some(message) = self.message(now) else {
            return;
        };

        let width = (message.chars().count() as u16 + 4).min(area.width);
        let height = 3.min(area.height);
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height.saturating_sub(height + 1);
        let toast_area = Rect::new(x, y, width, height);

        f.render_widget(Clear, toast_area);
        let widget = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme.text)
                    .bg(theme.surface)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.accent))
                    .style(Style::default().bg(theme.surface)),
            );
        f.render_widget(widget, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_SECONDS: Duration = Duration::from_millis(2000);

    #[test]
    fn test_new_toast_is_hidden() {
        let toast = Toast::new();
        assert!(!toast.is_visible(Instant::now()));
    }

    #[test]
    fn test_toast_expires_after_duration() {
        let t0 = Instant::now();
        let mut toast = Toast::new();
        toast.show("Saved", TWO_SECONDS, t0);

        assert_eq!(toast.message(t0), Some("Saved"));
        assert_eq!(toast.message(t0 + Duration::from_millis(1999)), Some("Saved"));
        assert_eq!(toast.message(t0 + TWO_SECONDS), None);
    }

    #[test]
    fn test_new_message_replaces_and_restarts_timer() {
        let t0 = Instant::now();
        let mut toast = Toast::new();
        toast.show("first", TWO_SECONDS, t0);

        let t1 = t0 + Duration::from_millis(1500);
        toast.show("second", TWO_SECONDS, t1);

        // The first message's deadline no longer applies
        let after_first_deadline = t0 + Duration::from_millis(2500);
        assert_eq!(toast.message(after_first_deadline), Some("second"));
        assert_eq!(toast.message(t1 + TWO_SECONDS), None);
    }

    #[test]
    fn test_tick_clears_expired() {
        let t0 = Instant::now();
        let mut toast = Toast::new();
        toast.show("bye", Duration::from_millis(10), t0);
        assert!(!toast.tick(t0));
        assert!(toast.tick(t0 + Duration::from_millis(10)));
        assert!(!toast.tick(t0 + Duration::from_millis(20)));
    }
}
