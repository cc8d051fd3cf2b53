//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, and the drawing of the
//! title bar, search box, card grid and status bar.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod cards;
pub mod category_picker;
pub mod clipboard;
pub mod component;
pub mod debounce;
pub mod filter;
pub mod handlers;
pub mod manual_copy;
pub mod navigation;
pub mod status_bar;
pub mod theme;
pub mod toast;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::data::{DataStore, LoadError};
use crate::preferences::PreferenceStore;

pub use cards::{Card, CardGrid};
pub use category_picker::{CategoryPicker, CategoryPickerEvent};
pub use clipboard::{ClipboardExporter, CopyOutcome};
pub use component::Component;
pub use debounce::Debouncer;
pub use manual_copy::{ManualCopyDialog, ManualCopyEvent};
pub use navigation::{Gesture, Navigator, Step, SwipeTracker};
pub use status_bar::StatusBar;
pub use theme::Theme;
pub use toast::Toast;

/// Event poll interval of the main loop.
const TICK_RATE: Duration = Duration::from_millis(50);

/// Toast shown when the dataset cannot be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading data. Please refresh.";

/// Which part of the screen receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Card grid; arrow keys change category
    #[default]
    Grid,
    /// Search box; keys edit the query
    Search,
}

/// The popup currently drawn over the grid, if any.
#[derive(Debug, Clone)]
pub enum ActiveComponent {
    /// Category selection list
    CategoryPicker(CategoryPicker),
    /// Record text for manual copying
    ManualCopy(ManualCopyDialog),
}

/// Screen regions of the main view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    /// Application title and current category
    pub title: Rect,
    /// Search input
    pub search: Rect,
    /// Card grid
    pub grid: Rect,
    /// Key hints
    pub status: Rect,
}

impl MainLayout {
    /// Splits the full terminal area.
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title bar
                Constraint::Length(3), // Search box
                Constraint::Min(6),    // Card grid
                Constraint::Length(3), // Status bar
            ])
            .split(area);

        Self {
            title: chunks[0],
            search: chunks[1],
            grid: chunks[2],
            status: chunks[3],
        }
    }
}

/// Application state - single source of truth.
///
/// The dataset, the current category and the search text are the only
/// shared state; everything else here is view state derived from them or
/// an injected collaborator.
pub struct AppState {
    // Data
    pub data: DataStore,
    pub navigator: Navigator,
    pub grid: CardGrid,

    // Search
    pub search: String,
    pub focus: Focus,
    pub debouncer: Debouncer,

    // Interaction
    pub swipe: SwipeTracker,
    pub toast: Toast,
    pub active_component: Option<ActiveComponent>,
    /// Last drawn grid region, used for mouse hit-testing.
    pub grid_area: Rect,

    // Presentation
    pub config: Config,
    pub theme: Theme,

    // Control flags
    pub should_quit: bool,

    pending_render: Option<String>,
    load_error: Option<String>,
    preferences: Box<dyn PreferenceStore>,
    clipboard: ClipboardExporter,
}

impl AppState {
    /// Assembles the state from its collaborators.
    ///
    /// Nothing is rendered yet; call [`AppState::bootstrap`] to pick the
    /// initial category.
    #[must_use]
    pub fn new(
        data: DataStore,
        preferences: Box<dyn PreferenceStore>,
        clipboard: ClipboardExporter,
        config: Config,
    ) -> Self {
        let navigator = Navigator::new(data.categories().to_vec());
        let debouncer = Debouncer::new(config.ui.search_debounce());
        let swipe = SwipeTracker::new(config.ui.swipe_threshold);

        Self {
            data,
            navigator,
            grid: CardGrid::new(),
            search: String::new(),
            focus: Focus::Grid,
            debouncer,
            swipe,
            toast: Toast::new(),
            active_component: None,
            grid_area: Rect::default(),
            config,
            theme: Theme::default(),
            should_quit: false,
            pending_render: None,
            load_error: None,
            preferences,
            clipboard,
        }
    }

    /// Builds the state from the outcome of loading the dataset.
    ///
    /// A load failure leaves the application open with no categories and a
    /// toast explaining what happened.
    pub fn from_load_result(
        result: Result<DataStore, LoadError>,
        preferences: Box<dyn PreferenceStore>,
        clipboard: ClipboardExporter,
        config: Config,
        now: Instant,
    ) -> Self {
        match result {
            Ok(data) => {
                let mut state = Self::new(data, preferences, clipboard, config);
                state.bootstrap();
                state
            }
            Err(e) => {
                error!("Failed to load dataset: {e}");
                let mut state = Self::new(DataStore::default(), preferences, clipboard, config);
                state.load_error = Some(e.to_string());
                state.show_toast(LOAD_ERROR_MESSAGE, now);
                state
            }
        }
    }

    /// Selects and renders the initial category.
    pub fn bootstrap(&mut self) {
        let saved = self.preferences.get();
        let Some(initial) = self
            .data
            .initial_category(saved.as_deref())
            .map(str::to_string)
        else {
            info!("Dataset has no categories");
            return;
        };
        info!(
            "Initial category {initial} (saved preference: {})",
            saved.as_deref().unwrap_or("none")
        );
        self.render_category(&initial);
    }

    /// Starts rendering `name`.
    ///
    /// Unknown names are ignored. Otherwise the title changes immediately,
    /// the grid shows its loading state, the choice is persisted, and the
    /// cards are built by [`AppState::flush_pending_render`] after the
    /// loading frame has been drawn.
    pub fn render_category(&mut self, name: &str) -> bool {
        if !self.data.contains(name) {
            debug!("Ignoring render of unknown category {name}");
            return false;
        }

        self.navigator.select(name);
        self.grid.begin(name);
        if let Err(e) = self.preferences.set(name) {
            warn!("Failed to persist selected category: {e:#}");
        }
        self.pending_render = Some(name.to_string());
        true
    }

    /// Whether a category is waiting for its cards to be built.
    #[must_use]
    pub const fn has_pending_render(&self) -> bool {
        self.pending_render.is_some()
    }

    /// Builds the cards of the pending category and reapplies the filter.
    ///
    /// Returns false when nothing was pending.
    pub fn flush_pending_render(&mut self) -> bool {
        let Some(name) = self.pending_render.take() else {
            return false;
        };
        let Some(pack) = self.data.pack(&name) else {
            return false;
        };

        self.grid.mount(&pack.houses);
        let visible = self.grid.apply_filter(&self.search);
        debug!(
            "Mounted {} cards for {name}, {visible} visible",
            self.grid.cards().len()
        );
        true
    }

    /// Moves to the neighbouring category, wrapping at both ends.
    ///
    /// With `announce` set a toast names the new category.
    pub fn step_category(&mut self, step: Step, announce: bool, now: Instant) -> bool {
        let Some(name) = self.navigator.step(step).map(str::to_string) else {
            return false;
        };
        let rendered = self.render_category(&name);
        if rendered && announce {
            self.show_toast(format!("{} {name}", step.arrow()), now);
        }
        rendered
    }

    /// Copies card `index` to the clipboard.
    ///
    /// Always ends in a toast; when no backend accepted the text a dialog
    /// shows it for manual selection.
    pub fn copy_card(&mut self, index: usize, now: Instant) -> Option<CopyOutcome> {
        let record = self.grid.cards().get(index)?.record().clone();
        let outcome = self.clipboard.copy(&record);
        info!("Copy of house {} finished: {outcome:?}", record.house);

        if outcome.is_success() {
            let until = now + self.config.ui.copied_flash();
            if let Some(card) = self.grid.cards_mut().get_mut(index) {
                card.mark_copied(until);
            }
        }
        self.show_toast(outcome.message(), now);

        if let CopyOutcome::ManualCopyRequired { text } = &outcome {
            self.active_component = Some(ActiveComponent::ManualCopy(ManualCopyDialog::new(
                text.clone(),
            )));
        }
        Some(outcome)
    }

    /// Copies the highlighted card, if one is visible.
    pub fn copy_selected(&mut self, now: Instant) -> Option<CopyOutcome> {
        let index = self.grid.selected_index()?;
        self.copy_card(index, now)
    }

    /// Applies the current search text right away.
    pub fn apply_search(&mut self) -> usize {
        self.debouncer.cancel();
        self.grid.apply_filter(&self.search)
    }

    /// Shows a toast for the configured duration.
    pub fn show_toast(&mut self, message: impl Into<String>, now: Instant) {
        let duration = self.config.ui.toast_duration();
        self.toast.show(message, duration, now);
    }

    /// Advances timers: fires the search debounce and expires the toast.
    pub fn tick(&mut self, now: Instant) {
        if self.debouncer.fire(now) {
            let visible = self.grid.apply_filter(&self.search);
            debug!("Search {:?} matched {visible} cards", self.search);
        }
        self.toast.tick(now);
    }

    /// Opens the category picker on the current category.
    pub fn open_category_picker(&mut self) {
        if self.data.is_empty() {
            return;
        }
        let picker = CategoryPicker::new(
            self.data.categories().to_vec(),
            self.navigator.current(),
        );
        self.active_component = Some(ActiveComponent::CategoryPicker(picker));
    }

    /// Closes whatever popup is open.
    pub fn close_component(&mut self) {
        self.active_component = None;
    }

    /// Whether the manual copy dialog is showing.
    #[must_use]
    pub const fn is_manual_copy_open(&self) -> bool {
        matches!(self.active_component, Some(ActiveComponent::ManualCopy(_)))
    }

    /// Currently selected category.
    #[must_use]
    pub fn current_category(&self) -> Option<&str> {
        self.navigator.current()
    }

    /// Value held by the preference store.
    #[must_use]
    pub fn saved_preference(&self) -> Option<String> {
        self.preferences.get()
    }

    /// Description of the dataset load failure, if any.
    #[must_use]
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    // Apply theme based on user preference (Auto detects OS, Dark/Light are explicit)
    state.theme = Theme::from_mode(state.config.ui.theme_mode);
    let mut mouse_captured = true;

    loop {
        let now = Instant::now();
        state.tick(now);

        // Release the mouse while the manual copy dialog is open so the
        // terminal's own selection works.
        let wants_capture = !state.is_manual_copy_open();
        if wants_capture != mouse_captured {
            if wants_capture {
                execute!(terminal.backend_mut(), EnableMouseCapture)?;
            } else {
                execute!(terminal.backend_mut(), DisableMouseCapture)?;
            }
            mouse_captured = wants_capture;
        }

        let size = terminal.size()?;
        state.grid_area = MainLayout::new(Rect::new(0, 0, size.width, size.height)).grid;

        terminal.draw(|f| render(f, state, now))?;

        // The loading frame is on screen; build the cards and draw again.
        if state.flush_pending_render() {
            continue;
        }

        if event::poll(TICK_RATE)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handlers::handle_key_event(state, key, Instant::now())? {
                        break;
                    }
                }
                Event::Mouse(mouse) => {
                    handlers::handle_mouse_event(state, mouse, Instant::now())?;
                }
                // Resize and focus changes redraw on the next iteration
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
pub fn render(f: &mut Frame, state: &AppState, now: Instant) {
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let layout = MainLayout::new(f.area());

    render_title_bar(f, layout.title, state);
    render_search_box(f, layout.search, state);

    if let Some(message) = state.load_error() {
        render_load_error(f, layout.grid, message, &state.theme);
    } else {
        cards::render_grid(f, layout.grid, &state.grid, &state.theme, now);
    }

    StatusBar::render(f, layout.status, state, &state.theme);

    match &state.active_component {
        Some(ActiveComponent::CategoryPicker(picker)) => {
            picker.render(f, f.area(), &state.theme);
        }
        Some(ActiveComponent::ManualCopy(dialog)) => {
            dialog.render(f, f.area(), &state.theme);
        }
        None => {}
    }

    state.toast.render(f, f.area(), &state.theme, now);
}

/// Render title bar with the grid title and category position
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let position = if state.navigator.categories().is_empty() {
        String::new()
    } else {
        format!(
            "  [{}/{}]",
            state.navigator.index() + 1,
            state.navigator.categories().len()
        )
    };

    let title = Line::from(vec![
        Span::styled(
            format!(" {}", state.grid.title()),
            Style::default()
                .fg(state.theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(position, Style::default().fg(state.theme.text_muted)),
    ]);

    let title_widget = Paragraph::new(title)
        .style(Style::default().bg(state.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {APP_NAME} "))
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Render the search input, highlighted while focused
fn render_search_box(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let focused = state.focus == Focus::Search;

    let content = if state.search.is_empty() && !focused {
        Line::from(Span::styled(
            " Press / to search meanings, karakas, Āditya",
            Style::default().fg(theme.text_muted),
        ))
    } else {
        let cursor = if focused { "_" } else { "" };
        Line::from(vec![
            Span::raw(" "),
            Span::styled(state.search.as_str(), Style::default().fg(theme.text)),
            Span::styled(cursor, Style::default().fg(theme.accent)),
        ])
    };

    let border = if focused { theme.accent } else { theme.inactive };
    let search = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(theme.background)),
    );

    f.render_widget(search, area);
}

/// Render the grid region when no dataset could be loaded
fn render_load_error(f: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let text = vec![
        Line::from(Span::styled(
            LOAD_ERROR_MESSAGE,
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(theme.text_secondary),
        )),
    ];

    let widget = Paragraph::new(text).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.error))
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(widget, area);
}

/// Helper to create centered rectangle
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
