//! Centralized shortcut and action system.
//!
//! Maps key events to the actions the card browser understands, per input
//! context. The search box handles its own text editing and only consults the
//! `"search"` context for keys that leave it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Context name for the card grid.
pub const MAIN_CONTEXT: &str = "main";
/// Context name for the focused search box.
pub const SEARCH_CONTEXT: &str = "search";

/// All possible actions in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === CATEGORY NAVIGATION ===
    PreviousCategory,
    NextCategory,
    OpenCategoryPicker,

    // === CARD CURSOR ===
    SelectPreviousCard,
    SelectNextCard,
    JumpToFirstCard,
    JumpToLastCard,

    // === CLIPBOARD ===
    CopyCard,

    // === SEARCH ===
    FocusSearch,
    LeaveSearch,
    ClearSearch,

    // === GENERAL ===
    Quit,
}

impl Action {
    /// Stable identifier, used in logs.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::PreviousCategory => "previous_category",
            Self::NextCategory => "next_category",
            Self::OpenCategoryPicker => "open_category_picker",
            Self::SelectPreviousCard => "select_previous_card",
            Self::SelectNextCard => "select_next_card",
            Self::JumpToFirstCard => "jump_first_card",
            Self::JumpToLastCard => "jump_last_card",
            Self::CopyCard => "copy_card",
            Self::FocusSearch => "focus_search",
            Self::LeaveSearch => "leave_search",
            Self::ClearSearch => "clear_search",
            Self::Quit => "quit",
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_main_shortcuts();
        registry.register_search_shortcuts();
        registry
    }

    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = MAIN_CONTEXT;

        // === CATEGORY NAVIGATION ===
        self.register(ctx, K::Left, M::NONE, Action::PreviousCategory);
        self.register(ctx, K::Right, M::NONE, Action::NextCategory);
        self.register(ctx, K::Char('h'), M::NONE, Action::PreviousCategory);
        self.register(ctx, K::Char('l'), M::NONE, Action::NextCategory);
        self.register(ctx, K::Tab, M::NONE, Action::OpenCategoryPicker);
        self.register(ctx, K::Char('a'), M::NONE, Action::OpenCategoryPicker);

        // === CARD CURSOR ===
        self.register(ctx, K::Up, M::NONE, Action::SelectPreviousCard);
        self.register(ctx, K::Down, M::NONE, Action::SelectNextCard);
        self.register(ctx, K::Char('k'), M::NONE, Action::SelectPreviousCard);
        self.register(ctx, K::Char('j'), M::NONE, Action::SelectNextCard);
        self.register(ctx, K::Home, M::NONE, Action::JumpToFirstCard);
        self.register(ctx, K::End, M::NONE, Action::JumpToLastCard);
        self.register(ctx, K::Char('g'), M::NONE, Action::JumpToFirstCard);
        self.register(ctx, K::Char('G'), M::SHIFT, Action::JumpToLastCard);

        // === CLIPBOARD ===
        self.register(ctx, K::Enter, M::NONE, Action::CopyCard);
        self.register(ctx, K::Char('y'), M::NONE, Action::CopyCard);
        self.register(ctx, K::Char('c'), M::NONE, Action::CopyCard);

        // === SEARCH ===
        self.register(ctx, K::Char('/'), M::NONE, Action::FocusSearch);
        self.register(ctx, K::Esc, M::NONE, Action::ClearSearch);

        // === GENERAL ===
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    fn register_search_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = SEARCH_CONTEXT;

        self.register(ctx, K::Esc, M::NONE, Action::LeaveSearch);
        self.register(ctx, K::Enter, M::NONE, Action::LeaveSearch);
        self.register(ctx, K::Tab, M::NONE, Action::LeaveSearch);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    /// Register a shortcut binding.
    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
