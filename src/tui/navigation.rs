//! Category navigation: picker selection, swipe gestures and arrow keys.
//!
//! All three channels resolve to a category name; the caller then renders
//! it through the single render path.

/// Direction of a one-step move through the category list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Move to the previous category (wrapping to the last)
    Previous,
    /// Move to the next category (wrapping to the first)
    Next,
}

impl Step {
    /// Arrow glyph used in the navigation toast.
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Previous => "←",
            Self::Next => "→",
        }
    }
}

/// Cursor over the fixed category ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    categories: Vec<String>,
    index: usize,
}

impl Navigator {
    /// Creates a navigator positioned on the first category.
    #[must_use]
    pub fn new(categories: Vec<String>) -> Self {
        Self {
            categories,
            index: 0,
        }
    }

    /// The category names in navigation order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Index of the current category.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Current category, `None` only when there are no categories.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.categories.get(self.index).map(String::as_str)
    }

    /// Moves directly to `name`. Unknown names leave the cursor unchanged.
    pub fn select(&mut self, name: &str) -> Option<&str> {
        let index = self.categories.iter().position(|c| c == name)?;
        self.index = index;
        self.current()
    }

    /// Moves one step with wrap-around and returns the new category.
    pub fn step(&mut self, step: Step) -> Option<&str> {
        let count = self.categories.len();
        if count == 0 {
            return None;
        }
        self.index = match step {
            Step::Next => (self.index + 1) % count,
            Step::Previous => (self.index + count - 1) % count,
        };
        self.current()
    }
}

/// Classification of a finished mouse press/release pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// A horizontal drag past the threshold
    Swipe(Step),
    /// Press and release on the same cell
    Tap {
        /// Column of the release
        column: u16,
        /// Row of the release
        row: u16,
    },
}

/// Detects horizontal swipes from mouse press/release pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeTracker {
    threshold: u16,
    start: Option<(u16, u16)>,
}

impl SwipeTracker {
    /// Creates a tracker; drags must exceed `threshold` cells horizontally.
    #[must_use]
    pub const fn new(threshold: u16) -> Self {
        Self {
            threshold,
            start: None,
        }
    }

    /// Records where the drag started.
    pub fn press(&mut self, column: u16, row: u16) {
        self.start = Some((column, row));
    }

    /// Finishes a drag and classifies it.
    ///
    /// Dragging leftwards (content moves left) advances to the next
    /// category. A drag counts only when it is more horizontal than vertical
    /// and longer than the threshold; any other movement is ignored. The
    /// start point is always consumed.
    pub fn release(&mut self, column: u16, row: u16) -> Option<Gesture> {
        let (start_x, start_y) = self.start.take()?;
        let dx = i32::from(start_x) - i32::from(column);
        let dy = i32::from(start_y) - i32::from(row);

        if dx == 0 && dy == 0 {
            return Some(Gesture::Tap { column, row });
        }
        if dx.abs() > dy.abs() && dx.abs() > i32::from(self.threshold) {
            let step = if dx > 0 { Step::Next } else { Step::Previous };
            return Some(Gesture::Swipe(step));
        }
        None
    }
}
