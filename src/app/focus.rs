//! Focus navigation across the fixed set of panels

use crate::constants::PANEL_COUNT;

/// Panels that can hold keyboard focus, in rotation order
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Panel {
    #[default]
    Catalog,
    Detail,
    Response,
}

impl Panel {
    pub const ALL: [Panel; PANEL_COUNT] = [Panel::Catalog, Panel::Detail, Panel::Response];

    pub fn index(self) -> usize {
        match self {
            Panel::Catalog => 0,
            Panel::Detail => 1,
            Panel::Response => 2,
        }
    }

    pub fn next(self) -> Panel {
        Self::ALL[(self.index() + 1) % PANEL_COUNT]
    }

    pub fn prev(self) -> Panel {
        Self::ALL[(self.index() + PANEL_COUNT - 1) % PANEL_COUNT]
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CursorMove {
    Up,
    Down,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct FocusState {
    panel: Panel,
    cursor: usize,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn rotate(&mut self) -> Panel {
        self.panel = self.panel.next();
        self.panel
    }

    pub fn rotate_back(&mut self) -> Panel {
        self.panel = self.panel.prev();
        self.panel
    }

    /// Move the catalog cursor, stopping at either end. Ignored outside the catalog panel.
    pub fn move_cursor(&mut self, direction: CursorMove, catalog_len: usize) -> usize {
        if self.panel != Panel::Catalog || catalog_len == 0 {
            return self.cursor;
        }
        self.cursor = match direction {
            CursorMove::Up => self.cursor.saturating_sub(1),
            CursorMove::Down => (self.cursor + 1).min(catalog_len - 1),
        };
        self.cursor
    }
}
