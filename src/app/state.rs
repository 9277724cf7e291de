//! App state - pure data structure with no I/O logic

use crate::app::focus::FocusState;
use crate::app::lifecycle::RequestLifecycle;
use crate::catalog::Catalog;
use crate::models::EndpointDefinition;

/// Last known terminal dimensions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Viewport { width, height }
    }
}

/// Everything the loop owns. Mutated only inside `dispatch`.
pub struct AppState {
    pub catalog: Catalog,
    pub lifecycle: RequestLifecycle,
    pub focus: FocusState,
    pub viewport: Viewport,
    quit_requested: bool,
}

impl AppState {
    pub fn new(catalog: Catalog, viewport: Viewport) -> Self {
        AppState {
            catalog,
            lifecycle: RequestLifecycle::new(),
            focus: FocusState::new(),
            viewport,
            quit_requested: false,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub(crate) fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    /// Endpoint under the catalog cursor
    pub fn selected_endpoint(&self) -> Option<&EndpointDefinition> {
        self.catalog.get(self.focus.cursor())
    }
}
