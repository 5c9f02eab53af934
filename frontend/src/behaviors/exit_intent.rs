//! One popup per browsing session when the pointer heads for the tab bar.

use log::info;

use crate::config::{
    EXIT_INTENT_DWELL_MS, EXIT_INTENT_EXCLUDED_PATH, EXIT_INTENT_STORAGE_KEY,
    EXIT_INTENT_TOP_EDGE,
};
use crate::dom::{Mount, SessionStore};
use crate::state::SiteState;

/// A `mouseleave` on the document.
#[derive(Debug, Clone, Copy)]
pub struct PointerLeave {
    pub client_y: f64,
    pub now_ms: f64,
}

pub struct ExitIntent<M: Mount> {
    overlay: M,
}

impl<M: Mount> ExitIntent<M> {
    pub fn new(overlay: M) -> Self {
        Self { overlay }
    }

    pub fn overlay(&self) -> &M {
        &self.overlay
    }

    /// Shows the overlay when every trigger condition holds. Returns whether
    /// it was shown.
    pub fn on_pointer_leave(
        &mut self,
        state: &mut SiteState,
        leave: PointerLeave,
        path: &str,
        session: &dyn SessionStore,
    ) -> bool {
        if leave.client_y >= EXIT_INTENT_TOP_EDGE || state.exit_intent_shown {
            return false;
        }
        match state.dwell_elapsed(leave.now_ms) {
            Some(elapsed) if elapsed > EXIT_INTENT_DWELL_MS => {}
            _ => return false,
        }
        if path.contains(EXIT_INTENT_EXCLUDED_PATH)
            || session.get_item(EXIT_INTENT_STORAGE_KEY).is_some()
        {
            return false;
        }

        self.overlay.mount();
        state.exit_intent_shown = true;
        session.set_item(EXIT_INTENT_STORAGE_KEY, "true");
        info!("exit intent overlay shown");
        true
    }

    /// Close button or backdrop click.
    pub fn dismiss(&mut self) {
        if self.overlay.is_mounted() {
            self.overlay.unmount();
        }
    }
}
