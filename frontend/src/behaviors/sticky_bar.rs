use crate::config::{STICKY_BAR_MAX_WIDTH, STICKY_BAR_SHOW_AFTER};
use crate::dom::Mount;

/// Contact bar for narrow screens, shown once the visitor has scrolled a bit.
pub struct StickyBar<M: Mount> {
    bar: M,
}

impl<M: Mount> StickyBar<M> {
    /// The width is read once at startup; later resizes don't change the
    /// outcome. An unknown width counts as wide.
    pub fn bind(initial_width: Option<f64>, bar: M) -> Option<Self> {
        let narrow = initial_width.is_some_and(|width| width < STICKY_BAR_MAX_WIDTH);
        narrow.then_some(Self { bar })
    }

    pub fn bar(&self) -> &M {
        &self.bar
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        if scroll_y > STICKY_BAR_SHOW_AFTER {
            if !self.bar.is_mounted() {
                self.bar.mount();
            }
        } else if self.bar.is_mounted() {
            self.bar.unmount();
        }
    }
}
