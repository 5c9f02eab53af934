use crate::dom::Node;

pub const OPEN_CLASS: &str = "active";
pub const EXPANDED_ATTR: &str = "aria-expanded";

/// Mobile navigation menu: the `#mobileToggle` button and the `#nav` it opens.
#[derive(Clone)]
pub struct NavMenu<N: Node> {
    toggle: N,
    nav: N,
}

impl<N: Node> NavMenu<N> {
    /// Returns `None` unless both elements are on the page.
    pub fn bind(toggle: Option<N>, nav: Option<N>) -> Option<Self> {
        Some(Self {
            toggle: toggle?,
            nav: nav?,
        })
    }

    pub fn toggle_button(&self) -> &N {
        &self.toggle
    }

    pub fn nav(&self) -> &N {
        &self.nav
    }

    pub fn is_open(&self) -> bool {
        self.nav.has_class(OPEN_CLASS)
    }

    /// Toggle button click.
    pub fn toggle(&self) {
        let was_open = self.is_open();
        if was_open {
            self.nav.remove_class(OPEN_CLASS);
        } else {
            self.nav.add_class(OPEN_CLASS);
        }
        self.toggle
            .set_attribute(EXPANDED_ATTR, if was_open { "false" } else { "true" });
    }

    /// Nav link click, or anything else that must leave the menu shut.
    pub fn close(&self) {
        self.nav.remove_class(OPEN_CLASS);
        self.toggle.set_attribute(EXPANDED_ATTR, "false");
    }

    pub fn close_if_open(&self) {
        if self.is_open() {
            self.close();
        }
    }

    /// Called whenever the wide-layout media query changes.
    pub fn on_breakpoint_change(&self, matches: bool) {
        if matches {
            self.close();
        }
    }
}
