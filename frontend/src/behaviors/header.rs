use crate::config::HEADER_SCROLLED_AFTER;
use crate::dom::Node;
use crate::state::SiteState;

pub const SCROLLED_CLASS: &str = "scrolled";

pub struct HeaderScroll<N: Node> {
    header: N,
}

impl<N: Node> HeaderScroll<N> {
    pub fn bind(header: Option<N>) -> Option<Self> {
        header.map(|header| Self { header })
    }

    pub fn on_scroll(&self, state: &mut SiteState, scroll_y: f64) {
        if scroll_y > HEADER_SCROLLED_AFTER {
            self.header.add_class(SCROLLED_CLASS);
        } else {
            self.header.remove_class(SCROLLED_CLASS);
        }
        state.last_scroll = scroll_y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::FakeNode;

    #[test]
    fn flag_follows_threshold() {
        let node = FakeNode::new();
        let header = HeaderScroll::bind(Some(node.clone())).unwrap();
        let mut state = SiteState::new();

        header.on_scroll(&mut state, 50.0);
        assert!(!node.has_class(SCROLLED_CLASS));

        header.on_scroll(&mut state, 51.0);
        assert!(node.has_class(SCROLLED_CLASS));
        assert_eq!(state.last_scroll, 51.0);

        header.on_scroll(&mut state, 0.0);
        assert!(!node.has_class(SCROLLED_CLASS));
    }
}
