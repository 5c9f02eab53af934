use log::{debug, warn};

use crate::behaviors::counter::{parse_target, CounterAnimation};
use crate::dom::{Intersection, Node, Observer};
use crate::state::SiteState;

pub const TARGET_ATTR: &str = "data-target";

/// The `.stat-number[data-target]` elements and their one-shot count-up.
pub struct StatsCounter<N: Node> {
    stats: Vec<N>,
}

impl<N: Node> StatsCounter<N> {
    /// Keeps the elements that carry a target.
    pub fn new(elements: Vec<N>) -> Self {
        Self {
            stats: elements
                .into_iter()
                .filter(|el| el.attribute(TARGET_ATTR).is_some())
                .collect(),
        }
    }

    pub fn observe(&self, observer: &impl Observer<N>) {
        for stat in &self.stats {
            observer.observe(stat);
        }
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Handles an observer callback. Returns the animations to drive, which
    /// is every stat the first time any of them is visible and nothing after.
    pub fn on_intersections(
        &self,
        state: &mut SiteState,
        entries: &[Intersection<N>],
    ) -> Vec<(N, CounterAnimation)> {
        if state.stats_animated || !entries.iter().any(|e| e.is_intersecting) {
            return Vec::new();
        }
        state.stats_animated = true;
        debug!("stats visible, animating {} counters", self.stats.len());

        self.stats
            .iter()
            .filter_map(|stat| {
                let raw = stat.attribute(TARGET_ATTR)?;
                match parse_target(&raw) {
                    Some(target) => Some((stat.clone(), CounterAnimation::with_defaults(target))),
                    None => {
                        warn!("skipping stat with non-numeric target {:?}", raw);
                        None
                    }
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::{FakeNode, FakeObserver};

    #[test]
    fn observes_only_elements_with_targets() {
        let observer = FakeObserver::default();
        let stats = StatsCounter::new(vec![
            FakeNode::with_attribute(TARGET_ATTR, "10"),
            FakeNode::new(),
        ]);
        stats.observe(&observer);
        assert_eq!(stats.len(), 1);
        assert_eq!(observer.observed_count(), 1);
    }

    #[test]
    fn fires_once_for_all_stats() {
        let observer = FakeObserver::default();
        let a = FakeNode::with_attribute(TARGET_ATTR, "100");
        let b = FakeNode::with_attribute(TARGET_ATTR, "35");
        let stats = StatsCounter::new(vec![a.clone(), b.clone()]);
        stats.observe(&observer);
        let mut state = SiteState::new();

        let hidden = observer.fire(&[a.clone()], false);
        assert!(stats.on_intersections(&mut state, &hidden).is_empty());
        assert!(!state.stats_animated);

        // Only `a` scrolled in, but both counters start.
        let visible = observer.fire(&[a.clone()], true);
        let started = stats.on_intersections(&mut state, &visible);
        assert_eq!(started.len(), 2);
        assert_eq!(started[1].1.target(), 35);
        assert!(state.stats_animated);

        let again = observer.fire(&[a, b], true);
        assert!(stats.on_intersections(&mut state, &again).is_empty());
    }

    #[test]
    fn unparseable_target_is_skipped() {
        let observer = FakeObserver::default();
        let bad = FakeNode::with_attribute(TARGET_ATTR, "lots");
        let stats = StatsCounter::new(vec![bad.clone()]);
        stats.observe(&observer);
        let mut state = SiteState::new();

        let started = stats.on_intersections(&mut state, &observer.fire(&[bad], true));
        assert!(started.is_empty());
        assert!(state.stats_animated);
    }
}
