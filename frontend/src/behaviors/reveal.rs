use crate::dom::{Intersection, Node, Observer};

pub const VISIBLE_CLASS: &str = "in";

/// Observes every element and returns how many were observed.
pub fn watch<N: Node>(elements: &[N], observer: &impl Observer<N>) -> usize {
    for el in elements {
        observer.observe(el);
    }
    elements.len()
}

/// Marks intersecting elements visible and stops watching them.
pub fn on_intersections<N: Node>(observer: &impl Observer<N>, entries: &[Intersection<N>]) {
    for entry in entries.iter().filter(|e| e.is_intersecting) {
        entry.target.add_class(VISIBLE_CLASS);
        observer.unobserve(&entry.target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::{FakeNode, FakeObserver};

    #[test]
    fn each_element_revealed_exactly_once() {
        let observer = FakeObserver::default();
        let sections = vec![FakeNode::new(), FakeNode::new()];
        assert_eq!(watch(&sections, &observer), 2);

        on_intersections(&observer, &observer.fire(&sections[..1], false));
        assert!(!sections[0].has_class(VISIBLE_CLASS));

        for _ in 0..3 {
            on_intersections(&observer, &observer.fire(&sections[..1], true));
        }
        assert_eq!(sections[0].adds_of(VISIBLE_CLASS), 1);
        assert!(!observer.is_observing(&sections[0]));

        on_intersections(&observer, &observer.fire(&sections, true));
        assert_eq!(sections[0].adds_of(VISIBLE_CLASS), 1);
        assert_eq!(sections[1].adds_of(VISIBLE_CLASS), 1);
        assert_eq!(observer.observed_count(), 0);
    }

    #[test]
    fn leaving_the_viewport_does_not_hide() {
        let observer = FakeObserver::default();
        let section = FakeNode::new();
        watch(std::slice::from_ref(&section), &observer);

        on_intersections(&observer, &observer.fire(std::slice::from_ref(&section), true));
        on_intersections(&observer, &[Intersection { target: section.clone(), is_intersecting: false }]);
        assert!(section.has_class(VISIBLE_CLASS));
    }
}
