//! Capability traits the behaviors are written against.
//!
//! The browser implementations live in [`crate::web`]; tests use the fakes
//! in [`fake`], which record every mutation so assertions can count them.

/// An element the behaviors can read and flag.
///
/// Every method takes `&self`: DOM handles are shared references into the
/// document, so the implementations mutate through them.
pub trait Node: Clone {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    fn set_text(&self, text: &str);
    fn set_style(&self, property: &str, value: &str);
}

/// Visibility observation of elements, shaped like `IntersectionObserver`.
pub trait Observer<N> {
    fn observe(&self, node: &N);
    fn unobserve(&self, node: &N);
}

/// One entry delivered by an [`Observer`] callback.
#[derive(Clone, Debug)]
pub struct Intersection<N> {
    pub target: N,
    pub is_intersecting: bool,
}

/// Session-scoped key/value storage.
pub trait SessionStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
}

/// A fragment of markup owned by the script and attached on demand.
pub trait Mount {
    fn is_mounted(&self) -> bool;
    fn mount(&mut self);
    fn unmount(&mut self);
}

#[cfg(test)]
pub mod fake {
    use super::{Intersection, Mount, Node, Observer, SessionStore};
    use std::cell::RefCell;
    use std::collections::{BTreeSet, HashMap};
    use std::rc::Rc;

    #[derive(Default)]
    struct NodeData {
        classes: BTreeSet<String>,
        attributes: HashMap<String, String>,
        styles: HashMap<String, String>,
        text: Option<String>,
        class_adds: Vec<String>,
        text_writes: Vec<String>,
    }

    #[derive(Clone, Default)]
    pub struct FakeNode(Rc<RefCell<NodeData>>);

    impl FakeNode {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_attribute(name: &str, value: &str) -> Self {
            let node = Self::new();
            node.set_attribute(name, value);
            node
        }

        pub fn text(&self) -> Option<String> {
            self.0.borrow().text.clone()
        }

        pub fn text_writes(&self) -> Vec<String> {
            self.0.borrow().text_writes.clone()
        }

        pub fn style(&self, property: &str) -> Option<String> {
            self.0.borrow().styles.get(property).cloned()
        }

        /// Number of times `class` was added, including re-adds of a present class.
        pub fn adds_of(&self, class: &str) -> usize {
            self.0.borrow().class_adds.iter().filter(|c| *c == class).count()
        }
    }

    impl PartialEq for FakeNode {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.0, &other.0)
        }
    }

    impl std::fmt::Debug for FakeNode {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            let data = self.0.borrow();
            f.debug_struct("FakeNode")
                .field("classes", &data.classes)
                .field("attributes", &data.attributes)
                .finish()
        }
    }

    impl Node for FakeNode {
        fn has_class(&self, class: &str) -> bool {
            self.0.borrow().classes.contains(class)
        }

        fn add_class(&self, class: &str) {
            let mut data = self.0.borrow_mut();
            data.classes.insert(class.to_string());
            data.class_adds.push(class.to_string());
        }

        fn remove_class(&self, class: &str) {
            self.0.borrow_mut().classes.remove(class);
        }

        fn attribute(&self, name: &str) -> Option<String> {
            self.0.borrow().attributes.get(name).cloned()
        }

        fn set_attribute(&self, name: &str, value: &str) {
            self.0
                .borrow_mut()
                .attributes
                .insert(name.to_string(), value.to_string());
        }

        fn set_text(&self, text: &str) {
            let mut data = self.0.borrow_mut();
            data.text = Some(text.to_string());
            data.text_writes.push(text.to_string());
        }

        fn set_style(&self, property: &str, value: &str) {
            self.0
                .borrow_mut()
                .styles
                .insert(property.to_string(), value.to_string());
        }
    }

    /// Observer that only delivers entries for nodes it is still watching.
    #[derive(Default)]
    pub struct FakeObserver {
        observed: RefCell<Vec<FakeNode>>,
    }

    impl FakeObserver {
        pub fn is_observing(&self, node: &FakeNode) -> bool {
            self.observed.borrow().contains(node)
        }

        pub fn observed_count(&self) -> usize {
            self.observed.borrow().len()
        }

        pub fn fire(&self, nodes: &[FakeNode], is_intersecting: bool) -> Vec<Intersection<FakeNode>> {
            nodes
                .iter()
                .filter(|node| self.is_observing(node))
                .map(|node| Intersection {
                    target: node.clone(),
                    is_intersecting,
                })
                .collect()
        }
    }

    impl Observer<FakeNode> for FakeObserver {
        fn observe(&self, node: &FakeNode) {
            let mut observed = self.observed.borrow_mut();
            if !observed.contains(node) {
                observed.push(node.clone());
            }
        }

        fn unobserve(&self, node: &FakeNode) {
            self.observed.borrow_mut().retain(|n| n != node);
        }
    }

    #[derive(Default)]
    pub struct FakeStore {
        items: RefCell<HashMap<String, String>>,
    }

    impl SessionStore for FakeStore {
        fn get_item(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        fn set_item(&self, key: &str, value: &str) {
            self.items
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }
    }

    #[derive(Default, Debug)]
    pub struct FakeMount {
        pub mounted: bool,
        pub mounts: usize,
        pub unmounts: usize,
    }

    impl Mount for FakeMount {
        fn is_mounted(&self) -> bool {
            self.mounted
        }

        fn mount(&mut self) {
            self.mounted = true;
            self.mounts += 1;
        }

        fn unmount(&mut self) {
            self.mounted = false;
            self.unmounts += 1;
        }
    }
}
