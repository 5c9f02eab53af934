//! `web-sys` implementations of the capability traits.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, IntersectionObserver, Storage};

use crate::dom::{Node, Observer, SessionStore};

impl Node for Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        let _ = self.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.class_list().remove_1(class);
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let _ = Element::set_attribute(self, name, value);
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Some(el) = self.dyn_ref::<HtmlElement>() {
            let _ = el.style().set_property(property, value);
        }
    }
}

impl Observer<Element> for IntersectionObserver {
    fn observe(&self, node: &Element) {
        IntersectionObserver::observe(self, node);
    }

    fn unobserve(&self, node: &Element) {
        IntersectionObserver::unobserve(self, node);
    }
}

impl SessionStore for Storage {
    fn get_item(&self, key: &str) -> Option<String> {
        Storage::get_item(self, key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        let _ = Storage::set_item(self, key, value);
    }
}

/// Stand-in used when session storage is unavailable (e.g. blocked cookies):
/// nothing is remembered, so only the in-memory flag limits the popup.
pub struct NoStorage;

impl SessionStore for NoStorage {
    fn get_item(&self, _key: &str) -> Option<String> {
        None
    }

    fn set_item(&self, _key: &str, _value: &str) {}
}
