use chrono::Datelike;

use crate::dom::Node;

pub const LOADED_CLASS: &str = "loaded";

/// Footer copyright year.
pub fn stamp_year<N: Node>(target: Option<&N>, year: i32) {
    if let Some(target) = target {
        target.set_text(&year.to_string());
    }
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

pub fn mark_loaded<N: Node>(body: &N) {
    body.add_class(LOADED_CLASS);
}
