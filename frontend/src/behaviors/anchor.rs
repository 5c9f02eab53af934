use crate::config::ANCHOR_SCROLL_OFFSET;

/// Selector to scroll to for an in-page link, or `None` when the click should
/// be left alone: a bare `#`, or a link with its own inline `onclick`.
pub fn scroll_selector<'a>(href: &'a str, inline_onclick: Option<&str>) -> Option<&'a str> {
    if href == "#" || inline_onclick.is_some_and(|handler| !handler.is_empty()) {
        return None;
    }
    href.starts_with('#').then_some(href)
}

/// Document offset to scroll to so the target clears the fixed header.
pub fn scroll_top(target_viewport_top: f64, scroll_y: f64) -> f64 {
    target_viewport_top + scroll_y - ANCHOR_SCROLL_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_bare_hash_and_inline_handlers() {
        assert_eq!(scroll_selector("#", None), None);
        assert_eq!(scroll_selector("#pricing", Some("openModal()")), None);
        assert_eq!(scroll_selector("#pricing", Some("")), Some("#pricing"));
        assert_eq!(scroll_selector("#pricing", None), Some("#pricing"));
        assert_eq!(scroll_selector("/about", None), None);
    }

    #[test]
    fn offsets_for_header() {
        assert_eq!(scroll_top(300.0, 1200.0), 1420.0);
        assert_eq!(scroll_top(-100.0, 1200.0), 1020.0);
    }
}
