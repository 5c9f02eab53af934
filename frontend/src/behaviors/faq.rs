use crate::dom::Node;

pub const OPEN_CLASS: &str = "active";
pub const EXPANDED_ATTR: &str = "aria-expanded";

struct FaqEntry<N> {
    question: N,
    item: N,
}

/// Exclusive accordion over `.faq-question` buttons and their parent items.
pub struct Accordion<N: Node> {
    entries: Vec<FaqEntry<N>>,
}

impl<N: Node> Accordion<N> {
    /// Takes `(question, parent item)` pairs in page order.
    pub fn new(pairs: impl IntoIterator<Item = (N, N)>) -> Self {
        Self {
            entries: pairs
                .into_iter()
                .map(|(question, item)| FaqEntry { question, item })
                .collect(),
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.entries
            .get(index)
            .is_some_and(|entry| entry.item.has_class(OPEN_CLASS))
    }

    /// Click on the question at `index`. Collapses everything, then opens the
    /// clicked item unless it was the one already open.
    pub fn click(&self, index: usize) {
        let Some(clicked) = self.entries.get(index) else {
            return;
        };
        let was_open = clicked.item.has_class(OPEN_CLASS);

        for entry in &self.entries {
            entry.item.remove_class(OPEN_CLASS);
            entry.question.set_attribute(EXPANDED_ATTR, "false");
        }

        if !was_open {
            clicked.item.add_class(OPEN_CLASS);
            clicked.question.set_attribute(EXPANDED_ATTR, "true");
        }
    }
}
