use crate::config::PARALLAX_RANGE;
use crate::dom::Node;

/// Hero background nudged toward the pointer.
pub struct Parallax<N: Node> {
    background: N,
}

impl<N: Node> Parallax<N> {
    /// Disabled when the element is missing or the user prefers reduced motion.
    pub fn bind(background: Option<N>, prefers_reduced_motion: bool) -> Option<Self> {
        if prefers_reduced_motion {
            return None;
        }
        background.map(|background| Self { background })
    }

    pub fn on_pointer_move(&self, client_x: f64, client_y: f64, width: f64, height: f64) {
        let (x, y) = offset(client_x, client_y, width, height);
        self.background
            .set_style("transform", &format!("translate({}px, {}px)", x, y));
    }
}

/// Translation for a pointer position, within `±PARALLAX_RANGE / 2` per axis.
pub fn offset(client_x: f64, client_y: f64, width: f64, height: f64) -> (f64, f64) {
    let x = (client_x / width - 0.5) * PARALLAX_RANGE;
    let y = (client_y / height - 0.5) * PARALLAX_RANGE;
    (x, y)
}
