/// Page-wide flags shared by the behaviors.
///
/// One value is created by [`crate::web::start`] and handed to every
/// behavior that needs it, so each behavior can be driven on its own in tests.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SiteState {
    /// Set by the first qualifying stats intersection, never cleared.
    pub stats_animated: bool,
    /// Set when the exit-intent overlay is shown, never cleared.
    pub exit_intent_shown: bool,
    /// Last vertical scroll offset seen by the header listener.
    pub last_scroll: f64,
    /// Timestamp (ms since epoch) the dwell timer started at.
    pub dwell_started_at: Option<f64>,
}

impl SiteState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_dwell(&mut self, now_ms: f64) {
        self.dwell_started_at = Some(now_ms);
    }

    /// Milliseconds elapsed since the dwell timer started, if it has.
    pub fn dwell_elapsed(&self, now_ms: f64) -> Option<f64> {
        self.dwell_started_at.map(|started| now_ms - started)
    }
}
