//! Tick-driven count-up used by the stats block.
//!
//! The animation knows nothing about timers: the caller invokes
//! [`CounterAnimation::advance`] once per tick and writes the returned value.

use crate::config::{COUNTER_DURATION_MS, COUNTER_TICK_MS};
use crate::dom::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Intermediate value, already truncated for display.
    Running(i64),
    /// Final value; the timer should stop.
    Done(i64),
}

impl Tick {
    pub fn value(self) -> i64 {
        match self {
            Tick::Running(v) | Tick::Done(v) => v,
        }
    }

    pub fn is_done(self) -> bool {
        matches!(self, Tick::Done(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    current: f64,
    target: i64,
    increment: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: i64, duration_ms: u32, tick_ms: u32) -> Self {
        let steps = f64::from(duration_ms) / f64::from(tick_ms);
        Self {
            current: 0.0,
            target,
            increment: target as f64 / steps,
            finished: false,
        }
    }

    /// Counter using the site-wide duration and tick interval.
    pub fn with_defaults(target: i64) -> Self {
        Self::new(target, COUNTER_DURATION_MS, COUNTER_TICK_MS)
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn advance(&mut self) -> Tick {
        if self.finished {
            return Tick::Done(self.target);
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.finished = true;
            Tick::Done(self.target)
        } else {
            Tick::Running(self.current.floor() as i64)
        }
    }

    /// Advances one tick and writes the value into `node`. Returns `true`
    /// once the final value has been written.
    pub fn tick_into(&mut self, node: &impl Node) -> bool {
        let tick = self.advance();
        node.set_text(&tick.value().to_string());
        tick.is_done()
    }
}

/// Reads a `data-target` value the way `parseInt` does without a radix:
/// optional leading whitespace and sign, a `0x`/`0X` prefix switching to
/// hex, then as many digits as are present. Values past the `i64` range
/// saturate.
pub fn parse_target(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let (radix, digits) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };
    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let saturated = if negative { i64::MIN } else { i64::MAX };
    let value = digits[..end].chars().try_fold(0i64, |acc, c| {
        let digit = i64::from(c.to_digit(radix)?);
        let acc = acc.checked_mul(i64::from(radix))?;
        if negative {
            acc.checked_sub(digit)
        } else {
            acc.checked_add(digit)
        }
    });
    Some(value.unwrap_or(saturated))
}
