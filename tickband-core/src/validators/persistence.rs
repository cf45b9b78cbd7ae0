//! Persistence rule — a debounce filter over a raw boolean signal.
//!
//! Accepts only after `price > level` has held for `hold_ticks`
//! consecutive ticks. The counter and active flag reset the instant the
//! condition breaks.

use crate::domain::Decision;

#[derive(Debug, Clone)]
pub struct PersistenceRule {
    level: f64,
    hold_ticks: u32,
    counter: u32,
    active: bool,
}

impl PersistenceRule {
    pub fn new(level: f64, hold_ticks: u32) -> Self {
        assert!(hold_ticks >= 1, "hold_ticks must be >= 1, got {hold_ticks}");
        assert!(level.is_finite(), "level must be finite, got {level}");
        Self {
            level,
            hold_ticks,
            counter: 0,
            active: false,
        }
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn hold_ticks(&self) -> u32 {
        self.hold_ticks
    }

    pub fn evaluate(&mut self, price: f64) -> Decision {
        if price > self.level {
            self.counter += 1;
            if self.counter >= self.hold_ticks {
                self.active = true;
            }
        } else {
            self.counter = 0;
            self.active = false;
        }
        if self.active {
            Decision::Accept
        } else {
            Decision::Reject
        }
    }
}
