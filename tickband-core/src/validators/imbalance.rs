//! Imbalance rule — illustrative placeholder.
//!
//! No real order-book data flows through this core, so the rule emits a
//! synthetic imbalance from price parity and accepts when it exceeds a
//! threshold. A toy, kept for parity with the original rule set; not a
//! contract-bearing component.

use crate::domain::Decision;

#[derive(Debug, Clone)]
pub struct ImbalanceRule {
    threshold: f64,
}

impl ImbalanceRule {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn evaluate(&self, price: f64) -> Decision {
        let imbalance = if price % 2.0 > 1.0 { 0.7 } else { 0.4 };
        if imbalance > self.threshold {
            Decision::Accept
        } else {
            Decision::Reject
        }
    }
}
