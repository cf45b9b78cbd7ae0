//! Dispersion-threshold rule — "is the market calm enough" gate.
//!
//! Accepts iff the estimator's current standard deviation is below
//! `max_vol`. Independent of price level; there is no mean-reversion
//! band here.

use crate::domain::Decision;
use crate::estimators::Estimator;

#[derive(Debug, Clone)]
pub struct VolatilityRule {
    max_vol: f64,
}

impl VolatilityRule {
    pub fn new(max_vol: f64) -> Self {
        assert!(
            max_vol > 0.0 && max_vol.is_finite(),
            "max_vol must be positive and finite, got {max_vol}"
        );
        Self { max_vol }
    }

    pub fn max_vol(&self) -> f64 {
        self.max_vol
    }

    pub fn evaluate(&self, estimator: &Estimator) -> Decision {
        if !estimator.ready() {
            return Decision::Reject;
        }
        if estimator.stddev() < self.max_vol {
            Decision::Accept
        } else {
            Decision::Reject
        }
    }
}
