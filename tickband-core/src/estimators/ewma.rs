//! Exponentially weighted mean/variance estimator.
//!
//! Recurrence (delta taken against the pre-update mean):
//!   delta = price - mean
//!   mean += alpha * delta
//!   var   = (1 - alpha) * (var + alpha * delta^2)
//!
//! Older observations decay geometrically: after k ticks an observation
//! retains weight (1 - alpha)^k, so the effective memory horizon is
//! roughly 1/alpha ticks.

use super::VARIANCE_EPSILON;

#[derive(Debug, Clone)]
pub struct EwmaEstimator {
    alpha: f64,
    mean: f64,
    var: f64,
    samples: usize,
}

impl EwmaEstimator {
    pub fn new(alpha: f64) -> Self {
        assert!(
            alpha > 0.0 && alpha < 1.0,
            "EWMA alpha must be in (0, 1), got {alpha}"
        );
        Self {
            alpha,
            mean: 0.0,
            var: 0.0,
            samples: 0,
        }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn update(&mut self, price: f64) {
        if self.samples == 0 {
            // Seed observation: mean starts at the first price, variance
            // at zero. No decision is taken on the seed tick.
            self.mean = price;
            self.var = 0.0;
        } else {
            let delta = price - self.mean;
            self.mean += self.alpha * delta;
            self.var = (1.0 - self.alpha) * (self.var + self.alpha * delta * delta);
        }
        self.samples += 1;
    }

    /// Ready from the second observation on. The seed observation only
    /// initializes the mean.
    pub fn ready(&self) -> bool {
        self.samples >= 2
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn stddev(&self) -> f64 {
        self.var.max(VARIANCE_EPSILON).sqrt()
    }

    pub fn variance(&self) -> f64 {
        self.var
    }
}
