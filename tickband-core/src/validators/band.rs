//! Band / z-score rule.
//!
//! Outlier form: Accept iff |z| > threshold, with
//! z = (price - mean) / (EPSILON + stddev).
//!
//! Directional form: Long above the upper band, Short below the lower
//! band, otherwise hold the previous stance. The hold is sticky on
//! purpose (hysteresis): a position never flattens merely because price
//! re-enters the band, it only flips on a clear break of the opposite
//! band.

use crate::domain::{Decision, Stance};
use crate::estimators::Estimator;

/// Additive floor on the z-score denominator.
const Z_DENOM_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone)]
pub struct BandRule {
    threshold: f64,
    last_stance: Stance,
}

impl BandRule {
    pub fn new(threshold: f64) -> Self {
        assert!(
            threshold > 0.0 && threshold.is_finite(),
            "band threshold must be positive and finite, got {threshold}"
        );
        Self {
            threshold,
            last_stance: Stance::Flat,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn evaluate(&self, price: f64, estimator: &Estimator) -> Decision {
        if !estimator.ready() {
            return Decision::Reject;
        }
        let z = (price - estimator.mean()) / (Z_DENOM_EPSILON + estimator.stddev());
        if z.abs() > self.threshold {
            Decision::Accept
        } else {
            Decision::Reject
        }
    }

    pub fn stance(&mut self, price: f64, estimator: &Estimator) -> Stance {
        if !estimator.ready() {
            return self.last_stance;
        }
        let half_band = self.threshold * estimator.stddev();
        let mean = estimator.mean();
        if price > mean + half_band {
            self.last_stance = Stance::Long;
        } else if price < mean - half_band {
            self.last_stance = Stance::Short;
        }
        // Inside the band: hold whatever we held before.
        self.last_stance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimators::EwmaEstimator;

    /// alpha = 0.5 over [100, 101] gives mean 100.5, stddev 0.5.
    fn seeded() -> Estimator {
        let mut e = Estimator::Ewma(EwmaEstimator::new(0.5));
        e.update(100.0);
        e.update(101.0);
        e
    }

    #[test]
    fn accepts_only_beyond_threshold() {
        let est = seeded();
        let rule = BandRule::new(2.0);
        // z for 102.0: (102 - 100.5) / 0.5 = 3.0
        assert_eq!(rule.evaluate(102.0, &est), Decision::Accept);
        // z for 100.8: 0.6
        assert_eq!(rule.evaluate(100.8, &est), Decision::Reject);
        // Symmetric on the downside: z for 99.0 = -3.0
        assert_eq!(rule.evaluate(99.0, &est), Decision::Accept);
    }

    #[test]
    fn rejects_before_estimator_ready() {
        let est = Estimator::Ewma(EwmaEstimator::new(0.5));
        let rule = BandRule::new(1.0);
        assert_eq!(rule.evaluate(100.0, &est), Decision::Reject);
    }

    #[test]
    fn directional_band_breaks() {
        let est = seeded();
        let mut rule = BandRule::new(1.0);
        // Upper band at 101.0, lower at 100.0.
        assert_eq!(rule.stance(101.5, &est), Stance::Long);
        assert_eq!(rule.stance(99.5, &est), Stance::Short);
    }

    #[test]
    fn stance_is_sticky_inside_band() {
        let est = seeded();
        let mut rule = BandRule::new(1.0);
        assert_eq!(rule.stance(101.5, &est), Stance::Long);
        // Back inside the band: stays long, does not flatten.
        assert_eq!(rule.stance(100.5, &est), Stance::Long);
        assert_eq!(rule.stance(100.2, &est), Stance::Long);
        // Clear break of the opposite band flips it.
        assert_eq!(rule.stance(99.5, &est), Stance::Short);
    }

    #[test]
    fn exact_band_touch_does_not_flip() {
        let est = seeded();
        let mut rule = BandRule::new(1.0);
        // Upper band sits exactly at 101.0; a touch is not a break.
        assert_eq!(rule.stance(101.0, &est), Stance::Flat);
    }
}
