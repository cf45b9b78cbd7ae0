//! Validator rules — per-tick accept/reject and directional decisions.
//!
//! The rule set is small, fixed, and known at compile time, so it is a
//! closed sum type dispatched by `evaluate`/`stance` rather than a trait
//! object. Rules never see engine or position state; they consume the
//! current price and the current estimator statistics (plus, for the
//! stateful rules, their own small persistent state).

pub mod band;
pub mod imbalance;
pub mod persistence;
pub mod volatility;

pub use band::BandRule;
pub use imbalance::ImbalanceRule;
pub use persistence::PersistenceRule;
pub use volatility::VolatilityRule;

use crate::domain::{Decision, Stance};
use crate::estimators::Estimator;
use thiserror::Error;

/// Defined error conditions for malformed validator input.
///
/// A rule must never panic on bad input; an out-of-range price is
/// returned to the caller as an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidatorError {
    #[error("price must be finite and positive, got {0}")]
    InvalidPrice(f64),
}

/// Closed set of validator rules.
#[derive(Debug, Clone)]
pub enum Validator {
    Band(BandRule),
    Volatility(VolatilityRule),
    Persistence(PersistenceRule),
    Imbalance(ImbalanceRule),
}

impl Validator {
    /// Canonical lowercase name used in configuration and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Band(_) => "band",
            Self::Volatility(_) => "volatility",
            Self::Persistence(_) => "persistence",
            Self::Imbalance(_) => "imbalance",
        }
    }

    /// Classify the current price as Accept or Reject.
    ///
    /// Rules that depend on estimator statistics return Reject while the
    /// estimator is not ready.
    pub fn evaluate(
        &mut self,
        price: f64,
        estimator: &Estimator,
    ) -> Result<Decision, ValidatorError> {
        check_price(price)?;
        Ok(match self {
            Self::Band(r) => r.evaluate(price, estimator),
            Self::Volatility(r) => r.evaluate(estimator),
            Self::Persistence(r) => r.evaluate(price),
            Self::Imbalance(r) => r.evaluate(price),
        })
    }

    /// Directional stance for backtesting.
    ///
    /// The band rule carries sticky hysteresis (it only flips on a clear
    /// break of the opposite band). The pure rules drive a long/flat
    /// strategy: Accept maps to Long, Reject to Flat.
    pub fn stance(&mut self, price: f64, estimator: &Estimator) -> Result<Stance, ValidatorError> {
        check_price(price)?;
        if let Self::Band(r) = self {
            return Ok(r.stance(price, estimator));
        }
        Ok(match self.evaluate(price, estimator)? {
            Decision::Accept => Stance::Long,
            Decision::Reject => Stance::Flat,
        })
    }
}

fn check_price(price: f64) -> Result<(), ValidatorError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(ValidatorError::InvalidPrice(price));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimators::EwmaEstimator;

    fn seeded_estimator() -> Estimator {
        let mut e = Estimator::Ewma(EwmaEstimator::new(0.5));
        e.update(100.0);
        e.update(101.0);
        e
    }

    #[test]
    fn non_finite_price_is_an_error_not_a_panic() {
        let est = seeded_estimator();
        let mut v = Validator::Band(BandRule::new(2.5));
        let err = v.evaluate(f64::NAN, &est).unwrap_err();
        assert!(matches!(err, ValidatorError::InvalidPrice(p) if p.is_nan()));
        assert!(v.stance(-5.0, &est).is_err());
    }

    #[test]
    fn names_are_canonical() {
        assert_eq!(Validator::Band(BandRule::new(1.0)).name(), "band");
        assert_eq!(
            Validator::Volatility(VolatilityRule::new(0.02)).name(),
            "volatility"
        );
        assert_eq!(
            Validator::Persistence(PersistenceRule::new(100.0, 3)).name(),
            "persistence"
        );
        assert_eq!(
            Validator::Imbalance(ImbalanceRule::new(0.6)).name(),
            "imbalance"
        );
    }

    #[test]
    fn pure_rules_map_accept_to_long() {
        let est = seeded_estimator();
        // Persistence with hold_ticks = 1 activates immediately above level.
        let mut v = Validator::Persistence(PersistenceRule::new(100.0, 1));
        assert_eq!(v.stance(101.0, &est).unwrap(), Stance::Long);
        assert_eq!(v.stance(99.0, &est).unwrap(), Stance::Flat);
    }
}
