//! Outlier scan — run a validator over a stream and count accepts.
//!
//! The scan is the detection half of the system: no position, no P&L,
//! just the per-tick accept/reject classification.

use serde::{Deserialize, Serialize};

use crate::domain::Tick;
use crate::estimators::Estimator;
use crate::validators::Validator;

use super::backtest::EngineError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// Ticks examined.
    pub ticks: usize,
    /// Ticks the validator classified as Accept.
    pub accepted: usize,
}

pub fn run_scan(
    ticks: &[Tick],
    mut estimator: Estimator,
    mut validator: Validator,
) -> Result<ScanResult, EngineError> {
    let mut accepted = 0usize;
    for tick in ticks {
        estimator.update(tick.price);
        if validator.evaluate(tick.price, &estimator)?.is_accept() {
            accepted += 1;
        }
    }
    Ok(ScanResult {
        ticks: ticks.len(),
        accepted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimators::EwmaEstimator;
    use crate::validators::{BandRule, PersistenceRule};

    fn ticks_from(prices: &[f64]) -> Vec<Tick> {
        prices
            .iter()
            .enumerate()
            .map(|(i, &p)| Tick::new(1_000 * i as u64, p))
            .collect()
    }

    #[test]
    fn counts_band_outliers() {
        // Quiet stream with one violent spike.
        let mut prices = vec![100.0; 50];
        prices.push(140.0);
        prices.extend(vec![100.0; 5]);
        let result = run_scan(
            &ticks_from(&prices),
            Estimator::Ewma(EwmaEstimator::new(0.05)),
            Validator::Band(BandRule::new(2.5)),
        )
        .unwrap();
        assert_eq!(result.ticks, 56);
        assert!(result.accepted >= 1);
        assert!(result.accepted < 10);
    }

    #[test]
    fn persistence_scan_counts_held_ticks() {
        let prices = [99.0, 101.0, 101.0, 101.0, 101.0, 99.0];
        let result = run_scan(
            &ticks_from(&prices),
            Estimator::Ewma(EwmaEstimator::new(0.5)),
            Validator::Persistence(PersistenceRule::new(100.0, 3)),
        )
        .unwrap();
        // Activates on the 3rd consecutive tick above 100, stays active
        // for the 4th, drops on the last.
        assert_eq!(result.accepted, 2);
    }

    #[test]
    fn empty_stream_scans_to_zero() {
        let result = run_scan(
            &[],
            Estimator::Ewma(EwmaEstimator::new(0.05)),
            Validator::Band(BandRule::new(2.5)),
        )
        .unwrap();
        assert_eq!(result.ticks, 0);
        assert_eq!(result.accepted, 0);
    }
}
