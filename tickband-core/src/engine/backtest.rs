//! The backtest driving loop — position state machine plus streaming
//! metric accumulation.
//!
//! Per tick i >= 1:
//! 1. ret = price[i] - price[i-1]
//! 2. estimator update with price[i]
//! 3. new stance from the validator against the updated statistics
//!    (never information from tick i+1)
//! 4. on a stance change: count the trade, classify the just-closed
//!    position as a win using the stance held during this interval
//! 5. pnl += old_stance * ret, before the stance changes
//! 6. equity peak / drawdown and return-series moments updated in place

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Stance, Tick};
use crate::estimators::Estimator;
use crate::validators::{Validator, ValidatorError};

use super::metrics::{sharpe_like_online, Welford};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("insufficient data: estimator requires {required} ticks, stream has {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error(transparent)]
    Validator(#[from] ValidatorError),
}

/// Immutable summary of one backtest run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestResult {
    pub pnl: f64,
    pub trades: usize,
    pub wins: usize,
    pub max_drawdown: f64,
    pub sharpe: f64,
    /// Ticks consumed, including the seed tick.
    pub ticks: usize,
    /// Cumulative P&L after each tick; starts at 0.0 before any return.
    pub equity_curve: Vec<f64>,
}

/// Run one estimator/validator pair over one tick stream.
///
/// The estimator and validator are owned by the run and consumed: state
/// is reset only at construction, never between runs.
pub fn run_backtest(
    ticks: &[Tick],
    mut estimator: Estimator,
    mut validator: Validator,
) -> Result<BacktestResult, EngineError> {
    let required = estimator.min_ticks();
    if ticks.len() < required {
        return Err(EngineError::InsufficientData {
            required,
            actual: ticks.len(),
        });
    }

    // Seed tick: advances the estimator, no return, no decision.
    estimator.update(ticks[0].price);

    let mut stance = Stance::Flat;
    let mut trades = 0usize;
    let mut wins = 0usize;
    let mut cum_pnl = 0.0f64;
    let mut peak = 0.0f64;
    let mut max_dd = 0.0f64;
    let mut returns = Welford::new();
    let mut equity_curve = Vec::with_capacity(ticks.len());
    equity_curve.push(0.0);

    for i in 1..ticks.len() {
        let price = ticks[i].price;
        let ret = price - ticks[i - 1].price;

        estimator.update(price);
        let new_stance = validator.stance(price, &estimator)?;

        if new_stance != stance {
            trades += 1;
            // The position being closed was held while `ret` was
            // realized; judge it on that interval.
            let won = (stance == Stance::Long && ret > 0.0)
                || (stance == Stance::Short && ret < 0.0);
            if won {
                wins += 1;
            }
        }

        let step = stance.as_sign() * ret;
        cum_pnl += step;
        returns.push(step);
        if cum_pnl > peak {
            peak = cum_pnl;
        }
        let dd = peak - cum_pnl;
        if dd > max_dd {
            max_dd = dd;
        }
        equity_curve.push(cum_pnl);

        stance = new_stance;
    }

    Ok(BacktestResult {
        pnl: cum_pnl,
        trades,
        wins,
        max_drawdown: max_dd,
        sharpe: sharpe_like_online(&returns),
        ticks: ticks.len(),
        equity_curve,
    })
}
