//! Run orchestration — wires source, estimator, validator, and engine
//! together and wraps the result with run metadata.
//!
//! Two entry points:
//! - `run_single_backtest()`: directional backtest, used by `tickband backtest`
//! - `run_outlier_scan()`: accept/reject scan, used by `tickband scan`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use tickband_core::engine::{self, EngineError};
use tickband_core::source::{CsvTickSource, SourceError, SyntheticTicks, TickSource};

use crate::config::{ConfigError, RunConfig, SourceConfig};

/// Errors from the runner.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("source error: {0}")]
    Source(#[from] SourceError),
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}

/// Complete summary of a backtest run: the spec'd result surface plus
/// run metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub run_id: String,
    pub generated_at: DateTime<Utc>,
    pub validator: String,
    pub window: Option<usize>,
    pub alpha: Option<f64>,
    pub threshold: Option<f64>,
    pub pnl: f64,
    pub trades: usize,
    pub wins: usize,
    pub max_drawdown: f64,
    pub sharpe: f64,
    pub ticks: usize,
    /// Malformed source rows dropped before the run.
    pub skipped_rows: usize,
}

/// Summary of an outlier scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSummary {
    pub run_id: String,
    pub generated_at: DateTime<Utc>,
    pub validator: String,
    pub ticks: usize,
    pub accepted: usize,
    pub skipped_rows: usize,
}

fn open_source(config: &SourceConfig) -> Box<dyn TickSource> {
    match config {
        SourceConfig::Csv { path } => Box::new(CsvTickSource::new(path)),
        SourceConfig::Synthetic { ticks, seed } => Box::new(SyntheticTicks::new(*ticks, *seed)),
    }
}

pub fn run_single_backtest(config: &RunConfig) -> Result<RunSummary, RunError> {
    config.validate()?;
    let mut source = open_source(&config.source);
    let ticks = source.ticks()?;

    let estimator = config.estimator.build()?;
    let validator = config.validator.build()?;
    let result = engine::run_backtest(&ticks, estimator, validator)?;

    Ok(RunSummary {
        run_id: config.run_id(),
        generated_at: Utc::now(),
        validator: config.validator.name().to_string(),
        window: config.estimator.window(),
        alpha: config.estimator.alpha(),
        threshold: config.validator.threshold(),
        pnl: result.pnl,
        trades: result.trades,
        wins: result.wins,
        max_drawdown: result.max_drawdown,
        sharpe: result.sharpe,
        ticks: result.ticks,
        skipped_rows: source.skipped(),
    })
}

pub fn run_outlier_scan(config: &RunConfig) -> Result<ScanSummary, RunError> {
    config.validate()?;
    let mut source = open_source(&config.source);
    let ticks = source.ticks()?;

    let estimator = config.estimator.build()?;
    let validator = config.validator.build()?;
    let result = engine::run_scan(&ticks, estimator, validator)?;

    Ok(ScanSummary {
        run_id: config.run_id(),
        generated_at: Utc::now(),
        validator: config.validator.name().to_string(),
        ticks: result.ticks,
        accepted: result.accepted,
        skipped_rows: source.skipped(),
    })
}
