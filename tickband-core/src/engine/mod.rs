//! Backtest engine — single-pass driving loop and streaming metrics.
//!
//! One sequential pass per run: tick in, estimator update, stance
//! decision, P&L accrual. No suspension points, no shared state, and
//! bounded memory (the return series is folded through an online
//! variance accumulator rather than materialized).

pub mod backtest;
pub mod metrics;
pub mod scan;

pub use backtest::{run_backtest, BacktestResult, EngineError};
pub use metrics::{max_drawdown, sharpe_like, Welford};
pub use scan::{run_scan, ScanResult};
