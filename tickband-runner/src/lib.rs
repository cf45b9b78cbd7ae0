//! TickBand Runner — configuration, orchestration, and reporting.
//!
//! Sits between the core engine and the CLI:
//! - `config`: serializable run configuration (TOML-loadable) with a
//!   content-addressable run id
//! - `runner`: source → estimator/validator → engine → summary
//! - `report`: text rendering and JSON export

pub mod config;
pub mod report;
pub mod runner;

pub use config::{
    parse_validator_name, ConfigError, EstimatorConfig, RunConfig, SourceConfig, ValidatorConfig,
    ValidatorKind,
};
pub use report::{render_backtest_text, render_scan_text, to_json};
pub use runner::{run_outlier_scan, run_single_backtest, RunError, RunSummary, ScanSummary};
