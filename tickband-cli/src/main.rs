//! TickBand CLI — outlier scans and directional backtests over a tick
//! stream.
//!
//! Commands:
//! - `backtest` — run the position state machine over a CSV file or a
//!   seeded synthetic stream and report P&L, trades, drawdown, Sharpe
//! - `scan` — run a validator in accept/reject mode and report counts

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tickband_runner::config::{
    parse_validator_name, EstimatorConfig, RunConfig, SourceConfig, ValidatorConfig, ValidatorKind,
};
use tickband_runner::report::{render_backtest_text, render_scan_text, to_json};
use tickband_runner::runner::{run_outlier_scan, run_single_backtest};

#[derive(Parser)]
#[command(
    name = "tickband",
    about = "TickBand CLI — streaming price validation and backtesting"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Backtest a directional rule over a tick stream.
    Backtest(RunArgs),
    /// Scan a tick stream and count validator accepts.
    Scan(RunArgs),
}

#[derive(Args)]
struct RunArgs {
    /// Path to a TOML run config. Overrides all other flags.
    #[arg(long)]
    config: Option<PathBuf>,

    /// CSV tick file (time token, price).
    #[arg(long)]
    data: Option<PathBuf>,

    /// Generate a synthetic stream of this many ticks instead.
    #[arg(long)]
    synthetic: Option<usize>,

    /// Seed for the synthetic stream.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Validator: band, volatility, persistence, imbalance.
    /// Unrecognized names fall back to 'band' with a warning.
    #[arg(long, default_value = "band")]
    validator: String,

    /// Use a sliding window of this size instead of EWMA.
    #[arg(long)]
    window: Option<usize>,

    /// EWMA decay rate, in (0, 1).
    #[arg(long, default_value_t = 0.05)]
    alpha: f64,

    /// Band z-score threshold.
    #[arg(long, default_value_t = 2.5)]
    threshold: f64,

    /// Volatility gate: maximum allowed standard deviation.
    #[arg(long, default_value_t = 0.02)]
    max_vol: f64,

    /// Persistence rule: price level that must be exceeded.
    #[arg(long, default_value_t = 100.0)]
    level: f64,

    /// Persistence rule: consecutive ticks required above the level.
    #[arg(long, default_value_t = 3)]
    hold_ticks: u32,

    /// Imbalance rule threshold.
    #[arg(long, default_value_t = 0.6)]
    imbalance_threshold: f64,

    /// Emit JSON instead of text.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Write the JSON report to this file as well.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Backtest(args) => run_backtest_cmd(args),
        Commands::Scan(args) => run_scan_cmd(args),
    }
}

fn build_config(args: &RunArgs) -> Result<RunConfig> {
    if let Some(config_path) = &args.config {
        return RunConfig::from_toml_file(config_path)
            .with_context(|| format!("loading config {}", config_path.display()));
    }

    let source = match (&args.data, args.synthetic) {
        (Some(path), None) => SourceConfig::Csv { path: path.clone() },
        (None, Some(ticks)) => SourceConfig::Synthetic {
            ticks,
            seed: args.seed,
        },
        (Some(_), Some(_)) => bail!("--data and --synthetic are mutually exclusive"),
        (None, None) => bail!("one of --data or --synthetic is required (or use --config)"),
    };

    let estimator = match args.window {
        Some(size) => EstimatorConfig::Window { size },
        None => EstimatorConfig::Ewma { alpha: args.alpha },
    };

    let (kind, warning) = parse_validator_name(&args.validator);
    if let Some(warning) = warning {
        eprintln!("warning: {warning}");
    }
    let validator = match kind {
        ValidatorKind::Band => ValidatorConfig::Band {
            threshold: args.threshold,
        },
        ValidatorKind::Volatility => ValidatorConfig::Volatility {
            max_vol: args.max_vol,
        },
        ValidatorKind::Persistence => ValidatorConfig::Persistence {
            level: args.level,
            hold_ticks: args.hold_ticks,
        },
        ValidatorKind::Imbalance => ValidatorConfig::Imbalance {
            threshold: args.imbalance_threshold,
        },
    };

    let config = RunConfig {
        source,
        estimator,
        validator,
    };
    config.validate()?;
    Ok(config)
}

fn emit(json_report: String, text_report: String, args: &RunArgs) -> Result<()> {
    if let Some(path) = &args.output {
        std::fs::write(path, &json_report)
            .with_context(|| format!("writing report to {}", path.display()))?;
    }
    if args.json {
        println!("{json_report}");
    } else {
        print!("{text_report}");
    }
    Ok(())
}

fn run_backtest_cmd(args: RunArgs) -> Result<()> {
    let config = build_config(&args)?;
    let summary = run_single_backtest(&config).context("backtest failed")?;
    if summary.skipped_rows > 0 {
        eprintln!(
            "warning: skipped {} malformed rows from the tick source",
            summary.skipped_rows
        );
    }
    emit(to_json(&summary)?, render_backtest_text(&summary), &args)
}

fn run_scan_cmd(args: RunArgs) -> Result<()> {
    let config = build_config(&args)?;
    let summary = run_outlier_scan(&config).context("scan failed")?;
    if summary.skipped_rows > 0 {
        eprintln!(
            "warning: skipped {} malformed rows from the tick source",
            summary.skipped_rows
        );
    }
    emit(to_json(&summary)?, render_scan_text(&summary), &args)
}
