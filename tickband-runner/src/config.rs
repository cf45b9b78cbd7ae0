//! Serializable run configuration.
//!
//! Captures everything needed to reproduce a run: tick source, estimator
//! parameters, validator parameters. Two runs with identical configs get
//! the same content-addressable `run_id`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use tickband_core::estimators::{Estimator, EwmaEstimator, WindowEstimator};
use tickband_core::validators::{
    BandRule, ImbalanceRule, PersistenceRule, Validator, VolatilityRule,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("alpha must be in (0, 1), got {0}")]
    InvalidAlpha(f64),

    #[error("window size must be >= 2, got {0}")]
    InvalidWindow(usize),

    #[error("threshold must be positive and finite, got {0}")]
    InvalidThreshold(f64),

    #[error("max_vol must be positive and finite, got {0}")]
    InvalidMaxVol(f64),

    #[error("hold_ticks must be >= 1, got {0}")]
    InvalidHoldTicks(u32),

    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Where the tick stream comes from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceConfig {
    /// Two-column CSV: time token, price.
    Csv { path: PathBuf },

    /// Seeded synthetic generator.
    Synthetic { ticks: usize, seed: u64 },
}

/// Estimator selection and parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EstimatorConfig {
    /// Exponentially weighted, decay rate alpha in (0, 1).
    Ewma { alpha: f64 },

    /// Sliding window of the last `size` prices, size >= 2.
    Window { size: usize },
}

impl EstimatorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Self::Ewma { alpha } => {
                if !(alpha > 0.0 && alpha < 1.0) || !alpha.is_finite() {
                    return Err(ConfigError::InvalidAlpha(alpha));
                }
            }
            Self::Window { size } => {
                if size < 2 {
                    return Err(ConfigError::InvalidWindow(size));
                }
            }
        }
        Ok(())
    }

    pub fn build(&self) -> Result<Estimator, ConfigError> {
        self.validate()?;
        Ok(match *self {
            Self::Ewma { alpha } => Estimator::Ewma(EwmaEstimator::new(alpha)),
            Self::Window { size } => Estimator::Window(WindowEstimator::new(size)),
        })
    }

    pub fn alpha(&self) -> Option<f64> {
        match *self {
            Self::Ewma { alpha } => Some(alpha),
            Self::Window { .. } => None,
        }
    }

    pub fn window(&self) -> Option<usize> {
        match *self {
            Self::Ewma { .. } => None,
            Self::Window { size } => Some(size),
        }
    }
}

/// Validator selection and parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidatorConfig {
    Band { threshold: f64 },
    Volatility { max_vol: f64 },
    Persistence { level: f64, hold_ticks: u32 },
    Imbalance { threshold: f64 },
}

impl ValidatorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Self::Band { threshold } | Self::Imbalance { threshold } => {
                if !(threshold > 0.0) || !threshold.is_finite() {
                    return Err(ConfigError::InvalidThreshold(threshold));
                }
            }
            Self::Volatility { max_vol } => {
                if !(max_vol > 0.0) || !max_vol.is_finite() {
                    return Err(ConfigError::InvalidMaxVol(max_vol));
                }
            }
            Self::Persistence { hold_ticks, .. } => {
                if hold_ticks < 1 {
                    return Err(ConfigError::InvalidHoldTicks(hold_ticks));
                }
            }
        }
        Ok(())
    }

    pub fn build(&self) -> Result<Validator, ConfigError> {
        self.validate()?;
        Ok(match *self {
            Self::Band { threshold } => Validator::Band(BandRule::new(threshold)),
            Self::Volatility { max_vol } => Validator::Volatility(VolatilityRule::new(max_vol)),
            Self::Persistence { level, hold_ticks } => {
                Validator::Persistence(PersistenceRule::new(level, hold_ticks))
            }
            Self::Imbalance { threshold } => Validator::Imbalance(ImbalanceRule::new(threshold)),
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Band { .. } => "band",
            Self::Volatility { .. } => "volatility",
            Self::Persistence { .. } => "persistence",
            Self::Imbalance { .. } => "imbalance",
        }
    }

    /// The validator's primary threshold parameter, where one exists.
    pub fn threshold(&self) -> Option<f64> {
        match *self {
            Self::Band { threshold } | Self::Imbalance { threshold } => Some(threshold),
            Self::Volatility { max_vol } => Some(max_vol),
            Self::Persistence { .. } => None,
        }
    }
}

/// Complete configuration for a single run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunConfig {
    pub source: SourceConfig,
    pub estimator: EstimatorConfig,
    pub validator: ValidatorConfig,
}

impl RunConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.estimator.validate()?;
        self.validator.validate()
    }

    /// Deterministic content-addressable id for this configuration.
    ///
    /// Two runs with identical configs share a run id, so downstream
    /// artifacts can be deduplicated.
    pub fn run_id(&self) -> String {
        let json = serde_json::to_string(self).expect("RunConfig serialization failed");
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }
}

/// Validator families addressable by name from the CLI surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatorKind {
    Band,
    Volatility,
    Persistence,
    Imbalance,
}

/// The documented fallback for unrecognized validator names.
pub const DEFAULT_VALIDATOR: ValidatorKind = ValidatorKind::Band;

/// Resolve a free-form validator name.
///
/// An unrecognized name falls back to the default and returns a warning
/// for the caller to surface; it never aborts the run.
pub fn parse_validator_name(name: &str) -> (ValidatorKind, Option<String>) {
    match name.trim().to_ascii_lowercase().as_str() {
        "band" | "ewma" | "zscore" => (ValidatorKind::Band, None),
        "volatility" | "vol" => (ValidatorKind::Volatility, None),
        "persistence" | "persist" => (ValidatorKind::Persistence, None),
        "imbalance" => (ValidatorKind::Imbalance, None),
        other => (
            DEFAULT_VALIDATOR,
            Some(format!(
                "unrecognized validator '{other}', falling back to 'band'"
            )),
        ),
    }
}
