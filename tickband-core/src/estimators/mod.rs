//! Online estimators — running mean and dispersion of a price stream.
//!
//! Two interchangeable strategies behind one closed enum:
//! - [`EwmaEstimator`]: geometric decay, O(1) state, unbounded horizon
//! - [`WindowEstimator`]: exact recompute over the last N prices
//!
//! Contract: callers must not query `mean()`/`stddev()` before
//! `ready()` returns true.

pub mod ewma;
pub mod window;

pub use ewma::EwmaEstimator;
pub use window::WindowEstimator;

/// Floor applied under variances before taking a square root, so a
/// collapsed (zero-variance) window never yields a zero divisor.
pub const VARIANCE_EPSILON: f64 = 1e-12;

/// Closed set of estimator strategies.
///
/// The variant set is small, fixed, and known at compile time, so it is
/// dispatched as a sum type rather than a trait object.
#[derive(Debug, Clone)]
pub enum Estimator {
    Ewma(EwmaEstimator),
    Window(WindowEstimator),
}

impl Estimator {
    /// Advance the estimate by one observation.
    pub fn update(&mut self, price: f64) {
        match self {
            Self::Ewma(e) => e.update(price),
            Self::Window(e) => e.update(price),
        }
    }

    /// Whether mean/stddev are queryable yet.
    pub fn ready(&self) -> bool {
        match self {
            Self::Ewma(e) => e.ready(),
            Self::Window(e) => e.ready(),
        }
    }

    pub fn mean(&self) -> f64 {
        match self {
            Self::Ewma(e) => e.mean(),
            Self::Window(e) => e.mean(),
        }
    }

    /// Standard deviation of the current estimate. Never negative.
    pub fn stddev(&self) -> f64 {
        match self {
            Self::Ewma(e) => e.stddev(),
            Self::Window(e) => e.stddev(),
        }
    }

    /// Minimum stream length needed to seed the estimator and produce
    /// at least one decision.
    pub fn min_ticks(&self) -> usize {
        match self {
            Self::Ewma(_) => 2,
            Self::Window(e) => e.capacity() + 2,
        }
    }
}
