//! Tick sources — the narrow seam between the core and concrete formats.
//!
//! The engine never depends on a file layout: anything that can produce
//! an ordered `Vec<Tick>` is a source. Tests substitute [`VecSource`];
//! the CLI wires up [`CsvTickSource`] or [`SyntheticTicks`].

pub mod csv_source;
pub mod synthetic;

pub use csv_source::CsvTickSource;
pub use synthetic::SyntheticTicks;

use crate::domain::Tick;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("tick source unavailable: {0}")]
    Unavailable(String),
}

/// Produces one ordered, fully-validated tick stream.
///
/// Malformed records are a local concern: implementations skip them and
/// report the count through `skipped()`. Only a failed open/read is an
/// error.
pub trait TickSource {
    fn ticks(&mut self) -> Result<Vec<Tick>, SourceError>;

    /// Number of malformed rows dropped while producing the stream.
    fn skipped(&self) -> usize {
        0
    }
}

/// In-memory source for tests and programmatic use.
#[derive(Debug, Clone)]
pub struct VecSource {
    ticks: Vec<Tick>,
}

impl VecSource {
    pub fn new(ticks: Vec<Tick>) -> Self {
        Self { ticks }
    }

    /// Build from bare prices, with timestamps at 1000 ns spacing.
    pub fn from_prices(prices: &[f64]) -> Self {
        let ticks = prices
            .iter()
            .enumerate()
            .map(|(i, &price)| Tick::new(1_000 * i as u64, price))
            .collect();
        Self { ticks }
    }
}

impl TickSource for VecSource {
    fn ticks(&mut self) -> Result<Vec<Tick>, SourceError> {
        Ok(self.ticks.clone())
    }
}
