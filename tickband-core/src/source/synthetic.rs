//! Seeded synthetic tick generator for smoke runs and benches.
//!
//! Prices are uniform on 100.0..102.0 in 0.1 steps at 1000 ns spacing.
//! The generator is bounded and fully determined by its seed, so two
//! runs with the same configuration see the same stream.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::Tick;

use super::{SourceError, TickSource};

pub const DEFAULT_SEED: u64 = 42;

#[derive(Debug, Clone)]
pub struct SyntheticTicks {
    count: usize,
    seed: u64,
}

impl SyntheticTicks {
    pub fn new(count: usize, seed: u64) -> Self {
        Self { count, seed }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl TickSource for SyntheticTicks {
    fn ticks(&mut self) -> Result<Vec<Tick>, SourceError> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let ticks = (0..self.count)
            .map(|i| {
                let price = 100.0 + rng.gen_range(0..20) as f64 / 10.0;
                Tick::new(1_000 * i as u64, price)
            })
            .collect();
        Ok(ticks)
    }
}
