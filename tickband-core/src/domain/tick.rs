//! Tick — the fundamental market data unit.

use serde::{Deserialize, Serialize};

/// A single timestamped price observation.
///
/// Ticks are immutable once produced and consumed strictly in order.
/// Timestamps are nanoseconds and non-decreasing within a stream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub ts_ns: u64,
    pub price: f64,
}

impl Tick {
    pub fn new(ts_ns: u64, price: f64) -> Self {
        Self { ts_ns, price }
    }

    /// A tick is valid when its price is finite and strictly positive.
    ///
    /// Sources enforce this before admitting a tick into the stream;
    /// validators treat a violation as a defined error, never a panic.
    pub fn is_valid(&self) -> bool {
        self.price.is_finite() && self.price > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_is_valid() {
        assert!(Tick::new(0, 100.0).is_valid());
    }

    #[test]
    fn tick_rejects_non_positive_price() {
        assert!(!Tick::new(0, 0.0).is_valid());
        assert!(!Tick::new(0, -1.5).is_valid());
    }

    #[test]
    fn tick_rejects_non_finite_price() {
        assert!(!Tick::new(0, f64::NAN).is_valid());
        assert!(!Tick::new(0, f64::INFINITY).is_valid());
    }

    #[test]
    fn tick_serialization_roundtrip() {
        let tick = Tick::new(1_000, 101.25);
        let json = serde_json::to_string(&tick).unwrap();
        let deser: Tick = serde_json::from_str(&json).unwrap();
        assert_eq!(tick, deser);
    }
}
