//! Sliding-window mean/variance estimator.
//!
//! Keeps the last N prices (drop-oldest) and recomputes the exact sample
//! mean and population variance over the window on each update. O(N) per
//! tick — a deliberate tradeoff favoring a bias-free exact estimate over
//! O(1) update cost.

use std::collections::VecDeque;

use super::VARIANCE_EPSILON;

#[derive(Debug, Clone)]
pub struct WindowEstimator {
    window: VecDeque<f64>,
    capacity: usize,
    mean: f64,
    var: f64,
}

impl WindowEstimator {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 2, "window capacity must be >= 2, got {capacity}");
        Self {
            window: VecDeque::with_capacity(capacity + 1),
            capacity,
            mean: 0.0,
            var: 0.0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    pub fn update(&mut self, price: f64) {
        self.window.push_back(price);
        if self.window.len() > self.capacity {
            self.window.pop_front();
        }
        debug_assert!(self.window.len() <= self.capacity);

        if self.window.len() < 2 {
            return;
        }

        let n = self.window.len() as f64;
        let mut sum = 0.0;
        for &v in &self.window {
            sum += v;
        }
        self.mean = sum / n;

        let mut sq = 0.0;
        for &v in &self.window {
            let d = v - self.mean;
            sq += d * d;
        }
        self.var = sq / n;
    }

    /// Ready once at least 2 samples are in the window.
    pub fn ready(&self) -> bool {
        self.window.len() >= 2
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn stddev(&self) -> f64 {
        self.var.max(VARIANCE_EPSILON).sqrt()
    }

    pub fn variance(&self) -> f64 {
        self.var
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_approx(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-12, "expected {b}, got {a}");
    }

    #[test]
    fn not_ready_below_two_samples() {
        let mut e = WindowEstimator::new(3);
        assert!(!e.ready());
        e.update(100.0);
        assert!(!e.ready());
        e.update(101.0);
        assert!(e.ready());
    }

    #[test]
    fn exact_mean_and_variance_at_capacity() {
        let mut e = WindowEstimator::new(3);
        for price in [10.0, 11.0, 12.0, 13.0] {
            e.update(price);
        }
        // Window is now [11, 12, 13].
        assert_approx(e.mean(), 12.0);
        // Population variance: ((1)^2 + 0 + (1)^2) / 3
        assert_approx(e.variance(), 2.0 / 3.0);
    }

    #[test]
    fn drop_oldest_keeps_len_bounded() {
        let mut e = WindowEstimator::new(5);
        for i in 0..50 {
            e.update(100.0 + i as f64);
            assert!(e.len() <= 5);
        }
        assert_eq!(e.len(), 5);
    }

    #[test]
    fn matches_direct_recomputation() {
        let prices = [100.0, 103.0, 98.5, 101.2, 99.9, 104.4, 97.1];
        let n = 4;
        let mut e = WindowEstimator::new(n);
        for &p in &prices {
            e.update(p);
        }
        let tail = &prices[prices.len() - n..];
        let mean: f64 = tail.iter().sum::<f64>() / n as f64;
        let var: f64 = tail.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n as f64;
        assert_approx(e.mean(), mean);
        assert_approx(e.variance(), var);
    }

    #[test]
    fn constant_window_has_floored_stddev() {
        let mut e = WindowEstimator::new(4);
        for _ in 0..10 {
            e.update(50.0);
        }
        assert!(e.stddev() > 0.0);
        assert!(e.stddev() <= 2e-6);
    }

    #[test]
    #[should_panic(expected = "capacity must be >= 2")]
    fn rejects_capacity_below_two() {
        WindowEstimator::new(1);
    }
}
