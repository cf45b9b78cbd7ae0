//! Performance metrics — pure functions plus an online variance
//! accumulator.
//!
//! Every function here is equity curve or return series in, scalar out;
//! no dependency on the engine loop. The engine itself streams returns
//! through [`Welford`]; the pure functions exist for reporting and for
//! cross-checking the streamed values in tests.

/// Welford's online mean/variance accumulator.
///
/// O(1) memory regardless of stream length; numerically stable against
/// catastrophic cancellation in long low-variance streams.
#[derive(Debug, Clone, Default)]
pub struct Welford {
    count: usize,
    mean: f64,
    m2: f64,
}

impl Welford {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample variance (n-1 denominator). Zero with fewer than 2 samples.
    pub fn sample_variance(&self) -> f64 {
        if self.count < 2 {
            return 0.0;
        }
        self.m2 / (self.count - 1) as f64
    }
}

/// Sharpe-like ratio: sqrt(n) * mean / sqrt(sample variance).
///
/// A dimensionless quality score for a realized return sequence, not an
/// annualized Sharpe. Zero when variance is zero or no returns exist.
pub fn sharpe_like(returns: &[f64]) -> f64 {
    if returns.len() < 2 {
        return 0.0;
    }
    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    let var = returns.iter().map(|r| (r - mean) * (r - mean)).sum::<f64>() / (n - 1.0);
    if var <= 0.0 {
        return 0.0;
    }
    n.sqrt() * mean / var.sqrt()
}

/// Sharpe-like ratio from an already-accumulated [`Welford`].
pub fn sharpe_like_online(acc: &Welford) -> f64 {
    let var = acc.sample_variance();
    if acc.count() < 2 || var <= 0.0 {
        return 0.0;
    }
    (acc.count() as f64).sqrt() * acc.mean() / var.sqrt()
}

/// Maximum drawdown of a cumulative P&L curve, as a non-negative number.
///
/// Standard run-up reversal definition: the largest decline from any
/// prior peak to any subsequent point,
/// `max over i < j of (curve[i] - curve[j])`.
pub fn max_drawdown(equity_curve: &[f64]) -> f64 {
    let Some(&first) = equity_curve.first() else {
        return 0.0;
    };
    let mut peak = first;
    let mut max_dd = 0.0_f64;
    for &eq in equity_curve {
        if eq > peak {
            peak = eq;
        }
        let dd = peak - eq;
        if dd > max_dd {
            max_dd = dd;
        }
    }
    max_dd
}
