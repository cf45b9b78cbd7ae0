//! Decision and Stance — validator outputs.

use serde::{Deserialize, Serialize};

/// Binary classification emitted by a pure validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Reject,
    Accept,
}

impl Decision {
    pub fn is_accept(&self) -> bool {
        matches!(self, Self::Accept)
    }
}

/// Directional position held by the backtest engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stance {
    Long,
    Flat,
    Short,
}

impl Stance {
    /// Sign used for mark-to-market P&L accrual: +1, 0, or -1.
    pub fn as_sign(&self) -> f64 {
        match self {
            Self::Long => 1.0,
            Self::Flat => 0.0,
            Self::Short => -1.0,
        }
    }
}

impl Default for Stance {
    fn default() -> Self {
        Self::Flat
    }
}
