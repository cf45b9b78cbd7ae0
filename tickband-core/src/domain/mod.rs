//! Domain types — ticks, decisions, stances.

pub mod decision;
pub mod tick;

pub use decision::{Decision, Stance};
pub use tick::Tick;
