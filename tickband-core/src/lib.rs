//! TickBand Core — streaming outlier detection and directional backtesting.
//!
//! This crate contains the heart of the system:
//! - Domain types (ticks, decisions, stances)
//! - Online mean/variance estimators (EWMA and sliding-window)
//! - Validator rules (band z-score, volatility gate, persistence, imbalance)
//! - Tick sources (CSV, seeded synthetic, in-memory)
//! - Single-pass backtest engine with streaming metrics
//!
//! Everything is single-threaded and look-ahead-free: statistics at tick
//! `i` depend only on ticks `0..=i`, and one pass over the stream
//! produces the final result.

pub mod domain;
pub mod engine;
pub mod estimators;
pub mod source;
pub mod validators;
