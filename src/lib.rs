//! Trend-propagation inference over multi-timeframe directional signals.
//!
//! The engine ingests per-timeframe chain-detected signals (-1, 0, +1)
//! alongside the OHLC candle series they were derived from, and produces
//! initial indicators (directional run-starts on the fastest timeframe) and
//! propagation chains (confirmations of a run on successively slower
//! timeframes).

pub mod config;
pub mod data;
pub mod engine;
pub mod logging;
pub mod models;
pub mod pricing;
pub mod timeframes;
