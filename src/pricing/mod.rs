//! Open-price resolution by timestamp.
//!
//! Resolving a signal's open price must be O(1): a 500k-row candle series
//! with thousands of signals rules out per-call linear scans, so the index
//! is built once up front.

use std::collections::HashMap;

use crate::models::Candle;

/// Epoch-seconds to open-price index over one candle series.
#[derive(Debug, Clone)]
pub struct PriceLookup {
    open_by_time: HashMap<i64, f64>,
    sorted_times: Vec<i64>,
    tolerance_secs: Option<i64>,
}

impl PriceLookup {
    /// Build the index, last write wins on duplicate candle timestamps.
    pub fn from_candles(candles: &[Candle]) -> Self {
        let mut open_by_time = HashMap::with_capacity(candles.len());
        for candle in candles {
            open_by_time.insert(candle.time, candle.open);
        }
        Self {
            open_by_time,
            sorted_times: Vec::new(),
            tolerance_secs: None,
        }
    }

    /// Enable nearest-candle fallback for timestamps without an exact match.
    /// Off by default; charting layers use a 300 second tolerance.
    pub fn with_tolerance(mut self, tolerance_secs: i64) -> Self {
        let mut times: Vec<i64> = self.open_by_time.keys().copied().collect();
        times.sort_unstable();
        self.sorted_times = times;
        self.tolerance_secs = Some(tolerance_secs);
        self
    }

    /// Open price at an exact timestamp, or the nearest candle within the
    /// configured tolerance. Equidistant neighbours resolve to the earlier
    /// candle.
    pub fn open_at(&self, time: i64) -> Option<f64> {
        if let Some(open) = self.open_by_time.get(&time) {
            return Some(*open);
        }
        let tolerance = self.tolerance_secs?;
        let nearest = self.nearest_time(time)?;
        if (nearest - time).abs() <= tolerance {
            self.open_by_time.get(&nearest).copied()
        } else {
            None
        }
    }

    /// Open price with the unresolved-price convention of the engine: 0.0.
    pub fn open_or_zero(&self, time: i64) -> f64 {
        self.open_at(time).unwrap_or(0.0)
    }

    fn nearest_time(&self, time: i64) -> Option<i64> {
        if self.sorted_times.is_empty() {
            return None;
        }
        let idx = self.sorted_times.partition_point(|&t| t < time);
        let after = self.sorted_times.get(idx).copied();
        let before = idx.checked_sub(1).and_then(|i| self.sorted_times.get(i)).copied();
        match (before, after) {
            (Some(b), Some(a)) => {
                if (time - b) <= (a - time) {
                    Some(b)
                } else {
                    Some(a)
                }
            }
            (Some(b), None) => Some(b),
            (None, Some(a)) => Some(a),
            (None, None) => None,
        }
    }
}
