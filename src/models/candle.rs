use serde::{Deserialize, Serialize};

/// One OHLC bar at the file's native sampling frequency.
///
/// `time` is epoch seconds UTC. Only `open` participates in analysis; the
/// remaining fields are carried for callers that chart or re-export the
/// series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Candle {
    pub fn new(time: i64, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
        }
    }
}
