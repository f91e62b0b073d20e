use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::signal::TrendDirection;
use crate::models::timestamp;

/// A directional run-start on the fastest timeframe.
///
/// `end_datetime` is always assigned: the first strictly-later opposing
/// signal, or the last signal timestamp of the sequence when no opposing
/// signal ever occurs. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitialIndicator {
    #[serde(with = "timestamp")]
    pub datetime: DateTime<Utc>,
    pub trend_type: TrendDirection,
    pub timeframe: String,
    #[serde(with = "timestamp")]
    pub end_datetime: DateTime<Utc>,
    pub open_price: f64,
    pub directional_change_percent: f64,
}

/// Confirmation of a directional run on a slower timeframe, linked to the
/// chain it extends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Propagation {
    pub propagation_id: String,
    pub propagation_level: u32,
    #[serde(with = "timestamp")]
    pub datetime: DateTime<Utc>,
    pub trend_type: TrendDirection,
    pub higher_freq: String,
    pub lower_freq: String,
    pub open_price: f64,
    pub directional_change_percent: f64,
}

/// Everything one analysis pass produces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub initial_indicators: Vec<InitialIndicator>,
    pub propagations: Vec<Propagation>,
}
