use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::timestamp;

/// Non-neutral signal direction. Serialized as the integer it was detected
/// as (-1 or +1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrendDirection {
    Bearish,
    Bullish,
}

impl TrendDirection {
    /// Map a raw chain-detected value onto a direction. Zero (neutral) and
    /// out-of-range values have no direction.
    pub fn from_value(value: i8) -> Option<Self> {
        match value {
            -1 => Some(Self::Bearish),
            1 => Some(Self::Bullish),
            _ => None,
        }
    }

    pub fn value(self) -> i8 {
        match self {
            Self::Bearish => -1,
            Self::Bullish => 1,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Bearish => Self::Bullish,
            Self::Bullish => Self::Bearish,
        }
    }
}

impl Serialize for TrendDirection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i8(self.value())
    }
}

impl<'de> Deserialize<'de> for TrendDirection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i8::deserialize(deserializer)?;
        Self::from_value(value)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid trend direction: {value}")))
    }
}

/// A single chain-detected signal on one timeframe.
///
/// `value` stays raw (-1, 0 or +1) because neutral rows participate in
/// sorting and end-boundary resolution even though they never emit.
/// Uniqueness holds per (timeframe, source, datetime).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalRecord {
    #[serde(with = "timestamp")]
    pub datetime: DateTime<Utc>,
    pub value: i8,
    #[serde(rename = "timeframeId")]
    pub timeframe: String,
    #[serde(rename = "sourceId")]
    pub source: String,
}

impl SignalRecord {
    pub fn new(datetime: DateTime<Utc>, value: i8, timeframe: &str, source: &str) -> Self {
        Self {
            datetime,
            value,
            timeframe: timeframe.to_string(),
            source: source.to_string(),
        }
    }

    pub fn direction(&self) -> Option<TrendDirection> {
        TrendDirection::from_value(self.value)
    }
}
