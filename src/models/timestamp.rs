//! UTC datetime (de)serialization aligned with the signal file format.
//!
//! Signals and analysis outputs use `"YYYY-MM-DD HH:mm:ss"` strings (no
//! timezone offset, no milliseconds) so output datetimes compare equal to
//! the input rows they were derived from.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{self, Deserialize, Deserializer, Serializer};

pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format(dt: &DateTime<Utc>) -> String {
    dt.format(FORMAT).to_string()
}

pub fn parse(s: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(dt))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid datetime: {s}")))
}
