//! CSV loading with datetime-format detection.
//!
//! Exports vary in how they stamp rows, so the first data row fixes the
//! datetime format for the whole file rather than re-detecting per row.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::data::error::DataError;
use crate::models::{timestamp, Candle, SignalRecord};

/// Datetime representations seen across exported files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatetimeFormat {
    /// Epoch seconds, integer or float.
    EpochSeconds,
    /// `2021-03-04 15:30:00`
    Standard,
    /// `2021-03-04T15:30:00`
    Iso8601,
    /// `04.03.2021 15:30`
    Dotted,
}

impl DatetimeFormat {
    /// Pick the format matching a sample value, trying epoch first since a
    /// bare integer never parses as a calendar datetime.
    pub fn detect(sample: &str) -> Option<Self> {
        [
            Self::EpochSeconds,
            Self::Standard,
            Self::Iso8601,
            Self::Dotted,
        ]
        .into_iter()
        .find(|format| format.parse(sample).is_some())
    }

    pub fn parse(&self, value: &str) -> Option<DateTime<Utc>> {
        match self {
            Self::EpochSeconds => value
                .parse::<f64>()
                .ok()
                .and_then(|ts| DateTime::from_timestamp(ts as i64, 0)),
            Self::Standard => timestamp::parse(value),
            Self::Iso8601 => NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|naive| naive.and_utc()),
            Self::Dotted => NaiveDateTime::parse_from_str(value, "%d.%m.%Y %H:%M")
                .ok()
                .map(|naive| naive.and_utc()),
        }
    }
}

/// Case-insensitive header lookup; returns the column index of the first
/// header matching any alias.
fn find_column(headers: &csv::StringRecord, aliases: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| aliases.iter().any(|a| h.trim().eq_ignore_ascii_case(a)))
}

fn require_column(headers: &csv::StringRecord, aliases: &[&str]) -> Result<usize, DataError> {
    find_column(headers, aliases).ok_or_else(|| DataError::MissingColumn(aliases[0].to_string()))
}

fn parse_f64(value: &str) -> Result<f64, DataError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| DataError::InvalidNumericFormat(value.to_string()))
}

struct DatetimeParser {
    format: Option<DatetimeFormat>,
}

impl DatetimeParser {
    fn new() -> Self {
        Self { format: None }
    }

    fn parse(&mut self, value: &str) -> Result<DateTime<Utc>, DataError> {
        let format = match self.format {
            Some(format) => format,
            None => {
                let detected = DatetimeFormat::detect(value)
                    .ok_or_else(|| DataError::InvalidDatetime(value.to_string()))?;
                self.format = Some(detected);
                detected
            }
        };
        format
            .parse(value)
            .ok_or_else(|| DataError::InvalidDatetime(value.to_string()))
    }
}

/// Read candles from a header-carrying CSV. Expected columns (any casing):
/// `time`/`datetime`/`date`, `open`, `high`, `low`, `close`.
pub fn read_candles<R: Read>(reader: R) -> Result<Vec<Candle>, DataError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let headers = reader.headers()?.clone();
    let time_col = require_column(&headers, &["time", "datetime", "date"])?;
    let open_col = require_column(&headers, &["open"])?;
    let high_col = require_column(&headers, &["high"])?;
    let low_col = require_column(&headers, &["low"])?;
    let close_col = require_column(&headers, &["close"])?;

    let mut datetimes = DatetimeParser::new();
    let mut candles = Vec::new();
    for record in reader.records() {
        let record = record?;
        let time = datetimes.parse(&record[time_col])?;
        candles.push(Candle::new(
            time.timestamp(),
            parse_f64(&record[open_col])?,
            parse_f64(&record[high_col])?,
            parse_f64(&record[low_col])?,
            parse_f64(&record[close_col])?,
        ));
    }
    Ok(candles)
}

/// Read per-timeframe signals from a header-carrying CSV. Expected columns
/// (any casing): `datetime`/`time`, `timeframe`/`timeframeId`,
/// `source`/`sourceId`, `value`/`signal`.
pub fn read_signals<R: Read>(
    reader: R,
) -> Result<BTreeMap<String, Vec<SignalRecord>>, DataError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let headers = reader.headers()?.clone();
    let datetime_col = require_column(&headers, &["datetime", "time"])?;
    let timeframe_col = require_column(&headers, &["timeframe", "timeframeid"])?;
    let source_col = require_column(&headers, &["source", "sourceid"])?;
    let value_col = require_column(&headers, &["value", "signal"])?;

    let mut datetimes = DatetimeParser::new();
    let mut by_timeframe: BTreeMap<String, Vec<SignalRecord>> = BTreeMap::new();
    for record in reader.records() {
        let record = record?;
        let datetime = datetimes.parse(&record[datetime_col])?;
        let raw = &record[value_col];
        let value = raw
            .parse::<i8>()
            .ok()
            .filter(|v| (-1..=1).contains(v))
            .ok_or_else(|| DataError::InvalidSignalValue(raw.to_string()))?;
        let timeframe = record[timeframe_col].to_string();
        by_timeframe
            .entry(timeframe.clone())
            .or_default()
            .push(SignalRecord::new(
                datetime,
                value,
                &timeframe,
                &record[source_col],
            ));
    }
    Ok(by_timeframe)
}

pub fn load_candles<P: AsRef<Path>>(path: P) -> Result<Vec<Candle>, DataError> {
    read_candles(std::fs::File::open(path)?)
}

pub fn load_signals<P: AsRef<Path>>(
    path: P,
) -> Result<BTreeMap<String, Vec<SignalRecord>>, DataError> {
    read_signals(std::fs::File::open(path)?)
}
