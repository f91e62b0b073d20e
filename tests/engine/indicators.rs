//! Unit tests for initial indicator extraction

use chrono::{DateTime, Utc};
use trendchain::engine::extract_initial_indicators;
use trendchain::models::{timestamp, Candle, SignalRecord, TrendDirection};
use trendchain::pricing::PriceLookup;

fn dt(s: &str) -> DateTime<Utc> {
    timestamp::parse(s).unwrap()
}

fn sig(datetime: &str, value: i8) -> SignalRecord {
    SignalRecord::new(dt(datetime), value, "1m", "chain")
}

fn prices(entries: &[(&str, f64)]) -> PriceLookup {
    let candles: Vec<Candle> = entries
        .iter()
        .map(|(s, open)| Candle::new(dt(s).timestamp(), *open, *open, *open, *open))
        .collect();
    PriceLookup::from_candles(&candles)
}

#[test]
fn test_first_non_zero_signal_always_emits() {
    let signals = vec![sig("2021-01-01 09:00:00", 1)];
    let indicators = extract_initial_indicators("1m", &signals, &prices(&[]));
    assert_eq!(indicators.len(), 1);
    assert_eq!(indicators[0].trend_type, TrendDirection::Bullish);
    assert_eq!(indicators[0].datetime, dt("2021-01-01 09:00:00"));
    assert_eq!(indicators[0].timeframe, "1m");
}

#[test]
fn test_direction_change_emits_again() {
    let signals = vec![
        sig("2021-01-01 09:00:00", 1),
        sig("2021-01-01 09:01:00", -1),
        sig("2021-01-01 09:02:00", 1),
    ];
    let indicators = extract_initial_indicators("1m", &signals, &prices(&[]));
    assert_eq!(indicators.len(), 3);
    assert_eq!(indicators[1].trend_type, TrendDirection::Bearish);
    assert_eq!(indicators[1].datetime, dt("2021-01-01 09:01:00"));
}

#[test]
fn test_zero_signals_neither_emit_nor_reset() {
    let signals = vec![
        sig("2021-01-01 09:00:00", 1),
        sig("2021-01-01 09:01:00", 0),
        sig("2021-01-01 09:02:00", 1),
    ];
    let indicators = extract_initial_indicators("1m", &signals, &prices(&[]));
    assert_eq!(indicators.len(), 1);
    assert_eq!(indicators[0].datetime, dt("2021-01-01 09:00:00"));
}

#[test]
fn test_end_datetime_from_first_opposing_signal() {
    let signals = vec![
        sig("2021-01-01 09:00:00", 1),
        sig("2021-01-01 09:01:00", 1),
        sig("2021-01-01 09:02:00", -1),
        sig("2021-01-01 09:03:00", -1),
    ];
    let indicators = extract_initial_indicators("1m", &signals, &prices(&[]));
    assert_eq!(indicators.len(), 2);
    assert_eq!(indicators[0].end_datetime, dt("2021-01-01 09:02:00"));
}

#[test]
fn test_end_datetime_falls_back_to_last_signal() {
    let signals = vec![
        sig("2021-01-01 09:00:00", 1),
        sig("2021-01-01 09:05:00", 1),
    ];
    let indicators = extract_initial_indicators("1m", &signals, &prices(&[]));
    assert_eq!(indicators.len(), 1);
    assert_eq!(indicators[0].end_datetime, dt("2021-01-01 09:05:00"));
}

#[test]
fn test_open_price_resolution_and_change_percent() {
    let signals = vec![
        sig("2021-01-01 09:00:00", 1),
        sig("2021-01-01 09:05:00", -1),
    ];
    let lookup = prices(&[
        ("2021-01-01 09:00:00", 100.0),
        ("2021-01-01 09:05:00", 110.0),
    ]);
    let indicators = extract_initial_indicators("1m", &signals, &lookup);
    assert_eq!(indicators[0].open_price, 100.0);
    assert_eq!(indicators[0].end_datetime, dt("2021-01-01 09:05:00"));
    assert!((indicators[0].directional_change_percent - 10.0).abs() < 1e-9);
}

#[test]
fn test_missing_price_defaults_to_zero() {
    let signals = vec![sig("2021-01-01 09:00:00", 1)];
    let indicators = extract_initial_indicators("1m", &signals, &prices(&[]));
    assert_eq!(indicators[0].open_price, 0.0);
    assert_eq!(indicators[0].directional_change_percent, 0.0);
}

#[test]
fn test_neutral_only_sequence_emits_nothing() {
    let signals = vec![
        sig("2021-01-01 09:00:00", 0),
        sig("2021-01-01 09:01:00", 0),
    ];
    let indicators = extract_initial_indicators("1m", &signals, &prices(&[]));
    assert!(indicators.is_empty());
}
