//! Unit tests for the open-price index

use trendchain::models::Candle;
use trendchain::pricing::PriceLookup;

fn candle(time: i64, open: f64) -> Candle {
    Candle::new(time, open, open + 1.0, open - 1.0, open + 0.5)
}

#[test]
fn test_exact_lookup() {
    let prices = PriceLookup::from_candles(&[candle(1_000, 100.0), candle(2_000, 105.0)]);
    assert_eq!(prices.open_at(1_000), Some(100.0));
    assert_eq!(prices.open_at(2_000), Some(105.0));
}

#[test]
fn test_missing_timestamp_without_tolerance() {
    let prices = PriceLookup::from_candles(&[candle(1_000, 100.0)]);
    assert_eq!(prices.open_at(1_001), None);
    assert_eq!(prices.open_or_zero(1_001), 0.0);
}

#[test]
fn test_duplicate_timestamps_last_write_wins() {
    let prices = PriceLookup::from_candles(&[candle(1_000, 100.0), candle(1_000, 200.0)]);
    assert_eq!(prices.open_at(1_000), Some(200.0));
}

#[test]
fn test_tolerance_resolves_nearest_candle() {
    let prices =
        PriceLookup::from_candles(&[candle(1_000, 100.0), candle(2_000, 105.0)]).with_tolerance(300);
    assert_eq!(prices.open_at(1_200), Some(100.0));
    assert_eq!(prices.open_at(1_850), Some(105.0));
    // nearest candle is 400s away, outside the tolerance
    assert_eq!(prices.open_at(1_600), None);
}

#[test]
fn test_tolerance_equidistant_prefers_earlier() {
    let prices =
        PriceLookup::from_candles(&[candle(1_000, 100.0), candle(2_000, 105.0)]).with_tolerance(500);
    assert_eq!(prices.open_at(1_500), Some(100.0));
}

#[test]
fn test_tolerance_on_empty_series() {
    let prices = PriceLookup::from_candles(&[]).with_tolerance(300);
    assert_eq!(prices.open_at(1_000), None);
}
