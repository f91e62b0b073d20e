//! Initial indicator extraction from the fastest timeframe.

use chrono::{DateTime, Utc};

use crate::models::{InitialIndicator, SignalRecord, TrendDirection};
use crate::pricing::PriceLookup;

/// Walk the fastest timeframe's signal sequence and emit one indicator per
/// direction change.
///
/// `signals` must already be sorted ascending by datetime. Neutral rows are
/// skipped entirely: they neither emit nor reset the last seen direction, so
/// a `+1, 0, +1` sequence emits exactly once. The very first non-neutral
/// signal always emits.
pub fn extract_initial_indicators(
    timeframe: &str,
    signals: &[SignalRecord],
    prices: &PriceLookup,
) -> Vec<InitialIndicator> {
    let mut run_starts: Vec<(DateTime<Utc>, TrendDirection)> = Vec::new();
    let mut last_direction: Option<TrendDirection> = None;

    for signal in signals {
        let Some(direction) = signal.direction() else {
            continue;
        };
        if last_direction != Some(direction) {
            run_starts.push((signal.datetime, direction));
        }
        last_direction = Some(direction);
    }

    let last_datetime = signals.last().map(|s| s.datetime);

    run_starts
        .into_iter()
        .map(|(datetime, trend_type)| {
            let end_datetime = end_of_run(signals, datetime, trend_type)
                .or(last_datetime)
                .unwrap_or(datetime);
            let open_price = prices.open_or_zero(datetime.timestamp());
            let end_price = prices.open_or_zero(end_datetime.timestamp());
            let directional_change_percent = if open_price == 0.0 {
                0.0
            } else {
                (end_price - open_price) / open_price * 100.0
            };
            InitialIndicator {
                datetime,
                trend_type,
                timeframe: timeframe.to_string(),
                end_datetime,
                open_price,
                directional_change_percent,
            }
        })
        .collect()
}

/// First signal strictly later than the run start whose value opposes the
/// run's direction. Absence of an opposing signal does not mean absence of
/// an end boundary; the caller falls back to the last signal timestamp.
fn end_of_run(
    signals: &[SignalRecord],
    start: DateTime<Utc>,
    trend_type: TrendDirection,
) -> Option<DateTime<Utc>> {
    let opposing = trend_type.opposite().value();
    signals
        .iter()
        .find(|s| s.datetime > start && s.value == opposing)
        .map(|s| s.datetime)
}
