//! Dynamic chain tracking across timeframes.
//!
//! Every initial indicator seeds a level-0 tracked signal; timeframes are
//! then walked strictly fastest to slowest, and each non-neutral signal
//! attaches to the deepest, most recent still-valid faster-timeframe parent.
//! Signals confirmed on the way become visible to the remaining slower
//! timeframes within the same pass.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::{InitialIndicator, Propagation, SignalRecord, TrendDirection};
use crate::pricing::PriceLookup;
use crate::timeframes::TimeframeOrdering;

/// One confirmed signal occurrence a later timeframe may attach to.
#[derive(Debug, Clone)]
struct TrackedSignal {
    datetime: DateTime<Utc>,
    timeframe: String,
    rank: usize,
    direction: TrendDirection,
    level: u32,
    propagation_id: String,
    /// Open price of the chain's origin; percentages are always measured
    /// from here, never from the immediate parent.
    chain_initial_price: f64,
}

/// Build propagation chains from seeded initial indicators.
///
/// `signals` holds each participating timeframe's records sorted ascending
/// by datetime. Only fastest-timeframe indicators seed chains; a slower
/// signal without a valid parent is dropped, never promoted to a root.
pub fn chain_propagations(
    ordering: &TimeframeOrdering,
    signals: &BTreeMap<String, Vec<SignalRecord>>,
    seeds: &[InitialIndicator],
    prices: &PriceLookup,
) -> Vec<Propagation> {
    let mut tracked: Vec<TrackedSignal> = Vec::with_capacity(seeds.len());
    for (n, seed) in seeds.iter().enumerate() {
        tracked.push(TrackedSignal {
            datetime: seed.datetime,
            timeframe: seed.timeframe.clone(),
            rank: 0,
            direction: seed.trend_type,
            level: 0,
            propagation_id: format!("Prop_{}", n + 1),
            chain_initial_price: seed.open_price,
        });
    }

    let mut propagations = Vec::new();

    for (rank, timeframe) in ordering.iter().enumerate().skip(1) {
        let Some(tf_signals) = signals.get(timeframe) else {
            continue;
        };
        for (idx, signal) in tf_signals.iter().enumerate() {
            let Some(direction) = signal.direction() else {
                continue;
            };
            // A repeat of an already-seen direction on this frequency is not
            // a new confirmation.
            if tf_signals[..idx].iter().any(|p| p.value == signal.value) {
                continue;
            }

            let mut candidates: Vec<usize> = (0..tracked.len())
                .filter(|&i| {
                    let t = &tracked[i];
                    t.rank < rank && t.direction == direction && t.datetime <= signal.datetime
                })
                .collect();
            if candidates.is_empty() {
                continue;
            }
            // Deepest first, then most recent, so a confirmation extends the
            // most advanced chain instead of attaching to a stale ancestor.
            candidates.sort_by(|&a, &b| {
                tracked[b]
                    .level
                    .cmp(&tracked[a].level)
                    .then(tracked[b].datetime.cmp(&tracked[a].datetime))
            });

            let parent = candidates.into_iter().find(|&i| {
                let candidate = &tracked[i];
                !chain_broken(
                    signals.get(&candidate.timeframe).map(Vec::as_slice),
                    candidate.datetime,
                    signal.datetime,
                    direction,
                )
            });
            let Some(parent_idx) = parent else {
                continue;
            };
            let parent = tracked[parent_idx].clone();

            let open_price = prices.open_or_zero(signal.datetime.timestamp());
            let directional_change_percent = if parent.chain_initial_price == 0.0 {
                0.0
            } else {
                (open_price - parent.chain_initial_price) / parent.chain_initial_price * 100.0
            };
            let level = parent.level + 1;

            propagations.push(Propagation {
                propagation_id: parent.propagation_id.clone(),
                propagation_level: level,
                datetime: signal.datetime,
                trend_type: direction,
                higher_freq: parent.timeframe.clone(),
                lower_freq: timeframe.to_string(),
                open_price,
                directional_change_percent,
            });
            tracked.push(TrackedSignal {
                datetime: signal.datetime,
                timeframe: timeframe.to_string(),
                rank,
                direction,
                level,
                propagation_id: parent.propagation_id,
                chain_initial_price: parent.chain_initial_price,
            });
        }
    }

    debug!(
        seeds = seeds.len(),
        tracked = tracked.len(),
        propagations = propagations.len(),
        "chain tracking complete"
    );
    propagations
}

/// A candidate parent is invalid when its own timeframe flipped against it
/// after its timestamp and at or before the confirming signal's timestamp.
fn chain_broken(
    tf_signals: Option<&[SignalRecord]>,
    parent_at: DateTime<Utc>,
    confirmed_at: DateTime<Utc>,
    direction: TrendDirection,
) -> bool {
    let Some(signals) = tf_signals else {
        return false;
    };
    let opposing = direction.opposite().value();
    signals
        .iter()
        .any(|s| s.value == opposing && s.datetime > parent_at && s.datetime <= confirmed_at)
}
