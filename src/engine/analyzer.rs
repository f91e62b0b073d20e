//! Analysis orchestration.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::config::AnalysisConfig;
use crate::engine::indicators::extract_initial_indicators;
use crate::engine::propagation::chain_propagations;
use crate::models::{AnalysisResult, Candle, SignalRecord};
use crate::pricing::PriceLookup;
use crate::timeframes::TimeframeOrdering;

/// Facade over one full analysis pass.
///
/// A pure function of its inputs: no mutation, no shared state, identical
/// inputs produce identical output ordering and values.
pub struct PropagationEngine;

impl PropagationEngine {
    /// Derive initial indicators and propagation chains from per-timeframe
    /// signals and the candle series they were detected on.
    pub fn analyze(
        signals_by_timeframe: &BTreeMap<String, Vec<SignalRecord>>,
        candles: &[Candle],
        config: &AnalysisConfig,
    ) -> AnalysisResult {
        let participating: Vec<String> = signals_by_timeframe
            .keys()
            .filter(|id| config.includes_timeframe(id))
            .cloned()
            .collect();
        let ordering = TimeframeOrdering::new(participating);
        let Some(fastest) = ordering.fastest() else {
            return AnalysisResult::default();
        };

        let mut prices = PriceLookup::from_candles(candles);
        if let Some(tolerance) = config.price_tolerance_secs {
            prices = prices.with_tolerance(tolerance);
        }

        let sorted = normalize_signals(signals_by_timeframe, &ordering);
        let empty = Vec::new();
        let fastest_signals = sorted.get(fastest).unwrap_or(&empty);

        let initial_indicators = extract_initial_indicators(fastest, fastest_signals, &prices);
        let propagations = chain_propagations(&ordering, &sorted, &initial_indicators, &prices);

        debug!(
            timeframes = ordering.len(),
            indicators = initial_indicators.len(),
            propagations = propagations.len(),
            "analysis complete"
        );
        AnalysisResult {
            initial_indicators,
            propagations,
        }
    }
}

/// Defensive per-timeframe ordering: sort ascending by datetime (source as a
/// deterministic tie-break) and drop duplicate (source, datetime) rows, first
/// occurrence wins.
fn normalize_signals(
    signals_by_timeframe: &BTreeMap<String, Vec<SignalRecord>>,
    ordering: &TimeframeOrdering,
) -> BTreeMap<String, Vec<SignalRecord>> {
    let mut normalized = BTreeMap::new();
    for timeframe in ordering.iter() {
        let Some(records) = signals_by_timeframe.get(timeframe) else {
            continue;
        };
        let mut sorted = records.clone();
        sorted.sort_by(|a, b| a.datetime.cmp(&b.datetime).then(a.source.cmp(&b.source)));
        let before = sorted.len();
        sorted.dedup_by(|b, a| b.datetime == a.datetime && b.source == a.source);
        if sorted.len() < before {
            warn!(
                timeframe = %timeframe,
                dropped = before - sorted.len(),
                "dropped duplicate signal rows"
            );
        }
        normalized.insert(timeframe.to_string(), sorted);
    }
    normalized
}
