//! Timeframe identifiers and their fastest-to-slowest ordering.
//!
//! Identifiers follow the `{integer}{unit}` pattern with unit in
//! {s, m, h, d, w, mo}. A month converts with a fixed 30-day constant, not
//! calendar-aware.

use std::collections::HashMap;

use tracing::warn;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_WEEK: i64 = 604_800;
const SECONDS_PER_MONTH: i64 = 2_592_000;

/// Convert a timeframe identifier to its duration in seconds.
///
/// Unrecognized identifiers convert to 0 so they sort first; that is a
/// data-quality defect, not a fatal condition.
pub fn timeframe_seconds(id: &str) -> i64 {
    let digits_end = id
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(id.len());
    let Ok(count) = id[..digits_end].parse::<i64>() else {
        return 0;
    };
    let multiplier = match &id[digits_end..] {
        "s" => 1,
        "m" => SECONDS_PER_MINUTE,
        "h" => SECONDS_PER_HOUR,
        "d" => SECONDS_PER_DAY,
        "w" => SECONDS_PER_WEEK,
        "mo" => SECONDS_PER_MONTH,
        _ => 0,
    };
    count * multiplier
}

/// Total order over a set of timeframe identifiers, fastest first.
///
/// Built once per analysis invocation; there is deliberately no process-wide
/// cache so concurrent analyses of different files cannot cross-contaminate.
#[derive(Debug, Clone)]
pub struct TimeframeOrdering {
    ordered: Vec<String>,
    ranks: HashMap<String, usize>,
}

impl TimeframeOrdering {
    /// Sort identifiers ascending by duration. The sort is stable, so ties
    /// keep the caller's relative order.
    pub fn new<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut ordered: Vec<String> = ids.into_iter().collect();
        for id in &ordered {
            if timeframe_seconds(id) == 0 {
                warn!(timeframe = %id, "unrecognized timeframe format, ranking first");
            }
        }
        ordered.sort_by_key(|id| timeframe_seconds(id));
        let ranks = ordered
            .iter()
            .enumerate()
            .map(|(rank, id)| (id.clone(), rank))
            .collect();
        Self { ordered, ranks }
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Highest-frequency timeframe, if any.
    pub fn fastest(&self) -> Option<&str> {
        self.ordered.first().map(String::as_str)
    }

    pub fn rank(&self, id: &str) -> Option<usize> {
        self.ranks.get(id).copied()
    }

    /// Iterate identifiers fastest to slowest.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }
}
