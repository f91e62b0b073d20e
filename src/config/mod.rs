//! Runtime configuration sourced from the environment plus per-analysis
//! options.

use std::collections::BTreeSet;

/// Load variables from a `.env` file when present. Missing files are fine.
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

/// Deployment environment name, defaulting to sandbox.
pub fn get_environment() -> String {
    std::env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Options for one analysis invocation.
#[derive(Debug, Clone, Default)]
pub struct AnalysisConfig {
    /// Restrict which timeframes participate. `None` means all timeframes
    /// present in the signal store.
    pub timeframe_filter: Option<BTreeSet<String>>,
    /// Nearest-candle fallback tolerance for price resolution. Off by
    /// default; charting layers use 300 seconds.
    pub price_tolerance_secs: Option<i64>,
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeframe_filter<I, S>(mut self, timeframes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.timeframe_filter = Some(timeframes.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_price_tolerance(mut self, tolerance_secs: i64) -> Self {
        self.price_tolerance_secs = Some(tolerance_secs);
        self
    }

    pub fn includes_timeframe(&self, id: &str) -> bool {
        match &self.timeframe_filter {
            Some(filter) => filter.contains(id),
            None => true,
        }
    }
}
