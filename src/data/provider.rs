//! Provider seams between storage and the engine.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::data::csv;
use crate::data::error::DataError;
use crate::models::{Candle, SignalRecord};

pub trait CandleProvider {
    /// Candle series for one file/ticker.
    fn candles(&self) -> Result<Vec<Candle>, DataError>;
}

pub trait SignalProvider {
    /// Chain-detected signals grouped by timeframe identifier.
    fn signals_by_timeframe(&self) -> Result<BTreeMap<String, Vec<SignalRecord>>, DataError>;
}

/// CSV-backed market data: one candle file and one signal file per ticker.
pub struct CsvMarketData {
    candles_path: PathBuf,
    signals_path: PathBuf,
}

impl CsvMarketData {
    pub fn new<P: AsRef<Path>>(candles_path: P, signals_path: P) -> Self {
        Self {
            candles_path: candles_path.as_ref().to_path_buf(),
            signals_path: signals_path.as_ref().to_path_buf(),
        }
    }
}

impl CandleProvider for CsvMarketData {
    fn candles(&self) -> Result<Vec<Candle>, DataError> {
        csv::load_candles(&self.candles_path)
    }
}

impl SignalProvider for CsvMarketData {
    fn signals_by_timeframe(&self) -> Result<BTreeMap<String, Vec<SignalRecord>>, DataError> {
        csv::load_signals(&self.signals_path)
    }
}
