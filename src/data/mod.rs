//! Thin data-source layer feeding the engine. Not part of the core: the
//! engine only ever sees already-loaded records.

pub mod csv;
pub mod error;
pub mod provider;

pub use error::DataError;
pub use provider::{CandleProvider, CsvMarketData, SignalProvider};
