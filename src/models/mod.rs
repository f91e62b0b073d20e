//! Shared data models spanning the engine layers.

pub mod candle;
pub mod outputs;
pub mod signal;
pub mod timestamp;

pub use candle::Candle;
pub use outputs::{AnalysisResult, InitialIndicator, Propagation};
pub use signal::{SignalRecord, TrendDirection};
