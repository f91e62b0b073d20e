use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing column: {0}")]
    MissingColumn(String),
    #[error("unrecognized datetime format: {0}")]
    InvalidDatetime(String),
    #[error("invalid numeric value: {0}")]
    InvalidNumericFormat(String),
    #[error("signal value out of range (expected -1, 0 or 1): {0}")]
    InvalidSignalValue(String),
}
