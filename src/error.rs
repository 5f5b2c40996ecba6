use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Decimal conversion error: {0}")]
    DecimalError(#[from] rust_decimal::Error),
}

pub type Result<T> = std::result::Result<T, FlowError>;
