use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaymentError>;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Invalid card: {0}")]
    InvalidCard(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Unknown gateway family: {0}")]
    UnknownFamily(String),
    #[error("Processing failure: {0}")]
    ProcessingFailure(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
