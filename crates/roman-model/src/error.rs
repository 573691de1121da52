use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid input: {0:?}")]
    InvalidInput(String),

    #[error("input out of range: {value} (max {max})")]
    OutOfRange { value: i64, max: i64 },
}
