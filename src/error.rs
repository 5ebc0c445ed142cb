use thiserror::Error;

pub type RangeResult<T> = Result<T, RangeError>;

#[derive(Debug, Error)]
pub enum RangeError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
