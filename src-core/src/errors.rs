use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Calculation error: {0}")]
    Calculation(#[from] CalculationError),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Malformed or out-of-range goal/allocation input. Always caller-recoverable
/// by correcting the input and resubmitting.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("allocation must sum to 100, got {actual}")]
    AllocationSum { actual: Decimal },
}

/// Pure-function failures from the planning math. None of these mutate state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculationError {
    #[error("target date must be after the investment start date")]
    InvalidRange,

    #[error("investment horizon must be positive, got {years} year(s)")]
    InvalidHorizon { years: i32 },

    #[error("negative annual return rate {rate}% is not modeled")]
    InvalidRate { rate: Decimal },
}
