use rust_decimal::Decimal;
use thiserror::Error;

/// Error for license number validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LicenseError {
    #[error("License number cannot be empty")]
    Empty,
}

/// Error for consultation fee validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FeeError {
    #[error("Consultation fee must be strictly positive, got {0}")]
    NotPositive(Decimal),
}
