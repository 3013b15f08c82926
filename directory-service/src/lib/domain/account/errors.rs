use thiserror::Error;

/// Error for AccountId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for email address validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email cannot be empty")]
    Empty,

    #[error("Email address is malformed: {0}")]
    InvalidFormat(String),
}

/// Error for cpf validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CpfError {
    #[error("Cpf cannot be empty")]
    Empty,

    #[error("Cpf must contain exactly 11 digits, got {0}")]
    WrongLength(usize),

    #[error("Cpf must contain only digits")]
    NonNumeric,
}

/// Error for role parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("Unknown account role: {0}")]
    Unknown(String),
}
