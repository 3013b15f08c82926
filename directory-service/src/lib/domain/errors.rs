use thiserror::Error;

use crate::domain::account::errors::CpfError;
use crate::domain::account::errors::EmailError;
use crate::domain::account::errors::RoleError;
use crate::domain::cache::errors::CacheError;
use crate::domain::doctor::errors::FeeError;
use crate::domain::doctor::errors::LicenseError;

/// Top-level error for all directory operations.
///
/// Variants group into the four failure kinds the HTTP boundary maps to
/// status codes: validation, authentication, conflict and not-found, plus
/// infrastructure failures.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    // Entity and value object validation (automatically converted via #[from])
    #[error("Account name cannot be empty")]
    EmptyName,

    #[error(transparent)]
    InvalidEmail(#[from] EmailError),

    #[error(transparent)]
    InvalidCpf(#[from] CpfError),

    #[error(transparent)]
    InvalidRole(#[from] RoleError),

    #[error(transparent)]
    Password(#[from] auth::PasswordError),

    #[error(transparent)]
    InvalidLicense(#[from] LicenseError),

    #[error(transparent)]
    InvalidFee(#[from] FeeError),

    #[error("Doctor must reference an account")]
    MissingAccountReference,

    #[error("Doctor must reference a specialty")]
    MissingSpecialtyReference,

    #[error("Specialty name cannot be empty")]
    EmptySpecialtyName,

    #[error("Specialty description cannot be empty")]
    EmptySpecialtyDescription,

    // Authentication failures
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account not found for doctor")]
    DoctorAccountMissing,

    #[error("Account is not a doctor")]
    NotADoctor,

    #[error("Current password incorrect")]
    CurrentPasswordIncorrect,

    // Conflicts
    #[error("Email already in use: {0}")]
    EmailInUse(String),

    #[error("Cpf already in use: {0}")]
    CpfInUse(String),

    #[error("License number already in use: {0}")]
    LicenseInUse(String),

    #[error("Doctor data required for role 'Doctor'")]
    DoctorDataRequired,

    // Not found
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Doctor not found for account: {0}")]
    DoctorNotFound(String),

    #[error("Specialty not found: {0}")]
    SpecialtyNotFound(String),

    // Infrastructure
    #[error("Token error: {0}")]
    Token(#[from] auth::TokenError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error("Database error: {0}")]
    Database(String),
}
