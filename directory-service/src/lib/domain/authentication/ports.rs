use async_trait::async_trait;

use crate::domain::account::models::PersonProfile;
use crate::domain::authentication::models::Credential;
use crate::domain::errors::DirectoryError;

/// Port for authentication operations.
///
/// On the login paths a missing account and a wrong password surface as the
/// same `InvalidCredentials` error so callers cannot enumerate accounts.
#[async_trait]
pub trait AuthenticationServicePort: Send + Sync + 'static {
    /// Authenticate by email and password.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    async fn login_by_email(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Credential, DirectoryError>;

    /// Authenticate by cpf and password.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown cpf or wrong password
    async fn login_by_cpf(&self, cpf: &str, password: &str)
        -> Result<Credential, DirectoryError>;

    /// Authenticate by professional license number and password.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown license or wrong password
    /// * `DoctorAccountMissing` - Doctor row without an owning account
    /// * `NotADoctor` - Owning account does not carry the Doctor role;
    ///   rejected even when the password matched
    async fn login_by_license(
        &self,
        license_number: &str,
        password: &str,
    ) -> Result<Credential, DirectoryError>;

    /// Check whether a bearer token is currently valid.
    ///
    /// Pure; touches no store and never errors.
    fn validate_token(&self, token: &str) -> bool;

    /// Look up the public profile for an authenticated email.
    ///
    /// # Errors
    /// * `InvalidEmail` - Blank email argument
    /// * `AccountNotFound` - No account with this email
    async fn current_account(&self, email: &str) -> Result<PersonProfile, DirectoryError>;

    /// Change an account's password after verifying the current one.
    ///
    /// # Errors
    /// * `InvalidEmail` - Blank email argument
    /// * `AccountNotFound` - No account with this email
    /// * `CurrentPasswordIncorrect` - Current password does not verify
    /// * `Password` - New password is empty (raised by the hashing step)
    async fn change_password(
        &self,
        email: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), DirectoryError>;
}
