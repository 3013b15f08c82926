use async_trait::async_trait;

use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::PersonProfile;
use crate::domain::account::models::RegisterPersonCommand;
use crate::domain::account::models::UpdatePersonCommand;
use crate::domain::errors::DirectoryError;

/// Port for person registration and update orchestration.
#[async_trait]
pub trait RegistrationServicePort: Send + Sync + 'static {
    /// Register a new person, with the doctor sub-record when the role
    /// requires one.
    ///
    /// # Errors
    /// * `EmailInUse` / `CpfInUse` - Another account already holds the value
    /// * `DoctorDataRequired` - Role is Doctor but no doctor payload came
    ///   along; the created account is left in place (no compensating
    ///   transaction)
    /// * `LicenseInUse` - Doctor payload carries a taken license number
    /// * Validation errors from entity construction
    async fn register(
        &self,
        command: RegisterPersonCommand,
    ) -> Result<PersonProfile, DirectoryError>;

    /// Update an existing person, keyed by account id.
    ///
    /// # Errors
    /// * `AccountNotFound` - No account with this id
    /// * `EmailInUse` / `CpfInUse` - Value belongs to a *different* account
    /// * `DoctorDataRequired` - Role is Doctor but no doctor payload
    async fn update(&self, command: UpdatePersonCommand) -> Result<PersonProfile, DirectoryError>;
}

/// Persistence operations for the account aggregate.
///
/// Absence is `Ok(None)`, never an error; `Err` is reserved for store
/// failures and constraint violations.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist a new account.
    ///
    /// # Errors
    /// * `EmailInUse` / `CpfInUse` - Unique constraint hit (the last line
    ///   of defense when two registrations race)
    /// * `Database` - Store operation failed
    async fn create(&self, account: Account) -> Result<Account, DirectoryError>;

    /// Retrieve an account by identifier.
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, DirectoryError>;

    /// Retrieve an account by email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DirectoryError>;

    /// Retrieve an account by cpf.
    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Account>, DirectoryError>;

    /// Update an existing account.
    ///
    /// # Errors
    /// * `AccountNotFound` - No row matched the id
    /// * `EmailInUse` / `CpfInUse` - Unique constraint hit
    /// * `Database` - Store operation failed
    async fn update(&self, account: Account) -> Result<Account, DirectoryError>;
}
