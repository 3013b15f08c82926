use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;

use crate::domain::account::models::Account;
use crate::domain::account::models::AccountRole;
use crate::domain::account::models::PersonProfile;
use crate::domain::account::models::RegisterPersonCommand;
use crate::domain::account::models::UpdatePersonCommand;
use crate::domain::account::ports::AccountRepository;
use crate::domain::account::ports::RegistrationServicePort;
use crate::domain::cache::CacheStore;
use crate::domain::doctor::ports::DoctorRepository;
use crate::domain::doctor::ports::DoctorServicePort;
use crate::domain::doctor::service::DoctorService;
use crate::domain::errors::DirectoryError;

/// Person registration and update orchestration.
///
/// Enforces cross-entity uniqueness (email, cpf) and delegates the doctor
/// sub-record to the doctor service when the role requires one.
///
/// The account is persisted before the doctor payload is examined, and a
/// missing payload does not roll it back; callers that hit
/// `DoctorDataRequired` are left with a doctor-role account that has no
/// doctor record yet.
pub struct RegistrationService<AR, DR, C>
where
    AR: AccountRepository,
    DR: DoctorRepository,
    C: CacheStore,
{
    accounts: Arc<AR>,
    doctors: Arc<DoctorService<DR, AR, C>>,
    password_hasher: PasswordHasher,
}

impl<AR, DR, C> RegistrationService<AR, DR, C>
where
    AR: AccountRepository,
    DR: DoctorRepository,
    C: CacheStore,
{
    /// Create a new registration service with injected dependencies.
    pub fn new(accounts: Arc<AR>, doctors: Arc<DoctorService<DR, AR, C>>) -> Self {
        Self {
            accounts,
            doctors,
            password_hasher: PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<AR, DR, C> RegistrationServicePort for RegistrationService<AR, DR, C>
where
    AR: AccountRepository,
    DR: DoctorRepository,
    C: CacheStore,
{
    async fn register(
        &self,
        command: RegisterPersonCommand,
    ) -> Result<PersonProfile, DirectoryError> {
        // Email first, cpf second; checked independently
        if self
            .accounts
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(DirectoryError::EmailInUse(
                command.email.as_str().to_string(),
            ));
        }
        if self
            .accounts
            .find_by_cpf(command.cpf.as_str())
            .await?
            .is_some()
        {
            return Err(DirectoryError::CpfInUse(command.cpf.as_str().to_string()));
        }

        let password_hash = self.password_hasher.hash(&command.password)?;
        let account = Account::new(
            command.name,
            command.email,
            command.cpf,
            password_hash,
            command.role,
        )?;
        let account = self.accounts.create(account).await?;

        tracing::info!(account_id = %account.id, role = %account.role, "Person registered");

        let doctor = match (command.role, command.doctor) {
            (AccountRole::Doctor, Some(payload)) => {
                Some(self.doctors.register(account.id, payload).await?)
            }
            (AccountRole::Doctor, None) => return Err(DirectoryError::DoctorDataRequired),
            _ => None,
        };

        Ok(match doctor {
            Some(doctor) => PersonProfile::with_doctor(&account, doctor),
            None => PersonProfile::from_account(&account),
        })
    }

    async fn update(&self, command: UpdatePersonCommand) -> Result<PersonProfile, DirectoryError> {
        let mut account = self
            .accounts
            .find_by_id(&command.account_id)
            .await?
            .ok_or_else(|| DirectoryError::AccountNotFound(command.account_id.to_string()))?;

        // Uniqueness against any *other* account; keeping one's own values is fine
        if let Some(existing) = self.accounts.find_by_email(command.email.as_str()).await? {
            if existing.id != account.id {
                return Err(DirectoryError::EmailInUse(
                    command.email.as_str().to_string(),
                ));
            }
        }
        if let Some(existing) = self.accounts.find_by_cpf(command.cpf.as_str()).await? {
            if existing.id != account.id {
                return Err(DirectoryError::CpfInUse(command.cpf.as_str().to_string()));
            }
        }

        let password_hash = self.password_hasher.hash(&command.password)?;
        account.apply_update(
            command.name,
            command.email,
            command.cpf,
            password_hash,
            command.role,
        )?;
        let account = self.accounts.update(account).await?;

        let doctor = match (command.role, command.doctor) {
            (AccountRole::Doctor, Some(payload)) => {
                Some(self.doctors.update(&account.id, payload).await?)
            }
            (AccountRole::Doctor, None) => return Err(DirectoryError::DoctorDataRequired),
            _ => None,
        };

        Ok(match doctor {
            Some(doctor) => PersonProfile::with_doctor(&account, doctor),
            None => PersonProfile::from_account(&account),
        })
    }
}
