use std::sync::Arc;

use async_trait::async_trait;
use auth::generate_refresh_token;
use auth::PasswordHasher;
use auth::TokenIssuer;

use crate::domain::account::errors::EmailError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountRole;
use crate::domain::account::models::PersonProfile;
use crate::domain::account::ports::AccountRepository;
use crate::domain::authentication::models::Credential;
use crate::domain::authentication::ports::AuthenticationServicePort;
use crate::domain::doctor::ports::DoctorRepository;
use crate::domain::errors::DirectoryError;

/// Authentication over the account store.
///
/// Stateless request/response flows; the only write any operation performs
/// is the single account update on a success path. Failure paths never
/// touch the store.
pub struct AuthenticationService<AR, DR>
where
    AR: AccountRepository,
    DR: DoctorRepository,
{
    accounts: Arc<AR>,
    doctors: Arc<DR>,
    password_hasher: PasswordHasher,
    token_issuer: Arc<TokenIssuer>,
}

impl<AR, DR> AuthenticationService<AR, DR>
where
    AR: AccountRepository,
    DR: DoctorRepository,
{
    /// Create a new authentication service with injected dependencies.
    pub fn new(accounts: Arc<AR>, doctors: Arc<DR>, token_issuer: Arc<TokenIssuer>) -> Self {
        Self {
            accounts,
            doctors,
            password_hasher: PasswordHasher::new(),
            token_issuer,
        }
    }

    /// Verify the password, record the login and issue the credential
    /// bundle. Shared tail of every login variant.
    async fn finish_login(
        &self,
        mut account: Account,
        password: &str,
    ) -> Result<Credential, DirectoryError> {
        if !self.password_hasher.verify(password, &account.password_hash) {
            return Err(DirectoryError::InvalidCredentials);
        }

        account.record_login();
        let account = self.accounts.update(account).await?;

        self.issue_credential(&account)
    }

    fn issue_credential(&self, account: &Account) -> Result<Credential, DirectoryError> {
        let issued = self.token_issuer.issue(
            &account.id.to_string(),
            account.email.as_str(),
            &account.name,
            account.role.as_str(),
        )?;

        Ok(Credential {
            token: issued.token,
            refresh_token: generate_refresh_token(),
            expires_at: issued.expires_at,
            display_name: account.name.clone(),
            role: account.role,
        })
    }
}

#[async_trait]
impl<AR, DR> AuthenticationServicePort for AuthenticationService<AR, DR>
where
    AR: AccountRepository,
    DR: DoctorRepository,
{
    async fn login_by_email(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Credential, DirectoryError> {
        let account = self
            .accounts
            .find_by_email(email)
            .await?
            .ok_or(DirectoryError::InvalidCredentials)?;

        self.finish_login(account, password).await
    }

    async fn login_by_cpf(
        &self,
        cpf: &str,
        password: &str,
    ) -> Result<Credential, DirectoryError> {
        let account = self
            .accounts
            .find_by_cpf(cpf)
            .await?
            .ok_or(DirectoryError::InvalidCredentials)?;

        self.finish_login(account, password).await
    }

    async fn login_by_license(
        &self,
        license_number: &str,
        password: &str,
    ) -> Result<Credential, DirectoryError> {
        let doctor = self
            .doctors
            .find_by_license(license_number)
            .await?
            .ok_or(DirectoryError::InvalidCredentials)?;

        // A doctor row without its owning account is an internal
        // inconsistency, still surfaced as an authentication failure.
        let mut account = self
            .accounts
            .find_by_id(&doctor.account_id)
            .await?
            .ok_or(DirectoryError::DoctorAccountMissing)?;

        if !self.password_hasher.verify(password, &account.password_hash) {
            return Err(DirectoryError::InvalidCredentials);
        }

        // Even with a matching password, only Doctor-role accounts may
        // authenticate through the license path.
        if account.role != AccountRole::Doctor {
            return Err(DirectoryError::NotADoctor);
        }

        account.record_login();
        let account = self.accounts.update(account).await?;

        self.issue_credential(&account)
    }

    fn validate_token(&self, token: &str) -> bool {
        self.token_issuer.validate(token)
    }

    async fn current_account(&self, email: &str) -> Result<PersonProfile, DirectoryError> {
        if email.trim().is_empty() {
            return Err(EmailError::Empty.into());
        }

        let account = self
            .accounts
            .find_by_email(email)
            .await?
            .ok_or_else(|| DirectoryError::AccountNotFound(email.to_string()))?;

        Ok(PersonProfile::from_account(&account))
    }

    async fn change_password(
        &self,
        email: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), DirectoryError> {
        if email.trim().is_empty() {
            return Err(EmailError::Empty.into());
        }

        let mut account = self
            .accounts
            .find_by_email(email)
            .await?
            .ok_or_else(|| DirectoryError::AccountNotFound(email.to_string()))?;

        if !self
            .password_hasher
            .verify(current_password, &account.password_hash)
        {
            return Err(DirectoryError::CurrentPasswordIncorrect);
        }

        // Rejects an empty new password before any store write
        let password_hash = self.password_hasher.hash(new_password)?;
        account.set_password_hash(password_hash);
        self.accounts.update(account).await?;

        Ok(())
    }
}
