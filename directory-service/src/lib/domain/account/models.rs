use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::account::errors::AccountIdError;
use crate::domain::account::errors::CpfError;
use crate::domain::account::errors::EmailError;
use crate::domain::account::errors::RoleError;
use crate::domain::doctor::models::DoctorPayload;
use crate::domain::doctor::models::DoctorSummary;
use crate::domain::errors::DirectoryError;

/// Account aggregate entity.
///
/// Identity record for a patient, doctor or administrator.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub email: EmailAddress,
    pub cpf: Cpf,
    pub password_hash: String,
    pub role: AccountRole,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub active: bool,
}

impl Account {
    /// Construct a new account.
    ///
    /// The id and creation time are generated here and never reassigned;
    /// the account starts active with no recorded login.
    ///
    /// # Arguments
    /// * `name` - Display name (non-empty)
    /// * `email` - Validated email address
    /// * `cpf` - Validated cpf
    /// * `password_hash` - Digest produced by the password hasher, never plaintext
    /// * `role` - Account role
    ///
    /// # Errors
    /// * `EmptyName` - Name is empty or whitespace-only
    pub fn new(
        name: String,
        email: EmailAddress,
        cpf: Cpf,
        password_hash: String,
        role: AccountRole,
    ) -> Result<Self, DirectoryError> {
        if name.trim().is_empty() {
            return Err(DirectoryError::EmptyName);
        }

        Ok(Self {
            id: AccountId::new(),
            name,
            email,
            cpf,
            password_hash,
            role,
            created_at: Utc::now(),
            last_login_at: None,
            active: true,
        })
    }

    /// Record a successful login.
    pub fn record_login(&mut self) {
        self.last_login_at = Some(Utc::now());
    }

    /// Replace the mutable profile fields.
    ///
    /// Keeps id, creation time, login history and the active flag.
    ///
    /// # Errors
    /// * `EmptyName` - New name is empty or whitespace-only
    pub fn apply_update(
        &mut self,
        name: String,
        email: EmailAddress,
        cpf: Cpf,
        password_hash: String,
        role: AccountRole,
    ) -> Result<(), DirectoryError> {
        if name.trim().is_empty() {
            return Err(DirectoryError::EmptyName);
        }

        self.name = name;
        self.email = email;
        self.cpf = cpf;
        self.password_hash = password_hash;
        self.role = role;

        Ok(())
    }

    /// Swap in a new password digest.
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
    }
}

/// Account unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(pub Uuid);

impl AccountId {
    /// Generate a new random account ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an account ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, AccountIdError> {
        Uuid::parse_str(s)
            .map(AccountId)
            .map_err(|e| AccountIdError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Coarse shape check only: the address must be non-empty and contain both
/// `@` and `.`. Deliverability is not this layer's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `Empty` - Address is empty or whitespace-only
    /// * `InvalidFormat` - Address is missing `@` or `.`
    pub fn new(email: String) -> Result<Self, EmailError> {
        if email.trim().is_empty() {
            return Err(EmailError::Empty);
        }
        if !email.contains('@') || !email.contains('.') {
            return Err(EmailError::InvalidFormat(email));
        }
        Ok(Self(email))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Cpf value type
///
/// Exactly 11 ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cpf(String);

impl Cpf {
    const LENGTH: usize = 11;

    /// Create a new validated cpf.
    ///
    /// # Errors
    /// * `Empty` - Cpf is empty or whitespace-only
    /// * `WrongLength` - Not exactly 11 characters
    /// * `NonNumeric` - Contains a non-digit character
    pub fn new(cpf: String) -> Result<Self, CpfError> {
        if cpf.trim().is_empty() {
            return Err(CpfError::Empty);
        }
        if cpf.chars().count() != Self::LENGTH {
            return Err(CpfError::WrongLength(cpf.chars().count()));
        }
        if !cpf.chars().all(|c| c.is_ascii_digit()) {
            return Err(CpfError::NonNumeric);
        }
        Ok(Self(cpf))
    }

    /// Get cpf as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountRole {
    Administrator,
    Doctor,
    Patient,
}

impl AccountRole {
    /// Get the canonical role name.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountRole::Administrator => "Administrator",
            AccountRole::Doctor => "Doctor",
            AccountRole::Patient => "Patient",
        }
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountRole {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Administrator" => Ok(AccountRole::Administrator),
            "Doctor" => Ok(AccountRole::Doctor),
            "Patient" => Ok(AccountRole::Patient),
            other => Err(RoleError::Unknown(other.to_string())),
        }
    }
}

/// Public read model for an account, with the optional doctor sub-record.
///
/// Never carries the password hash. Serializable because doctor listings
/// are cached as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub role: AccountRole,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub doctor: Option<DoctorSummary>,
}

impl PersonProfile {
    /// Build a profile from an account alone.
    pub fn from_account(account: &Account) -> Self {
        Self {
            id: account.id.0,
            name: account.name.clone(),
            email: account.email.as_str().to_string(),
            cpf: account.cpf.as_str().to_string(),
            role: account.role,
            created_at: account.created_at,
            last_login_at: account.last_login_at,
            doctor: None,
        }
    }

    /// Build a profile with an embedded doctor sub-record.
    pub fn with_doctor(account: &Account, doctor: DoctorSummary) -> Self {
        Self {
            doctor: Some(doctor),
            ..Self::from_account(account)
        }
    }
}

/// Command to register a new person.
#[derive(Debug)]
pub struct RegisterPersonCommand {
    pub name: String,
    pub email: EmailAddress,
    pub cpf: Cpf,
    pub password: String,
    pub role: AccountRole,
    pub doctor: Option<DoctorPayload>,
}

/// Command to update an existing person, keyed by account id.
#[derive(Debug)]
pub struct UpdatePersonCommand {
    pub account_id: AccountId,
    pub name: String,
    pub email: EmailAddress,
    pub cpf: Cpf,
    pub password: String,
    pub role: AccountRole,
    pub doctor: Option<DoctorPayload>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_coarse_shape_check() {
        assert!(EmailAddress::new("teste@teste.com".to_string()).is_ok());
        assert_eq!(
            EmailAddress::new(String::new()).unwrap_err(),
            EmailError::Empty
        );
        assert!(matches!(
            EmailAddress::new("sem-arroba.com".to_string()),
            Err(EmailError::InvalidFormat(_))
        ));
        assert!(matches!(
            EmailAddress::new("sem@ponto".to_string()),
            Err(EmailError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_cpf_must_be_11_digits() {
        assert!(Cpf::new("12345678901".to_string()).is_ok());
        assert_eq!(Cpf::new(String::new()).unwrap_err(), CpfError::Empty);
        assert_eq!(
            Cpf::new("123".to_string()).unwrap_err(),
            CpfError::WrongLength(3)
        );
        assert_eq!(
            Cpf::new("1234567890a".to_string()).unwrap_err(),
            CpfError::NonNumeric
        );
    }

    #[test]
    fn test_role_round_trip() {
        for role in [
            AccountRole::Administrator,
            AccountRole::Doctor,
            AccountRole::Patient,
        ] {
            assert_eq!(role.as_str().parse::<AccountRole>().unwrap(), role);
        }
        assert!(matches!(
            "Nurse".parse::<AccountRole>(),
            Err(RoleError::Unknown(_))
        ));
    }

    #[test]
    fn test_new_account_defaults() {
        let account = Account::new(
            "Maria Silva".to_string(),
            EmailAddress::new("teste@teste.com".to_string()).unwrap(),
            Cpf::new("12345678901".to_string()).unwrap(),
            "$argon2id$test_hash".to_string(),
            AccountRole::Patient,
        )
        .unwrap();

        assert!(account.active);
        assert!(account.last_login_at.is_none());
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = Account::new(
            "   ".to_string(),
            EmailAddress::new("teste@teste.com".to_string()).unwrap(),
            Cpf::new("12345678901".to_string()).unwrap(),
            "$argon2id$test_hash".to_string(),
            AccountRole::Patient,
        );

        assert!(matches!(result, Err(DirectoryError::EmptyName)));
    }

    #[test]
    fn test_record_login_sets_timestamp() {
        let mut account = Account::new(
            "Maria Silva".to_string(),
            EmailAddress::new("teste@teste.com".to_string()).unwrap(),
            Cpf::new("12345678901".to_string()).unwrap(),
            "$argon2id$test_hash".to_string(),
            AccountRole::Patient,
        )
        .unwrap();

        account.record_login();
        assert!(account.last_login_at.is_some());
    }

    #[test]
    fn test_apply_update_preserves_identity() {
        let mut account = Account::new(
            "Maria Silva".to_string(),
            EmailAddress::new("teste@teste.com".to_string()).unwrap(),
            Cpf::new("12345678901".to_string()).unwrap(),
            "$argon2id$old".to_string(),
            AccountRole::Patient,
        )
        .unwrap();
        let id = account.id;
        let created_at = account.created_at;

        account
            .apply_update(
                "Maria S. Costa".to_string(),
                EmailAddress::new("novo@teste.com".to_string()).unwrap(),
                Cpf::new("10987654321".to_string()).unwrap(),
                "$argon2id$new".to_string(),
                AccountRole::Doctor,
            )
            .unwrap();

        assert_eq!(account.id, id);
        assert_eq!(account.created_at, created_at);
        assert_eq!(account.email.as_str(), "novo@teste.com");
        assert_eq!(account.role, AccountRole::Doctor);
    }
}
