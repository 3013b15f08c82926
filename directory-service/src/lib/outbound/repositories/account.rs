use std::str::FromStr;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::AccountRole;
use crate::domain::account::models::Cpf;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::ports::AccountRepository;
use crate::domain::errors::DirectoryError;

pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AccountRow {
    id: Uuid,
    name: String,
    email: String,
    cpf: String,
    password_hash: String,
    role: String,
    created_at: DateTime<Utc>,
    last_login_at: Option<DateTime<Utc>>,
    active: bool,
}

impl AccountRow {
    fn into_domain(self) -> Result<Account, DirectoryError> {
        Ok(Account {
            id: AccountId(self.id),
            name: self.name,
            email: EmailAddress::new(self.email)?,
            cpf: Cpf::new(self.cpf)?,
            password_hash: self.password_hash,
            role: AccountRole::from_str(&self.role)?,
            created_at: self.created_at,
            last_login_at: self.last_login_at,
            active: self.active,
        })
    }
}

/// Translate unique-constraint violations into the same conflict errors the
/// check-then-act path raises; two racing registrations land here.
fn translate_unique_violation(e: sqlx::Error, account: &Account) -> DirectoryError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            if db_err.constraint() == Some("accounts_email_key") {
                return DirectoryError::EmailInUse(account.email.as_str().to_string());
            }
            if db_err.constraint() == Some("accounts_cpf_key") {
                return DirectoryError::CpfInUse(account.cpf.as_str().to_string());
            }
        }
    }
    DirectoryError::Database(e.to_string())
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn create(&self, account: Account) -> Result<Account, DirectoryError> {
        sqlx::query(
            r#"
            INSERT INTO accounts (id, name, email, cpf, password_hash, role, created_at, last_login_at, active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(account.id.0)
        .bind(&account.name)
        .bind(account.email.as_str())
        .bind(account.cpf.as_str())
        .bind(&account.password_hash)
        .bind(account.role.as_str())
        .bind(account.created_at)
        .bind(account.last_login_at)
        .bind(account.active)
        .execute(&self.pool)
        .await
        .map_err(|e| translate_unique_violation(e, &account))?;

        Ok(account)
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, DirectoryError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, name, email, cpf, password_hash, role, created_at, last_login_at, active
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DirectoryError::Database(e.to_string()))?;

        row.map(AccountRow::into_domain).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DirectoryError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, name, email, cpf, password_hash, role, created_at, last_login_at, active
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DirectoryError::Database(e.to_string()))?;

        row.map(AccountRow::into_domain).transpose()
    }

    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Account>, DirectoryError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, name, email, cpf, password_hash, role, created_at, last_login_at, active
            FROM accounts
            WHERE cpf = $1
            "#,
        )
        .bind(cpf)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DirectoryError::Database(e.to_string()))?;

        row.map(AccountRow::into_domain).transpose()
    }

    async fn update(&self, account: Account) -> Result<Account, DirectoryError> {
        let result = sqlx::query(
            r#"
            UPDATE accounts
            SET name = $2, email = $3, cpf = $4, password_hash = $5, role = $6,
                last_login_at = $7, active = $8
            WHERE id = $1
            "#,
        )
        .bind(account.id.0)
        .bind(&account.name)
        .bind(account.email.as_str())
        .bind(account.cpf.as_str())
        .bind(&account.password_hash)
        .bind(account.role.as_str())
        .bind(account.last_login_at)
        .bind(account.active)
        .execute(&self.pool)
        .await
        .map_err(|e| translate_unique_violation(e, &account))?;

        if result.rows_affected() == 0 {
            return Err(DirectoryError::AccountNotFound(account.id.to_string()));
        }

        Ok(account)
    }
}
