use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::account::models::AccountId;
use crate::domain::doctor::models::Doctor;
use crate::domain::doctor::models::DoctorId;
use crate::domain::doctor::models::LicenseNumber;
use crate::domain::doctor::ports::DoctorRepository;
use crate::domain::errors::DirectoryError;
use crate::domain::specialty::models::SpecialtyId;

pub struct PostgresDoctorRepository {
    pool: PgPool,
}

impl PostgresDoctorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct DoctorRow {
    id: Uuid,
    account_id: Uuid,
    specialty_id: Uuid,
    license_number: String,
    consultation_fee: Decimal,
}

impl DoctorRow {
    fn into_domain(self) -> Result<Doctor, DirectoryError> {
        Ok(Doctor {
            id: DoctorId(self.id),
            account_id: AccountId(self.account_id),
            specialty_id: SpecialtyId(self.specialty_id),
            license_number: LicenseNumber::new(self.license_number)?,
            consultation_fee: self.consultation_fee,
        })
    }
}

fn translate_unique_violation(e: sqlx::Error, doctor: &Doctor) -> DirectoryError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation()
            && db_err.constraint() == Some("doctors_license_number_key")
        {
            return DirectoryError::LicenseInUse(doctor.license_number.as_str().to_string());
        }
    }
    DirectoryError::Database(e.to_string())
}

#[async_trait]
impl DoctorRepository for PostgresDoctorRepository {
    async fn create(&self, doctor: Doctor) -> Result<Doctor, DirectoryError> {
        sqlx::query(
            r#"
            INSERT INTO doctors (id, account_id, specialty_id, license_number, consultation_fee)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(doctor.id.0)
        .bind(doctor.account_id.0)
        .bind(doctor.specialty_id.0)
        .bind(doctor.license_number.as_str())
        .bind(doctor.consultation_fee)
        .execute(&self.pool)
        .await
        .map_err(|e| translate_unique_violation(e, &doctor))?;

        Ok(doctor)
    }

    async fn find_by_account(
        &self,
        account_id: &AccountId,
    ) -> Result<Option<Doctor>, DirectoryError> {
        let row = sqlx::query_as::<_, DoctorRow>(
            r#"
            SELECT id, account_id, specialty_id, license_number, consultation_fee
            FROM doctors
            WHERE account_id = $1
            "#,
        )
        .bind(account_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DirectoryError::Database(e.to_string()))?;

        row.map(DoctorRow::into_domain).transpose()
    }

    async fn find_by_license(
        &self,
        license_number: &str,
    ) -> Result<Option<Doctor>, DirectoryError> {
        let row = sqlx::query_as::<_, DoctorRow>(
            r#"
            SELECT id, account_id, specialty_id, license_number, consultation_fee
            FROM doctors
            WHERE license_number = $1
            "#,
        )
        .bind(license_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DirectoryError::Database(e.to_string()))?;

        row.map(DoctorRow::into_domain).transpose()
    }

    async fn find_by_specialty(
        &self,
        specialty_id: &SpecialtyId,
    ) -> Result<Vec<Doctor>, DirectoryError> {
        let rows = sqlx::query_as::<_, DoctorRow>(
            r#"
            SELECT id, account_id, specialty_id, license_number, consultation_fee
            FROM doctors
            WHERE specialty_id = $1
            "#,
        )
        .bind(specialty_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DirectoryError::Database(e.to_string()))?;

        rows.into_iter().map(DoctorRow::into_domain).collect()
    }

    async fn update(&self, doctor: Doctor) -> Result<Doctor, DirectoryError> {
        let result = sqlx::query(
            r#"
            UPDATE doctors
            SET specialty_id = $2, license_number = $3, consultation_fee = $4
            WHERE id = $1
            "#,
        )
        .bind(doctor.id.0)
        .bind(doctor.specialty_id.0)
        .bind(doctor.license_number.as_str())
        .bind(doctor.consultation_fee)
        .execute(&self.pool)
        .await
        .map_err(|e| translate_unique_violation(e, &doctor))?;

        if result.rows_affected() == 0 {
            return Err(DirectoryError::DoctorNotFound(doctor.account_id.to_string()));
        }

        Ok(doctor)
    }
}
