use async_trait::async_trait;

use crate::domain::account::models::AccountId;
use crate::domain::account::models::PersonProfile;
use crate::domain::doctor::models::Doctor;
use crate::domain::doctor::models::DoctorPayload;
use crate::domain::doctor::models::DoctorSummary;
use crate::domain::errors::DirectoryError;
use crate::domain::specialty::models::SpecialtyId;

/// Port for doctor registration, update and lookup.
#[async_trait]
pub trait DoctorServicePort: Send + Sync + 'static {
    /// Attach a doctor record to an account.
    ///
    /// # Errors
    /// * `LicenseInUse` - Another doctor holds this license number
    /// * Validation errors from entity construction
    async fn register(
        &self,
        account_id: AccountId,
        payload: DoctorPayload,
    ) -> Result<DoctorSummary, DirectoryError>;

    /// Update the doctor record owned by an account.
    ///
    /// # Errors
    /// * `DoctorNotFound` - Account has no doctor record
    /// * `LicenseInUse` - License belongs to a *different* doctor
    async fn update(
        &self,
        account_id: &AccountId,
        payload: DoctorPayload,
    ) -> Result<DoctorSummary, DirectoryError>;

    /// List the profiles of all doctors in a specialty (read-through
    /// cached).
    async fn list_by_specialty(
        &self,
        specialty_id: &SpecialtyId,
    ) -> Result<Vec<PersonProfile>, DirectoryError>;
}

/// Persistence operations for the doctor aggregate.
#[async_trait]
pub trait DoctorRepository: Send + Sync + 'static {
    /// Persist a new doctor record.
    ///
    /// # Errors
    /// * `LicenseInUse` - Unique constraint hit
    /// * `Database` - Store operation failed
    async fn create(&self, doctor: Doctor) -> Result<Doctor, DirectoryError>;

    /// Retrieve the doctor record owned by an account.
    async fn find_by_account(
        &self,
        account_id: &AccountId,
    ) -> Result<Option<Doctor>, DirectoryError>;

    /// Retrieve a doctor by license number.
    async fn find_by_license(&self, license_number: &str)
        -> Result<Option<Doctor>, DirectoryError>;

    /// Retrieve every doctor classified under a specialty.
    async fn find_by_specialty(
        &self,
        specialty_id: &SpecialtyId,
    ) -> Result<Vec<Doctor>, DirectoryError>;

    /// Update an existing doctor record.
    ///
    /// # Errors
    /// * `DoctorNotFound` - No row matched the id
    /// * `LicenseInUse` - Unique constraint hit
    /// * `Database` - Store operation failed
    async fn update(&self, doctor: Doctor) -> Result<Doctor, DirectoryError>;
}
