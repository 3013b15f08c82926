use async_trait::async_trait;

use crate::domain::errors::DirectoryError;
use crate::domain::specialty::models::Specialty;
use crate::domain::specialty::models::SpecialtyId;
use crate::domain::specialty::models::SpecialtySummary;

/// Port for the specialty catalog.
#[async_trait]
pub trait SpecialtyServicePort: Send + Sync + 'static {
    /// List all active specialties (read-through cached).
    async fn list(&self) -> Result<Vec<SpecialtySummary>, DirectoryError>;

    /// Retrieve one active specialty.
    ///
    /// # Errors
    /// * `SpecialtyNotFound` - No active specialty with this id
    async fn get(&self, id: &SpecialtyId) -> Result<SpecialtySummary, DirectoryError>;

    /// Create a new specialty and invalidate the catalog cache.
    ///
    /// # Errors
    /// * `EmptySpecialtyName` / `EmptySpecialtyDescription` - Blank fields
    async fn create(
        &self,
        name: String,
        description: String,
    ) -> Result<SpecialtySummary, DirectoryError>;
}

/// Persistence operations for the specialty catalog.
///
/// Lookups filter on the active flag; retired entries are invisible here.
/// (Account and doctor reads intentionally do not share this behavior.)
#[async_trait]
pub trait SpecialtyRepository: Send + Sync + 'static {
    /// Persist a new specialty.
    async fn create(&self, specialty: Specialty) -> Result<Specialty, DirectoryError>;

    /// Retrieve all active specialties.
    async fn find_all(&self) -> Result<Vec<Specialty>, DirectoryError>;

    /// Retrieve an active specialty by identifier.
    async fn find_by_id(&self, id: &SpecialtyId) -> Result<Option<Specialty>, DirectoryError>;
}
