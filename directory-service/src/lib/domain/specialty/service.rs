use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::cache::CacheAside;
use crate::domain::cache::CacheStore;
use crate::domain::errors::DirectoryError;
use crate::domain::specialty::models::Specialty;
use crate::domain::specialty::models::SpecialtyId;
use crate::domain::specialty::models::SpecialtySummary;
use crate::domain::specialty::ports::SpecialtyRepository;
use crate::domain::specialty::ports::SpecialtyServicePort;

/// Cache key for the full specialty catalog.
const SPECIALTIES_CACHE_KEY: &str = "specialties:all";

/// Absolute TTL for cached catalog entries.
const CACHE_TTL: Duration = Duration::from_secs(30 * 60);

/// Specialty catalog with a read-through cache over the full listing.
pub struct SpecialtyService<SR, C>
where
    SR: SpecialtyRepository,
    C: CacheStore,
{
    specialties: Arc<SR>,
    cache: CacheAside<C>,
}

impl<SR, C> SpecialtyService<SR, C>
where
    SR: SpecialtyRepository,
    C: CacheStore,
{
    /// Create a new specialty service with injected dependencies.
    pub fn new(specialties: Arc<SR>, cache_store: Arc<C>) -> Self {
        Self {
            specialties,
            cache: CacheAside::new(cache_store),
        }
    }
}

#[async_trait]
impl<SR, C> SpecialtyServicePort for SpecialtyService<SR, C>
where
    SR: SpecialtyRepository,
    C: CacheStore,
{
    async fn list(&self) -> Result<Vec<SpecialtySummary>, DirectoryError> {
        self.cache
            .get_or_compute(SPECIALTIES_CACHE_KEY, CACHE_TTL, move || async move {
                let specialties = self.specialties.find_all().await?;
                Ok(specialties.iter().map(SpecialtySummary::from).collect())
            })
            .await
    }

    async fn get(&self, id: &SpecialtyId) -> Result<SpecialtySummary, DirectoryError> {
        let specialty = self
            .specialties
            .find_by_id(id)
            .await?
            .ok_or_else(|| DirectoryError::SpecialtyNotFound(id.to_string()))?;

        Ok(SpecialtySummary::from(&specialty))
    }

    async fn create(
        &self,
        name: String,
        description: String,
    ) -> Result<SpecialtySummary, DirectoryError> {
        let specialty = Specialty::new(name, description)?;
        let created = self.specialties.create(specialty).await?;

        // The catalog listing is stale from this moment; drop it before
        // reporting success.
        self.cache.invalidate(SPECIALTIES_CACHE_KEY).await?;

        tracing::info!(specialty_id = %created.id, name = %created.name, "Specialty created");

        Ok(SpecialtySummary::from(&created))
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::cache::testing::InMemoryCacheStore;

    mock! {
        pub TestSpecialtyRepository {}

        #[async_trait]
        impl SpecialtyRepository for TestSpecialtyRepository {
            async fn create(&self, specialty: Specialty) -> Result<Specialty, DirectoryError>;
            async fn find_all(&self) -> Result<Vec<Specialty>, DirectoryError>;
            async fn find_by_id(&self, id: &SpecialtyId) -> Result<Option<Specialty>, DirectoryError>;
        }
    }

    fn sample_specialty() -> Specialty {
        Specialty::new("Cardiologia".to_string(), "Coração e afins".to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_list_serves_second_read_from_cache() {
        let mut repository = MockTestSpecialtyRepository::new();
        let specialty = sample_specialty();
        let returned = specialty.clone();
        repository
            .expect_find_all()
            .times(1)
            .returning(move || Ok(vec![returned.clone()]));

        let store = Arc::new(InMemoryCacheStore::new());
        let service = SpecialtyService::new(Arc::new(repository), Arc::clone(&store));

        let first = service.list().await.expect("First list should succeed");
        let second = service.list().await.expect("Second list should succeed");

        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].name, "Cardiologia");
        assert!(store.contains("specialties:all"));
    }

    #[tokio::test]
    async fn test_create_invalidates_catalog_cache() {
        let mut repository = MockTestSpecialtyRepository::new();
        repository
            .expect_create()
            .times(1)
            .returning(|specialty| Ok(specialty));

        let store = Arc::new(InMemoryCacheStore::new());
        store.insert_raw("specialties:all", b"[]".to_vec());
        let service = SpecialtyService::new(Arc::new(repository), Arc::clone(&store));

        service
            .create("Cardiologia".to_string(), "Coração e afins".to_string())
            .await
            .expect("Create should succeed");

        // Invalidation happens before create returns
        assert!(!store.contains("specialties:all"));
    }

    #[tokio::test]
    async fn test_create_rejects_blank_fields_without_writing() {
        let mut repository = MockTestSpecialtyRepository::new();
        repository.expect_create().times(0);

        let store = Arc::new(InMemoryCacheStore::new());
        let service = SpecialtyService::new(Arc::new(repository), store);

        let result = service.create(String::new(), "desc".to_string()).await;
        assert!(matches!(result, Err(DirectoryError::EmptySpecialtyName)));
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let mut repository = MockTestSpecialtyRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let store = Arc::new(InMemoryCacheStore::new());
        let service = SpecialtyService::new(Arc::new(repository), store);

        let result = service.get(&SpecialtyId::new()).await;
        assert!(matches!(result, Err(DirectoryError::SpecialtyNotFound(_))));
    }

    #[tokio::test]
    async fn test_undecodable_cache_entry_recomputes_from_repository() {
        let mut repository = MockTestSpecialtyRepository::new();
        let specialty = sample_specialty();
        repository
            .expect_find_all()
            .times(1)
            .returning(move || Ok(vec![specialty.clone()]));

        let store = Arc::new(InMemoryCacheStore::new());
        store.insert_raw("specialties:all", b"{corrupted".to_vec());
        let service = SpecialtyService::new(Arc::new(repository), Arc::clone(&store));

        let listed = service.list().await.expect("List should succeed");
        assert_eq!(listed.len(), 1);
    }
}
