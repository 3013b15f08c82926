use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::account::models::AccountId;
use crate::domain::account::models::PersonProfile;
use crate::domain::account::ports::AccountRepository;
use crate::domain::cache::CacheAside;
use crate::domain::cache::CacheStore;
use crate::domain::doctor::models::Doctor;
use crate::domain::doctor::models::DoctorPayload;
use crate::domain::doctor::models::DoctorSummary;
use crate::domain::doctor::ports::DoctorRepository;
use crate::domain::doctor::ports::DoctorServicePort;
use crate::domain::errors::DirectoryError;
use crate::domain::specialty::models::SpecialtyId;

/// Absolute TTL for cached doctor listings.
const CACHE_TTL: Duration = Duration::from_secs(30 * 60);

/// Cache key for the doctor listing of one specialty.
fn doctors_cache_key(specialty_id: &SpecialtyId) -> String {
    format!("doctors:specialty:{}", specialty_id)
}

/// Doctor registration, update and specialty lookup.
///
/// Listings are cached per specialty id; every write invalidates the keys
/// it made stale before returning.
pub struct DoctorService<DR, AR, C>
where
    DR: DoctorRepository,
    AR: AccountRepository,
    C: CacheStore,
{
    doctors: Arc<DR>,
    accounts: Arc<AR>,
    cache: CacheAside<C>,
}

impl<DR, AR, C> DoctorService<DR, AR, C>
where
    DR: DoctorRepository,
    AR: AccountRepository,
    C: CacheStore,
{
    /// Create a new doctor service with injected dependencies.
    pub fn new(doctors: Arc<DR>, accounts: Arc<AR>, cache_store: Arc<C>) -> Self {
        Self {
            doctors,
            accounts,
            cache: CacheAside::new(cache_store),
        }
    }
}

#[async_trait]
impl<DR, AR, C> DoctorServicePort for DoctorService<DR, AR, C>
where
    DR: DoctorRepository,
    AR: AccountRepository,
    C: CacheStore,
{
    async fn register(
        &self,
        account_id: AccountId,
        payload: DoctorPayload,
    ) -> Result<DoctorSummary, DirectoryError> {
        if self
            .doctors
            .find_by_license(payload.license_number.as_str())
            .await?
            .is_some()
        {
            return Err(DirectoryError::LicenseInUse(
                payload.license_number.as_str().to_string(),
            ));
        }

        let doctor = Doctor::new(
            payload.license_number,
            account_id,
            payload.specialty_id,
            payload.consultation_fee,
        )?;
        let created = self.doctors.create(doctor).await?;

        self.cache
            .invalidate(&doctors_cache_key(&created.specialty_id))
            .await?;

        tracing::info!(
            doctor_id = %created.id,
            specialty_id = %created.specialty_id,
            "Doctor registered"
        );

        Ok(DoctorSummary::from(&created))
    }

    async fn update(
        &self,
        account_id: &AccountId,
        payload: DoctorPayload,
    ) -> Result<DoctorSummary, DirectoryError> {
        let mut doctor = self
            .doctors
            .find_by_account(account_id)
            .await?
            .ok_or_else(|| DirectoryError::DoctorNotFound(account_id.to_string()))?;

        // License uniqueness against any other doctor; keeping one's own is fine
        if let Some(existing) = self
            .doctors
            .find_by_license(payload.license_number.as_str())
            .await?
        {
            if existing.id != doctor.id {
                return Err(DirectoryError::LicenseInUse(
                    payload.license_number.as_str().to_string(),
                ));
            }
        }

        let previous_specialty = doctor.specialty_id;
        doctor.apply_update(
            payload.license_number,
            payload.specialty_id,
            payload.consultation_fee,
        )?;
        let updated = self.doctors.update(doctor).await?;

        // A doctor can move between specialties; both listings are stale
        if previous_specialty != updated.specialty_id {
            self.cache
                .invalidate(&doctors_cache_key(&previous_specialty))
                .await?;
        }
        self.cache
            .invalidate(&doctors_cache_key(&updated.specialty_id))
            .await?;

        Ok(DoctorSummary::from(&updated))
    }

    async fn list_by_specialty(
        &self,
        specialty_id: &SpecialtyId,
    ) -> Result<Vec<PersonProfile>, DirectoryError> {
        let key = doctors_cache_key(specialty_id);

        self.cache
            .get_or_compute(&key, CACHE_TTL, move || async move {
                let doctors = self.doctors.find_by_specialty(specialty_id).await?;

                let mut profiles = Vec::with_capacity(doctors.len());
                for doctor in doctors {
                    match self.accounts.find_by_id(&doctor.account_id).await? {
                        Some(account) => profiles
                            .push(PersonProfile::with_doctor(&account, DoctorSummary::from(&doctor))),
                        None => {
                            tracing::warn!(
                                doctor_id = %doctor.id,
                                account_id = %doctor.account_id,
                                "Doctor row without owning account, skipping"
                            );
                        }
                    }
                }

                Ok(profiles)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::account::models::Account;
    use crate::domain::account::models::AccountRole;
    use crate::domain::account::models::Cpf;
    use crate::domain::account::models::EmailAddress;
    use crate::domain::cache::testing::InMemoryCacheStore;
    use crate::domain::doctor::models::LicenseNumber;

    mock! {
        pub TestDoctorRepository {}

        #[async_trait]
        impl DoctorRepository for TestDoctorRepository {
            async fn create(&self, doctor: Doctor) -> Result<Doctor, DirectoryError>;
            async fn find_by_account(&self, account_id: &AccountId) -> Result<Option<Doctor>, DirectoryError>;
            async fn find_by_license(&self, license_number: &str) -> Result<Option<Doctor>, DirectoryError>;
            async fn find_by_specialty(&self, specialty_id: &SpecialtyId) -> Result<Vec<Doctor>, DirectoryError>;
            async fn update(&self, doctor: Doctor) -> Result<Doctor, DirectoryError>;
        }
    }

    mock! {
        pub TestAccountRepository {}

        #[async_trait]
        impl AccountRepository for TestAccountRepository {
            async fn create(&self, account: Account) -> Result<Account, DirectoryError>;
            async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, DirectoryError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DirectoryError>;
            async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Account>, DirectoryError>;
            async fn update(&self, account: Account) -> Result<Account, DirectoryError>;
        }
    }

    fn payload(license: &str, specialty_id: SpecialtyId) -> DoctorPayload {
        DoctorPayload {
            license_number: LicenseNumber::new(license.to_string()).unwrap(),
            specialty_id,
            consultation_fee: Decimal::new(15000, 2),
        }
    }

    fn doctor_account() -> Account {
        Account::new(
            "Dr. João".to_string(),
            EmailAddress::new("joao@teste.com".to_string()).unwrap(),
            Cpf::new("12345678901".to_string()).unwrap(),
            "$argon2id$test_hash".to_string(),
            AccountRole::Doctor,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_register_invalidates_specialty_listing() {
        let mut doctors = MockTestDoctorRepository::new();
        let accounts = MockTestAccountRepository::new();
        let specialty_id = SpecialtyId::new();

        doctors
            .expect_find_by_license()
            .times(1)
            .returning(|_| Ok(None));
        doctors
            .expect_create()
            .times(1)
            .returning(|doctor| Ok(doctor));

        let store = Arc::new(InMemoryCacheStore::new());
        store.insert_raw(&doctors_cache_key(&specialty_id), b"[]".to_vec());
        let service = DoctorService::new(Arc::new(doctors), Arc::new(accounts), Arc::clone(&store));

        let summary = service
            .register(AccountId::new(), payload("CRM-12345", specialty_id))
            .await
            .expect("Register should succeed");

        assert_eq!(summary.license_number, "CRM-12345");
        assert!(!store.contains(&doctors_cache_key(&specialty_id)));
    }

    #[tokio::test]
    async fn test_register_duplicate_license_writes_nothing() {
        let mut doctors = MockTestDoctorRepository::new();
        let accounts = MockTestAccountRepository::new();
        let specialty_id = SpecialtyId::new();

        let existing = Doctor::new(
            LicenseNumber::new("CRM-12345".to_string()).unwrap(),
            AccountId::new(),
            specialty_id,
            Decimal::new(10000, 2),
        )
        .unwrap();
        doctors
            .expect_find_by_license()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        doctors.expect_create().times(0);

        let store = Arc::new(InMemoryCacheStore::new());
        let service = DoctorService::new(Arc::new(doctors), Arc::new(accounts), store);

        let result = service
            .register(AccountId::new(), payload("CRM-12345", specialty_id))
            .await;

        assert!(matches!(result, Err(DirectoryError::LicenseInUse(_))));
    }

    #[tokio::test]
    async fn test_update_move_invalidates_both_specialties() {
        let mut doctors = MockTestDoctorRepository::new();
        let accounts = MockTestAccountRepository::new();
        let account_id = AccountId::new();
        let old_specialty = SpecialtyId::new();
        let new_specialty = SpecialtyId::new();

        let doctor = Doctor::new(
            LicenseNumber::new("CRM-12345".to_string()).unwrap(),
            account_id,
            old_specialty,
            Decimal::new(15000, 2),
        )
        .unwrap();
        let self_match = doctor.clone();

        doctors
            .expect_find_by_account()
            .times(1)
            .returning(move |_| Ok(Some(doctor.clone())));
        doctors
            .expect_find_by_license()
            .times(1)
            .returning(move |_| Ok(Some(self_match.clone())));
        doctors
            .expect_update()
            .times(1)
            .returning(|doctor| Ok(doctor));

        let store = Arc::new(InMemoryCacheStore::new());
        store.insert_raw(&doctors_cache_key(&old_specialty), b"[]".to_vec());
        store.insert_raw(&doctors_cache_key(&new_specialty), b"[]".to_vec());
        let service = DoctorService::new(Arc::new(doctors), Arc::new(accounts), Arc::clone(&store));

        let summary = service
            .update(&account_id, payload("CRM-12345", new_specialty))
            .await
            .expect("Update should succeed");

        assert_eq!(summary.specialty_id, new_specialty.0);
        // Stale entries must not linger under either key
        assert!(!store.contains(&doctors_cache_key(&old_specialty)));
        assert!(!store.contains(&doctors_cache_key(&new_specialty)));
    }

    #[tokio::test]
    async fn test_update_unknown_account_is_not_found() {
        let mut doctors = MockTestDoctorRepository::new();
        let accounts = MockTestAccountRepository::new();

        doctors
            .expect_find_by_account()
            .times(1)
            .returning(|_| Ok(None));
        doctors.expect_update().times(0);

        let store = Arc::new(InMemoryCacheStore::new());
        let service = DoctorService::new(Arc::new(doctors), Arc::new(accounts), store);

        let result = service
            .update(&AccountId::new(), payload("CRM-12345", SpecialtyId::new()))
            .await;

        assert!(matches!(result, Err(DirectoryError::DoctorNotFound(_))));
    }

    #[tokio::test]
    async fn test_update_license_taken_by_other_doctor() {
        let mut doctors = MockTestDoctorRepository::new();
        let accounts = MockTestAccountRepository::new();
        let account_id = AccountId::new();
        let specialty_id = SpecialtyId::new();

        let doctor = Doctor::new(
            LicenseNumber::new("CRM-12345".to_string()).unwrap(),
            account_id,
            specialty_id,
            Decimal::new(15000, 2),
        )
        .unwrap();
        let other = Doctor::new(
            LicenseNumber::new("CRM-99999".to_string()).unwrap(),
            AccountId::new(),
            specialty_id,
            Decimal::new(20000, 2),
        )
        .unwrap();

        doctors
            .expect_find_by_account()
            .times(1)
            .returning(move |_| Ok(Some(doctor.clone())));
        doctors
            .expect_find_by_license()
            .times(1)
            .returning(move |_| Ok(Some(other.clone())));
        doctors.expect_update().times(0);

        let store = Arc::new(InMemoryCacheStore::new());
        let service = DoctorService::new(Arc::new(doctors), Arc::new(accounts), store);

        let result = service
            .update(&account_id, payload("CRM-99999", specialty_id))
            .await;

        assert!(matches!(result, Err(DirectoryError::LicenseInUse(_))));
    }

    #[tokio::test]
    async fn test_list_by_specialty_serves_second_read_from_cache() {
        let mut doctors = MockTestDoctorRepository::new();
        let mut accounts = MockTestAccountRepository::new();
        let specialty_id = SpecialtyId::new();

        let account = doctor_account();
        let doctor = Doctor::new(
            LicenseNumber::new("CRM-12345".to_string()).unwrap(),
            account.id,
            specialty_id,
            Decimal::new(15000, 2),
        )
        .unwrap();

        doctors
            .expect_find_by_specialty()
            .times(1)
            .returning(move |_| Ok(vec![doctor.clone()]));
        accounts
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(account.clone())));

        let store = Arc::new(InMemoryCacheStore::new());
        let service = DoctorService::new(Arc::new(doctors), Arc::new(accounts), store);

        let first = service
            .list_by_specialty(&specialty_id)
            .await
            .expect("First list should succeed");
        let second = service
            .list_by_specialty(&specialty_id)
            .await
            .expect("Second list should succeed");

        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
        assert_eq!(
            first[0].doctor.as_ref().unwrap().license_number,
            "CRM-12345"
        );
    }

    #[tokio::test]
    async fn test_list_by_specialty_skips_doctor_without_account() {
        let mut doctors = MockTestDoctorRepository::new();
        let mut accounts = MockTestAccountRepository::new();
        let specialty_id = SpecialtyId::new();

        let account = doctor_account();
        let with_account = Doctor::new(
            LicenseNumber::new("CRM-12345".to_string()).unwrap(),
            account.id,
            specialty_id,
            Decimal::new(15000, 2),
        )
        .unwrap();
        let orphaned = Doctor::new(
            LicenseNumber::new("CRM-99999".to_string()).unwrap(),
            AccountId::new(),
            specialty_id,
            Decimal::new(20000, 2),
        )
        .unwrap();

        let owned_id = account.id;
        doctors
            .expect_find_by_specialty()
            .times(1)
            .returning(move |_| Ok(vec![with_account.clone(), orphaned.clone()]));
        accounts
            .expect_find_by_id()
            .times(2)
            .returning(move |id| {
                if *id == owned_id {
                    Ok(Some(account.clone()))
                } else {
                    Ok(None)
                }
            });

        let store = Arc::new(InMemoryCacheStore::new());
        let service = DoctorService::new(Arc::new(doctors), Arc::new(accounts), store);

        let profiles = service
            .list_by_specialty(&specialty_id)
            .await
            .expect("List should succeed");

        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].name, "Dr. João");
    }
}
