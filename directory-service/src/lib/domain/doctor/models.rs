use std::fmt;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::account::models::AccountId;
use crate::domain::doctor::errors::FeeError;
use crate::domain::doctor::errors::LicenseError;
use crate::domain::errors::DirectoryError;
use crate::domain::specialty::models::SpecialtyId;

/// Doctor aggregate entity.
///
/// 1:1 extension of a Doctor-role account: professional license, specialty
/// classification and consultation fee.
#[derive(Debug, Clone)]
pub struct Doctor {
    pub id: DoctorId,
    pub account_id: AccountId,
    pub specialty_id: SpecialtyId,
    pub license_number: LicenseNumber,
    pub consultation_fee: Decimal,
}

impl Doctor {
    /// Construct a new doctor record.
    ///
    /// # Errors
    /// * `MissingAccountReference` / `MissingSpecialtyReference` - Nil
    ///   foreign keys
    /// * `InvalidFee` - Fee is zero or negative
    pub fn new(
        license_number: LicenseNumber,
        account_id: AccountId,
        specialty_id: SpecialtyId,
        consultation_fee: Decimal,
    ) -> Result<Self, DirectoryError> {
        Self::check_references(&account_id, &specialty_id, consultation_fee)?;

        Ok(Self {
            id: DoctorId::new(),
            account_id,
            specialty_id,
            license_number,
            consultation_fee,
        })
    }

    /// Replace license, specialty and fee, keeping id and owning account.
    ///
    /// # Errors
    /// Same validation as [`Doctor::new`].
    pub fn apply_update(
        &mut self,
        license_number: LicenseNumber,
        specialty_id: SpecialtyId,
        consultation_fee: Decimal,
    ) -> Result<(), DirectoryError> {
        Self::check_references(&self.account_id, &specialty_id, consultation_fee)?;

        self.license_number = license_number;
        self.specialty_id = specialty_id;
        self.consultation_fee = consultation_fee;

        Ok(())
    }

    fn check_references(
        account_id: &AccountId,
        specialty_id: &SpecialtyId,
        consultation_fee: Decimal,
    ) -> Result<(), DirectoryError> {
        if account_id.0.is_nil() {
            return Err(DirectoryError::MissingAccountReference);
        }
        if specialty_id.0.is_nil() {
            return Err(DirectoryError::MissingSpecialtyReference);
        }
        if consultation_fee <= Decimal::ZERO {
            return Err(FeeError::NotPositive(consultation_fee).into());
        }
        Ok(())
    }
}

/// Doctor unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DoctorId(pub Uuid);

impl DoctorId {
    /// Generate a new random doctor ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for DoctorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Professional license number ("CRM"), globally unique across doctors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseNumber(String);

impl LicenseNumber {
    /// Create a new validated license number.
    ///
    /// # Errors
    /// * `Empty` - License is empty or whitespace-only
    pub fn new(license: String) -> Result<Self, LicenseError> {
        if license.trim().is_empty() {
            return Err(LicenseError::Empty);
        }
        Ok(Self(license))
    }

    /// Get license number as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LicenseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Doctor-specific fields of a registration or update request.
#[derive(Debug, Clone)]
pub struct DoctorPayload {
    pub license_number: LicenseNumber,
    pub specialty_id: SpecialtyId,
    pub consultation_fee: Decimal,
}

/// Public read model for a doctor sub-record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorSummary {
    pub license_number: String,
    pub specialty_id: Uuid,
    pub consultation_fee: Decimal,
}

impl From<&Doctor> for DoctorSummary {
    fn from(doctor: &Doctor) -> Self {
        Self {
            license_number: doctor.license_number.as_str().to_string(),
            specialty_id: doctor.specialty_id.0,
            consultation_fee: doctor.consultation_fee,
        }
    }
}
