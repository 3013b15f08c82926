use chrono::DateTime;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::account::models::AccountRole;
use crate::domain::account::models::PersonProfile;
use crate::domain::authentication::models::Credential;
use crate::domain::doctor::models::DoctorPayload;
use crate::domain::doctor::models::DoctorSummary;
use crate::domain::doctor::models::LicenseNumber;
use crate::domain::errors::DirectoryError;
use crate::domain::specialty::models::SpecialtyId;
use crate::domain::specialty::models::SpecialtySummary;

/// Credential bundle returned by every login endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CredentialData {
    pub token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
    pub display_name: String,
    pub role: AccountRole,
}

impl From<Credential> for CredentialData {
    fn from(credential: Credential) -> Self {
        Self {
            token: credential.token,
            refresh_token: credential.refresh_token,
            expires_at: credential.expires_at,
            display_name: credential.display_name,
            role: credential.role,
        }
    }
}

/// Public person representation with the optional doctor sub-record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonData {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub role: AccountRole,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub doctor: Option<DoctorData>,
}

impl From<PersonProfile> for PersonData {
    fn from(profile: PersonProfile) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            email: profile.email,
            cpf: profile.cpf,
            role: profile.role,
            created_at: profile.created_at,
            last_login_at: profile.last_login_at,
            doctor: profile.doctor.map(DoctorData::from),
        }
    }
}

/// Doctor sub-record representation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoctorData {
    pub license_number: String,
    pub specialty_id: Uuid,
    pub consultation_fee: Decimal,
}

impl From<DoctorSummary> for DoctorData {
    fn from(summary: DoctorSummary) -> Self {
        Self {
            license_number: summary.license_number,
            specialty_id: summary.specialty_id,
            consultation_fee: summary.consultation_fee,
        }
    }
}

/// Specialty catalog entry representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecialtyData {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl From<SpecialtySummary> for SpecialtyData {
    fn from(summary: SpecialtySummary) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
            description: summary.description,
            created_at: summary.created_at,
        }
    }
}

/// Doctor-specific fields of a registration or update request body.
#[derive(Debug, Clone, Deserialize)]
pub struct DoctorRequestBody {
    pub license_number: String,
    pub specialty_id: Uuid,
    pub consultation_fee: Decimal,
}

impl DoctorRequestBody {
    /// Parse into the validated domain payload.
    pub fn into_payload(self) -> Result<DoctorPayload, DirectoryError> {
        Ok(DoctorPayload {
            license_number: LicenseNumber::new(self.license_number)?,
            specialty_id: SpecialtyId(self.specialty_id),
            consultation_fee: self.consultation_fee,
        })
    }
}
