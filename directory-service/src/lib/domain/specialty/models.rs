use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::errors::DirectoryError;

/// Specialty catalog entry.
///
/// Created by explicit admin action, read-mostly; there is no delete
/// operation, entries are retired via the active flag.
#[derive(Debug, Clone)]
pub struct Specialty {
    pub id: SpecialtyId,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub active: bool,
}

impl Specialty {
    /// Construct a new specialty.
    ///
    /// # Errors
    /// * `EmptySpecialtyName` / `EmptySpecialtyDescription` - Blank fields
    pub fn new(name: String, description: String) -> Result<Self, DirectoryError> {
        if name.trim().is_empty() {
            return Err(DirectoryError::EmptySpecialtyName);
        }
        if description.trim().is_empty() {
            return Err(DirectoryError::EmptySpecialtyDescription);
        }

        Ok(Self {
            id: SpecialtyId::new(),
            name,
            description,
            created_at: Utc::now(),
            active: true,
        })
    }
}

/// Specialty unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpecialtyId(pub Uuid);

impl SpecialtyId {
    /// Generate a new random specialty ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SpecialtyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Public read model for a specialty; cached as JSON by the catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialtySummary {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Specialty> for SpecialtySummary {
    fn from(specialty: &Specialty) -> Self {
        Self {
            id: specialty.id.0,
            name: specialty.name.clone(),
            description: specialty.description.clone(),
            created_at: specialty.created_at,
        }
    }
}
