use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::errors::DirectoryError;
use crate::domain::specialty::models::Specialty;
use crate::domain::specialty::models::SpecialtyId;
use crate::domain::specialty::ports::SpecialtyRepository;

pub struct PostgresSpecialtyRepository {
    pool: PgPool,
}

impl PostgresSpecialtyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct SpecialtyRow {
    id: Uuid,
    name: String,
    description: String,
    created_at: DateTime<Utc>,
    active: bool,
}

impl From<SpecialtyRow> for Specialty {
    fn from(row: SpecialtyRow) -> Self {
        Specialty {
            id: SpecialtyId(row.id),
            name: row.name,
            description: row.description,
            created_at: row.created_at,
            active: row.active,
        }
    }
}

#[async_trait]
impl SpecialtyRepository for PostgresSpecialtyRepository {
    async fn create(&self, specialty: Specialty) -> Result<Specialty, DirectoryError> {
        sqlx::query(
            r#"
            INSERT INTO specialties (id, name, description, created_at, active)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(specialty.id.0)
        .bind(&specialty.name)
        .bind(&specialty.description)
        .bind(specialty.created_at)
        .bind(specialty.active)
        .execute(&self.pool)
        .await
        .map_err(|e| DirectoryError::Database(e.to_string()))?;

        Ok(specialty)
    }

    // Specialty reads filter on the active flag; retired entries disappear
    // from the catalog without a delete.
    async fn find_all(&self) -> Result<Vec<Specialty>, DirectoryError> {
        let rows = sqlx::query_as::<_, SpecialtyRow>(
            r#"
            SELECT id, name, description, created_at, active
            FROM specialties
            WHERE active = TRUE
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DirectoryError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(Specialty::from).collect())
    }

    async fn find_by_id(&self, id: &SpecialtyId) -> Result<Option<Specialty>, DirectoryError> {
        let row = sqlx::query_as::<_, SpecialtyRow>(
            r#"
            SELECT id, name, description, created_at, active
            FROM specialties
            WHERE id = $1 AND active = TRUE
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DirectoryError::Database(e.to_string()))?;

        Ok(row.map(Specialty::from))
    }
}
