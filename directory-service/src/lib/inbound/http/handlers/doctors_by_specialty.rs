use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use uuid::Uuid;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::doctor::ports::DoctorServicePort;
use crate::domain::specialty::models::SpecialtyId;
use crate::inbound::http::messages::PersonData;
use crate::inbound::http::router::AppState;

pub async fn doctors_by_specialty(
    State(state): State<AppState>,
    Path(specialty_id): Path<Uuid>,
) -> Result<ApiSuccess<Vec<PersonData>>, ApiError> {
    let profiles = state
        .doctors
        .list_by_specialty(&SpecialtyId(specialty_id))
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        profiles.into_iter().map(PersonData::from).collect(),
    ))
}
