use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use uuid::Uuid;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::specialty::models::SpecialtyId;
use crate::domain::specialty::ports::SpecialtyServicePort;
use crate::inbound::http::messages::SpecialtyData;
use crate::inbound::http::router::AppState;

pub async fn get_specialty(
    State(state): State<AppState>,
    Path(specialty_id): Path<Uuid>,
) -> Result<ApiSuccess<SpecialtyData>, ApiError> {
    let specialty = state.specialties.get(&SpecialtyId(specialty_id)).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        SpecialtyData::from(specialty),
    ))
}
