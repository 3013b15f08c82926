use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::specialty::ports::SpecialtyServicePort;
use crate::inbound::http::messages::SpecialtyData;
use crate::inbound::http::router::AppState;

pub async fn list_specialties(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<SpecialtyData>>, ApiError> {
    let specialties = state.specialties.list().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        specialties.into_iter().map(SpecialtyData::from).collect(),
    ))
}
