use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::specialty::ports::SpecialtyServicePort;
use crate::inbound::http::messages::SpecialtyData;
use crate::inbound::http::router::AppState;

pub async fn create_specialty(
    State(state): State<AppState>,
    Json(body): Json<CreateSpecialtyRequestBody>,
) -> Result<ApiSuccess<SpecialtyData>, ApiError> {
    let specialty = state
        .specialties
        .create(body.name, body.description)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        SpecialtyData::from(specialty),
    ))
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSpecialtyRequestBody {
    name: String,
    description: String,
}
