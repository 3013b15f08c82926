use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::authentication::ports::AuthenticationServicePort;
use crate::inbound::http::router::AppState;

pub async fn validate_token(
    State(state): State<AppState>,
    Query(params): Query<ValidateTokenParams>,
) -> Result<ApiSuccess<ValidateTokenResponseData>, ApiError> {
    let valid = state.authentication.validate_token(&params.token);

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ValidateTokenResponseData { valid },
    ))
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidateTokenParams {
    token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidateTokenResponseData {
    pub valid: bool,
}
