use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::authentication::ports::AuthenticationServicePort;
use crate::inbound::http::messages::CredentialData;
use crate::inbound::http::router::AppState;

pub async fn login_by_license(
    State(state): State<AppState>,
    Json(body): Json<LoginByLicenseRequestBody>,
) -> Result<ApiSuccess<CredentialData>, ApiError> {
    let credential = state
        .authentication
        .login_by_license(&body.license_number, &body.password)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        CredentialData::from(credential),
    ))
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginByLicenseRequestBody {
    license_number: String,
    password: String,
}
