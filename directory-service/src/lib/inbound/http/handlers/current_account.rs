use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::authentication::ports::AuthenticationServicePort;
use crate::inbound::http::messages::PersonData;
use crate::inbound::http::middleware::AuthenticatedAccount;
use crate::inbound::http::router::AppState;

pub async fn current_account(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedAccount>,
) -> Result<ApiSuccess<PersonData>, ApiError> {
    let profile = state
        .authentication
        .current_account(&authenticated.email)
        .await?;

    Ok(ApiSuccess::new(StatusCode::OK, PersonData::from(profile)))
}
