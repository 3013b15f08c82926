use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::account::models::AccountRole;
use crate::domain::account::models::Cpf;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::RegisterPersonCommand;
use crate::domain::account::ports::RegistrationServicePort;
use crate::domain::errors::DirectoryError;
use crate::inbound::http::messages::DoctorRequestBody;
use crate::inbound::http::messages::PersonData;
use crate::inbound::http::router::AppState;

pub async fn register_person(
    State(state): State<AppState>,
    Json(body): Json<RegisterPersonRequestBody>,
) -> Result<ApiSuccess<PersonData>, ApiError> {
    let command = RegisterPersonCommand {
        name: body.name,
        email: EmailAddress::new(body.email).map_err(DirectoryError::from)?,
        cpf: Cpf::new(body.cpf).map_err(DirectoryError::from)?,
        password: body.password,
        role: body.role,
        doctor: body
            .doctor
            .map(DoctorRequestBody::into_payload)
            .transpose()?,
    };

    let profile = state.registration.register(command).await?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        PersonData::from(profile),
    ))
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterPersonRequestBody {
    name: String,
    email: String,
    cpf: String,
    password: String,
    role: AccountRole,
    doctor: Option<DoctorRequestBody>,
}
