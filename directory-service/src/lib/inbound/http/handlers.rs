use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::errors::DirectoryError;

pub mod change_password;
pub mod create_specialty;
pub mod current_account;
pub mod doctors_by_specialty;
pub mod get_specialty;
pub mod list_specialties;
pub mod login;
pub mod login_by_cpf;
pub mod login_by_license;
pub mod register_person;
pub mod update_person;
pub mod validate_token;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    NotFound(String),
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        match err {
            // Validation failures
            DirectoryError::EmptyName
            | DirectoryError::InvalidEmail(_)
            | DirectoryError::InvalidCpf(_)
            | DirectoryError::InvalidRole(_)
            | DirectoryError::InvalidLicense(_)
            | DirectoryError::InvalidFee(_)
            | DirectoryError::MissingAccountReference
            | DirectoryError::MissingSpecialtyReference
            | DirectoryError::EmptySpecialtyName
            | DirectoryError::EmptySpecialtyDescription => ApiError::BadRequest(err.to_string()),
            DirectoryError::Password(auth::PasswordError::EmptyPassword) => {
                ApiError::BadRequest(err.to_string())
            }

            // Authentication failures
            DirectoryError::InvalidCredentials
            | DirectoryError::DoctorAccountMissing
            | DirectoryError::NotADoctor
            | DirectoryError::CurrentPasswordIncorrect => ApiError::Unauthorized(err.to_string()),

            // Conflicts share the bad-request status with invalid input
            DirectoryError::EmailInUse(_)
            | DirectoryError::CpfInUse(_)
            | DirectoryError::LicenseInUse(_)
            | DirectoryError::DoctorDataRequired => ApiError::BadRequest(err.to_string()),

            // Not found
            DirectoryError::AccountNotFound(_)
            | DirectoryError::DoctorNotFound(_)
            | DirectoryError::SpecialtyNotFound(_) => ApiError::NotFound(err.to_string()),

            // Infrastructure
            DirectoryError::Password(_)
            | DirectoryError::Token(_)
            | DirectoryError::Cache(_)
            | DirectoryError::Database(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}
