use std::sync::Arc;
use std::time::Duration;

use auth::TokenIssuer;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::change_password::change_password;
use super::handlers::create_specialty::create_specialty;
use super::handlers::current_account::current_account;
use super::handlers::doctors_by_specialty::doctors_by_specialty;
use super::handlers::get_specialty::get_specialty;
use super::handlers::list_specialties::list_specialties;
use super::handlers::login::login;
use super::handlers::login_by_cpf::login_by_cpf;
use super::handlers::login_by_license::login_by_license;
use super::handlers::register_person::register_person;
use super::handlers::update_person::update_person;
use super::handlers::validate_token::validate_token;
use super::middleware::authenticate as auth_middleware;
use crate::domain::account::service::RegistrationService;
use crate::domain::authentication::service::AuthenticationService;
use crate::domain::doctor::service::DoctorService;
use crate::domain::specialty::service::SpecialtyService;
use crate::outbound::cache::RedisCacheStore;
use crate::outbound::repositories::PostgresAccountRepository;
use crate::outbound::repositories::PostgresDoctorRepository;
use crate::outbound::repositories::PostgresSpecialtyRepository;

pub type Authentication =
    AuthenticationService<PostgresAccountRepository, PostgresDoctorRepository>;
pub type Registration =
    RegistrationService<PostgresAccountRepository, PostgresDoctorRepository, RedisCacheStore>;
pub type Doctors =
    DoctorService<PostgresDoctorRepository, PostgresAccountRepository, RedisCacheStore>;
pub type Specialties = SpecialtyService<PostgresSpecialtyRepository, RedisCacheStore>;

#[derive(Clone)]
pub struct AppState {
    pub authentication: Arc<Authentication>,
    pub registration: Arc<Registration>,
    pub doctors: Arc<Doctors>,
    pub specialties: Arc<Specialties>,
    pub token_issuer: Arc<TokenIssuer>,
}

pub fn create_router(
    authentication: Arc<Authentication>,
    registration: Arc<Registration>,
    doctors: Arc<Doctors>,
    specialties: Arc<Specialties>,
    token_issuer: Arc<TokenIssuer>,
) -> Router {
    let state = AppState {
        authentication,
        registration,
        doctors,
        specialties,
        token_issuer,
    };

    let public_routes = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/login/cpf", post(login_by_cpf))
        .route("/api/auth/login/license", post(login_by_license))
        .route("/api/auth/validate", get(validate_token))
        .route("/api/persons", post(register_person))
        .route("/api/specialties", get(list_specialties))
        .route("/api/specialties/:specialty_id", get(get_specialty))
        .route(
            "/api/doctors/by-specialty/:specialty_id",
            get(doctors_by_specialty),
        );

    let protected_routes = Router::new()
        .route("/api/auth/me", get(current_account))
        .route("/api/auth/change-password", post(change_password))
        .route("/api/persons", put(update_person))
        .route("/api/specialties", post(create_specialty))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
