use std::sync::Arc;

use auth::TokenConfig;
use auth::TokenIssuer;
use directory_service::config::Config;
use directory_service::domain::account::service::RegistrationService;
use directory_service::domain::authentication::service::AuthenticationService;
use directory_service::domain::doctor::service::DoctorService;
use directory_service::domain::specialty::service::SpecialtyService;
use directory_service::inbound::http::router::create_router;
use directory_service::outbound::cache::RedisCacheStore;
use directory_service::outbound::repositories::PostgresAccountRepository;
use directory_service::outbound::repositories::PostgresDoctorRepository;
use directory_service::outbound::repositories::PostgresSpecialtyRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "directory_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "directory-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        cache_url = %config.cache.url,
        token_issuer = %config.jwt.issuer,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let cache_store = Arc::new(
        RedisCacheStore::connect(&config.cache.url)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to connect to cache: {e}"))?,
    );
    tracing::info!(backend = "redis", "Cache connection established");

    let token_issuer = Arc::new(TokenIssuer::new(TokenConfig {
        secret: config.jwt.secret,
        issuer: config.jwt.issuer,
        audience: config.jwt.audience,
        expiration_minutes: config.jwt.expiration_minutes,
    }));

    let account_repository = Arc::new(PostgresAccountRepository::new(pg_pool.clone()));
    let doctor_repository = Arc::new(PostgresDoctorRepository::new(pg_pool.clone()));
    let specialty_repository = Arc::new(PostgresSpecialtyRepository::new(pg_pool));

    let authentication = Arc::new(AuthenticationService::new(
        Arc::clone(&account_repository),
        Arc::clone(&doctor_repository),
        Arc::clone(&token_issuer),
    ));
    let doctors = Arc::new(DoctorService::new(
        doctor_repository,
        Arc::clone(&account_repository),
        Arc::clone(&cache_store),
    ));
    let registration = Arc::new(RegistrationService::new(
        account_repository,
        Arc::clone(&doctors),
    ));
    let specialties = Arc::new(SpecialtyService::new(specialty_repository, cache_store));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(
        authentication,
        registration,
        doctors,
        specialties,
        token_issuer,
    );
    axum::serve(http_listener, application).await?;

    Ok(())
}
