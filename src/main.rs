//! Offerter API server.

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use offerter::adapters::auth::{JwtConfig, JwtSessionValidator};
use offerter::adapters::http::{api_router, AuthState};
use offerter::adapters::{postgres, InMemoryProposalStore, PostgresProposalStore};
use offerter::config::{AppConfig, ServerConfig};
use offerter::ports::ProposalStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let store: Arc<dyn ProposalStore> = match &config.database {
        Some(database) => {
            let pool = postgres::connect(database).await?;
            Arc::new(PostgresProposalStore::new(pool))
        }
        None => {
            tracing::warn!("No database configured, proposals are kept in memory");
            Arc::new(InMemoryProposalStore::new())
        }
    };

    let auth: AuthState = Arc::new(JwtSessionValidator::new(
        JwtConfig::new(
            config.auth.issuer.clone(),
            config.auth.audience.clone(),
            config.auth.jwt_secret.clone(),
        )
        .with_leeway(config.auth.leeway_secs),
    ));

    let app = api_router(store, auth).layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(cors_layer(&config.server))
            .layer(TimeoutLayer::new(config.server.request_timeout()))
            .layer(CompressionLayer::new()),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Offerter API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if server.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ])
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
