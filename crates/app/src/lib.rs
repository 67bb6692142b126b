//! Art Dealer application composition root
//!
//! Composes all domain routers into a single application.

use std::sync::Arc;

use artdealer_accounts::{AccountsRepositories, AccountsState};
use artdealer_auth::{AuthBackend, AuthConfig};
use artdealer_catalog::CatalogState;
use artdealer_collections::{CollectionsRepositories, CollectionsState};
use artdealer_common::Config;
use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use sqlx::PgPool;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
};

/// Maximum accepted request body
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Per-domain states the application router is built from
#[derive(Clone)]
pub struct AppStates {
    pub catalog: CatalogState,
    pub collections: CollectionsState,
    pub accounts: AccountsState,
}

impl AppStates {
    /// States backed by Postgres
    pub fn from_pool(config: &Config, pool: PgPool) -> Self {
        let auth = AuthBackend::new(pool.clone(), AuthConfig::from(config));
        let collections = CollectionsRepositories::new(pool.clone());
        let accounts = AccountsRepositories::new(pool.clone());

        Self {
            catalog: CatalogState::from_pool(pool),
            collections: CollectionsState::new(Arc::new(collections.memberships), auth.clone()),
            accounts: AccountsState::new(Arc::new(accounts.users), auth),
        }
    }
}

/// Build the router from already-constructed domain states
pub fn router(states: AppStates) -> Router {
    Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { concat!("Art Dealer API v", env!("CARGO_PKG_VERSION")) }),
        )
        .merge(artdealer_catalog::routes().with_state(states.catalog))
        .merge(artdealer_collections::routes().with_state(states.collections))
        .merge(artdealer_accounts::routes().with_state(states.accounts))
}

/// Create the main application router with all routes
pub fn create_app(config: &Config, pool: PgPool) -> Router {
    router(AppStates::from_pool(config, pool))
}

/// Apply pending schema migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

/// CORS for the browser client; `*` allows any origin
pub fn build_cors_layer(allowed_origins: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    if allowed_origins.trim() == "*" {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(origins)
}

pub fn body_limit_layer() -> RequestBodyLimitLayer {
    RequestBodyLimitLayer::new(MAX_BODY_BYTES)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
