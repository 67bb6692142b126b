//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Audience Supabase puts on tokens issued to signed-in users
pub const DEFAULT_JWT_AUDIENCE: &str = "authenticated";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database connection URL (Supabase PostgreSQL)
    pub database_url: String,

    /// Privileged connection used by the seeder; falls back to `database_url`
    pub seed_database_url: String,

    /// Supabase project URL, used to derive the expected token issuer
    pub supabase_url: Option<String>,

    /// Secret used by Supabase Auth to sign user JWTs
    pub supabase_jwt_secret: String,
    pub jwt_audience: Option<String>,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    #[mutants::skip] // Port parsing fallbacks are environment-dependent
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL is required"))?;

        let config = Self {
            seed_database_url: Self::seed_database_url_from_env()?,
            database_url,

            supabase_url: env::var("SUPABASE_URL").ok().filter(|s| !s.is_empty()),
            supabase_jwt_secret: env::var("SUPABASE_JWT_SECRET")
                .map_err(|_| anyhow::anyhow!("SUPABASE_JWT_SECRET is required"))?,
            jwt_audience: Some(
                env::var("JWT_AUDIENCE").unwrap_or_else(|_| DEFAULT_JWT_AUDIENCE.to_string()),
            ),

            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "artdealer=debug".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        };

        Ok(config)
    }

    /// Privileged connection for the seeder: `SEED_DATABASE_URL`, else `DATABASE_URL`.
    ///
    /// Needs none of the API settings, so the seeder can run without a JWT secret.
    pub fn seed_database_url_from_env() -> Result<String> {
        dotenvy::dotenv().ok();

        env::var("SEED_DATABASE_URL")
            .ok()
            .filter(|s| !s.is_empty())
            .or_else(|| env::var("DATABASE_URL").ok())
            .ok_or_else(|| anyhow::anyhow!("SEED_DATABASE_URL or DATABASE_URL is required"))
    }

    /// Issuer Supabase Auth stamps on its tokens (`{SUPABASE_URL}/auth/v1`)
    pub fn jwt_issuer(&self) -> Option<String> {
        self.supabase_url
            .as_ref()
            .map(|url| format!("{}/auth/v1", url.trim_end_matches('/')))
    }
}
