//! Authentication configuration

use artdealer_common::Config;

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub issuer: Option<String>,
    pub audience: Option<String>,
}

impl From<&Config> for AuthConfig {
    fn from(config: &Config) -> Self {
        Self {
            jwt_secret: config.supabase_jwt_secret.clone(),
            issuer: config.jwt_issuer(),
            audience: config.jwt_audience.clone(),
        }
    }
}
