//! JWT claims types

use serde::{Deserialize, Serialize};

/// JWT claims from Supabase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupabaseClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Email
    pub email: Option<String>,
    /// Issued at
    pub iat: u64,
    /// Expires at
    pub exp: u64,
    /// Audience
    pub aud: String,
    /// Role (authenticated user)
    pub role: String,
    /// Profile fields captured at sign-up
    #[serde(default)]
    pub user_metadata: Option<UserMetadata>,
}

impl SupabaseClaims {
    /// Claims for an `authenticated` user, valid for `ttl_secs` from now
    pub fn authenticated(
        sub: impl Into<String>,
        email: Option<String>,
        audience: impl Into<String>,
        ttl_secs: i64,
    ) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            sub: sub.into(),
            email,
            iat: now.max(0) as u64,
            exp: (now + ttl_secs).max(0) as u64,
            aud: audience.into(),
            role: "authenticated".to_string(),
            user_metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: UserMetadata) -> Self {
        self.user_metadata = Some(metadata);
        self
    }
}

/// Sign-up metadata Supabase forwards in `user_metadata`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserMetadata {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
}
