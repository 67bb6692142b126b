//! Concrete authentication backend
//!
//! Wraps a `UserDirectory` + `AuthConfig`: validates tokens and resolves
//! (or provisions) the user they name.

use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use crate::claims::SupabaseClaims;
use crate::config::AuthConfig;
use crate::context::AuthContext;
use crate::directory::{PgUserDirectory, UserDirectory};
use crate::error::AuthError;
use crate::types::{AuthIdentity, NewIdentity};

/// Concrete authentication backend.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone)]
pub struct AuthBackend {
    users: Arc<dyn UserDirectory>,
    config: AuthConfig,
}

impl AuthBackend {
    /// Backend over the `users` table
    pub fn new(pool: PgPool, config: AuthConfig) -> Self {
        Self::with_directory(Arc::new(PgUserDirectory::new(pool)), config)
    }

    pub fn with_directory(users: Arc<dyn UserDirectory>, config: AuthConfig) -> Self {
        Self { users, config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Provision a new user from JWT claims (JIT user provisioning).
    ///
    /// Called on first authenticated request when the user doesn't exist in the DB.
    async fn provision_user_from_jwt(
        &self,
        user_id: Uuid,
        claims: &SupabaseClaims,
    ) -> Result<AuthIdentity, AuthError> {
        let email = claims.email.clone().ok_or(AuthError::MissingEmail)?;
        let metadata = claims.user_metadata.clone().unwrap_or_default();

        let user = self
            .users
            .provision_user(NewIdentity {
                id: user_id,
                email,
                first_name: metadata.first_name,
                last_name: metadata.last_name,
                avatar_url: metadata.avatar_url,
            })
            .await?;

        tracing::info!(user_id = %user_id, "JIT user provisioned");
        Ok(user)
    }

    /// Validate a bearer token and resolve the user it belongs to.
    pub async fn authenticate_jwt(&self, token: &str) -> Result<AuthContext, AuthError> {
        let claims = crate::jwt::validate_jwt_token(token, &self.config)?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidUserId)?;

        let user = match self.users.find_user(user_id).await? {
            Some(user) => user,
            None => self.provision_user_from_jwt(user_id, &claims).await?,
        };

        Ok(AuthContext::new(user))
    }
}
