//! Authentication for the Art Dealer API
//!
//! Validates Supabase-issued JWTs, provisions users on first sight, and
//! provides axum extractors that work with any domain state implementing
//! `FromRef<S>` for `AuthBackend`.

mod backend;
mod claims;
mod config;
mod context;
mod directory;
mod error;
mod extractors;
mod jwt;
mod types;

pub use backend::AuthBackend;
pub use claims::{SupabaseClaims, UserMetadata};
pub use config::AuthConfig;
pub use context::AuthContext;
pub use directory::{InMemoryUserDirectory, PgUserDirectory, UserDirectory};
pub use error::AuthError;
pub use extractors::{AuthUser, MaybeAuthUser};
pub use jwt::issue_token;
pub use types::{AuthIdentity, NewIdentity};
