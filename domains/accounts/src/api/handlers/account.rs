//! Account API handlers
//!
//! - GET /v1/account - Current user profile with collection counts
//! - PATCH /v1/account - Update profile fields

use artdealer_auth::AuthUser;
use artdealer_common::{Error, Result, ValidatedJson};
use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::AccountsState;
use crate::domain::entities::{CollectionCounts, ProfileUpdate, User};

/// Response for account operations
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
    pub want_to_see_count: i64,
    pub seen_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AccountResponse {
    fn new(user: User, counts: CollectionCounts) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            avatar_url: user.avatar_url,
            want_to_see_count: counts.want_to_see_count,
            seen_count: counts.seen_count,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Request for updating the profile
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAccountRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,

    #[validate(url)]
    pub avatar_url: Option<String>,
}

impl From<UpdateAccountRequest> for ProfileUpdate {
    fn from(req: UpdateAccountRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            avatar_url: req.avatar_url,
        }
    }
}

/// GET /v1/account
pub async fn get_account(
    AuthUser(ctx): AuthUser,
    State(state): State<AccountsState>,
) -> Result<Json<AccountResponse>> {
    let user_id = ctx.user_id();
    let user = state
        .store
        .get_user(user_id)
        .await?
        .unwrap_or_else(|| User::from(ctx.user));
    let counts = state.store.collection_counts(user_id).await?;

    Ok(Json(AccountResponse::new(user, counts)))
}

/// PATCH /v1/account
pub async fn update_account(
    AuthUser(ctx): AuthUser,
    State(state): State<AccountsState>,
    ValidatedJson(req): ValidatedJson<UpdateAccountRequest>,
) -> Result<Json<AccountResponse>> {
    let user_id = ctx.user_id();
    let update = ProfileUpdate::from(req);

    let user = if update.is_empty() {
        state.store.get_user(user_id).await?
    } else {
        state
            .store
            .update_profile(user_id, update)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, user_id = %user_id, "Failed to update user profile");
                e
            })?
    }
    .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    let counts = state.store.collection_counts(user_id).await?;
    Ok(Json(AccountResponse::new(user, counts)))
}
