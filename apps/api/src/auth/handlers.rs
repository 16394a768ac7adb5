//! Axum route handlers for sign-up, sign-in, and sign-out.

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::session::CurrentUser;
use crate::auth::AuthError;
use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;
use crate::store::NewUser;

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: Uuid,
    pub email: String,
}

fn validate(req: &CredentialsRequest) -> Result<(), AppError> {
    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err(AppError::Validation(
            "email and password are required".to_string(),
        ));
    }
    Ok(())
}

/// Every provider failure renders as the same invalid-credentials response;
/// only the log line knows whether it was a bad password or an outage.
fn gate(err: AuthError) -> AppError {
    warn!("auth rejected: {err}");
    AppError::InvalidCredentials
}

/// POST /api/v1/auth/signup
pub async fn handle_sign_up(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    validate(&req)?;

    let identity = state
        .auth
        .sign_up(req.email.trim(), &req.password)
        .await
        .map_err(gate)?;

    let user = state
        .store
        .create_user(NewUser {
            external_id: identity.external_id,
            email: identity.email,
        })
        .await?;

    info!("account created for {}", user.email);

    let token = state.sessions.create(user.clone());
    Ok(Json(SessionResponse {
        token,
        email: user.email,
    }))
}

/// POST /api/v1/auth/signin
pub async fn handle_sign_in(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    validate(&req)?;

    let identity = state
        .auth
        .sign_in(req.email.trim(), &req.password)
        .await
        .map_err(gate)?;

    let user = match state.store.find_user_by_email(&identity.email).await? {
        Some(user) => user,
        // Account exists at the provider but not here (e.g. created before
        // this service kept accounts). Backfill the row.
        None => {
            state
                .store
                .create_user(NewUser {
                    external_id: identity.external_id,
                    email: identity.email,
                })
                .await?
        }
    };

    state.store.touch_last_active(user.id, Utc::now()).await?;

    let token = state.sessions.create(User {
        last_active_at: Utc::now(),
        ..user.clone()
    });
    Ok(Json(SessionResponse {
        token,
        email: user.email,
    }))
}

/// POST /api/v1/auth/signout
pub async fn handle_sign_out(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(current.token);
    Ok(StatusCode::NO_CONTENT)
}
