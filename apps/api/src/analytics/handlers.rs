//! Axum route handler for the admin analytics dashboard.

use axum::{extract::State, Json};
use chrono::Utc;

use crate::analytics::{summarize, AnalyticsSummary};
use crate::auth::session::CurrentUser;
use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/v1/admin/analytics
///
/// Streams every user and re-queries each one's job count — an O(users)
/// fan-out on every view, matching how the dashboard is defined.
pub async fn handle_analytics(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<AnalyticsSummary>, AppError> {
    let admin_email = state.config.admin_email.as_deref().ok_or_else(|| {
        AppError::Configuration("ADMIN_EMAIL is not set — the dashboard is disabled".to_string())
    })?;
    if !admin_email.eq_ignore_ascii_case(&current.user.email) {
        return Err(AppError::Forbidden);
    }

    let users = state.store.list_users().await?;

    let mut users_with_counts = Vec::with_capacity(users.len());
    for user in users {
        let count = state.store.count_jobs(user.id).await?;
        users_with_counts.push((user, count));
    }

    Ok(Json(summarize(
        &users_with_counts,
        Utc::now().date_naive(),
    )))
}
