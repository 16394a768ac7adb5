//! Admin analytics — aggregate platform counts recomputed from scratch on
//! every view. No caching, no incremental counters.

pub mod handlers;

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::models::user::User;

#[derive(Debug, Serialize)]
pub struct UserJobCount {
    pub user_id: Uuid,
    pub email: String,
    pub jobs: u64,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsSummary {
    pub total_users: u64,
    /// Users whose last-known-activity date equals the current calendar day.
    pub active_today: u64,
    pub total_jobs: u64,
    pub per_user_counts: Vec<UserJobCount>,
}

/// Computes the dashboard summary from users paired with their job counts.
/// `today` is passed in so the active-today cutoff is testable.
pub fn summarize(users_with_counts: &[(User, u64)], today: NaiveDate) -> AnalyticsSummary {
    let total_users = users_with_counts.len() as u64;
    let active_today = users_with_counts
        .iter()
        .filter(|(user, _)| user.last_active_at.date_naive() == today)
        .count() as u64;
    let total_jobs = users_with_counts.iter().map(|(_, count)| count).sum();
    let per_user_counts = users_with_counts
        .iter()
        .map(|(user, count)| UserJobCount {
            user_id: user.id,
            email: user.email.clone(),
            jobs: *count,
        })
        .collect();

    AnalyticsSummary {
        total_users,
        active_today,
        total_jobs,
        per_user_counts,
    }
}
