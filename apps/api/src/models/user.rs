use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered account. `joined_at` is immutable after sign-up;
/// `last_active_at` is refreshed on every sign-in and feeds the
/// admin dashboard's active-today metric.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    /// Identity-provider uid. Opaque to us.
    pub external_id: String,
    pub email: String,
    pub joined_at: DateTime<Utc>,
    pub last_active_at: DateTime<Utc>,
}
