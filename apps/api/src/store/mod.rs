//! Record store — the persistence seam for user accounts and job records.
//!
//! Every job operation is scoped by `user_id`; there is no cross-user
//! access path. Mutations are independent single-row commits with
//! last-write-wins semantics — no transactions span more than one row.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{JobPatch, JobRecord, NewJob};
use crate::models::user::User;

/// Input for `create_user`. Callers check for an existing account first;
/// a duplicate insert surfaces as a database error.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub external_id: String,
    pub email: String,
}

/// Carried in `AppState` as `Arc<dyn RecordStore>` so feature handlers can
/// be tested against `MemoryRecordStore` without a live database.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn create_user(&self, new_user: NewUser) -> Result<User, AppError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    /// Refreshes the activity timestamp; `joined_at` is never touched.
    async fn touch_last_active(&self, user_id: Uuid, at: DateTime<Utc>) -> Result<(), AppError>;
    async fn list_users(&self) -> Result<Vec<User>, AppError>;
    async fn count_jobs(&self, user_id: Uuid) -> Result<u64, AppError>;

    async fn create_job(&self, user_id: Uuid, new_job: NewJob) -> Result<JobRecord, AppError>;
    async fn list_jobs(&self, user_id: Uuid) -> Result<Vec<JobRecord>, AppError>;
    /// Applies only the supplied fields. `created_at` is immutable.
    async fn update_job(
        &self,
        user_id: Uuid,
        id: Uuid,
        patch: JobPatch,
    ) -> Result<JobRecord, AppError>;
    async fn delete_job(&self, user_id: Uuid, id: Uuid) -> Result<(), AppError>;
}
