//! In-memory `RecordStore` used by the test suite and for running the API
//! without a database. Same visible semantics as the Postgres store,
//! including per-user scoping and last-write-wins updates.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{JobPatch, JobRecord, NewJob};
use crate::models::user::User;
use crate::store::{NewUser, RecordStore};

#[derive(Default)]
struct Inner {
    users: Vec<User>,
    /// Jobs keyed by owning user — the moral equivalent of a per-user
    /// sub-collection.
    jobs: HashMap<Uuid, Vec<JobRecord>>,
}

#[derive(Default)]
pub struct MemoryRecordStore {
    inner: RwLock<Inner>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut inner = self.inner.write().expect("store lock poisoned");
        if inner.users.iter().any(|u| u.email == new_user.email) {
            return Err(AppError::Validation(format!(
                "account '{}' already exists",
                new_user.email
            )));
        }
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            external_id: new_user.external_id,
            email: new_user.email,
            joined_at: now,
            last_active_at: now,
        };
        inner.users.push(user.clone());
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let inner = self.inner.read().expect("store lock poisoned");
        Ok(inner.users.iter().find(|u| u.email == email).cloned())
    }

    async fn touch_last_active(&self, user_id: Uuid, at: DateTime<Utc>) -> Result<(), AppError> {
        let mut inner = self.inner.write().expect("store lock poisoned");
        if let Some(user) = inner.users.iter_mut().find(|u| u.id == user_id) {
            user.last_active_at = at;
        }
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let inner = self.inner.read().expect("store lock poisoned");
        Ok(inner.users.clone())
    }

    async fn count_jobs(&self, user_id: Uuid) -> Result<u64, AppError> {
        let inner = self.inner.read().expect("store lock poisoned");
        Ok(inner.jobs.get(&user_id).map_or(0, |jobs| jobs.len() as u64))
    }

    async fn create_job(&self, user_id: Uuid, new_job: NewJob) -> Result<JobRecord, AppError> {
        let mut inner = self.inner.write().expect("store lock poisoned");
        let record = JobRecord {
            id: Uuid::new_v4(),
            company: new_job.company,
            title: new_job.title,
            location: new_job.location,
            applied_date: new_job.applied_date,
            stage: new_job.stage,
            notes: new_job.notes,
            created_at: Utc::now(),
        };
        inner.jobs.entry(user_id).or_default().push(record.clone());
        Ok(record)
    }

    async fn list_jobs(&self, user_id: Uuid) -> Result<Vec<JobRecord>, AppError> {
        let inner = self.inner.read().expect("store lock poisoned");
        Ok(inner.jobs.get(&user_id).cloned().unwrap_or_default())
    }

    async fn update_job(
        &self,
        user_id: Uuid,
        id: Uuid,
        patch: JobPatch,
    ) -> Result<JobRecord, AppError> {
        let mut inner = self.inner.write().expect("store lock poisoned");
        let job = inner
            .jobs
            .get_mut(&user_id)
            .and_then(|jobs| jobs.iter_mut().find(|j| j.id == id))
            .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;

        if let Some(company) = patch.company {
            job.company = company;
        }
        if let Some(title) = patch.title {
            job.title = title;
        }
        if let Some(location) = patch.location {
            job.location = Some(location);
        }
        if let Some(applied_date) = patch.applied_date {
            job.applied_date = applied_date;
        }
        if let Some(stage) = patch.stage {
            job.stage = stage;
        }
        if let Some(notes) = patch.notes {
            job.notes = notes;
        }
        Ok(job.clone())
    }

    async fn delete_job(&self, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let mut inner = self.inner.write().expect("store lock poisoned");
        let jobs = inner
            .jobs
            .get_mut(&user_id)
            .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
        let before = jobs.len();
        jobs.retain(|j| j.id != id);
        if jobs.len() == before {
            return Err(AppError::NotFound(format!("Job {id} not found")));
        }
        Ok(())
    }
}
