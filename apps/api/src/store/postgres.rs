//! PostgreSQL-backed `RecordStore`.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{JobPatch, JobRecord, NewJob, Stage};
use crate::models::user::User;
use crate::store::{NewUser, RecordStore};

pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Raw row shape; `stage` stays TEXT in the database and is validated on
/// the way out so a hand-edited row cannot smuggle an unknown stage into
/// the API.
#[derive(Debug, FromRow)]
struct JobRow {
    id: Uuid,
    company: String,
    title: String,
    location: Option<String>,
    applied_date: NaiveDate,
    stage: String,
    notes: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<JobRow> for JobRecord {
    type Error = AppError;

    fn try_from(row: JobRow) -> Result<Self, Self::Error> {
        let stage = Stage::parse(&row.stage).ok_or_else(|| {
            AppError::Internal(anyhow::anyhow!(
                "job {} has unknown stage '{}' in storage",
                row.id,
                row.stage
            ))
        })?;
        Ok(JobRecord {
            id: row.id,
            company: row.company,
            title: row.title,
            location: row.location,
            applied_date: row.applied_date,
            stage,
            notes: row.notes,
            created_at: row.created_at,
        })
    }
}

const JOB_COLUMNS: &str = "id, company, title, location, applied_date, stage, notes, created_at";

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, external_id, email)
            VALUES ($1, $2, $3)
            RETURNING id, external_id, email, joined_at, last_active_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new_user.external_id)
        .bind(&new_user.email)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, external_id, email, joined_at, last_active_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn touch_last_active(&self, user_id: Uuid, at: DateTime<Utc>) -> Result<(), AppError> {
        sqlx::query("UPDATE users SET last_active_at = $2 WHERE id = $1")
            .bind(user_id)
            .bind(at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, external_id, email, joined_at, last_active_at FROM users ORDER BY joined_at",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    async fn count_jobs(&self, user_id: Uuid) -> Result<u64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count as u64)
    }

    async fn create_job(&self, user_id: Uuid, new_job: NewJob) -> Result<JobRecord, AppError> {
        let row = sqlx::query_as::<_, JobRow>(&format!(
            r#"
            INSERT INTO jobs (id, user_id, company, title, location, applied_date, stage, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {JOB_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&new_job.company)
        .bind(&new_job.title)
        .bind(&new_job.location)
        .bind(new_job.applied_date)
        .bind(new_job.stage.as_str())
        .bind(&new_job.notes)
        .fetch_one(&self.pool)
        .await?;
        row.try_into()
    }

    async fn list_jobs(&self, user_id: Uuid) -> Result<Vec<JobRecord>, AppError> {
        let rows = sqlx::query_as::<_, JobRow>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE user_id = $1 ORDER BY created_at"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(JobRecord::try_from).collect()
    }

    async fn update_job(
        &self,
        user_id: Uuid,
        id: Uuid,
        patch: JobPatch,
    ) -> Result<JobRecord, AppError> {
        let row = sqlx::query_as::<_, JobRow>(&format!(
            r#"
            UPDATE jobs SET
                company = COALESCE($3, company),
                title = COALESCE($4, title),
                location = COALESCE($5, location),
                applied_date = COALESCE($6, applied_date),
                stage = COALESCE($7, stage),
                notes = COALESCE($8, notes)
            WHERE id = $1 AND user_id = $2
            RETURNING {JOB_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(user_id)
        .bind(patch.company)
        .bind(patch.title)
        .bind(patch.location)
        .bind(patch.applied_date)
        .bind(patch.stage.map(|s| s.as_str()))
        .bind(patch.notes)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
        row.try_into()
    }

    async fn delete_job(&self, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Job {id} not found")));
        }
        Ok(())
    }
}
