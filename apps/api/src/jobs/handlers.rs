//! Axum route handlers for the job tracker.
//!
//! Stage values are validated here, at the wire boundary — an unknown
//! stage never reaches the store (the original board silently accepted
//! arbitrary strings on update; that was a bug, not a feature).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::auth::session::CurrentUser;
use crate::errors::AppError;
use crate::jobs::{board, StageColumn};
use crate::models::job::{JobPatch, JobRecord, NewJob, Stage};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub company: String,
    #[serde(alias = "role")]
    pub title: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(alias = "date_applied")]
    pub applied_date: NaiveDate,
    #[serde(alias = "status")]
    pub stage: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateJobRequest {
    pub company: Option<String>,
    #[serde(alias = "role")]
    pub title: Option<String>,
    pub location: Option<String>,
    #[serde(alias = "date_applied")]
    pub applied_date: Option<NaiveDate>,
    #[serde(alias = "status")]
    pub stage: Option<String>,
    pub notes: Option<String>,
}

fn parse_stage(value: &str) -> Result<Stage, AppError> {
    Stage::parse(value).ok_or_else(|| {
        AppError::Validation(format!(
            "unknown stage '{value}' — expected one of Wishlist, Applied, Interview, Offer, Rejected"
        ))
    })
}

/// POST /api/v1/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(req): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<JobRecord>), AppError> {
    if req.company.trim().is_empty() || req.title.trim().is_empty() {
        return Err(AppError::Validation(
            "company and title are required".to_string(),
        ));
    }
    let stage = parse_stage(&req.stage)?;

    let record = state
        .store
        .create_job(
            current.user.id,
            NewJob {
                company: req.company,
                title: req.title,
                location: req.location,
                applied_date: req.applied_date,
                stage,
                notes: req.notes,
            },
        )
        .await?;

    info!("job {} created for {}", record.id, current.user.email);
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<Vec<JobRecord>>, AppError> {
    let jobs = state.store.list_jobs(current.user.id).await?;
    Ok(Json(jobs))
}

/// GET /api/v1/jobs/board
pub async fn handle_board(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<Vec<StageColumn>>, AppError> {
    let jobs = state.store.list_jobs(current.user.id).await?;
    Ok(Json(board(jobs)))
}

/// PATCH /api/v1/jobs/:id
pub async fn handle_update_job(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateJobRequest>,
) -> Result<Json<JobRecord>, AppError> {
    let stage = req.stage.as_deref().map(parse_stage).transpose()?;

    let patch = JobPatch {
        company: req.company,
        title: req.title,
        location: req.location,
        applied_date: req.applied_date,
        stage,
        notes: req.notes,
    };

    let record = state.store.update_job(current.user.id, id, patch).await?;
    info!("job {} updated for {}", id, current.user.email);
    Ok(Json(record))
}

/// DELETE /api/v1/jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.store.delete_job(current.user.id, id).await?;
    info!("job {} deleted for {}", id, current.user.email);
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stage_accepts_all_board_columns() {
        for stage in Stage::ALL {
            assert_eq!(parse_stage(stage.as_str()).unwrap(), stage);
        }
    }

    #[test]
    fn test_parse_stage_rejects_unknown_value() {
        let err = parse_stage("On Hold").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_create_request_accepts_legacy_aliases() {
        let json = serde_json::json!({
            "company": "Acme",
            "role": "Backend Engineer",
            "date_applied": "2025-06-01",
            "status": "Applied"
        });
        let req: CreateJobRequest = serde_json::from_value(json).unwrap();
        assert_eq!(req.title, "Backend Engineer");
        assert_eq!(req.stage, "Applied");
        assert!(req.location.is_none());
        assert!(req.notes.is_empty());
    }

    #[test]
    fn test_update_request_defaults_to_empty_patch() {
        let req: UpdateJobRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(req.company.is_none());
        assert!(req.stage.is_none());
    }
}
