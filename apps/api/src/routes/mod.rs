pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::analytics::handlers as analytics_handlers;
use crate::auth::handlers as auth_handlers;
use crate::generation::handlers as generation_handlers;
use crate::jobs::handlers as job_handlers;
use crate::resume::handlers as resume_handlers;
use crate::state::AppState;
use crate::toolkit::handlers as toolkit_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session/auth gate
        .route("/api/v1/auth/signup", post(auth_handlers::handle_sign_up))
        .route("/api/v1/auth/signin", post(auth_handlers::handle_sign_in))
        .route("/api/v1/auth/signout", post(auth_handlers::handle_sign_out))
        // Job tracker
        .route(
            "/api/v1/jobs",
            get(job_handlers::handle_list_jobs).post(job_handlers::handle_create_job),
        )
        .route("/api/v1/jobs/board", get(job_handlers::handle_board))
        .route(
            "/api/v1/jobs/:id",
            patch(job_handlers::handle_update_job).delete(job_handlers::handle_delete_job),
        )
        // Interview simulator
        .route(
            "/api/v1/interview/start",
            post(generation_handlers::handle_interview_start),
        )
        .route(
            "/api/v1/interview/reply",
            post(generation_handlers::handle_interview_reply),
        )
        // One-shot generators
        .route(
            "/api/v1/cover-letter",
            post(generation_handlers::handle_cover_letter),
        )
        .route("/api/v1/roadmap", post(generation_handlers::handle_roadmap))
        // Resume tooling
        .route(
            "/api/v1/resume/review",
            post(resume_handlers::handle_resume_review),
        )
        .route("/api/v1/resume/ats", post(resume_handlers::handle_ats_scan))
        .route(
            "/api/v1/resume/keywords",
            post(resume_handlers::handle_resume_keywords),
        )
        .route("/api/v1/cv/beautify", post(resume_handlers::handle_beautify))
        // Prompt toolkit
        .route(
            "/api/v1/prompts",
            get(toolkit_handlers::handle_list_prompts),
        )
        .route(
            "/api/v1/prompts/run",
            post(toolkit_handlers::handle_run_prompt),
        )
        // Admin analytics
        .route(
            "/api/v1/admin/analytics",
            get(analytics_handlers::handle_analytics),
        )
        .with_state(state)
}
