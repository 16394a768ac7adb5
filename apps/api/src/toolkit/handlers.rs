//! Axum route handlers for the prompt toolkit.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::auth::session::CurrentUser;
use crate::errors::AppError;
use crate::generation::handlers::MarkdownResponse;
use crate::state::AppState;
use crate::toolkit::{fill, search, PromptTemplate};

#[derive(Debug, Default, Deserialize)]
pub struct PromptSearchQuery {
    #[serde(default)]
    pub query: String,
}

/// GET /api/v1/prompts
pub async fn handle_list_prompts(
    _current: CurrentUser,
    Query(params): Query<PromptSearchQuery>,
) -> Json<Vec<&'static PromptTemplate>> {
    Json(search(&params.query))
}

#[derive(Debug, Deserialize)]
pub struct RunPromptRequest {
    pub template: String,
    #[serde(default)]
    pub values: HashMap<String, String>,
}

/// POST /api/v1/prompts/run
///
/// Fills the template's `[PLACEHOLDER]` slots and sends it to the model.
pub async fn handle_run_prompt(
    State(state): State<AppState>,
    _current: CurrentUser,
    Json(req): Json<RunPromptRequest>,
) -> Result<Json<MarkdownResponse>, AppError> {
    if req.template.trim().is_empty() {
        return Err(AppError::Validation("template is required".to_string()));
    }

    let filled = fill(&req.template, &req.values);
    let markdown = state.llm.generate(&filled).await?;

    Ok(Json(MarkdownResponse { markdown }))
}
