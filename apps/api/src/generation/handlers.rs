//! Axum route handlers for the interview simulator, cover letter, and
//! career roadmap. Resume uploads (review, ATS scan, keyword match) live
//! in `resume::handlers` next to the extraction plumbing.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::session::{ChatRole, ChatTurn, CurrentUser};
use crate::errors::AppError;
use crate::generation::{
    build_cover_letter_prompt, build_interview_next_prompt, build_interview_start_prompt,
    build_roadmap_prompt, Persona,
};
use crate::state::AppState;

/// Generic response for the one-shot generators: a single markdown body.
#[derive(Debug, Serialize)]
pub struct MarkdownResponse {
    pub markdown: String,
}

#[derive(Debug, Deserialize)]
pub struct InterviewStartRequest {
    pub persona: Persona,
    pub job_title: String,
}

#[derive(Debug, Deserialize)]
pub struct InterviewReplyRequest {
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct InterviewResponse {
    /// The interviewer's next question.
    pub question: String,
    pub transcript: Vec<ChatTurn>,
}

/// POST /api/v1/interview/start
///
/// Clears any previous transcript and asks the opening question.
pub async fn handle_interview_start(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(req): Json<InterviewStartRequest>,
) -> Result<Json<InterviewResponse>, AppError> {
    if req.job_title.trim().is_empty() {
        return Err(AppError::Validation("job_title is required".to_string()));
    }

    let prompt = build_interview_start_prompt(req.persona, req.job_title.trim());
    let question = state.llm.generate(&prompt).await?;

    let transcript = vec![ChatTurn {
        role: ChatRole::Assistant,
        content: question.clone(),
    }];
    state
        .sessions
        .set_interview_transcript(current.token, transcript.clone())?;

    info!(
        "interview started for {} ({})",
        current.user.email,
        req.persona.as_str()
    );

    Ok(Json(InterviewResponse {
        question,
        transcript,
    }))
}

/// POST /api/v1/interview/reply
///
/// Appends the candidate's answer and asks for the next question. The
/// whole transcript rides along in the prompt to simulate memory.
pub async fn handle_interview_reply(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(req): Json<InterviewReplyRequest>,
) -> Result<Json<InterviewResponse>, AppError> {
    if req.answer.trim().is_empty() {
        return Err(AppError::Validation("answer is required".to_string()));
    }

    let mut transcript = state.sessions.interview_transcript(current.token)?;
    if transcript.is_empty() {
        return Err(AppError::Validation(
            "no interview in progress — start one first".to_string(),
        ));
    }

    transcript.push(ChatTurn {
        role: ChatRole::User,
        content: req.answer,
    });

    let prompt = build_interview_next_prompt(&transcript);
    let question = state.llm.generate(&prompt).await?;

    transcript.push(ChatTurn {
        role: ChatRole::Assistant,
        content: question.clone(),
    });
    state
        .sessions
        .set_interview_transcript(current.token, transcript.clone())?;

    Ok(Json(InterviewResponse {
        question,
        transcript,
    }))
}

#[derive(Debug, Deserialize)]
pub struct CoverLetterRequest {
    pub name: String,
    pub job_title: String,
    pub company: String,
    pub resume_highlights: String,
    pub job_description: String,
}

/// POST /api/v1/cover-letter
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    _current: CurrentUser,
    Json(req): Json<CoverLetterRequest>,
) -> Result<Json<MarkdownResponse>, AppError> {
    let fields = [
        ("name", &req.name),
        ("job_title", &req.job_title),
        ("company", &req.company),
        ("resume_highlights", &req.resume_highlights),
        ("job_description", &req.job_description),
    ];
    for (label, value) in fields {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{label} is required")));
        }
    }

    let prompt = build_cover_letter_prompt(
        req.name.trim(),
        req.job_title.trim(),
        req.company.trim(),
        &req.resume_highlights,
        &req.job_description,
    );
    let markdown = state.llm.generate(&prompt).await?;

    Ok(Json(MarkdownResponse { markdown }))
}

#[derive(Debug, Deserialize)]
pub struct RoadmapRequest {
    pub role: String,
}

/// POST /api/v1/roadmap
pub async fn handle_roadmap(
    State(state): State<AppState>,
    _current: CurrentUser,
    Json(req): Json<RoadmapRequest>,
) -> Result<Json<MarkdownResponse>, AppError> {
    if req.role.trim().is_empty() {
        return Err(AppError::Validation("role is required".to_string()));
    }

    let prompt = build_roadmap_prompt(req.role.trim());
    let markdown = state.llm.generate(&prompt).await?;

    Ok(Json(MarkdownResponse { markdown }))
}
