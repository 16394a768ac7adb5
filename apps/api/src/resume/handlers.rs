//! Axum route handlers for resume uploads and the CV beautifier.
//!
//! The upload endpoints share one multipart shape: a `file` part (PDF or
//! plain text) and a `job_description` text part. Files are parsed in the
//! request and discarded — nothing derived from an upload is persisted.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::auth::session::CurrentUser;
use crate::errors::AppError;
use crate::extract::DocumentKind;
use crate::generation::handlers::MarkdownResponse;
use crate::generation::{build_ats_scan_prompt, build_resume_review_prompt};
use crate::resume::beautify::{render_html, render_markdown, segment_sections, CvDetails};
use crate::resume::keywords::missing_keywords;
use crate::state::AppState;

struct ResumeUpload {
    bytes: Bytes,
    filename: Option<String>,
    content_type: Option<String>,
    job_description: String,
}

async fn read_resume_upload(mut multipart: Multipart) -> Result<ResumeUpload, AppError> {
    let mut bytes = None;
    let mut filename = None;
    let mut content_type = None;
    let mut job_description = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed upload: {e}")))?
    {
        match field.name() {
            Some("file") => {
                filename = field.file_name().map(str::to_string);
                content_type = field.content_type().map(str::to_string);
                bytes = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| AppError::Validation(format!("malformed upload: {e}")))?,
                );
            }
            Some("job_description") => {
                job_description = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("malformed upload: {e}")))?;
            }
            _ => {}
        }
    }

    let bytes = bytes.ok_or_else(|| AppError::Validation("a resume file is required".to_string()))?;

    Ok(ResumeUpload {
        bytes,
        filename,
        content_type,
        job_description,
    })
}

/// Pulls plain text out of the upload and checks both required inputs.
fn extract_inputs(state: &AppState, upload: &ResumeUpload) -> Result<(String, String), AppError> {
    if upload.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description is required".to_string(),
        ));
    }

    let kind = DocumentKind::detect(
        upload.filename.as_deref(),
        upload.content_type.as_deref(),
    )?;
    let resume_text = state.extractor.extract(&upload.bytes, kind)?;

    if resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "the uploaded resume contains no text".to_string(),
        ));
    }

    Ok((resume_text, upload.job_description.clone()))
}

/// POST /api/v1/resume/review
///
/// Full AI review: formatting impressions, keyword match, bullet upgrades.
pub async fn handle_resume_review(
    State(state): State<AppState>,
    _current: CurrentUser,
    multipart: Multipart,
) -> Result<Json<MarkdownResponse>, AppError> {
    let upload = read_resume_upload(multipart).await?;
    let (resume_text, job_description) = extract_inputs(&state, &upload)?;

    let prompt = build_resume_review_prompt(&resume_text, &job_description);
    let markdown = state.llm.generate(&prompt).await?;

    Ok(Json(MarkdownResponse { markdown }))
}

/// POST /api/v1/resume/ats
pub async fn handle_ats_scan(
    State(state): State<AppState>,
    _current: CurrentUser,
    multipart: Multipart,
) -> Result<Json<MarkdownResponse>, AppError> {
    let upload = read_resume_upload(multipart).await?;
    let (resume_text, job_description) = extract_inputs(&state, &upload)?;

    let prompt = build_ats_scan_prompt(&resume_text, &job_description);
    let markdown = state.llm.generate(&prompt).await?;

    Ok(Json(MarkdownResponse { markdown }))
}

#[derive(Debug, Serialize)]
pub struct KeywordResponse {
    pub missing_keywords: Vec<String>,
}

/// POST /api/v1/resume/keywords
///
/// Deterministic missing-keyword suggestions; no model call.
pub async fn handle_resume_keywords(
    State(state): State<AppState>,
    _current: CurrentUser,
    multipart: Multipart,
) -> Result<Json<KeywordResponse>, AppError> {
    let upload = read_resume_upload(multipart).await?;
    let (resume_text, job_description) = extract_inputs(&state, &upload)?;

    Ok(Json(KeywordResponse {
        missing_keywords: missing_keywords(&resume_text, &job_description),
    }))
}

/// Either `raw_text` (markdown output) or `details` (HTML output).
#[derive(Debug, Deserialize)]
pub struct BeautifyRequest {
    pub raw_text: Option<String>,
    pub details: Option<CvDetails>,
}

#[derive(Debug, Serialize)]
pub struct BeautifyResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

/// POST /api/v1/cv/beautify
pub async fn handle_beautify(
    _current: CurrentUser,
    Json(req): Json<BeautifyRequest>,
) -> Result<Json<BeautifyResponse>, AppError> {
    if let Some(details) = &req.details {
        if details.full_name.trim().is_empty() {
            return Err(AppError::Validation("full_name is required".to_string()));
        }
        return Ok(Json(BeautifyResponse {
            markdown: None,
            html: Some(render_html(details)),
        }));
    }

    match req.raw_text.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => Ok(Json(BeautifyResponse {
            markdown: Some(render_markdown(&segment_sections(raw))),
            html: None,
        })),
        _ => Err(AppError::Validation(
            "provide raw_text or structured details".to_string(),
        )),
    }
}
