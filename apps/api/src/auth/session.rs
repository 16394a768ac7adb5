//! In-process session store. A session is created at sign-in, destroyed at
//! sign-out, and carries the only cross-request mutable state in the
//! system: the interview transcript. Nothing here is ever persisted.

use std::collections::HashMap;
use std::sync::RwLock;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One turn of the interview chat. The transcript is append-only and is
/// replayed verbatim into the next prompt — the model has no memory of
/// its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub token: Uuid,
    pub user: User,
    pub interview: Vec<ChatTurn>,
}

#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, user: User) -> Uuid {
        let token = Uuid::new_v4();
        let session = Session {
            token,
            user,
            interview: Vec::new(),
        };
        self.sessions
            .write()
            .expect("session lock poisoned")
            .insert(token, session);
        token
    }

    pub fn get(&self, token: Uuid) -> Option<Session> {
        self.sessions
            .read()
            .expect("session lock poisoned")
            .get(&token)
            .cloned()
    }

    /// Removes the session unconditionally; removing a token that is
    /// already gone is not an error.
    pub fn remove(&self, token: Uuid) {
        self.sessions
            .write()
            .expect("session lock poisoned")
            .remove(&token);
    }

    pub fn interview_transcript(&self, token: Uuid) -> Result<Vec<ChatTurn>, AppError> {
        self.get(token)
            .map(|s| s.interview)
            .ok_or(AppError::Unauthorized)
    }

    /// Replaces the transcript wholesale; used both to start a fresh
    /// interview and to commit an appended exchange.
    pub fn set_interview_transcript(
        &self,
        token: Uuid,
        transcript: Vec<ChatTurn>,
    ) -> Result<(), AppError> {
        let mut sessions = self.sessions.write().expect("session lock poisoned");
        let session = sessions.get_mut(&token).ok_or(AppError::Unauthorized)?;
        session.interview = transcript;
        Ok(())
    }
}

/// Extractor for authenticated routes: `Authorization: Bearer <token>`.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: User,
    pub token: Uuid,
}

#[async_trait::async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = header
            .strip_prefix("Bearer ")
            .and_then(|t| Uuid::parse_str(t.trim()).ok())
            .ok_or(AppError::Unauthorized)?;

        let session = state.sessions.get(token).ok_or(AppError::Unauthorized)?;

        Ok(CurrentUser {
            user: session.user,
            token,
        })
    }
}
