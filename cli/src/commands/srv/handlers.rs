//! # VetChat HTTP Handlers
//!
//! File: cli/src/commands/srv/handlers.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Request handlers for `vetchat srv`. The server keeps no conversation state:
//! `/chat` receives the caller's history, appends one exchange and returns it.
//!
//! | Method | Path       | Body in                       | Body out                      |
//! |--------|------------|-------------------------------|-------------------------------|
//! | GET    | `/health`  |                               | `ok`                          |
//! | GET    | `/phrases` |                               | `[{phrase, response}]`        |
//! | POST   | `/respond` | `{message}`                   | `{reply, matched}`            |
//! | POST   | `/chat`    | `{conversation, message}`     | `{conversation, reply}`       |
//!
use crate::responder::{ConversationStore, PhraseEntry, Responder};
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Shared, read-only state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub responder: Arc<Responder>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct RespondRequest {
    pub message: String,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Eq)]
pub struct RespondResponse {
    pub reply: String,
    /// Trigger phrase that produced the reply; `null` for the fallback.
    pub matched: Option<String>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct ChatRequest {
    /// History so far. May be omitted to start a new conversation.
    #[serde(default)]
    pub conversation: ConversationStore,
    pub message: String,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Eq)]
pub struct ChatResponse {
    pub conversation: ConversationStore,
    pub reply: String,
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn list_phrases(State(state): State<AppState>) -> Json<Vec<PhraseEntry>> {
    Json(state.responder.table().entries().to_vec())
}

pub async fn respond(
    State(state): State<AppState>,
    Json(request): Json<RespondRequest>,
) -> Json<RespondResponse> {
    let hit = state.responder.find_match(&request.message);
    debug!("POST /respond matched {:?}", hit.map(|entry| &entry.phrase));
    Json(RespondResponse {
        reply: hit
            .map(|entry| entry.response.as_str())
            .unwrap_or(state.responder.fallback())
            .to_string(),
        matched: hit.map(|entry| entry.phrase.clone()),
    })
}

pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    debug!(
        "POST /chat with {} prior message(s)",
        request.conversation.len()
    );
    let (conversation, reply) = request
        .conversation
        .exchange(&state.responder, &request.message);
    Json(ChatResponse {
        conversation,
        reply,
    })
}
