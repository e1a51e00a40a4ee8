//! HTTP request handlers

use super::assets::{index_html, serve_static};
use super::sessions::SessionHandle;
use super::types::{
    AskRequest, AskResponse, ErrorResponse, ExamplesResponse, SessionResponse, ToolToggleRequest,
};
use super::AppState;
use crate::session::{SessionError, SessionState};
use crate::transcript::{self, TRANSCRIPT_FILE_NAME};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Questions offered in the sidebar
const EXAMPLE_QUESTIONS: &[&str] = &[
    "What are the key findings in my vector store documents?",
    "Find the latest research on AI Agents.",
    "What are the best recipes for making cake.",
    "Summarize the information about \"TOPIC\" from my documents.",
];

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(serve_page))
        .route("/assets/*path", get(serve_static))
        // Session lifecycle
        .route("/api/sessions", post(create_session))
        .route("/api/sessions/:id", get(get_session))
        .route("/api/sessions/:id/reset", post(reset_session))
        // Conversation actions
        .route("/api/sessions/:id/tools", post(toggle_tool))
        .route("/api/sessions/:id/ask", post(ask))
        .route("/api/sessions/:id/clear", post(clear_conversation))
        .route("/api/sessions/:id/end", post(end_conversation))
        .route("/api/sessions/:id/transcript", get(download_transcript))
        // Sidebar content
        .route("/api/examples", get(list_examples))
        .route("/version", get(get_version))
        .with_state(state)
}

async fn serve_page() -> Response {
    match index_html() {
        Some(content) => Html(content).into_response(),
        None => (StatusCode::NOT_FOUND, Html("<h1>404 - UI not found</h1>")).into_response(),
    }
}

async fn find_session(state: &AppState, id: &str) -> Result<SessionHandle, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session not found: {id}")))
}

// ============================================================
// Session Lifecycle
// ============================================================

async fn create_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let (id, handle) = state.sessions.create().await;
    let session = handle.lock().await;
    Json(SessionResponse::from_state(&id, &session))
}

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, AppError> {
    let handle = find_session(&state, &id).await?;
    let session = handle.lock().await;
    Ok(Json(SessionResponse::from_state(&id, &session)))
}

/// Replace the session with a fresh one under the same id
async fn reset_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, AppError> {
    let handle = find_session(&state, &id).await?;
    let mut session = handle.lock().await;
    *session = SessionState::new();
    tracing::info!(session_id = %id, "Session reset");
    Ok(Json(SessionResponse::from_state(&id, &session)))
}

// ============================================================
// Conversation Actions
// ============================================================

async fn toggle_tool(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ToolToggleRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let handle = find_session(&state, &id).await?;
    let mut session = handle.lock().await;
    session.set_tool_enabled(req.tool, req.enabled);
    tracing::debug!(session_id = %id, tool = ?req.tool, enabled = req.enabled, "Tool toggled");
    Ok(Json(SessionResponse::from_state(&id, &session)))
}

async fn ask(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    if req.question.trim().is_empty() {
        return Err(AppError::BadRequest("Question must not be empty".to_string()));
    }

    let handle = find_session(&state, &id).await?;
    // Held across the agent call: one turn at a time per session
    let mut session = handle.lock().await;

    tracing::info!(
        session_id = %id,
        history_len = session.messages().len(),
        active = session.is_active(),
        "Asking agent"
    );
    let answer = session.ask(&*state.gateway, &req.question).await?;

    Ok(Json(AskResponse {
        answer,
        session: SessionResponse::from_state(&id, &session),
    }))
}

async fn clear_conversation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, AppError> {
    let handle = find_session(&state, &id).await?;
    let mut session = handle.lock().await;
    session.clear();
    tracing::info!(session_id = %id, "Conversation cleared");
    Ok(Json(SessionResponse::from_state(&id, &session)))
}

async fn end_conversation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, AppError> {
    let handle = find_session(&state, &id).await?;
    let mut session = handle.lock().await;
    session.end();
    tracing::info!(session_id = %id, "Conversation ended");
    Ok(Json(SessionResponse::from_state(&id, &session)))
}

async fn download_transcript(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let handle = find_session(&state, &id).await?;
    let html = transcript::render(handle.lock().await.messages());

    Ok((
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{TRANSCRIPT_FILE_NAME}\""),
            ),
        ],
        html,
    )
        .into_response())
}

// ============================================================
// Sidebar Content
// ============================================================

async fn list_examples() -> Json<ExamplesResponse> {
    Json(ExamplesResponse {
        examples: EXAMPLE_QUESTIONS.iter().map(ToString::to_string).collect(),
    })
}

async fn get_version() -> &'static str {
    concat!("research-assistant ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    NotFound(String),
    BadGateway(String),
}

impl From<SessionError> for AppError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::NoToolSelected => AppError::BadRequest(e.to_string()),
            SessionError::Gateway(err) => {
                tracing::error!(kind = ?err.kind, error = %err, "Agent call failed");
                AppError::BadGateway(format!("The research agent failed: {err}"))
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
