//! Chat assistant endpoints.

use ad_protocol::chat::ConversationTurn;
use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Header carrying the signed-in user's identity.
pub const USER_HEADER: &str = "x-user-id";

const SIGN_IN_REQUIRED: &str = "Please sign in to chat with the assistant.";

/// Request body for one chat message.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    /// Text of the bot reply the user is answering. When absent, the stored
    /// kind of the user's latest turn is used.
    #[serde(default)]
    pub previous_response: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
    pub response: String,
    pub sources: Vec<String>,
}

/// The caller's identity, or 403.
fn caller(headers: &HeaderMap) -> ApiResult<String> {
    headers
        .get(USER_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .ok_or_else(|| ApiError::Forbidden(SIGN_IN_REQUIRED.into()))
}

/// POST /api/v1/chat: resolve a message and store the turn.
pub async fn send_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<ChatRequest>,
) -> ApiResult<Json<ChatResponse>> {
    let user_id = caller(&headers)?;
    let resolver = state.resolver();

    let reply = match req.previous_response.as_deref() {
        Some(previous) => resolver.resolve(&req.message, Some(previous)).await?,
        None => {
            let prior = state
                .latest_turn(&user_id)
                .await?
                .map(|turn| turn.prompt_kind)
                .unwrap_or_default();
            resolver.resolve_with_prior(&req.message, prior).await?
        }
    };

    let turn = ConversationTurn::new(&user_id, &req.message, &reply);
    state.record_turn(&turn).await?;

    tracing::info!(
        turn_id = %turn.id,
        user_id = %user_id,
        tier = ?reply.tier,
        prompt_kind = %reply.prompt_kind,
        "chat turn stored"
    );

    Ok(Json(ChatResponse {
        message: turn.message,
        response: reply.message,
        sources: reply.sources,
    }))
}

/// GET /api/v1/chat/history: the caller's turns, oldest first.
pub async fn history(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<Vec<ConversationTurn>>> {
    let user_id = caller(&headers)?;
    Ok(Json(state.history(&user_id).await?))
}
