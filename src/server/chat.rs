use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::action::SystemAction;
use crate::intent;
use crate::server::ServerState;

/// Reply used when the model backend cannot be reached. The endpoint stays
/// HTTP 200 so the frontend renders it like any other reply.
pub const BACKEND_DOWN_REPLY: &str =
    "Sorry, I can't reach the AI right now. Check your API key and try again.";

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    /// The raw user message.
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChatResponse {
    /// Natural-language reply from the model, or the fallback text.
    pub response: String,
    /// Action the message resolved to, if any. The frontend submits it back
    /// to `/system-control` once the user confirms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_action: Option<SystemAction>,
}

#[utoipa::path(
    post,
    path = "/chat",
    tag = "chat",
    request_body = ChatRequest,
    responses(
        (status = 200, body = ChatResponse),
    )
)]
pub(crate) async fn chat(
    State(state): State<Arc<ServerState>>,
    Json(payload): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let system_action = intent::classify(&state.catalog, &payload.message);

    let response = match state.llm.generate_reply(&payload.message).await {
        Ok(text) => text,
        Err(error) => {
            tracing::warn!("model call failed: {error}");
            return Json(ChatResponse {
                response: BACKEND_DOWN_REPLY.to_string(),
                system_action: None,
            });
        }
    };

    Json(ChatResponse {
        response,
        system_action,
    })
}
