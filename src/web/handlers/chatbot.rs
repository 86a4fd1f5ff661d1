// POST /chatbot — JSON in, JSON out. The reply text depends only on the
// flagged status; the full verdict stays server-side.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::web::{api_error, AppState};

const FLAGGED_REPLY: &str = "Warning: Your message may contain harmful content.";
const CLEAN_REPLY: &str = "Message is safe.";

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub flagged: bool,
}

pub async fn reply(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse {
    match state.engine.decide(&request.message).await {
        Ok(result) => {
            let flagged = result.is_flagged();
            let reply = if flagged { FLAGGED_REPLY } else { CLEAN_REPLY };
            Json(ChatResponse {
                reply: reply.to_string(),
                flagged,
            })
            .into_response()
        }
        Err(e) => {
            error!(error = %e, "Inference failed for chatbot message");
            api_error(StatusCode::BAD_GATEWAY, "classifier inference failed")
        }
    }
}
