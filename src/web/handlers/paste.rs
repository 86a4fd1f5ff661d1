// POST /paste — run the decision engine on pasted text and return the
// verdict as JSON. Empty text is valid input: it matches no lexicon term
// and the classifiers score it like any other string.

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde::Deserialize;
use tracing::error;

use crate::web::{api_error, AppState};

#[derive(Deserialize)]
pub struct PasteForm {
    #[serde(default)]
    pub comment: String,
}

pub async fn analyze(
    State(state): State<AppState>,
    Form(form): Form<PasteForm>,
) -> impl IntoResponse {
    match state.engine.decide(&form.comment).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => {
            error!(error = %e, "Inference failed for pasted text");
            api_error(StatusCode::BAD_GATEWAY, "classifier inference failed")
        }
    }
}
