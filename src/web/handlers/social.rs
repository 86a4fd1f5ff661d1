// The mini social feed: create/list posts, comment, like, share.
//
// Every piece of submitted text goes through the decision engine BEFORE the
// store is touched, so the store lock is never held across model inference.
// Unknown post ids are a 404, not a silent no-op.

use axum::extract::{Form, Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Redirect};
use serde::Deserialize;
use tracing::{error, warn};

use crate::feed::StoreError;
use crate::web::{api_error, AppState};

const DEFAULT_AUTHOR: &str = "Anonymous";

/// GET /facebook — all posts, in append order, verdicts included.
pub async fn list_posts(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.posts().await)
}

/// POST /facebook — multipart form: `author`, `text`, optional file `image`.
/// The image (if any) is written to the upload dir under a sanitized name.
pub async fn create_post(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut author = DEFAULT_AUTHOR.to_string();
    let mut text = String::new();
    let mut image: Option<(String, Vec<u8>)> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "Malformed multipart body");
                return api_error(StatusCode::BAD_REQUEST, "malformed multipart body");
            }
        };
        // Field accessors consume the field, so take the name first.
        let name = field.name().map(|n| n.to_string());
        match name.as_deref() {
            Some("author") => {
                if let Ok(v) = field.text().await {
                    if !v.is_empty() {
                        author = v;
                    }
                }
            }
            Some("text") => {
                if let Ok(v) = field.text().await {
                    text = v;
                }
            }
            Some("image") => {
                let filename = field.file_name().map(sanitize_filename);
                if let (Some(name), Ok(bytes)) = (filename, field.bytes().await) {
                    if !bytes.is_empty() {
                        image = Some((name, bytes.to_vec()));
                    }
                }
            }
            _ => {}
        }
    }

    let moderation = match state.engine.decide(&text).await {
        Ok(result) => result,
        Err(e) => {
            error!(error = %e, "Inference failed for new post");
            return api_error(StatusCode::BAD_GATEWAY, "classifier inference failed");
        }
    };

    let attached_media = match image {
        Some((name, bytes)) => {
            let dest = state.config.upload_dir.join(&name);
            if let Err(e) = tokio::fs::write(&dest, bytes).await {
                error!(error = %e, path = %dest.display(), "Failed to store upload");
                return api_error(StatusCode::INTERNAL_SERVER_ERROR, "failed to store upload");
            }
            Some(name)
        }
        None => None,
    };

    state
        .store
        .append_post(&author, &text, attached_media, moderation)
        .await;

    Redirect::to("/facebook").into_response()
}

#[derive(Deserialize)]
pub struct CommentForm {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub comment: String,
}

/// POST /facebook/comment/{post_id} — append a moderated comment.
pub async fn add_comment(
    State(state): State<AppState>,
    Path(post_id): Path<u64>,
    Form(form): Form<CommentForm>,
) -> impl IntoResponse {
    let author = if form.author.is_empty() {
        DEFAULT_AUTHOR
    } else {
        &form.author
    };

    let moderation = match state.engine.decide(&form.comment).await {
        Ok(result) => result,
        Err(e) => {
            error!(error = %e, "Inference failed for comment");
            return api_error(StatusCode::BAD_GATEWAY, "classifier inference failed");
        }
    };

    match state
        .store
        .append_comment(post_id, author, &form.comment, moderation)
        .await
    {
        Ok(_) => Redirect::to("/facebook").into_response(),
        Err(StoreError::PostNotFound(id)) => {
            warn!(post_id = id, "Comment on unknown post");
            api_error(StatusCode::NOT_FOUND, &format!("no post with id {id}"))
        }
    }
}

/// GET /facebook/like/{post_id}
pub async fn like_post(
    State(state): State<AppState>,
    Path(post_id): Path<u64>,
) -> impl IntoResponse {
    match state.store.like(post_id).await {
        Ok(_) => Redirect::to("/facebook").into_response(),
        Err(StoreError::PostNotFound(id)) => {
            api_error(StatusCode::NOT_FOUND, &format!("no post with id {id}"))
        }
    }
}

/// GET /facebook/share/{post_id}
pub async fn share_post(
    State(state): State<AppState>,
    Path(post_id): Path<u64>,
) -> impl IntoResponse {
    match state.store.share(post_id).await {
        Ok(_) => Redirect::to("/facebook").into_response(),
        Err(StoreError::PostNotFound(id)) => {
            api_error(StatusCode::NOT_FOUND, &format!("no post with id {id}"))
        }
    }
}

/// Strip anything that could escape the upload directory: keep only the
/// final path component, drop every character outside [A-Za-z0-9.-_], and
/// trim leading/trailing dots.
pub fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or("");
    let cleaned: String = base
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();
    let cleaned = cleaned.trim_matches('.');
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned.to_string()
    }
}
