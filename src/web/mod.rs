// Web server — Axum-based HTTP surface for the moderation demo.
//
// Route handlers are thin glue: they pull text out of the request, run the
// decision engine, and hand the finished verdict to the store. The engine
// is never called while the store lock is held — inference latency must not
// serialize unrelated requests.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::feed::FeedStore;
use crate::moderation::DecisionEngine;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<FeedStore>,
    pub engine: Arc<DecisionEngine>,
    pub config: Arc<Config>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(
    config: Config,
    engine: Arc<DecisionEngine>,
    port: u16,
    bind: &str,
) -> Result<()> {
    tokio::fs::create_dir_all(&config.upload_dir).await?;

    let state = AppState {
        store: Arc::new(FeedStore::new()),
        engine,
        config: Arc::new(config),
    };

    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("Gatepost listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::pages::home))
        .route("/health", get(health))
        .route(
            "/paste",
            get(handlers::pages::paste_page).post(handlers::paste::analyze),
        )
        .route(
            "/facebook",
            get(handlers::social::list_posts).post(handlers::social::create_post),
        )
        .route(
            "/facebook/comment/{post_id}",
            post(handlers::social::add_comment),
        )
        .route("/facebook/like/{post_id}", get(handlers::social::like_post))
        .route(
            "/facebook/share/{post_id}",
            get(handlers::social::share_post),
        )
        .route("/facebook/stream", get(handlers::stream::feed_events))
        .route("/facebook/live", get(handlers::pages::live_page))
        .route(
            "/chatbot",
            get(handlers::pages::chatbot_page).post(handlers::chatbot::reply),
        )
        .nest_service(
            "/uploads",
            ServeDir::new(state.config.upload_dir.clone()),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness check — always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
