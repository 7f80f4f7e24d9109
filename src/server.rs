//! HTTP boundary for the story and clarifying-question flows.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    middleware,
    response::{IntoResponse, Json, Response},
    routing::{any, get},
    Router,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::api::{Pipeline, PipelineError};

const METHOD_NOT_ALLOWED_MESSAGE: &str = "Only POST requests are supported on this endpoint.";
const INVALID_INPUT_MESSAGE: &str = "Please add more detail to your request and try again.";

/// Shared by every request; the pipeline itself holds no mutable state.
#[derive(Clone)]
pub struct ServerState {
    pipeline: Arc<Pipeline>,
}

impl ServerState {
    pub fn new(pipeline: Arc<Pipeline>) -> Self {
        Self { pipeline }
    }
}

#[derive(Deserialize, Default)]
struct StoryRequest {
    #[serde(default)]
    query: Option<String>,
}

#[derive(Deserialize, Default)]
struct QuestionsRequest {
    #[serde(default)]
    topic: Option<String>,
}

/// Creates the API router.
pub fn create_router(state: ServerState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/generate-story", any(generate_story))
        .route("/generate-questions", any(generate_questions))
        .layer(middleware::map_response(with_cors_headers))
        .with_state(state)
}

/// Binds `bind` and serves until Ctrl-C.
pub async fn serve(bind: &str, pipeline: Arc<Pipeline>) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!(addr = %listener.local_addr()?, "Listening");
    axum::serve(listener, create_router(ServerState::new(pipeline)))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down");
    }
}

/// Adds the permissive cross-origin headers to every response.
pub async fn with_cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization"),
    );
    response
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

async fn generate_story(
    State(state): State<ServerState>,
    method: Method,
    body: Bytes,
) -> Response {
    handle_generate_story(&state.pipeline, &method, &body).await
}

async fn generate_questions(
    State(state): State<ServerState>,
    method: Method,
    body: Bytes,
) -> Response {
    handle_generate_questions(&state.pipeline, &method, &body).await
}

/// `POST /generate-story` with body `{"query": "..."}`.
pub async fn handle_generate_story(
    pipeline: &Pipeline,
    method: &Method,
    body: &[u8],
) -> Response {
    if let Some(early) = preflight_or_reject(method) {
        return early;
    }

    let query = parse_body::<StoryRequest>(body).query.unwrap_or_default();
    let started = Instant::now();
    info!(query = %query, "Processing story request");

    match pipeline.run(&query).await {
        Ok(story) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "story": story,
                "processing_time": format_elapsed(started.elapsed()),
                "message": "Story generated successfully!",
            })),
        )
            .into_response(),
        Err(e) => failure(e, "Failed to generate story. Please try again."),
    }
}

/// `POST /generate-questions` with body `{"topic": "..."}`.
pub async fn handle_generate_questions(
    pipeline: &Pipeline,
    method: &Method,
    body: &[u8],
) -> Response {
    if let Some(early) = preflight_or_reject(method) {
        return early;
    }

    let topic = parse_body::<QuestionsRequest>(body).topic.unwrap_or_default();
    info!(topic = %topic, "Processing question request");

    match pipeline.clarify(&topic).await {
        Ok(result) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "questions": result.questions,
                "message": "Clarifying questions generated successfully!",
            })),
        )
            .into_response(),
        Err(e) => failure(e, "Failed to generate questions. Please try again."),
    }
}

/// Empty 200 for preflight, 405 for anything but POST.
fn preflight_or_reject(method: &Method) -> Option<Response> {
    if *method == Method::OPTIONS {
        return Some(StatusCode::OK.into_response());
    }
    if *method != Method::POST {
        return Some(
            (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(json!({
                    "success": false,
                    "error": "Method not allowed",
                    "message": METHOD_NOT_ALLOWED_MESSAGE,
                })),
            )
                .into_response(),
        );
    }
    None
}

/// An unparsable body is treated like one with the field missing.
fn parse_body<T: DeserializeOwned + Default>(body: &[u8]) -> T {
    serde_json::from_slice(body).unwrap_or_default()
}

fn failure(err: PipelineError, message: &str) -> Response {
    if err.is_invalid_input() {
        warn!(error = %err, "Rejected request");
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "error": err.to_string(),
                "message": INVALID_INPUT_MESSAGE,
            })),
        )
            .into_response();
    }
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "success": false,
            "error": err.to_string(),
            "message": message,
        })),
    )
        .into_response()
}

fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.2}s", elapsed.as_secs_f64())
}
