use axum::{
    routing::{get, post},
    Router,
    extract::{rejection::JsonRejection, Json, Request, State},
    http::{header, HeaderName, Method},
    middleware::{self, Next},
    response::Response,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::error::{AppError, Result};
use crate::api::models::{BlogContent, HealthResponse, KeywordResponse};
use crate::AppState;

const ALLOWED_METHODS: [Method; 6] = [
    Method::GET,
    Method::OPTIONS,
    Method::PATCH,
    Method::DELETE,
    Method::POST,
    Method::PUT,
];

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/generate/", post(generate_handler))
        .route("/api/generate", post(generate_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&app_state))
        .layer(middleware::from_fn_with_state(app_state.clone(), reject_foreign_preflight))
        .with_state(app_state)
}

fn cors_layer(app_state: &AppState) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list([app_state.config.allowed_origin.clone()]))
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([
            HeaderName::from_static("x-csrf-token"),
            HeaderName::from_static("x-requested-with"),
            header::ACCEPT,
            HeaderName::from_static("accept-version"),
            header::CONTENT_LENGTH,
            HeaderName::from_static("content-md5"),
            header::CONTENT_TYPE,
            header::DATE,
            HeaderName::from_static("x-api-version"),
        ])
}

/// Preflights from any origin other than the configured one get a 400 with
/// no CORS headers at all.
async fn reject_foreign_preflight(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response> {
    let headers = request.headers();
    let is_preflight = request.method() == Method::OPTIONS
        && headers.contains_key(header::ACCESS_CONTROL_REQUEST_METHOD);

    if is_preflight {
        if let Some(origin) = headers.get(header::ORIGIN) {
            if *origin != state.config.allowed_origin {
                tracing::warn!(origin = ?origin, "Rejected preflight from disallowed origin");
                return Err(AppError::DisallowedOrigin);
            }
        }
    }

    Ok(next.run(request).await)
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

async fn generate_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<BlogContent>, JsonRejection>,
) -> Result<Json<KeywordResponse>> {
    let Json(blog) = payload.inspect_err(|rejection| {
        tracing::warn!(error = %rejection, "Rejected generate request body");
    })?;

    tracing::info!(
        content_len = blog.content.len(),
        model = state.llm.model(),
        "Extracting keywords"
    );
    let llm_start = std::time::Instant::now();

    let keywords = state
        .llm
        .extract_keywords(&blog.content)
        .await
        .inspect_err(|e| {
            tracing::error!(error = %e, elapsed = ?llm_start.elapsed(), "Keyword extraction failed");
        })?;

    tracing::info!(elapsed = ?llm_start.elapsed(), "Keyword extraction succeeded");
    Ok(Json(KeywordResponse { keywords }))
}
