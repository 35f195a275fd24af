use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
    Json,
    http::StatusCode,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    detail: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Anything that went wrong talking to the provider.
    #[error("OpenAI API error: {0}")]
    Provider(String),

    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),

    #[error("Disallowed CORS origin")]
    DisallowedOrigin,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidBody(rejection) => rejection.status(),
            AppError::DisallowedOrigin => StatusCode::BAD_REQUEST,
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse {
            detail: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Provider(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, extract::FromRequest, http::{header, Request}};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[allow(dead_code)]
        content: String,
    }

    async fn rejection_for(body: &'static str) -> JsonRejection {
        let request = Request::builder()
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        Json::<Payload>::from_request(request, &()).await.unwrap_err()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn provider_errors_become_500_with_prefixed_detail() {
        let response = AppError::Provider("Error code: 401 - Incorrect API key provided".into()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["detail"], "OpenAI API error: Error code: 401 - Incorrect API key provided");
    }

    #[tokio::test]
    async fn config_errors_use_detail_field() {
        let response = AppError::ConfigError("OPENAI_API_KEY is not set".into()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["detail"], "Configuration error: OPENAI_API_KEY is not set");
    }

    #[tokio::test]
    async fn missing_field_rejection_keeps_the_cause() {
        let response = AppError::from(rejection_for(r#"{"text": "x"}"#).await).into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let detail = body_json(response).await["detail"].as_str().unwrap().to_string();
        assert!(detail.contains("missing field `content`"), "unexpected detail: {}", detail);
    }

    #[tokio::test]
    async fn syntax_rejection_is_a_bad_request() {
        let response = AppError::from(rejection_for("not json").await).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["detail"].is_string());
    }

    #[tokio::test]
    async fn disallowed_origin_is_a_bad_request() {
        let response = AppError::DisallowedOrigin.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["detail"], "Disallowed CORS origin");
    }
}
