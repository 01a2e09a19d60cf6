use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The wire contract is a single catch-all: every variant becomes a 500 with
/// the same body shape, carrying the error's string form. The variants exist
/// for logging, not for response differentiation.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Generation error: {0}")]
    Llm(String),

    #[error("Document store error: {0}")]
    Store(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    message: &'static str,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    stack: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let stack = match &self {
            // anyhow's debug format carries the full cause chain
            AppError::Internal(e) => Some(format!("{e:?}")),
            _ => None,
        };

        match &self {
            AppError::Json(e) => tracing::error!("JSON error: {e}"),
            AppError::Llm(msg) => tracing::error!("Generation error: {msg}"),
            AppError::Store(msg) => tracing::error!("Document store error: {msg}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
        }

        let body = Json(ErrorBody {
            success: false,
            message: "Server crashed",
            error: self.to_string(),
            stack,
        });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(err: AppError) -> serde_json::Value {
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_store_error_body_shape() {
        let body = body_json(AppError::Store("write refused".to_string())).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Server crashed");
        assert!(body["error"].as_str().unwrap().contains("write refused"));
        assert!(body.get("stack").is_none());
    }

    #[tokio::test]
    async fn test_internal_error_includes_stack() {
        let body = body_json(AppError::Internal(anyhow::anyhow!("boom"))).await;
        assert_eq!(body["success"], false);
        assert!(body["stack"].as_str().unwrap().contains("boom"));
    }
}
