use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use catalog::StoreError;
use thiserror::Error;

use crate::response::ApiResponse;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Auth(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    BadRequest(String),

    /// 存储失败，对外只暴露 `context`
    #[error("{context}")]
    Store {
        context: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Logging error: {0}")]
    Logging(#[from] telemetry::LogError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// 用于 `map_err`，为存储错误附加对外提示；输入被存储层拒绝时按校验错误处理
    pub fn store(context: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| match source {
            StoreError::InvalidProduct(reason) => Self::Validation(reason),
            source => Self::Store { context, source },
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Auth(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Store { .. }
            | AppError::Config(_)
            | AppError::Logging(_)
            | AppError::Io(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 返回给客户端的错误信息，不包含底层细节
    pub fn public_message(&self) -> String {
        match self {
            AppError::Config(_)
            | AppError::Logging(_)
            | AppError::Io(_)
            | AppError::Internal(_) => {
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::Store { context, source } => {
                tracing::error!(error = %source, "{}", context);
            }
            err if status.is_server_error() => tracing::error!(error = %err, "Request failed"),
            err => tracing::debug!(error = %err, status = %status, "Request rejected"),
        }

        (status, ApiResponse::<()>::error(self.public_message())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::Auth("x".into()).status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::NotFound("x".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::Validation("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_hides_source() {
        let source = serde_json::from_str::<Vec<u8>>("nope").unwrap_err();
        let err = AppError::store("Failed to fetch products")(StoreError::Decode(source));

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Failed to fetch products");
    }

    #[test]
    fn test_rejected_input_is_bad_request() {
        let source = StoreError::InvalidProduct("price NaN is not a finite number".into());
        let err = AppError::store("Failed to add product")(source);

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "price NaN is not a finite number");
    }

    #[test]
    fn test_internal_details_are_not_public() {
        let err = AppError::Internal("secret path /etc/x".into());
        assert_eq!(err.public_message(), "Internal server error");
    }
}
