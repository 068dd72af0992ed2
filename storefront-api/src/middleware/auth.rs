use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::error::AppError;
use crate::server::AppState;

/// 管理接口使用的请求头
pub const API_KEY_HEADER: &str = "x-api-key";

pub async fn require_admin_key(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // 从请求头获取 API Key
    let presented = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|header| header.to_str().ok());

    if !state.credentials.verify(presented) {
        tracing::warn!(
            method = %request.method(),
            path = %request.uri().path(),
            "Rejected admin request"
        );
        return Err(AppError::Auth("Invalid API key".to_string()));
    }

    // 继续请求流程
    Ok(next.run(request).await)
}
