use axum::{Router, routing::get};
use std::sync::Arc;

use crate::response::ApiResponse;
use crate::server::AppState;

/// 管理面板登录时用来校验 API Key，鉴权由路由层中间件完成
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/admin/verify", get(verify))
}

async fn verify() -> ApiResponse<bool> {
    ApiResponse::success(true)
}
