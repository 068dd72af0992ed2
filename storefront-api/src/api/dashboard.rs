use axum::{Router, extract::State, routing::get};
use catalog::DashboardStats;
use std::sync::Arc;

use crate::domain::services::product_service::ProductService;
use crate::error::AppError;
use crate::response::ApiResponse;
use crate::server::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard", get(get_stats))
}

async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<ApiResponse<DashboardStats>, AppError> {
    let stats = ProductService::new(state).dashboard_stats().await?;
    Ok(ApiResponse::success(stats))
}
