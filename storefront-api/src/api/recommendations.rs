use axum::{
    Router,
    extract::{Query, State},
    routing::get,
};
use catalog::Product;
use serde::Deserialize;
use std::sync::Arc;

use crate::domain::services::product_service::ProductService;
use crate::error::AppError;
use crate::response::ApiResponse;
use crate::server::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/recommendations", get(list_recommendations))
}

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    /// 不传时使用配置中的数量
    pub limit: Option<usize>,
}

async fn list_recommendations(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RecommendationQuery>,
) -> Result<ApiResponse<Vec<Product>>, AppError> {
    let limit = query.limit.unwrap_or(state.config.recommendations.limit);

    let products = ProductService::new(state).recommendations(limit).await?;

    Ok(ApiResponse::success(products))
}
