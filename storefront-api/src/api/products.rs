use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, post, put},
};
use catalog::{NewProduct, Product, ProductPatch};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

use crate::domain::services::product_service::ProductService;
use crate::error::AppError;
use crate::response::ApiResponse;
use crate::server::AppState;

/// 公开的只读接口
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/{slug}", get(get_product))
}

/// 需要 API Key 的写接口
pub fn admin_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/products", post(create_product))
        .route("/products/update/{id}", put(update_product))
}

#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    pub category: Option<String>,
}

/// 管理面板提交的商品表单，新建与更新共用
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: String,
    #[serde(default)]
    #[validate(range(exclusive_min = 0.0, message = "Price must be positive"))]
    pub price: f64,
    #[serde(default)]
    #[validate(length(min = 1, message = "Category cannot be empty"))]
    pub category: String,
    #[validate(required(message = "Inventory is required"))]
    pub inventory: Option<u32>,
    pub image_url: Option<String>,
}

impl ProductForm {
    /// 解析并校验请求体
    fn parse(payload: Result<Json<ProductForm>, JsonRejection>) -> Result<Self, AppError> {
        let Json(form) = payload.map_err(|rejection| {
            tracing::debug!(error = %rejection, "Invalid product payload");
            AppError::BadRequest("Invalid request body".to_string())
        })?;

        // 验证请求
        form.validate().map_err(|e| {
            tracing::debug!(error = %e, "Product form validation failed");
            AppError::Validation("Missing required fields".to_string())
        })?;

        Ok(form)
    }

    fn into_new_product(self) -> NewProduct {
        NewProduct {
            name: self.name,
            slug: None,
            description: self.description,
            price: self.price,
            category: self.category,
            inventory: self.inventory.unwrap_or_default(),
            image_url: self.image_url.unwrap_or_default(),
        }
    }

    fn into_patch(self) -> ProductPatch {
        ProductPatch {
            name: Some(self.name),
            description: Some(self.description),
            price: Some(self.price),
            category: Some(self.category),
            inventory: self.inventory,
            image_url: Some(self.image_url.unwrap_or_default()),
        }
    }
}

async fn list_products(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProductQuery>,
) -> Result<ApiResponse<Vec<Product>>, AppError> {
    let product_service = ProductService::new(state);

    let products = product_service
        .list_products(query.category.as_deref())
        .await?;

    Ok(ApiResponse::success(products))
}

async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<ApiResponse<Product>, AppError> {
    let product_service = ProductService::new(state);

    let product = product_service.get_product(&slug).await?;

    Ok(ApiResponse::success(product))
}

async fn create_product(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ProductForm>, JsonRejection>,
) -> Result<(StatusCode, ApiResponse<Product>), AppError> {
    let form = ProductForm::parse(payload)?;

    let product_service = ProductService::new(state);

    let product = product_service
        .create_product(form.into_new_product())
        .await?;

    Ok((StatusCode::CREATED, ApiResponse::success(product)))
}

async fn update_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<ProductForm>, JsonRejection>,
) -> Result<ApiResponse<Product>, AppError> {
    let form = ProductForm::parse(payload)?;

    let product_service = ProductService::new(state);

    let product = product_service.update_product(&id, form.into_patch()).await?;

    Ok(ApiResponse::success(product))
}
