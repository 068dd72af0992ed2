use std::sync::Arc;

use catalog::{DashboardStats, NewProduct, Product, ProductPatch, stats};
use rand::seq::SliceRandom;

use crate::error::AppError;
use crate::server::AppState;

pub struct ProductService {
    state: Arc<AppState>,
}

impl ProductService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    pub async fn list_products(&self, category: Option<&str>) -> Result<Vec<Product>, AppError> {
        let products = self
            .state
            .store
            .list_all()
            .await
            .map_err(AppError::store("Failed to fetch products"))?;

        Ok(match category {
            Some(category) => stats::by_category(&products, category),
            None => products,
        })
    }

    pub async fn get_product(&self, slug: &str) -> Result<Product, AppError> {
        self.state
            .store
            .find_by_slug(slug)
            .await
            .map_err(AppError::store("Failed to fetch product"))?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
    }

    pub async fn create_product(&self, input: NewProduct) -> Result<Product, AppError> {
        let product = self
            .state
            .store
            .add(input)
            .await
            .map_err(AppError::store("Failed to add product"))?;

        tracing::info!(id = %product.id, slug = %product.slug, "Product created");
        Ok(product)
    }

    pub async fn update_product(&self, id: &str, patch: ProductPatch) -> Result<Product, AppError> {
        let product = self
            .state
            .store
            .update(id, patch)
            .await
            .map_err(AppError::store("Failed to update product"))?
            .ok_or_else(|| AppError::NotFound("Product not found or update failed".to_string()))?;

        tracing::info!(id = %product.id, slug = %product.slug, "Product updated");
        Ok(product)
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, AppError> {
        let products = self
            .state
            .store
            .list_all()
            .await
            .map_err(AppError::store("Failed to fetch dashboard statistics"))?;

        Ok(DashboardStats::from_products(&products))
    }

    /// 随机挑选最多 `limit` 个商品
    pub async fn recommendations(&self, limit: usize) -> Result<Vec<Product>, AppError> {
        let mut products = self
            .state
            .store
            .list_all()
            .await
            .map_err(AppError::store("Failed to fetch recommendations"))?;

        products.shuffle(&mut rand::rng());
        products.truncate(limit);
        Ok(products)
    }
}
