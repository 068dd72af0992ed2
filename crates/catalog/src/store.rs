use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::StoreError;
use crate::fixtures::sample_products;
use crate::model::{NewProduct, Product, ProductPatch};
use crate::storage::StorageBackend;

/// 商品集合的唯一持有者
///
/// 每次操作都重新读取整份文档；写操作在 `write_lock` 内完成读-改-写，
/// 同一进程内的修改按顺序执行。
pub struct ProductStore {
    backend: Arc<dyn StorageBackend>,
    write_lock: Mutex<()>,
}

impl ProductStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            backend,
            write_lock: Mutex::new(()),
        }
    }

    pub fn location(&self) -> String {
        self.backend.location()
    }

    /// 确保文档存在，不存在时写入示例商品
    ///
    /// 已存在时不加锁；需要写入种子时在 `write_lock` 内再检查一次。
    pub async fn ensure_store(&self) -> Result<(), StoreError> {
        if self.backend.exists().await? {
            return Ok(());
        }

        let _guard = self.write_lock.lock().await;
        self.seed_if_absent().await
    }

    /// 用示例商品覆盖现有集合，返回写入的数量
    pub async fn reseed(&self) -> Result<usize, StoreError> {
        let seed = sample_products(Utc::now());
        self.replace_all(&seed).await?;
        info!(location = %self.backend.location(), count = seed.len(), "Product store reset to samples");
        Ok(seed.len())
    }

    pub async fn list_all(&self) -> Result<Vec<Product>, StoreError> {
        self.ensure_store().await?;
        self.read_all().await
    }

    /// 覆盖整个集合
    pub async fn replace_all(&self, products: &[Product]) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        self.write_all(products).await
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Product>, StoreError> {
        let products = self.list_all().await?;
        Ok(products.into_iter().find(|p| p.slug == slug))
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
        let products = self.list_all().await?;
        Ok(products.into_iter().find(|p| p.id == id))
    }

    pub async fn add(&self, input: NewProduct) -> Result<Product, StoreError> {
        input.check()?;

        let _guard = self.write_lock.lock().await;
        self.seed_if_absent().await?;

        let mut products = self.read_all().await?;
        let product = Product::new(input);
        products.push(product.clone());
        self.write_all(&products).await?;

        debug!(id = %product.id, slug = %product.slug, "Product added");
        Ok(product)
    }

    /// 按 id 更新；id 不存在时返回 `None` 且不写入
    pub async fn update(&self, id: &str, patch: ProductPatch) -> Result<Option<Product>, StoreError> {
        let _guard = self.write_lock.lock().await;
        self.seed_if_absent().await?;

        let mut products = self.read_all().await?;
        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            debug!(id, "Update skipped, product not found");
            return Ok(None);
        };
        patch.check()?;

        product.apply(patch);
        let updated = product.clone();
        self.write_all(&products).await?;

        debug!(id = %updated.id, slug = %updated.slug, "Product updated");
        Ok(Some(updated))
    }

    /// 调用方必须持有 `write_lock`
    async fn seed_if_absent(&self) -> Result<(), StoreError> {
        if self.backend.exists().await? {
            return Ok(());
        }

        let seed = sample_products(Utc::now());
        self.write_all(&seed).await?;
        info!(location = %self.backend.location(), count = seed.len(), "Seeded product store");
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<Product>, StoreError> {
        let raw = self.backend.read().await?;
        serde_json::from_str(&raw).map_err(StoreError::Decode)
    }

    async fn write_all(&self, products: &[Product]) -> Result<(), StoreError> {
        self.backend.write(&encode(products)?).await
    }
}

fn encode(products: &[Product]) -> Result<String, StoreError> {
    serde_json::to_string_pretty(products).map_err(StoreError::Encode)
}
