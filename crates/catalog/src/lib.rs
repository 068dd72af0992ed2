//! catalog - 商品目录的数据访问层
//!
//! 商品集合以单个 JSON 数组持久化，由 [`ProductStore`] 独占读写。
//! 存储介质通过 [`StorageBackend`] 注入：运行时使用 [`FileBackend`]，测试使用 [`MemoryBackend`]。
//!
//! ```no_run
//! use std::sync::Arc;
//! use catalog::{FileBackend, ProductStore, stats};
//!
//! # async fn run() -> Result<(), catalog::StoreError> {
//! let store = ProductStore::new(Arc::new(FileBackend::new("data/products.json")));
//! let products = store.list_all().await?;
//! println!("total value: {}", stats::total_value(&products));
//! # Ok(())
//! # }
//! ```

mod error;
pub mod fixtures;
mod model;
pub mod slug;
pub mod stats;
mod storage;
mod store;

pub use error::StoreError;
pub use model::{NewProduct, Product, ProductPatch};
pub use slug::slugify;
pub use stats::{DashboardStats, LOW_STOCK_THRESHOLD};
pub use storage::{FileBackend, MemoryBackend, StorageBackend};
pub use store::ProductStore;
