use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StoreError;
use crate::slug::{is_valid_slug, slugify};

/// 商品，字段名按 camelCase 持久化
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub inventory: u32,
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub image_url: String,
}

/// 新建商品的输入，`id` / `lastUpdated` 由存储层生成
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    /// 为空时由 `name` 生成
    #[serde(default)]
    pub slug: Option<String>,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub inventory: u32,
    #[serde(default)]
    pub image_url: String,
}

/// 部分更新，`None` 表示保留原值
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub inventory: Option<u32>,
    pub image_url: Option<String>,
}

impl Product {
    pub fn new(input: NewProduct) -> Self {
        let slug = input.slug.unwrap_or_else(|| slugify(&input.name));
        Self {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            slug,
            description: input.description,
            price: input.price,
            category: input.category,
            inventory: input.inventory,
            last_updated: Utc::now(),
            image_url: input.image_url,
        }
    }

    /// 合并更新字段；仅在提供新名称时重新生成 slug
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.slug = slugify(&name);
            self.name = name;
        }

        if let Some(description) = patch.description {
            self.description = description;
        }

        if let Some(price) = patch.price {
            self.price = price;
        }

        if let Some(category) = patch.category {
            self.category = category;
        }

        if let Some(inventory) = patch.inventory {
            self.inventory = inventory;
        }

        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }

        self.touch();
    }

    /// 刷新 `last_updated`，保证严格晚于旧值
    fn touch(&mut self) {
        let floor = self.last_updated + TimeDelta::milliseconds(1);
        self.last_updated = Utc::now().max(floor);
    }

    /// 库存总价值
    pub fn stock_value(&self) -> f64 {
        self.price * f64::from(self.inventory)
    }
}

impl NewProduct {
    /// 写入前检查：价格必须是有限数，显式提供的 slug 必须合法
    pub fn check(&self) -> Result<(), StoreError> {
        check_price(self.price)?;

        match self.slug.as_deref() {
            Some(slug) if !is_valid_slug(slug) => Err(StoreError::InvalidProduct(format!(
                "slug {slug:?} is not lowercase kebab-case"
            ))),
            _ => Ok(()),
        }
    }
}

impl ProductPatch {
    pub fn check(&self) -> Result<(), StoreError> {
        self.price.map_or(Ok(()), check_price)
    }
}

// NaN / inf 会被编码为 null，之后整份文档都无法解析
fn check_price(price: f64) -> Result<(), StoreError> {
    if price.is_finite() {
        Ok(())
    } else {
        Err(StoreError::InvalidProduct(format!("price {price} is not a finite number")))
    }
}
