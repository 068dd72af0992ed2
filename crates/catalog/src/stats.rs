//! 基于商品快照的统计，全部为纯函数，每次调用重新计算

use serde::{Deserialize, Serialize};

use crate::model::Product;

/// 库存低于该值视为低库存
pub const LOW_STOCK_THRESHOLD: u32 = 10;

pub fn total_count(products: &[Product]) -> usize {
    products.len()
}

pub fn low_stock(products: &[Product], threshold: u32) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.inventory < threshold)
        .cloned()
        .collect()
}

pub fn total_value(products: &[Product]) -> f64 {
    products.iter().map(Product::stock_value).sum()
}

/// 去重后的分类，保持首次出现的顺序
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for product in products {
        if !categories.contains(&product.category) {
            categories.push(product.category.clone());
        }
    }
    categories
}

pub fn by_category(products: &[Product], category: &str) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.category == category)
        .cloned()
        .collect()
}

/// 仪表盘统计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_products: usize,
    pub low_stock_items: usize,
    pub total_value: f64,
    pub categories: Vec<String>,
}

impl DashboardStats {
    pub fn from_products(products: &[Product]) -> Self {
        Self {
            total_products: total_count(products),
            low_stock_items: low_stock(products, LOW_STOCK_THRESHOLD).len(),
            total_value: total_value(products),
            categories: distinct_categories(products),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_products;
    use chrono::Utc;

    fn product(id: &str, price: f64, inventory: u32) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            slug: format!("product-{id}"),
            description: "desc".to_string(),
            price,
            category: "Misc".to_string(),
            inventory,
            last_updated: Utc::now(),
            image_url: String::new(),
        }
    }

    #[test]
    fn test_empty_collection() {
        assert_eq!(total_count(&[]), 0);
        assert_eq!(total_value(&[]), 0.0);
        assert!(low_stock(&[], LOW_STOCK_THRESHOLD).is_empty());
        assert!(distinct_categories(&[]).is_empty());
    }

    #[test]
    fn test_total_value() {
        assert_eq!(total_value(&[product("a", 10.0, 2)]), 20.0);
    }

    #[test]
    fn test_low_stock_is_strictly_below_threshold() {
        let products = [product("a", 1.0, 5), product("b", 1.0, 10), product("c", 1.0, 15)];
        let low = low_stock(&products, LOW_STOCK_THRESHOLD);
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].id, "a");
    }

    #[test]
    fn test_fixture_categories_in_first_seen_order() {
        let products = sample_products(Utc::now());
        assert_eq!(
            distinct_categories(&products),
            [
                "Electronics",
                "Clothing",
                "Accessories",
                "Home & Kitchen",
                "Footwear",
                "Sports & Fitness",
            ]
        );
    }

    #[test]
    fn test_fixture_low_stock() {
        let products = sample_products(Utc::now());
        let ids: Vec<_> = low_stock(&products, LOW_STOCK_THRESHOLD)
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, ["2", "4"]);
    }

    #[test]
    fn test_by_category() {
        let products = sample_products(Utc::now());
        let electronics = by_category(&products, "Electronics");
        assert_eq!(electronics.len(), 3);
        assert!(by_category(&products, "Garden").is_empty());
    }

    #[test]
    fn test_dashboard_stats() {
        let stats = DashboardStats::from_products(&sample_products(Utc::now()));
        assert_eq!(stats.total_products, 8);
        assert_eq!(stats.low_stock_items, 2);
        assert_eq!(stats.categories.len(), 6);

        let expected = 199.99 * 25.0
            + 29.99 * 8.0
            + 299.99 * 15.0
            + 89.99 * 3.0
            + 149.99 * 12.0
            + 129.99 * 20.0
            + 39.99 * 30.0
            + 49.99 * 18.0;
        assert!((stats.total_value - expected).abs() < 1e-6);

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["totalProducts"], 8);
        assert_eq!(json["lowStockItems"], 2);
    }
}
