//! 首次访问时写入存储的示例商品

use chrono::{DateTime, Utc};

use crate::model::Product;

// (id, name, description, price, category, inventory, image)
const SAMPLES: [(&str, &str, &str, f64, &str, u32, &str); 8] = [
    (
        "1",
        "Wireless Bluetooth Headphones",
        "High-quality wireless headphones with noise cancellation and 30-hour battery life.",
        199.99,
        "Electronics",
        25,
        "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=500",
    ),
    (
        "2",
        "Organic Cotton T-Shirt",
        "Comfortable and sustainable organic cotton t-shirt in various colors.",
        29.99,
        "Clothing",
        8,
        "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=500",
    ),
    (
        "3",
        "Smart Fitness Watch",
        "Advanced fitness tracking with heart rate monitor and GPS capabilities.",
        299.99,
        "Electronics",
        15,
        "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=500",
    ),
    (
        "4",
        "Leather Crossbody Bag",
        "Genuine leather crossbody bag perfect for everyday use.",
        89.99,
        "Accessories",
        3,
        "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=500",
    ),
    (
        "5",
        "Coffee Maker Pro",
        "Professional-grade coffee maker with programmable settings.",
        149.99,
        "Home & Kitchen",
        12,
        "https://images.unsplash.com/photo-1495474472287-4d71bcdd2085?w=500",
    ),
    (
        "6",
        "Running Shoes",
        "Lightweight running shoes with excellent cushioning and support.",
        129.99,
        "Footwear",
        20,
        "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=500",
    ),
    (
        "7",
        "Wireless Charging Pad",
        "Fast wireless charging pad compatible with all Qi-enabled devices.",
        39.99,
        "Electronics",
        30,
        "https://images.unsplash.com/photo-1586953208448-b95a79798f07?w=500",
    ),
    (
        "8",
        "Yoga Mat",
        "Non-slip yoga mat with excellent grip and cushioning.",
        49.99,
        "Sports & Fitness",
        18,
        "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?w=500",
    ),
];

/// 示例商品集合，`lastUpdated` 统一为 `now`
pub fn sample_products(now: DateTime<Utc>) -> Vec<Product> {
    SAMPLES
        .iter()
        .map(|&(id, name, description, price, category, inventory, image_url)| Product {
            id: id.to_string(),
            name: name.to_string(),
            slug: crate::slugify(name),
            description: description.to_string(),
            price,
            category: category.to_string(),
            inventory,
            last_updated: now,
            image_url: image_url.to_string(),
        })
        .collect()
}
